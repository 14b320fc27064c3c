//! # RSCashflow Prelude
//!
//! Conveniently re-exports the time-value-of-money functions and types.
//! Import this module to access every RSCashflow feature with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use rscashflow::prelude::*;
//! let deposit = pv().fv(10_000.0).r(0.04).t(10.0).m(12).call();
//! let savings = fvad().pmt(200.0).r(0.04).n(120.0).m(12).call();
//! let months = nper().pv(15_000.0).pmt(350.0).r(0.07).m(12).call();
//! println!("Deposit today: {deposit:.2}");
//! println!("Savings in 10 years: {savings:.2}");
//! println!("Months to repay: {months:.1}");
//! ```

// Package Result type for RSCashflow functions
pub use crate::RSCashflowResult;

// Interest rate conversion functions
pub use crate::int_rate_convert::*;

// Compounding convention
pub use crate::compounding::Compounding;

// Time value of money functions
pub use crate::amortization::*;
pub use crate::annuities_certain::*;
pub use crate::single_cashflow::*;

// Schedule export
pub use polars::prelude::{DataFrame, PolarsError, PolarsResult};
