//! # RSCashflow
//!
//! A small, dependable Rust library of time-value-of-money formulas for budgeting tools, loan calculators and investment planners.
//!
//! ## Features
//! - **Pure & Thread-safe**: Every formula is a stateless function over `f64`
//! - **Explicit Compounding**: Leave `m` unset for continuous compounding, set it for discrete compounding
//! - **Annuities**: Present and future value of ordinary annuities and annuities due
//! - **Loans**: Level payment, number of payments and full amortization schedules
//! - **Builder Pattern**: All functions use builder pattern with sensible defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use rscashflow::prelude::*;
//!
//! // Single cash flows: annual and continuous compounding
//! let annual = fv().pv(90.0).r(0.1).t(1.0).m(1).call();
//! let continuous = fv().pv(90.0).r(0.1).t(1.0).call();
//!
//! // Five annual payments of 1,000 at 5%
//! let annuity = pvoa().pmt(1000.0).r(0.05).n(5.0).call();
//!
//! // Loan of 10,000 over 5 years
//! let payment = pmt().pv(10_000.0).r(0.05).n(5.0).call();
//! let schedule = amortization_schedule().pv(10_000.0).r(0.05).n(5).call()?;
//!
//! println!("FV annual: {annual:.2}, continuous: {continuous:.2}");
//! println!("Annuity: {annuity:.2}");
//! println!("Payment: {payment:.2}, interest paid: {:.2}", schedule.total_interest());
//! # RSCashflowResult::Ok(())
//! ```
//!
//! ## Supported Functions
//!
//! - **Single Cash Flows**: `fv`, `pv`
//! - **Annuities Certain**: `pvoa`, `pvad`, `fvoa`, `fvad`
//! - **Amortization**: `pmt`, `nper`, `amortization_schedule`
//! - **Interest Rate Conversions**: between periodic, nominal, effective and continuous rates
//!
//! ## Notes
//! - Rates are decimals (0.05 for 5%)
//! - Core formulas do not validate inputs; division by zero and invalid logarithms surface as `inf` or `NaN`
//! - A periodic rate of exactly zero takes the linear branch (`pmt · n`, `pv / n`, ...)

pub type RSCashflowResult<T> = Result<T, Box<dyn std::error::Error>>;
pub mod amortization;
pub mod annuities_certain;
pub mod compounding;
pub mod int_rate_convert;
pub mod params;
pub mod prelude;
pub mod single_cashflow;
