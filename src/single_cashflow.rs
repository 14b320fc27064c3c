use crate::compounding::Compounding;
use bon::builder;

/// Future value of a single cash flow.
///
/// # Formula
/// ```text
/// m unset: FV = PV · e^(r·t)
/// m set:   FV = PV · (1 + r/m)^(m·t)
/// ```
/// where:
/// - `pv` is the present value of the cash flow
/// - `r` is the nominal annual interest rate
/// - `t` is the time in years
/// - `m` is the number of compounding periods per year; leave it unset for continuous compounding
///
/// # Examples
///
/// ## Annual compounding
/// ```rust
/// # use rscashflow::prelude::*;
/// let value = fv().pv(90.0).r(0.1).t(1.0).m(1).call();
/// assert!((value - 99.0).abs() < 0.01);
/// ```
///
/// ## Continuous compounding
/// ```rust
/// # use rscashflow::prelude::*;
/// let value = fv().pv(90.0).r(0.1).t(1.0).call();
/// assert!((value - 99.46).abs() < 0.01);
/// ```
#[builder]
pub fn fv(pv: f64, r: f64, t: f64, m: Option<u32>) -> f64 {
    pv * Compounding::from(m).growth_factor(r, t)
}

/// Present value of a single cash flow, the inverse of [`fv`].
///
/// # Formula
/// ```text
/// m unset: PV = FV / e^(r·t)
/// m set:   PV = FV / (1 + r/m)^(m·t)
/// ```
/// where:
/// - `fv` is the future value of the cash flow
/// - `r` is the nominal annual interest rate
/// - `t` is the time in years
/// - `m` is the number of compounding periods per year; leave it unset for continuous compounding
///
/// # Example
/// ```rust
/// # use rscashflow::prelude::*;
/// let discrete = pv().fv(99.0).r(0.1).t(1.0).m(1).call();
/// let continuous = pv().fv(99.0).r(0.1).t(1.0).call();
/// println!("Annual: {discrete:.2}, continuous: {continuous:.2}");
/// ```
#[builder]
pub fn pv(fv: f64, r: f64, t: f64, m: Option<u32>) -> f64 {
    fv / Compounding::from(m).growth_factor(r, t)
}
