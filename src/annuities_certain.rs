use crate::int_rate_convert::periodic_rate;
use bon::builder;

/// Present value of an ordinary annuity (payments in arrears).
///
/// Calculates the present value of `n` level payments of `pmt`, each paid at the end of a period.
///
/// # Formula
/// ```text
/// PV = pmt · (1 - (1 + i)⁻ⁿ) / i      (i ≠ 0)
/// PV = pmt · n                        (i = 0)
/// ```
/// where:
/// - `i = r/m` is the periodic interest rate
/// - `r` is the nominal annual interest rate
/// - `n` is the number of payments
/// - `m` is the number of compounding periods per year (default 1)
///
/// # Examples
///
/// ## Five-year annual annuity
/// ```rust
/// # use rscashflow::prelude::*;
/// let value = pvoa().pmt(1000.0).r(0.05).n(5.0).call();
/// assert!((value - 4329.48).abs() < 0.01);
/// ```
#[builder]
pub fn pvoa(pmt: f64, r: f64, n: f64, #[builder(default = 1)] m: u32) -> f64 {
    let i = periodic_rate(r, m);
    if i == 0.0 {
        return pmt * n;
    }
    // aₙ = (1 - vⁿ) / i
    pmt * (1.0 - (1.0 + i).powf(-n)) / i
}

/// Present value of an annuity due (payments in advance).
///
/// # Formula
/// ```text
/// PV = pvoa(pmt, r, n, m) · (1 + i)
/// ```
/// where `i = r/m`.
///
/// # Example
/// ```rust
/// # use rscashflow::prelude::*;
/// let value = pvad().pmt(1000.0).r(0.05).n(5.0).call();
/// println!("Annuity due: {value:.2}");
/// ```
#[builder]
pub fn pvad(pmt: f64, r: f64, n: f64, #[builder(default = 1)] m: u32) -> f64 {
    let i = periodic_rate(r, m);
    let immediate = pvoa().pmt(pmt).r(r).n(n).m(m).call();
    immediate * (1.0 + i)
}

/// Future value of an ordinary annuity (payments in arrears).
///
/// Accumulated value at the end of period `n` of `n` level payments of `pmt`.
///
/// # Formula
/// ```text
/// FV = pmt · ((1 + i)ⁿ - 1) / i       (i ≠ 0)
/// FV = pmt · n                        (i = 0)
/// ```
/// where `i = r/m`.
///
/// # Example
/// ```rust
/// # use rscashflow::prelude::*;
/// let value = fvoa().pmt(1000.0).r(0.05).n(5.0).call();
/// assert!((value - 5525.63).abs() < 0.01);
/// ```
#[builder]
pub fn fvoa(pmt: f64, r: f64, n: f64, #[builder(default = 1)] m: u32) -> f64 {
    let i = periodic_rate(r, m);
    if i == 0.0 {
        return pmt * n;
    }
    // sₙ = ((1 + i)ⁿ - 1) / i
    pmt * ((1.0 + i).powf(n) - 1.0) / i
}

/// Future value of an annuity due (payments in advance).
///
/// # Formula
/// ```text
/// FV = fvoa(pmt, r, n, m) · (1 + i)
/// ```
/// where `i = r/m`.
#[builder]
pub fn fvad(pmt: f64, r: f64, n: f64, #[builder(default = 1)] m: u32) -> f64 {
    let i = periodic_rate(r, m);
    let immediate = fvoa().pmt(pmt).r(r).n(n).m(m).call();
    immediate * (1.0 + i)
}
