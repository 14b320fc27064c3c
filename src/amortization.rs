//! # Loan Amortization
//!
//! Level-payment loan calculations: the payment that retires a present value, the number
//! of payments needed for a given payment, and the period-by-period schedule.

use crate::RSCashflowResult;
use crate::int_rate_convert::periodic_rate;
use crate::params::{MAX_SCHEDULE_PERIODS, ScheduleParams};
use bon::builder;
use polars::prelude::*;

/// Payment per period that amortizes `pv` over `n` periods.
///
/// # Formula
/// ```text
/// PMT = PV · i / (1 - (1 + i)⁻ⁿ)      (i ≠ 0)
/// PMT = PV / n                        (i = 0)
/// ```
/// where:
/// - `i = r/m` is the periodic interest rate
/// - `n` is the number of payments
/// - `m` is the number of compounding periods per year (default 1)
///
/// # Example
/// ```rust
/// # use rscashflow::prelude::*;
/// let payment = pmt().pv(10_000.0).r(0.05).n(5.0).call();
/// assert!((payment - 2309.75).abs() < 0.01);
/// ```
#[builder]
pub fn pmt(pv: f64, r: f64, n: f64, #[builder(default = 1)] m: u32) -> f64 {
    let i = periodic_rate(r, m);
    if i == 0.0 {
        return pv / n;
    }
    pv * i / (1.0 - (1.0 + i).powf(-n))
}

/// Number of periods needed to amortize `pv` with a level payment `pmt`.
///
/// # Formula
/// ```text
/// n = -ln(1 - PV·i/PMT) / ln(1 + i)   (i ≠ 0)
/// n = PV / PMT                        (i = 0)
/// ```
/// where `i = r/m`.
///
/// A payment that never covers the periodic interest (`1 - PV·i/PMT <= 0`) gives `NaN`.
///
/// # Example
/// ```rust
/// # use rscashflow::prelude::*;
/// let periods = nper().pv(10_000.0).pmt(2309.75).r(0.05).call();
/// assert!((periods - 5.0).abs() < 0.01);
/// ```
#[builder]
pub fn nper(pv: f64, pmt: f64, r: f64, #[builder(default = 1)] m: u32) -> f64 {
    let i = periodic_rate(r, m);
    if i == 0.0 {
        return pv / pmt;
    }
    -(1.0 - pv * i / pmt).ln() / (1.0 + i).ln()
}

/// One period of an [`AmortizationSchedule`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleRow {
    /// 1-based payment number
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Outstanding balance after this payment
    pub balance: f64,
}

/// Period-by-period split of a level loan payment into interest and principal.
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationSchedule {
    payment: f64,
    rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Level payment from [`pmt`]. The final row may differ by rounding drift.
    pub fn payment(&self) -> f64 {
        self.payment
    }

    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|row| row.payment).sum()
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|row| row.interest).sum()
    }

    /// Schedule as a DataFrame with columns `period, payment, interest, principal, balance`.
    pub fn to_df(&self) -> PolarsResult<DataFrame> {
        let periods: Vec<u32> = self.rows.iter().map(|row| row.period).collect();

        DataFrame::new(vec![
            Series::new("period".into(), periods).into_column(),
            f64_column("payment", &self.rows, |row| row.payment),
            f64_column("interest", &self.rows, |row| row.interest),
            f64_column("principal", &self.rows, |row| row.principal),
            f64_column("balance", &self.rows, |row| row.balance),
        ])
    }
}

fn f64_column(name: &str, rows: &[ScheduleRow], value: fn(&ScheduleRow) -> f64) -> Column {
    let values: Vec<f64> = rows.iter().map(value).collect();
    Series::new(name.into(), values).into_column()
}

/// Amortization schedule of a level-payment loan.
///
/// Each period accrues `balance · i` of interest; the rest of the payment reduces the
/// balance. The final payment retires whatever balance remains so the loan closes at
/// exactly zero.
///
/// # Parameters
/// - `pv`: Loan principal
/// - `r`: Nominal annual interest rate
/// - `n`: Number of payments, at most [`MAX_SCHEDULE_PERIODS`] when validated
/// - `m`: Payments and compounding periods per year (default 1)
/// - `validate`: Check parameters before building the schedule (default true)
///
/// # Example
/// ```rust
/// # use rscashflow::prelude::*;
/// let schedule = amortization_schedule().pv(10_000.0).r(0.06).n(12).m(12).call()?;
/// let last = schedule.rows().last().unwrap();
/// assert_eq!(last.balance, 0.0);
/// println!("Total interest: {:.2}", schedule.total_interest());
/// # RSCashflowResult::Ok(())
/// ```
#[builder]
pub fn amortization_schedule(
    pv: f64,
    r: f64,
    n: u32,
    #[builder(default = 1)] m: u32,
    #[builder(default = true)] validate: bool,
) -> RSCashflowResult<AmortizationSchedule> {
    if validate {
        let params = ScheduleParams::builder().pv(pv).r(r).n(n).m(m).build();
        if let Err(report) = params.validate_all() {
            log::debug!("rejected amortization schedule parameters: {report}");
            return Err(report.into());
        }
    }

    let i = periodic_rate(r, m);
    let payment = pmt().pv(pv).r(r).n(n as f64).m(m).call();

    let mut rows = Vec::with_capacity(n.min(MAX_SCHEDULE_PERIODS) as usize);
    let mut balance = pv;
    for period in 1..=n {
        let interest = balance * i;
        // Last payment absorbs the rounding drift
        let (paid, principal) = if period == n {
            (interest + balance, balance)
        } else {
            (payment, payment - interest)
        };
        balance = if period == n { 0.0 } else { balance - principal };
        log::trace!("period {period}: interest {interest}, principal {principal}, balance {balance}");
        rows.push(ScheduleRow {
            period,
            payment: paid,
            interest,
            principal,
            balance,
        });
    }

    Ok(AmortizationSchedule { payment, rows })
}
