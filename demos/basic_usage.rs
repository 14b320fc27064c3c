//! # RSCashflow Basic Usage Example
//!
//! Walks through the time-value-of-money functions with the builder pattern API.
//! Run with `RUST_LOG=trace` to see the amortization schedule being generated.

use rscashflow::prelude::*;

fn main() -> RSCashflowResult<()> {
    env_logger::init();

    println!("RSCashflow Basic Usage Example");
    println!("==============================");

    // Single cash flows
    println!("\n=== Single Cash Flows (90 today at 10% for 1 year) ===");
    let fv_annual = fv().pv(90.0).r(0.1).t(1.0).m(1).call();
    let fv_monthly = fv().pv(90.0).r(0.1).t(1.0).m(12).call();
    let fv_continuous = fv().pv(90.0).r(0.1).t(1.0).call();
    println!("  Annual compounding:     {fv_annual:.2}");
    println!("  Monthly compounding:    {fv_monthly:.2}");
    println!("  Continuous compounding: {fv_continuous:.2}");

    let pv_continuous = pv().fv(99.0).r(0.1).t(1.0).call();
    println!("  PV of 99 in 1 year (continuous): {pv_continuous:.2}");

    // Annuities
    println!("\n=== Annuities (1,000 per year for 5 years at 5%) ===");
    let pvoa_value = pvoa().pmt(1000.0).r(0.05).n(5.0).call();
    let pvad_value = pvad().pmt(1000.0).r(0.05).n(5.0).call();
    let fvoa_value = fvoa().pmt(1000.0).r(0.05).n(5.0).call();
    let fvad_value = fvad().pmt(1000.0).r(0.05).n(5.0).call();
    println!("  PV ordinary annuity: {pvoa_value:.2}");
    println!("  PV annuity due:      {pvad_value:.2}");
    println!("  FV ordinary annuity: {fvoa_value:.2}");
    println!("  FV annuity due:      {fvad_value:.2}");

    // Loans
    println!("\n=== Loan (10,000 at 5% over 5 years) ===");
    let payment = pmt().pv(10_000.0).r(0.05).n(5.0).call();
    let periods = nper().pv(10_000.0).pmt(payment).r(0.05).call();
    println!("  Payment: {payment:.2}");
    println!("  Periods to repay at that payment: {periods:.2}");

    let schedule = amortization_schedule().pv(10_000.0).r(0.05).n(5).call()?;
    println!("{}", schedule.to_df()?);
    println!("  Total interest: {:.2}", schedule.total_interest());

    // Rate conversions
    println!("\n=== Rate Conversions (12% nominal) ===");
    println!("  Effective, monthly:    {:.6}", nom_to_eff(0.12, 12));
    println!("  Effective, continuous: {:.6}", cont_to_eff(0.12));
    println!("  Force of interest:     {:.6}", nom_to_cont(0.12, 12));

    Ok(())
}
