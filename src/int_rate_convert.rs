/// Periodic interest rate applied per compounding period.
///
/// # Formula
/// ```text
/// i = r / m
/// ```
/// where:
/// - `r` is the nominal annual interest rate
/// - `m` is the number of compounding periods per year
///
/// No guard on `m = 0`: the division yields `inf` or `NaN`.
///
/// # Example
/// ```rust
/// # use rscashflow::prelude::periodic_rate;
/// let i = periodic_rate(0.12, 12); // 1% per month
/// println!("Periodic i: {:.6}", i);
/// ```
pub fn periodic_rate(r: f64, m: u32) -> f64 {
    r / m as f64
}

/// Effective annual rate earned by a nominal rate `r` compounded `m` times a year.
///
/// Compounds the periodic rate over one year:
/// ```text
/// i = (1 + r/m)^m - 1
/// ```
///
/// # Example
/// ```rust
/// # use rscashflow::prelude::nom_to_eff;
/// let eff = nom_to_eff(0.06, 2);
/// assert!((eff - 0.0609).abs() < 1e-12);
/// ```
pub fn nom_to_eff(r: f64, m: u32) -> f64 {
    let per_period = 1.0 + periodic_rate(r, m);
    per_period.powf(m as f64) - 1.0
}

/// Nominal annual rate, compounded `m` times a year, that earns the effective rate `eff_i`.
///
/// Splits the annual growth into `m` equal periodic steps, computed through the
/// log-growth to stay accurate for small rates:
/// ```text
/// r = m · (e^(ln(1 + i)/m) - 1)
/// ```
///
/// # Example
/// ```rust
/// # use rscashflow::prelude::eff_to_nom;
/// let monthly = eff_to_nom(0.126825, 12);
/// println!("Nominal monthly rate: {monthly:.6}");
/// ```
pub fn eff_to_nom(eff_i: f64, m: u32) -> f64 {
    cont_to_nom(eff_to_cont(eff_i), m)
}

/// Convert force of interest (continuously compounded rate) to effective annual rate.
///
/// # Formula
/// ```text
/// i = e^δ - 1
/// ```
pub fn cont_to_eff(delta: f64) -> f64 {
    delta.exp_m1()
}

/// Convert effective annual rate to force of interest.
///
/// # Formula
/// ```text
/// δ = ln(1 + i)
/// ```
pub fn eff_to_cont(eff_i: f64) -> f64 {
    eff_i.ln_1p()
}

/// Convert nominal annual rate (m-thly) to the equivalent force of interest.
///
/// # Formula
/// ```text
/// δ = m · ln(1 + r/m)
/// ```
///
/// # Example
/// ```rust
/// # use rscashflow::prelude::nom_to_cont;
/// let delta = nom_to_cont(0.12, 12);
/// println!("Force of interest: {:.6}", delta);
/// ```
pub fn nom_to_cont(r: f64, m: u32) -> f64 {
    let m_f64 = m as f64;
    m_f64 * (r / m_f64).ln_1p()
}

/// Convert force of interest to the equivalent nominal annual rate (m-thly).
///
/// # Formula
/// ```text
/// r = m · (e^(δ/m) - 1)
/// ```
pub fn cont_to_nom(delta: f64, m: u32) -> f64 {
    let m_f64 = m as f64;
    m_f64 * (delta / m_f64).exp_m1()
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fn_periodic_rate_01() {
        assert_abs_diff_eq!(periodic_rate(0.12, 12), 0.01, epsilon = 1e-12);
        assert_abs_diff_eq!(periodic_rate(0.05, 1), 0.05, epsilon = 1e-12);
        assert!(periodic_rate(0.05, 0).is_infinite());
    }

    #[test]
    fn test_fn_nom_to_eff_01() {
        let rates = [0.06, 0.12, 0.08];
        let freqs = [2, 12, 4];
        let expected = [0.0609, 0.126825, 0.082432];
        for (k, (rate, m)) in rates.iter().zip(freqs.iter()).enumerate() {
            let ans = nom_to_eff(*rate, *m);
            assert_abs_diff_eq!(ans, expected[k], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_nominal_effective_round_trip() {
        for m in [1, 2, 4, 12, 365] {
            let eff = nom_to_eff(0.07, m);
            assert_abs_diff_eq!(eff_to_nom(eff, m), 0.07, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fn_eff_to_nom_01() {
        let rates = [0.0609, 0.126825, 0.05];
        let freqs = [2, 12, 1];
        let expected = [0.06, 0.12, 0.05];
        for (k, (rate, m)) in rates.iter().zip(freqs.iter()).enumerate() {
            let ans = eff_to_nom(*rate, *m);
            assert_abs_diff_eq!(ans, expected[k], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_continuous_round_trip() {
        let delta = eff_to_cont(0.05);
        assert_abs_diff_eq!(delta, 0.048790164, epsilon = 1e-9);
        assert_abs_diff_eq!(cont_to_eff(delta), 0.05, epsilon = 1e-12);

        let delta = nom_to_cont(0.12, 12);
        assert_abs_diff_eq!(cont_to_nom(delta, 12), 0.12, epsilon = 1e-12);
    }

    #[test]
    fn test_nominal_converges_to_continuous() {
        // Daily compounding is close to the force of interest
        let delta = nom_to_cont(0.1, 100_000);
        assert_abs_diff_eq!(delta, 0.1, epsilon = 1e-5);
    }
}
