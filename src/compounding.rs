//! # Compounding Conventions
//!
//! Single cash flows grow either continuously or at a fixed number of compounding
//! periods per year. [`Compounding`] makes that choice explicit: an absent period count
//! means continuous compounding, never a numeric stand-in.

use crate::int_rate_convert::{cont_to_eff, nom_to_eff};

/// How interest accrues on a single cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compounding {
    /// Interest compounds instantaneously, `e^(r·t)`.
    Continuous,
    /// Interest compounds `m` times per year, `(1 + r/m)^(m·t)`.
    Discrete(u32),
}

impl From<Option<u32>> for Compounding {
    fn from(m: Option<u32>) -> Self {
        match m {
            Some(m) => Compounding::Discrete(m),
            None => Compounding::Continuous,
        }
    }
}

impl Compounding {
    /// Compounding periods per year, `None` for continuous compounding.
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Compounding::Continuous => None,
            Compounding::Discrete(m) => Some(*m),
        }
    }

    /// Accumulation factor for nominal annual rate `r` over `t` years.
    ///
    /// # Formula
    /// ```text
    /// Continuous:  e^(r·t)
    /// Discrete(m): (1 + r/m)^(m·t)
    /// ```
    ///
    /// `Discrete(0)` is not intercepted; the result is whatever IEEE arithmetic gives.
    ///
    /// # Example
    /// ```rust
    /// # use rscashflow::prelude::Compounding;
    /// let annual = Compounding::Discrete(1).growth_factor(0.1, 1.0);
    /// assert!((annual - 1.1).abs() < 1e-12);
    /// ```
    pub fn growth_factor(&self, r: f64, t: f64) -> f64 {
        match self {
            Compounding::Continuous => (r * t).exp(),
            Compounding::Discrete(m) => {
                let m = *m as f64;
                (1.0 + r / m).powf(m * t)
            }
        }
    }

    /// Effective annual rate equivalent to nominal rate `r` under this convention.
    pub fn effective_rate(&self, r: f64) -> f64 {
        match self {
            Compounding::Continuous => cont_to_eff(r),
            Compounding::Discrete(m) => nom_to_eff(r, *m),
        }
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_option() {
        assert_eq!(Compounding::from(None), Compounding::Continuous);
        assert_eq!(Compounding::from(Some(12)), Compounding::Discrete(12));
        assert_eq!(Compounding::Discrete(4).periods_per_year(), Some(4));
        assert_eq!(Compounding::Continuous.periods_per_year(), None);
    }

    #[test]
    fn test_growth_factor() {
        assert_abs_diff_eq!(
            Compounding::Continuous.growth_factor(0.1, 1.0),
            1.105170918,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            Compounding::Discrete(12).growth_factor(0.12, 1.0),
            1.126825030,
            epsilon = 1e-9
        );
        // No growth at t = 0
        assert_eq!(Compounding::Continuous.growth_factor(0.1, 0.0), 1.0);
        assert_eq!(Compounding::Discrete(2).growth_factor(0.1, 0.0), 1.0);
    }

    #[test]
    fn test_zero_periods_growth_factor() {
        assert_eq!(Compounding::Discrete(0).growth_factor(0.1, 1.0), 1.0);
        // NaN^0 is also 1
        assert_eq!(Compounding::Discrete(0).growth_factor(0.0, 1.0), 1.0);
    }

    #[test]
    fn test_effective_rate() {
        assert_abs_diff_eq!(
            Compounding::Discrete(2).effective_rate(0.06),
            0.0609,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Compounding::Continuous.effective_rate(0.05),
            0.051271096,
            epsilon = 1e-9
        );
    }
}
