use bon::Builder;
use garde::Validate;

/// Longest schedule accepted: 100 years of daily payments
pub const MAX_SCHEDULE_PERIODS: u32 = 36_500;

// =======================================
// AMORTIZATION SCHEDULE PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct ScheduleParams {
    // Loan principal - must be finite
    pub pv: f64,

    // Nominal annual interest rate - must be finite, periodic rate above -100%
    pub r: f64,

    // Number of payments - at least one row, at most MAX_SCHEDULE_PERIODS
    #[garde(range(min = 1))]
    pub n: u32,

    // Compounding and payment periods per year
    #[garde(range(min = 1))]
    #[builder(default = 1)]
    pub m: u32,
}

impl ScheduleParams {
    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        // Attribute validations first
        self.validate()?;

        self.validate_custom_constraints()
    }

    /// Checks garde can't express with attributes
    fn validate_custom_constraints(&self) -> Result<(), garde::Report> {
        let mut report = garde::Report::new();
        let mut errors: ErrorVec = Vec::new();

        if self.n > MAX_SCHEDULE_PERIODS {
            let n = self.n;
            errors.push((
                "n",
                format!("number of payments {n} cannot exceed {MAX_SCHEDULE_PERIODS}"),
            ));
        }

        validate_finite("pv", self.pv, &mut errors);
        validate_finite("r", self.r, &mut errors);

        let i = self.r / self.m as f64;
        if i <= -1.0 {
            let m = self.m;
            let r = self.r;
            errors.push((
                "r",
                format!("periodic rate r/m ({r} / {m}) must be greater than -1"),
            ));
        }

        for (path, message) in errors {
            report.append(garde::Path::new(path), garde::Error::new(message));
        }

        if report.is_empty() {
            Ok(())
        } else {
            Err(report)
        }
    }
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

type ErrorVec = Vec<(&'static str, String)>;

fn validate_finite(path: &'static str, value: f64, errors: &mut ErrorVec) {
    if !value.is_finite() {
        errors.push((path, format!("{path} must be finite, got {value}")));
    }
}

// =======================================
// UNIT TESTS
// =======================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let params = ScheduleParams::builder().pv(10_000.0).r(0.05).n(5).build();
        assert_eq!(params.m, 1);
        assert!(params.validate_all().is_ok());
    }

    #[test]
    fn test_zero_payments_rejected() {
        let params = ScheduleParams::builder().pv(10_000.0).r(0.05).n(0).build();
        assert!(params.validate_all().is_err());
    }

    #[test]
    fn test_payment_count_cap() {
        let params = ScheduleParams::builder()
            .pv(1000.0)
            .r(0.05)
            .n(MAX_SCHEDULE_PERIODS)
            .m(365)
            .build();
        assert!(params.validate_all().is_ok());

        let params = ScheduleParams::builder()
            .pv(1000.0)
            .r(0.05)
            .n(u32::MAX)
            .build();
        let report = params.validate_all().unwrap_err();
        assert!(report.to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_zero_periods_per_year_rejected() {
        let params = ScheduleParams::builder()
            .pv(10_000.0)
            .r(0.05)
            .n(12)
            .m(0)
            .build();
        assert!(params.validate_all().is_err());
    }

    #[test]
    fn test_cross_field_errors_collected() {
        let params = ScheduleParams::builder()
            .pv(f64::NAN)
            .r(-2.0)
            .n(12)
            .build();
        let report = params.validate_all().unwrap_err();
        assert_eq!(report.iter().count(), 2);
        let message = report.to_string();
        assert!(message.contains("pv must be finite"));
        assert!(message.contains("must be greater than -1"));
    }

    #[test]
    fn test_infinite_rate_rejected() {
        let params = ScheduleParams::builder()
            .pv(1000.0)
            .r(f64::INFINITY)
            .n(12)
            .build();
        assert!(params.validate_all().is_err());
    }
}
