//! Console reporting of evaluation results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Significant digits used when printing error percentages.
pub const REPORT_SIGNIFICANT_DIGITS: usize = 6;

/// Format a float like C's `%.<significant>g`.
///
/// Uses fixed notation when the decimal exponent of the rounded value lies in
/// `[-4, significant)` and scientific notation (`1.5e-05`) otherwise. Trailing
/// zeros and a dangling decimal point are removed.
///
/// ```
/// use ridgers::report::format_general;
///
/// assert_eq!(format_general(14.616666666, 6), "14.6167");
/// assert_eq!(format_general(100.0, 6), "100");
/// assert_eq!(format_general(0.00001, 6), "1e-05");
/// assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
/// ```
pub fn format_general(value: f64, significant: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = significant.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Train/test error summary for one trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub dataset: String,
    pub lambda: f64,
    pub n_train: usize,
    pub n_test: usize,
    /// Train error in percent.
    pub train_error: f64,
    /// Test error in percent.
    pub test_error: f64,
}

impl EvaluationReport {
    /// Build a report from error rates in `[0, 1]`.
    pub fn from_rates(
        dataset: impl Into<String>,
        lambda: f64,
        n_train: usize,
        n_test: usize,
        train_error_rate: f64,
        test_error_rate: f64,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            lambda,
            n_train,
            n_test,
            train_error: train_error_rate * 100.0,
            test_error: test_error_rate * 100.0,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ridge Regression Problem")?;
        writeln!(
            f,
            "\tTrain Error: {}%",
            format_general(self.train_error, REPORT_SIGNIFICANT_DIGITS)
        )?;
        write!(
            f,
            "\tTest Error:  {}%",
            format_general(self.test_error, REPORT_SIGNIFICANT_DIGITS)
        )
    }
}
