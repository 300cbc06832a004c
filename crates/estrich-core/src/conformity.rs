//! Conformity of measured values against declared classes, and FPC
//! statistics over repeated measurements.
//!
//! Conformity checks never fail: an unparseable declared class is a failed
//! verdict, so a loop over historical records is not stopped by one bad
//! entry.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classes::parse_class_value;
use crate::enums::TestType;

/// Result of comparing one measured value against one declared class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConformityVerdict {
    pub passed: bool,
    pub message: String,
    pub measured: f64,
    /// Threshold in the unit of the measured value; `None` when the declared
    /// class could not be read.
    pub required: Option<f64>,
    pub declared_class: String,
    /// `None` when the test type itself was not recognised.
    pub test_type: Option<TestType>,
}

impl ConformityVerdict {
    fn rejected(
        measured: f64,
        declared_class: &str,
        test_type: Option<TestType>,
        message: String,
    ) -> Self {
        Self {
            passed: false,
            message,
            measured,
            required: None,
            declared_class: declared_class.to_string(),
            test_type,
        }
    }
}

/// Shortest decimal representation, with float noise from scaling removed.
fn format_number(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    format!("{rounded}")
}

/// Threshold encoded in `declared_class`, in the unit of the measured value.
///
/// `None` when the prefix does not belong to `test_type` or the suffix is not
/// a plain non-negative number.
#[must_use]
pub fn required_value(declared_class: &str, test_type: TestType) -> Option<f64> {
    let spec = test_type.spec();
    let suffix = declared_class.trim().strip_prefix(spec.prefix)?;
    let value = parse_class_value(suffix)?;
    Some(((value * spec.scale) * 1e9).round() / 1e9)
}

/// Check one measured value against one declared class.
///
/// Wear test types are lower-is-better (`measured <= required`), all others
/// higher-is-better (`measured >= required`). For `wear_bca` the class suffix
/// is scaled by [`crate::enums::BCA_CLASS_SCALE`] first.
///
/// The message reads `"<Konform|Nicht konform>: <measured> <op> <required>
/// (<declared>)"`, or `"Unbekannte Klasse: <declared>"` when the declared
/// class does not match the test type.
#[must_use]
pub fn check_conformity(
    measured: f64,
    declared_class: &str,
    test_type: TestType,
) -> ConformityVerdict {
    let Some(required) = required_value(declared_class, test_type) else {
        debug!(declared_class, test_type = test_type.as_str(), "declared class not recognised");
        return ConformityVerdict::rejected(
            measured,
            declared_class,
            Some(test_type),
            format!("Unbekannte Klasse: {declared_class}"),
        );
    };

    let lower_is_better = test_type.is_lower_better();
    let passed = if lower_is_better {
        measured <= required
    } else {
        measured >= required
    };

    let op = match (lower_is_better, passed) {
        (true, true) => "≤",
        (true, false) => ">",
        (false, true) => "≥",
        (false, false) => "<",
    };
    let outcome = if passed { "Konform" } else { "Nicht konform" };

    ConformityVerdict {
        passed,
        message: format!(
            "{outcome}: {} {op} {} ({declared_class})",
            format_number(measured),
            format_number(required)
        ),
        measured,
        required: Some(required),
        declared_class: declared_class.to_string(),
        test_type: Some(test_type),
    }
}

/// String-keyed variant of [`check_conformity`].
///
/// An unknown test type yields a failed verdict, not an error.
#[must_use]
pub fn check_conformity_by_name(
    measured: f64,
    declared_class: &str,
    test_type: &str,
) -> ConformityVerdict {
    match test_type.parse::<TestType>() {
        Ok(test_type) => check_conformity(measured, declared_class, test_type),
        Err(_) => {
            debug!(test_type, "test type not recognised");
            ConformityVerdict::rejected(
                measured,
                declared_class,
                None,
                format!("Unbekannte Prüfart: {test_type}"),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Summary of repeated measurements, every field rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Coefficient of variation in percent.
    pub cv: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Unrounded summary of the finite values of a series.
struct Moments {
    count: usize,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

impl Moments {
    #[allow(clippy::cast_precision_loss)]
    fn of(finite: &[f64]) -> Option<Self> {
        if finite.is_empty() {
            return None;
        }
        let n = finite.len() as f64;
        let mean = finite.iter().sum::<f64>() / n;
        let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            count: finite.len(),
            mean,
            std_dev: variance.sqrt(),
            min: finite.iter().copied().fold(f64::INFINITY, f64::min),
            max: finite.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }

    fn rounded(&self) -> Statistics {
        let mean = round1(self.mean);
        let std_dev = round1(self.std_dev);
        let cv = if mean == 0.0 {
            0.0
        } else {
            round1(std_dev / mean * 100.0)
        };
        Statistics {
            count: self.count,
            mean,
            std_dev,
            min: round1(self.min),
            max: round1(self.max),
            cv,
        }
    }
}

fn finite_values(values: &[f64]) -> Vec<f64> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.len() < values.len() {
        debug!(ignored = values.len() - finite.len(), "ignoring non-finite measurements");
    }
    finite
}

/// Mean, population standard deviation, min, max, and coefficient of
/// variation.
///
/// The coefficient of variation is derived from the rounded mean and standard
/// deviation and is `0` for a zero mean. For properties measured in small
/// magnitudes this loses the variation entirely: bond strengths
/// `[1.44, 1.5, 1.56]` have a standard deviation that rounds to `0.0`, so
/// `cv` is `0.0` as well. Non-finite values are ignored; an empty input yields
/// all zeros.
#[must_use]
pub fn calculate_statistics(values: &[f64]) -> Statistics {
    Moments::of(&finite_values(values)).map_or_else(Statistics::default, |m| m.rounded())
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// FPC report for a series of measurements of one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeriesReport {
    pub declared_class: String,
    pub test_type: TestType,
    /// Rounded for display; never used for a verdict.
    pub statistics: Statistics,
    /// One verdict per finite value, so `verdicts.len() == statistics.count`.
    pub verdicts: Vec<ConformityVerdict>,
    pub passed: usize,
    pub failed: usize,
    /// Non-finite values left out of both verdicts and statistics.
    pub ignored: usize,
    /// `false` for a series without finite values.
    pub all_passed: bool,
    /// Verdict of the unrounded mean; `None` for a series without finite
    /// values.
    pub mean_verdict: Option<ConformityVerdict>,
}

/// Evaluate every finite value of a series against one declared class.
#[must_use]
pub fn evaluate_series(values: &[f64], declared_class: &str, test_type: TestType) -> SeriesReport {
    let finite = finite_values(values);
    let verdicts: Vec<ConformityVerdict> = finite
        .iter()
        .map(|&value| check_conformity(value, declared_class, test_type))
        .collect();
    let passed = verdicts.iter().filter(|verdict| verdict.passed).count();
    let failed = verdicts.len() - passed;

    let moments = Moments::of(&finite);
    let statistics = moments
        .as_ref()
        .map_or_else(Statistics::default, Moments::rounded);
    let mean_verdict = moments
        .as_ref()
        .map(|m| check_conformity(m.mean, declared_class, test_type));

    SeriesReport {
        declared_class: declared_class.to_string(),
        test_type,
        statistics,
        all_passed: !verdicts.is_empty() && failed == 0,
        verdicts,
        passed,
        failed,
        ignored: values.len() - finite.len(),
        mean_verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bca_class_is_scaled_to_micrometres() {
        let verdict = check_conformity(50.0, "AR0.5", TestType::WearBca);
        assert!(verdict.passed);
        assert_eq!(verdict.required, Some(50.0));
        assert_eq!(verdict.message, "Konform: 50 ≤ 50 (AR0.5)");
    }

    #[test]
    fn failing_compressive_check() {
        let verdict = check_conformity(24.0, "C25", TestType::CompressiveStrength);
        assert!(!verdict.passed);
        assert_eq!(verdict.message, "Nicht konform: 24 < 25 (C25)");
    }

    #[test]
    fn failing_wear_check_uses_greater_than() {
        let verdict = check_conformity(23.5, "A22", TestType::WearBohme);
        assert!(!verdict.passed);
        assert_eq!(verdict.message, "Nicht konform: 23.5 > 22 (A22)");
    }

    #[test]
    fn bohme_prefix_does_not_accept_bca_class() {
        let verdict = check_conformity(0.4, "AR0.5", TestType::WearBohme);
        assert!(!verdict.passed);
        assert_eq!(verdict.message, "Unbekannte Klasse: AR0.5");
        assert_eq!(verdict.required, None);
    }

    #[test]
    fn non_standard_suffix_is_tolerated() {
        let verdict = check_conformity(23.0, "C23", TestType::CompressiveStrength);
        assert!(verdict.passed);
        let verdict = check_conformity(30.0, "AR0.3", TestType::WearBca);
        assert_eq!(verdict.message, "Konform: 30 ≤ 30 (AR0.3)");
    }

    #[test]
    fn unknown_test_type_name_is_a_failed_verdict() {
        let verdict = check_conformity_by_name(10.0, "C25", "tensile");
        assert!(!verdict.passed);
        assert_eq!(verdict.message, "Unbekannte Prüfart: tensile");
        assert_eq!(verdict.test_type, None);
    }

    #[test]
    fn nan_measurement_never_passes() {
        assert!(!check_conformity(f64::NAN, "C25", TestType::CompressiveStrength).passed);
        assert!(!check_conformity(f64::NAN, "A22", TestType::WearBohme).passed);
    }

    #[test]
    fn statistics_ignore_non_finite_values() {
        let stats = calculate_statistics(&[10.0, f64::NAN, 12.0, f64::INFINITY]);
        assert_eq!(stats.count, 2);
        assert!((stats.mean - 11.0).abs() < 1e-9);
    }

    #[test]
    fn statistics_zero_mean_has_zero_cv() {
        let stats = calculate_statistics(&[-1.0, 1.0]);
        assert!((stats.mean).abs() < 1e-9);
        assert!((stats.std_dev - 1.0).abs() < 1e-9);
        assert!((stats.cv).abs() < 1e-9);
    }

    #[test]
    fn empty_series_is_not_all_passed() {
        let report = evaluate_series(&[], "C25", TestType::CompressiveStrength);
        assert!(!report.all_passed);
        assert!(report.mean_verdict.is_none());
        assert_eq!(report.statistics, Statistics::default());
    }

    #[test]
    fn series_counts_passes_and_failures() {
        let report = evaluate_series(&[26.0, 24.0, 31.5], "C25", TestType::CompressiveStrength);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed);
        let mean = report.mean_verdict.expect("mean verdict");
        assert!(mean.passed);
        assert_eq!(mean.message, "Konform: 27.166667 ≥ 25 (C25)");
    }

    #[test]
    fn mean_verdict_uses_unrounded_mean() {
        let report = evaluate_series(&[24.96, 24.96], "C25", TestType::CompressiveStrength);
        assert_eq!(report.failed, 2);
        assert!((report.statistics.mean - 25.0).abs() < 1e-9);
        let mean = report.mean_verdict.expect("mean verdict");
        assert!(!mean.passed);
        assert_eq!(mean.message, "Nicht konform: 24.96 < 25 (C25)");

        let report = evaluate_series(&[50.04, 50.04], "AR0.5", TestType::WearBca);
        assert_eq!(report.failed, 2);
        assert!(!report.mean_verdict.expect("mean verdict").passed);
    }

    #[test]
    fn non_finite_values_are_left_out_of_series() {
        let report = evaluate_series(
            &[26.0, f64::NAN, 27.0],
            "C25",
            TestType::CompressiveStrength,
        );
        assert_eq!(report.verdicts.len(), report.statistics.count);
        assert_eq!(report.verdicts.len(), 2);
        assert_eq!(report.ignored, 1);
        assert!(report.all_passed);

        let report = evaluate_series(&[f64::NAN], "C25", TestType::CompressiveStrength);
        assert_eq!(report.ignored, 1);
        assert!(!report.all_passed);
        assert!(report.mean_verdict.is_none());
    }

    #[test]
    fn cv_follows_rounded_mean_and_std_dev() {
        let stats = calculate_statistics(&[1.44, 1.5, 1.56]);
        assert!((stats.mean - 1.5).abs() < 1e-9);
        assert!(stats.std_dev.abs() < 1e-9);
        assert!(stats.cv.abs() < 1e-9);

        let stats = calculate_statistics(&[20.0, 22.0, 24.0, 26.0, 28.0]);
        assert!((stats.cv - 11.7).abs() < 1e-9);
    }
}
