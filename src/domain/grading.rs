//! Grading rules: score validation, weighted final grade, grade point, honors tier.
//!
//! Weights and thresholds are fixed for the whole run. They live in a read-only
//! [`GradingPolicy`] value handed to the calculator, never in mutable globals.

use crate::domain::entities::{PerformanceInput, PerformanceRecord, ScoreInput};
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (inclusive) of every performance metric.
pub const MAX_SCORE: f64 = 100.0;
/// Grade point awarded for a final grade of [`MAX_SCORE`].
pub const MAX_GRADE_POINT: f64 = 4.0;

/// Metric weights and honors thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingPolicy {
    pub assignments_weight: f64,
    pub exams_weight: f64,
    pub attendance_weight: f64,
    /// Lowest cumulative GPA (inclusive) for High Honors.
    pub high_honors_min: f64,
    /// Lowest cumulative GPA (inclusive) for Honors.
    pub honors_min: f64,
}

impl GradingPolicy {
    pub const STANDARD: GradingPolicy = GradingPolicy {
        assignments_weight: 0.3,
        exams_weight: 0.5,
        attendance_weight: 0.2,
        high_honors_min: 3.7,
        honors_min: 3.3,
    };
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Checks an individual metric is a number within `[0, MAX_SCORE]`.
pub struct ScoreValidator;

impl ScoreValidator {
    /// Returns the numeric score, or a `Validation` error naming `metric` and the offending value.
    pub fn validate(score: Option<&ScoreInput>, metric: &str) -> Result<f64, DomainError> {
        let Some(score) = score else {
            return Err(DomainError::validation(metric, "missing"));
        };
        match score.as_number() {
            Some(n) if (0.0..=MAX_SCORE).contains(&n) => Ok(n),
            _ => Err(DomainError::validation(metric, score)),
        }
    }

    /// Validates all three metrics in order (assignments, exams, attendance).
    pub fn validate_performance(
        performance: &PerformanceInput,
    ) -> Result<PerformanceRecord, DomainError> {
        Ok(PerformanceRecord {
            assignments: Self::validate(performance.assignments.as_ref(), "assignments")?,
            exams: Self::validate(performance.exams.as_ref(), "exams")?,
            attendance: Self::validate(performance.attendance.as_ref(), "attendance")?,
        })
    }
}

/// Weighted final grade and grade-point conversion. No rounding happens here.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradeCalculator {
    policy: GradingPolicy,
}

impl GradeCalculator {
    pub fn new(policy: GradingPolicy) -> Self {
        Self { policy }
    }

    /// `assignments*wa + exams*we + attendance*wt`, in `[0, 100]` for valid input.
    pub fn final_grade(&self, performance: &PerformanceRecord) -> f64 {
        performance.assignments * self.policy.assignments_weight
            + performance.exams * self.policy.exams_weight
            + performance.attendance * self.policy.attendance_weight
    }

    /// Precondition of [`final_grade`](Self::final_grade): performance must be
    /// present (structure error otherwise), then each metric is validated.
    pub fn validated_performance(
        &self,
        performance: Option<&PerformanceInput>,
    ) -> Result<PerformanceRecord, DomainError> {
        let performance = performance
            .ok_or_else(|| DomainError::Structure("Invalid performance data".into()))?;
        ScoreValidator::validate_performance(performance)
    }

    /// Linear map of a final grade onto `[0, 4]`.
    pub fn grade_point(&self, final_grade: f64) -> f64 {
        final_grade / MAX_SCORE * MAX_GRADE_POINT
    }

    pub fn honors(&self, cumulative_gpa: f64) -> AcademicHonors {
        AcademicHonors::classify(cumulative_gpa, &self.policy)
    }
}

/// Honors tier assigned from the unrounded cumulative GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicHonors {
    None,
    Honors,
    #[serde(rename = "High Honors")]
    HighHonors,
}

impl AcademicHonors {
    /// Lower bounds are inclusive; High Honors is checked first.
    pub fn classify(gpa: f64, policy: &GradingPolicy) -> Self {
        if gpa >= policy.high_honors_min {
            Self::HighHonors
        } else if gpa >= policy.honors_min {
            Self::Honors
        } else {
            Self::None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Honors => "Honors",
            Self::HighHonors => "High Honors",
        }
    }
}

impl fmt::Display for AcademicHonors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perf(a: f64, e: f64, t: f64) -> PerformanceRecord {
        PerformanceRecord {
            assignments: a,
            exams: e,
            attendance: t,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let p = GradingPolicy::STANDARD;
        let sum = p.assignments_weight + p.exams_weight + p.attendance_weight;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert_eq!(
            ScoreValidator::validate(Some(&ScoreInput::Number(0.0)), "exams"),
            Ok(0.0)
        );
        assert_eq!(
            ScoreValidator::validate(Some(&ScoreInput::Number(100.0)), "exams"),
            Ok(100.0)
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let err = ScoreValidator::validate(Some(&ScoreInput::Number(100.5)), "exams").unwrap_err();
        assert_eq!(err.to_string(), "Invalid exams score: 100.5");
        let err =
            ScoreValidator::validate(Some(&ScoreInput::Number(-1.0)), "assignments").unwrap_err();
        assert_eq!(err.to_string(), "Invalid assignments score: -1");
    }

    #[test]
    fn test_validate_rejects_missing_and_non_numeric() {
        let err = ScoreValidator::validate(None, "attendance").unwrap_err();
        assert_eq!(err.to_string(), "Invalid attendance score: missing");
        let text = ScoreInput::Other(serde_json::json!("A+"));
        let err = ScoreValidator::validate(Some(&text), "exams").unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref metric, .. } if metric == "exams"));
        assert!(err.to_string().contains("A+"));
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(ScoreValidator::validate(Some(&ScoreInput::Number(f64::NAN)), "exams").is_err());
    }

    #[test]
    fn test_final_grade_is_weighted() {
        let calc = GradeCalculator::default();
        let grade = calc.final_grade(&perf(80.0, 70.0, 85.0));
        assert_eq!(format!("{:.2}", grade), "76.00");
    }

    #[test]
    fn test_perfect_scores() {
        let calc = GradeCalculator::default();
        let grade = calc.final_grade(&perf(100.0, 100.0, 100.0));
        assert_eq!(format!("{:.2}", grade), "100.00");
        assert_eq!(format!("{:.2}", calc.grade_point(grade)), "4.00");
    }

    #[test]
    fn test_grade_point_is_linear() {
        let calc = GradeCalculator::default();
        assert_eq!(calc.grade_point(0.0), 0.0);
        assert!((calc.grade_point(80.0) - 3.2).abs() < 1e-12);
        assert!((calc.grade_point(60.0) - 2.4).abs() < 1e-12);
    }

    #[test]
    fn test_validated_performance_requires_performance() {
        let calc = GradeCalculator::default();
        let err = calc.validated_performance(None).unwrap_err();
        assert_eq!(err, DomainError::Structure("Invalid performance data".into()));
    }

    #[test]
    fn test_validated_performance_reports_first_bad_metric() {
        let calc = GradeCalculator::default();
        let input = PerformanceInput {
            assignments: Some(ScoreInput::Number(90.0)),
            exams: Some(ScoreInput::Number(150.0)),
            attendance: None,
        };
        let err = calc.validated_performance(Some(&input)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid exams score: 150");
    }

    #[test]
    fn test_validated_performance_feeds_final_grade() {
        let calc = GradeCalculator::default();
        let record = calc
            .validated_performance(Some(&PerformanceInput::new(80.0, 70.0, 85.0)))
            .unwrap();
        assert_eq!(format!("{:.2}", calc.final_grade(&record)), "76.00");
    }

    #[test]
    fn test_null_score_is_reported_as_null() {
        let err = ScoreValidator::validate(Some(&ScoreInput::Other(serde_json::Value::Null)), "exams")
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid exams score: null");
    }

    #[test]
    fn test_honors_thresholds() {
        let calc = GradeCalculator::default();
        assert_eq!(calc.honors(3.70), AcademicHonors::HighHonors);
        assert_eq!(calc.honors(4.0), AcademicHonors::HighHonors);
        assert_eq!(calc.honors(3.69), AcademicHonors::Honors);
        assert_eq!(calc.honors(3.30), AcademicHonors::Honors);
        assert_eq!(calc.honors(3.29), AcademicHonors::None);
        assert_eq!(calc.honors(0.0), AcademicHonors::None);
    }

    #[test]
    fn test_honors_uses_unrounded_value() {
        // 3.699 would display as "3.70" but is still below the High Honors bound.
        assert_eq!(
            AcademicHonors::classify(3.699, &GradingPolicy::STANDARD),
            AcademicHonors::Honors
        );
    }

    #[test]
    fn test_honors_serializes_as_label() {
        let json = serde_json::to_string(&AcademicHonors::HighHonors).unwrap();
        assert_eq!(json, "\"High Honors\"");
        assert_eq!(AcademicHonors::None.to_string(), "None");
    }
}
