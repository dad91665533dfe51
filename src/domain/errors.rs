//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A single score is missing, non-numeric or outside `[0, 100]`.
    #[error("Invalid {metric} score: {value}")]
    Validation { metric: String, value: String },

    /// A student, semester, subject or performance record has the wrong shape.
    #[error("{0}")]
    Structure(String),

    /// A semester or student accumulated no credits; GPA would divide by zero.
    #[error("{0}")]
    ZeroCredit(String),

    /// Top-level input is not a sequence of students.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input source error: {0}")]
    Source(String),

    #[error("Output sink error: {0}")]
    Sink(String),
}

impl DomainError {
    pub fn validation(metric: impl Into<String>, value: impl ToString) -> Self {
        Self::Validation {
            metric: metric.into(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_metric_and_value() {
        let err = DomainError::validation("exams", 120);
        assert_eq!(err.to_string(), "Invalid exams score: 120");
    }

    #[test]
    fn test_io_error_messages() {
        assert_eq!(
            DomainError::Source("gone".into()).to_string(),
            "Input source error: gone"
        );
        assert_eq!(
            DomainError::InvalidInput("students data must be an array".into()).to_string(),
            "Invalid input: students data must be an array"
        );
    }
}
