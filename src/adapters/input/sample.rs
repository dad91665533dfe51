//! Built-in example data set. Used when no input file is configured.

use crate::domain::{
    DomainError, PerformanceInput, SemesterRecord, StudentRecord, SubjectRecord,
};
use crate::ports::StudentSource;
use async_trait::async_trait;

/// Two students, one semester each.
pub fn sample_students() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(
            "S001",
            "Alice Johnson",
            vec![SemesterRecord::new(
                "Fall 2024",
                vec![
                    SubjectRecord::new("Math", 4.0, PerformanceInput::new(80.0, 70.0, 85.0)),
                    SubjectRecord::new("Physics", 3.0, PerformanceInput::new(90.0, 60.0, 70.0)),
                ],
            )],
        ),
        StudentRecord::new(
            "S002",
            "Bob Smith",
            vec![SemesterRecord::new(
                "Fall 2024",
                vec![
                    SubjectRecord::new("Math", 4.0, PerformanceInput::new(85.0, 75.0, 90.0)),
                    SubjectRecord::new("English", 2.0, PerformanceInput::new(95.0, 82.0, 60.0)),
                ],
            )],
        ),
    ]
}

pub struct SampleSource;

#[async_trait]
impl StudentSource for SampleSource {
    fn describe(&self) -> String {
        "built-in sample".to_string()
    }

    async fn load(&self) -> Result<serde_json::Value, DomainError> {
        serde_json::to_value(sample_students()).map_err(|e| DomainError::Source(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_is_an_array_of_two() {
        let value = SampleSource.load().await.unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "Alice Johnson");
        assert_eq!(items[1]["semesters"][0]["subjects"][1]["name"], "English");
    }
}
