//! Derived output shapes. Built fresh per run by the transcript builder.

use crate::domain::DomainError;
use crate::domain::grading::AcademicHonors;
use serde::{Serialize, Serializer};
use std::fmt;

/// A computed number presented with exactly two decimals (`"76.00"`).
///
/// The unrounded value is kept; formatting and serialization always go
/// through [`Fixed2::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fixed2(f64);

impl Fixed2 {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Rounded to cents, halves away from zero (`2.125` -> `2.13`).
    ///
    /// `{:.2}` alone rounds exact halves to even.
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

impl Serialize for Fixed2 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResult {
    pub name: String,
    pub credits: f64,
    pub final_grade: Fixed2,
    pub grade_point: Fixed2,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterResult {
    pub term: String,
    pub subjects: Vec<SubjectResult>,
    #[serde(rename = "semesterGPA")]
    pub semester_gpa: Fixed2,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub student_id: String,
    pub name: String,
    pub semesters: Vec<SemesterResult>,
    #[serde(rename = "cumulativeGPA")]
    pub cumulative_gpa: Fixed2,
    pub academic_honors: AcademicHonors,
}

/// A student dropped from the batch, with the error that dropped it.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFailure {
    /// Record id, or "Unknown" when the id itself was missing.
    pub student_id: String,
    pub error: DomainError,
}

/// Result of one batch run: transcripts in input order, failures alongside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub transcripts: Vec<Transcript>,
    pub failures: Vec<StudentFailure>,
}

impl BatchOutcome {
    pub fn processed(&self) -> usize {
        self.transcripts.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty() && self.failures.is_empty()
    }
}
