//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod grading;
pub mod results;

pub use entities::{
    PerformanceInput, PerformanceRecord, ScoreInput, Semester, SemesterRecord, Student,
    StudentRecord, Subject, SubjectRecord,
};
pub use errors::DomainError;
pub use grading::{AcademicHonors, GradeCalculator, GradingPolicy, ScoreValidator};
pub use results::{
    BatchOutcome, Fixed2, SemesterResult, StudentFailure, SubjectResult, Transcript,
};
