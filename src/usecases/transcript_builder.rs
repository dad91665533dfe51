//! Transcript builder: student -> semester -> subject traversal.
//!
//! Per student: structure check -> semester loop -> credit aggregation ->
//! honors -> emit. Any error aborts that student only; the batch moves on.

use crate::domain::entities::non_empty;
use crate::domain::{
    BatchOutcome, DomainError, Fixed2, GradeCalculator, Semester, SemesterRecord,
    SemesterResult, Student, StudentFailure, StudentRecord, Subject, SubjectRecord, SubjectResult,
    Transcript,
};
use serde::Deserialize;
use tracing::{debug, error, info};

/// Turns student records into transcripts, isolating failures per student.
#[derive(Debug, Clone, Default)]
pub struct TranscriptBuilder {
    calculator: GradeCalculator,
}

impl TranscriptBuilder {
    pub fn new(calculator: GradeCalculator) -> Self {
        Self { calculator }
    }

    /// Build transcripts for untyped input.
    ///
    /// A non-array yields an empty outcome (the error is logged, not returned).
    /// An element that does not decode as a student record fails that student only.
    pub fn build_from_value(&self, value: &serde_json::Value) -> BatchOutcome {
        let Some(items) = value.as_array() else {
            let err = DomainError::InvalidInput("students data must be an array".into());
            error!(error = %err, "rejecting batch");
            return BatchOutcome::default();
        };

        let mut outcome = BatchOutcome::default();
        for item in items {
            match StudentRecord::deserialize(item) {
                Ok(record) => self.push(&mut outcome, &record),
                Err(e) => {
                    let id = StudentRecord::id_of(item);
                    let err = DomainError::Structure(format!(
                        "Invalid student structure for ID: {} ({})",
                        id, e
                    ));
                    Self::report(&mut outcome, id, err);
                }
            }
        }
        Self::log_summary(&outcome);
        outcome
    }

    /// Build transcripts for typed records, preserving input order.
    pub fn build_batch(&self, records: &[StudentRecord]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for record in records {
            self.push(&mut outcome, record);
        }
        Self::log_summary(&outcome);
        outcome
    }

    /// Validate and compute one student. All-or-nothing: the first error wins.
    pub fn build_student(&self, record: &StudentRecord) -> Result<Transcript, DomainError> {
        let student = self.validate_student(record)?;
        self.transcript_for(&student)
    }

    /// Boundary validation: raw record -> typed `Student`.
    pub fn validate_student(&self, record: &StudentRecord) -> Result<Student, DomainError> {
        let (Some(id), Some(name), Some(semesters)) = (
            non_empty(&record.id),
            non_empty(&record.name),
            record.semesters.as_ref().filter(|s| !s.is_empty()),
        ) else {
            return Err(DomainError::Structure(format!(
                "Invalid student structure for ID: {}",
                record.display_id()
            )));
        };

        let semesters = semesters
            .iter()
            .map(|s| self.validate_semester(id, s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Student {
            id: id.to_string(),
            name: name.to_string(),
            semesters,
        })
    }

    fn validate_semester(
        &self,
        student_id: &str,
        record: &SemesterRecord,
    ) -> Result<Semester, DomainError> {
        let (Some(term), Some(subjects)) = (
            non_empty(&record.term),
            record.subjects.as_ref().filter(|s| !s.is_empty()),
        ) else {
            return Err(DomainError::Structure(format!(
                "Invalid semester structure for student {}, term {}",
                student_id,
                non_empty(&record.term).unwrap_or("Unknown")
            )));
        };

        let subjects = subjects
            .iter()
            .map(|s| self.validate_subject(student_id, term, s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Semester {
            term: term.to_string(),
            subjects,
        })
    }

    fn validate_subject(
        &self,
        student_id: &str,
        term: &str,
        record: &SubjectRecord,
    ) -> Result<Subject, DomainError> {
        let subject_error = || {
            DomainError::Structure(format!(
                "Invalid subject structure in term {} for student {}",
                term, student_id
            ))
        };
        let credits = record
            .credits
            .as_ref()
            .and_then(|c| c.as_number())
            .filter(|c| c.is_finite() && *c > 0.0);
        let (Some(name), Some(credits)) = (non_empty(&record.name), credits) else {
            return Err(subject_error());
        };
        let performance = self
            .calculator
            .validated_performance(record.performance.as_ref())
            .map_err(|e| match e {
                DomainError::Structure(_) => subject_error(),
                other => other,
            })?;

        Ok(Subject {
            name: name.to_string(),
            credits,
            performance,
        })
    }

    /// Grades, credit-weighted semester GPAs, cumulative GPA and honors for a validated student.
    pub fn transcript_for(&self, student: &Student) -> Result<Transcript, DomainError> {
        let mut semesters = Vec::with_capacity(student.semesters.len());
        let mut cumulative_points = 0.0;
        let mut total_credits = 0.0;

        for semester in &student.semesters {
            let mut semester_points = 0.0;
            let mut semester_credits = 0.0;
            let mut subjects = Vec::with_capacity(semester.subjects.len());

            for subject in &semester.subjects {
                let final_grade = self.calculator.final_grade(&subject.performance);
                let grade_point = self.calculator.grade_point(final_grade);
                semester_points += grade_point * subject.credits;
                semester_credits += subject.credits;
                total_credits += subject.credits;
                subjects.push(SubjectResult {
                    name: subject.name.clone(),
                    credits: subject.credits,
                    final_grade: Fixed2::new(final_grade),
                    grade_point: Fixed2::new(grade_point),
                });
            }

            if semester_credits == 0.0 {
                return Err(DomainError::ZeroCredit(format!(
                    "Zero credits in semester {} for student {}",
                    semester.term, student.id
                )));
            }
            let semester_gpa = semester_points / semester_credits;
            cumulative_points += semester_gpa * semester_credits;

            semesters.push(SemesterResult {
                term: semester.term.clone(),
                subjects,
                semester_gpa: Fixed2::new(semester_gpa),
            });
        }

        if total_credits == 0.0 {
            return Err(DomainError::ZeroCredit(format!(
                "Zero total credits for student {}",
                student.id
            )));
        }
        let cumulative_gpa = cumulative_points / total_credits;

        Ok(Transcript {
            student_id: student.id.clone(),
            name: student.name.clone(),
            semesters,
            cumulative_gpa: Fixed2::new(cumulative_gpa),
            academic_honors: self.calculator.honors(cumulative_gpa),
        })
    }

    fn push(&self, outcome: &mut BatchOutcome, record: &StudentRecord) {
        match self.build_student(record) {
            Ok(transcript) => {
                debug!(
                    student_id = %transcript.student_id,
                    gpa = %transcript.cumulative_gpa,
                    "transcript built"
                );
                outcome.transcripts.push(transcript);
            }
            Err(err) => Self::report(outcome, record.display_id().to_string(), err),
        }
    }

    fn report(outcome: &mut BatchOutcome, student_id: String, err: DomainError) {
        error!(student_id = %student_id, "Error processing student: {}", err);
        outcome.failures.push(StudentFailure {
            student_id,
            error: err,
        });
    }

    fn log_summary(outcome: &BatchOutcome) {
        info!(
            processed = outcome.processed(),
            failed = outcome.failed(),
            "batch complete"
        );
    }
}
