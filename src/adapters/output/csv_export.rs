//! Flat CSV export. One row per subject, GPA columns repeated per row.
//!
//! Semicolon-delimited, same as the rest of our CSV output.

use crate::domain::{BatchOutcome, DomainError, Transcript};
use crate::ports::TranscriptSink;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

const HEADER: [&str; 10] = [
    "student_id",
    "name",
    "term",
    "subject",
    "credits",
    "final_grade",
    "grade_point",
    "semester_gpa",
    "cumulative_gpa",
    "honors",
];

/// Serialize transcripts to a CSV string with a header row.
pub fn transcripts_to_csv(transcripts: &[Transcript]) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(HEADER)?;

    for t in transcripts {
        let cumulative = t.cumulative_gpa.to_string();
        for semester in &t.semesters {
            let semester_gpa = semester.semester_gpa.to_string();
            for s in &semester.subjects {
                let credits = s.credits.to_string();
                let final_grade = s.final_grade.to_string();
                let grade_point = s.grade_point.to_string();
                wtr.write_record([
                    t.student_id.as_str(),
                    t.name.as_str(),
                    semester.term.as_str(),
                    s.name.as_str(),
                    credits.as_str(),
                    final_grade.as_str(),
                    grade_point.as_str(),
                    semester_gpa.as_str(),
                    cumulative.as_str(),
                    t.academic_honors.label(),
                ])?;
            }
        }
    }

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl TranscriptSink for CsvFileSink {
    async fn publish(&self, outcome: &BatchOutcome) -> Result<(), DomainError> {
        let content = transcripts_to_csv(&outcome.transcripts)
            .map_err(|e| DomainError::Sink(format!("Failed to generate CSV: {}", e)))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| DomainError::Sink(format!("write {}: {}", self.path.display(), e)))?;
        info!(path = %self.path.display(), "csv written");
        Ok(())
    }
}
