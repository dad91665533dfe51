//! Markdown transcript reports. One file per student in the reports directory.

use crate::domain::{BatchOutcome, DomainError, Transcript};
use crate::ports::TranscriptSink;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Ids end up in file names; keep them to `[A-Za-z0-9_-]`.
fn file_stem(student_id: &str) -> String {
    student_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Render one transcript as a Markdown document.
pub fn render_markdown(t: &Transcript, generated_at: DateTime<Utc>) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Transcript: {}\n\n", t.name));
    md.push_str(&format!(
        "**Student ID:** {} | **Generated:** {}\n\n",
        t.student_id,
        generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    md.push_str("---\n\n");

    for semester in &t.semesters {
        md.push_str(&format!("## {}\n\n", semester.term));
        md.push_str("| Subject | Credits | Final Grade | Grade Point |\n");
        md.push_str("|---|---:|---:|---:|\n");
        for s in &semester.subjects {
            md.push_str(&format!(
                "| {} | {} | {}% | {} |\n",
                s.name, s.credits, s.final_grade, s.grade_point
            ));
        }
        md.push_str(&format!("\n**Semester GPA:** {}\n\n", semester.semester_gpa));
    }

    md.push_str("---\n\n");
    md.push_str(&format!("**Cumulative GPA:** {}\n\n", t.cumulative_gpa));
    md.push_str(&format!("**Academic Honors:** {}\n", t.academic_honors));

    md
}

pub struct MarkdownReportSink {
    reports_dir: PathBuf,
}

impl MarkdownReportSink {
    pub fn new(reports_dir: impl AsRef<Path>) -> Self {
        Self {
            reports_dir: reports_dir.as_ref().to_path_buf(),
        }
    }

    pub fn report_path(&self, student_id: &str) -> PathBuf {
        self.reports_dir
            .join(format!("transcript_{}.md", file_stem(student_id)))
    }
}

#[async_trait]
impl TranscriptSink for MarkdownReportSink {
    async fn publish(&self, outcome: &BatchOutcome) -> Result<(), DomainError> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Sink(format!("Failed to create reports dir: {}", e)))?;

        let generated_at = Utc::now();
        for t in &outcome.transcripts {
            let path = self.report_path(&t.student_id);
            fs::write(&path, render_markdown(t, generated_at))
                .await
                .map_err(|e| DomainError::Sink(format!("Failed to write report: {}", e)))?;
            info!(path = %path.display(), "report generated");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::input::sample::sample_students;
    use crate::usecases::TranscriptBuilder;
    use chrono::TimeZone;

    #[test]
    fn test_render_markdown() {
        let outcome = TranscriptBuilder::default().build_batch(&sample_students());
        let at = Utc.with_ymd_and_hms(2024, 12, 20, 9, 30, 0).unwrap();
        let md = render_markdown(&outcome.transcripts[0], at);
        assert!(md.starts_with("# Transcript: Alice Johnson\n"));
        assert!(md.contains("**Generated:** 2024-12-20 09:30 UTC"));
        assert!(md.contains("## Fall 2024"));
        assert!(md.contains("| Math | 4 | 76.00% | 3.04 |"));
        assert!(md.contains("**Semester GPA:** 2.95"));
        assert!(md.contains("**Academic Honors:** None"));
    }

    #[test]
    fn test_file_stem_sanitizes() {
        assert_eq!(file_stem("S-01/../x"), "S-01____x");
    }

    #[tokio::test]
    async fn test_writes_one_file_per_student() {
        let dir = tempfile::tempdir().unwrap();
        let sink = MarkdownReportSink::new(dir.path().join("reports"));
        let outcome = TranscriptBuilder::default().build_batch(&sample_students());

        sink.publish(&outcome).await.unwrap();

        for id in ["S001", "S002"] {
            let body = std::fs::read_to_string(sink.report_path(id)).unwrap();
            assert!(body.contains(id));
        }
    }
}
