//! Console transcript renderer. Implements TranscriptSink on stdout.
//!
//! One block per student in input order, blank line between students.
//! Honors tiers are coloured with crossterm when colour is enabled.

use crate::domain::{AcademicHonors, BatchOutcome, DomainError, Transcript};
use crate::ports::TranscriptSink;
use async_trait::async_trait;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, Write, stdout};

fn honors_color(honors: AcademicHonors) -> Option<Color> {
    match honors {
        AcademicHonors::HighHonors => Some(Color::Green),
        AcademicHonors::Honors => Some(Color::Cyan),
        AcademicHonors::None => None,
    }
}

/// Writes one student's block, including the trailing blank line.
pub fn write_transcript<W: Write>(out: &mut W, t: &Transcript, color: bool) -> io::Result<()> {
    writeln!(out, "Student: {} (ID: {})", t.name, t.student_id)?;
    for semester in &t.semesters {
        writeln!(out, "Semester: {}", semester.term)?;
        for s in &semester.subjects {
            writeln!(
                out,
                "  {}: Credits {}, Final Grade {}%, Grade Point {}",
                s.name, s.credits, s.final_grade, s.grade_point
            )?;
        }
        writeln!(out, "  Semester GPA: {}", semester.semester_gpa)?;
    }
    writeln!(out, "Cumulative GPA: {}", t.cumulative_gpa)?;

    write!(out, "Academic Honors: ")?;
    match honors_color(t.academic_honors).filter(|_| color) {
        Some(c) => queue!(
            out,
            SetForegroundColor(c),
            Print(t.academic_honors.label()),
            ResetColor
        )?,
        None => write!(out, "{}", t.academic_honors)?,
    }
    writeln!(out)?;
    writeln!(out)
}

/// Plain-text rendering of a transcript sequence (no colour codes).
pub fn render_text(transcripts: &[Transcript]) -> String {
    let mut buf = Vec::new();
    for t in transcripts {
        // Writing into a Vec cannot fail.
        let _ = write_transcript(&mut buf, t, false);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Prints transcripts to stdout.
pub struct ConsoleRenderer {
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

#[async_trait]
impl TranscriptSink for ConsoleRenderer {
    async fn publish(&self, outcome: &BatchOutcome) -> Result<(), DomainError> {
        let mut out = stdout().lock();
        for t in &outcome.transcripts {
            write_transcript(&mut out, t, self.color)
                .map_err(|e| DomainError::Sink(format!("stdout: {}", e)))?;
        }
        out.flush()
            .map_err(|e| DomainError::Sink(format!("stdout: {}", e)))
    }
}
