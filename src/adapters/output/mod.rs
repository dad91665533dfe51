//! Transcript sinks. Implement `TranscriptSink`.

pub mod console;
pub mod csv_export;
pub mod json_file;
pub mod markdown;

pub use console::{ConsoleRenderer, render_text};
pub use csv_export::{CsvFileSink, transcripts_to_csv};
pub use json_file::JsonFileSink;
pub use markdown::MarkdownReportSink;
