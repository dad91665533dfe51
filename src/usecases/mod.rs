//! Application use cases. Orchestrate domain logic via ports.

pub mod report_service;
pub mod transcript_builder;

pub use report_service::ReportService;
pub use transcript_builder::TranscriptBuilder;
