//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{BatchOutcome, DomainError};

/// Where student records come from (JSON file, built-in sample set, ...).
///
/// Returns untyped JSON so that shape checking, including "top-level input is
/// not a sequence", stays inside the transcript builder.
#[async_trait::async_trait]
pub trait StudentSource: Send + Sync {
    /// Short name for logs (e.g. file path).
    fn describe(&self) -> String;

    async fn load(&self) -> Result<serde_json::Value, DomainError>;
}

/// Consumer of a finished batch: console renderer, file exporters.
#[async_trait::async_trait]
pub trait TranscriptSink: Send + Sync {
    /// Publish transcripts in input order. Failures are available for sinks
    /// that report them; most ignore them.
    async fn publish(&self, outcome: &BatchOutcome) -> Result<(), DomainError>;
}
