//! Report service. Load students -> build transcripts -> publish to every sink.
//!
//! Input problems never escape: an unreadable source is logged and treated as
//! an empty batch. Sink failures are returned to the caller.

use crate::domain::{BatchOutcome, DomainError};
use crate::ports::{StudentSource, TranscriptSink};
use crate::usecases::TranscriptBuilder;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct ReportService {
    source: Arc<dyn StudentSource>,
    sinks: Vec<Arc<dyn TranscriptSink>>,
    builder: TranscriptBuilder,
}

impl ReportService {
    pub fn new(source: Arc<dyn StudentSource>, builder: TranscriptBuilder) -> Self {
        Self {
            source,
            sinks: Vec::new(),
            builder,
        }
    }

    /// Sinks are published to in the order they are added.
    pub fn with_sink(mut self, sink: Arc<dyn TranscriptSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub async fn run(&self) -> Result<BatchOutcome, DomainError> {
        let source = self.source.describe();
        let outcome = match self.source.load().await {
            Ok(value) => self.builder.build_from_value(&value),
            Err(e) => {
                error!(source = %source, error = %e, "failed to load students");
                BatchOutcome::default()
            }
        };

        if outcome.failed() > 0 {
            warn!(
                source = %source,
                failed = outcome.failed(),
                "some students were dropped from the batch"
            );
        }

        for sink in &self.sinks {
            sink.publish(&outcome).await?;
        }

        info!(
            source = %source,
            processed = outcome.processed(),
            failed = outcome.failed(),
            sinks = self.sinks.len(),
            "report run complete"
        );
        Ok(outcome)
    }
}
