//! Implements TranscriptSink by writing the transcript array as pretty JSON.

use crate::domain::{BatchOutcome, DomainError};
use crate::ports::TranscriptSink;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl TranscriptSink for JsonFileSink {
    async fn publish(&self, outcome: &BatchOutcome) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(&outcome.transcripts)
            .map_err(|e| DomainError::Sink(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Sink(format!("create dir: {}", e)))?;
        }
        fs::write(&self.path, json)
            .await
            .map_err(|e| DomainError::Sink(format!("write {}: {}", self.path.display(), e)))?;
        info!(path = %self.path.display(), transcripts = outcome.processed(), "json written");
        Ok(())
    }
}
