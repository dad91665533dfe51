//! Implements StudentSource by reading a JSON document from disk.

use crate::domain::DomainError;
use crate::ports::StudentSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Reads the whole file and parses it as JSON. Shape checking is left to the builder.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl StudentSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<serde_json::Value, DomainError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Source(format!("read {}: {}", self.path.display(), e))
        })?;
        let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            DomainError::Source(format!("parse {}: {}", self.path.display(), e))
        })?;
        info!(path = %self.path.display(), bytes = raw.len(), "loaded student data");
        Ok(value)
    }
}
