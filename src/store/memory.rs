use anyhow::Result;

use super::{DocumentStore, decode_collection, encode_collection};
use crate::document::ControllerConfig;

/// In-memory blob store, the stand-in for a browser-style key-value slot
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored text (which may be malformed)
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self { blob: Some(blob.into()) }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl DocumentStore for MemoryStore {
    fn load_all(&self) -> Vec<ControllerConfig> {
        match &self.blob {
            Some(blob) => decode_collection(blob, "memory"),
            None => Vec::new(),
        }
    }

    fn save_all(&mut self, docs: &[ControllerConfig]) -> Result<()> {
        self.blob = Some(encode_collection(docs)?);
        Ok(())
    }
}
