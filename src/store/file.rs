use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{DocumentStore, decode_collection, encode_collection};
use crate::document::ControllerConfig;

/// Saved documents kept as one JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load_all(&self) -> Vec<ControllerConfig> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No saved configurations");
                return Vec::new();
            }
        };
        let docs = decode_collection(&contents, &self.path.display().to_string());
        debug!(path = %self.path.display(), count = docs.len(), "Loaded saved configurations");
        docs
    }

    fn save_all(&mut self, docs: &[ControllerConfig]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory {:?}", parent))?;
        }

        let json = encode_collection(docs)?;

        // Write to a sibling temp file and rename so readers never see a partial array
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write temp file {:?}", temp_path))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace store file {:?}", self.path))?;

        info!(path = %self.path.display(), count = docs.len(), "Wrote saved configurations");
        Ok(())
    }
}
