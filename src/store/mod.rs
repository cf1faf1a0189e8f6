//! Saved-document store
//!
//! The store holds the whole collection of saved documents as one JSON array
//! blob under a single key. Every write replaces the entire collection; the
//! last writer wins.
//!
//! - **file**: `JsonFileStore`, the blob lives in one file on disk
//! - **memory**: `MemoryStore`, the blob lives in memory (tests, dry runs)

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::document::ControllerConfig;

/// Gateway to the saved-document collection
pub trait DocumentStore {
    /// All saved documents. Missing or unreadable data yields an empty list;
    /// the failure is logged and never surfaced.
    fn load_all(&self) -> Vec<ControllerConfig>;

    /// Overwrite the stored collection
    fn save_all(&mut self, docs: &[ControllerConfig]) -> Result<()>;

    /// Insert `doc`, replacing a saved document with the same id
    fn save_one(&mut self, doc: &ControllerConfig) -> Result<()> {
        let mut docs = self.load_all();
        match docs.iter_mut().find(|d| d.id == doc.id) {
            Some(existing) => *existing = doc.clone(),
            None => docs.push(doc.clone()),
        }
        self.save_all(&docs)?;
        info!(id = %doc.id, name = %doc.name, total = docs.len(), "Saved document");
        Ok(())
    }

    /// Remove the saved document with `id`; unknown ids leave the collection as is
    fn delete_one(&mut self, id: &str) -> Result<()> {
        let mut docs = self.load_all();
        docs.retain(|d| d.id != id);
        self.save_all(&docs)?;
        info!(id = %id, total = docs.len(), "Deleted saved document");
        Ok(())
    }

    fn find(&self, id: &str) -> Option<ControllerConfig> {
        self.load_all().into_iter().find(|d| d.id == id)
    }
}

/// Decode a stored blob, treating malformed content as an empty collection
pub(crate) fn decode_collection(contents: &str, source: &str) -> Vec<ControllerConfig> {
    match serde_json::from_str::<Vec<ControllerConfig>>(contents) {
        Ok(docs) => docs,
        Err(e) => {
            error!(source = %source, error = %e, "Error loading saved configurations, treating store as empty");
            Vec::new()
        }
    }
}

pub(crate) fn encode_collection(docs: &[ControllerConfig]) -> Result<String> {
    serde_json::to_string(docs).context("Failed to serialize saved configurations")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutators;

    #[test]
    fn test_decode_garbage_is_empty() {
        assert!(decode_collection("{not json", "test").is_empty());
        assert!(decode_collection("{\"id\": 1}", "test").is_empty());
    }

    #[test]
    fn test_save_one_appends_then_replaces() {
        let mut store = MemoryStore::new();
        let mut doc = ControllerConfig::default();
        doc.id = "one".to_string();

        store.save_one(&doc).unwrap();
        store.save_one(&mutators::rename(doc.clone(), "Renamed")).unwrap();

        let docs = store.load_all();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "Renamed");
    }

    #[test]
    fn test_delete_one() {
        let mut store = MemoryStore::new();
        for id in ["a", "b", "c"] {
            let mut doc = ControllerConfig::default();
            doc.id = id.to_string();
            store.save_one(&doc).unwrap();
        }

        store.delete_one("b").unwrap();
        store.delete_one("missing").unwrap();

        let ids: Vec<_> = store.load_all().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_find() {
        let mut store = MemoryStore::new();
        let mut doc = ControllerConfig::default();
        doc.id = "x".to_string();
        store.save_one(&doc).unwrap();
        assert_eq!(store.find("x"), Some(doc));
        assert_eq!(store.find("y"), None);
    }
}
