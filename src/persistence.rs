use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{error, info};

use crate::document::ControllerConfig;

/// Working state carried between CLI invocations: the document being
/// edited plus the active selection. This is not the saved collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkingSession {
    pub document: ControllerConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

impl WorkingSession {
    /// Load the session at `path`, starting from the default document when
    /// the file is missing or unreadable
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                info!(path = %path.display(), "No working document, starting from default");
                return Self::default();
            }
        };
        match serde_json::from_str::<WorkingSession>(&contents) {
            Ok(mut session) => {
                session.document.refresh_price();
                // selection pointing at a vanished button is dropped
                if let Some(id) = &session.selected {
                    if !session.document.contains_button(id) {
                        session.selected = None;
                    }
                }
                session
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to parse working document, starting from default");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize working document")?;
        fs::write(path, json).with_context(|| format!("Failed to write working document to {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default_session() {
        let dir = TempDir::new().unwrap();
        let session = WorkingSession::load(&dir.path().join("working.json"));
        assert!(session.document.is_unsaved());
        assert_eq!(session.document.buttons.len(), 7);
        assert_eq!(session.selected, None);
    }

    #[test]
    fn test_round_trip_keeps_selection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("working.json");
        let document = ControllerConfig::default();
        let selected = Some(document.buttons[2].id.clone());
        let session = WorkingSession { document, selected };

        session.save(&path).unwrap();
        assert_eq!(WorkingSession::load(&path), session);
    }

    #[test]
    fn test_dangling_selection_is_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("working.json");
        let session = WorkingSession {
            document: ControllerConfig::default(),
            selected: Some("gone".to_string()),
        };
        session.save(&path).unwrap();
        assert_eq!(WorkingSession::load(&path).selected, None);
    }

    #[test]
    fn test_corrupt_file_is_default_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("working.json");
        fs::write(&path, "[]").unwrap();
        assert_eq!(WorkingSession::load(&path).document.name, "Default Controller");
    }
}
