//! JSON export/import and export filenames

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::constants::export::{JPEG_EXTENSION, JSON_EXTENSION, PNG_EXTENSION};
use crate::document::{ControllerConfig, new_id};

/// Export format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => JSON_EXTENSION,
            ExportFormat::Png => PNG_EXTENSION,
            ExportFormat::Jpeg => JPEG_EXTENSION,
        }
    }
}

/// Filename-safe form of a document name: whitespace runs become a single
/// hyphen, then everything is lowercased
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out.to_lowercase()
}

pub fn export_filename(doc: &ControllerConfig, format: ExportFormat) -> String {
    format!("{}.{}", slug(&doc.name), format.extension())
}

pub fn to_json_pretty(doc: &ControllerConfig) -> Result<String> {
    serde_json::to_string_pretty(doc).context("Failed to serialize configuration to JSON")
}

/// Write `doc` as pretty JSON into `dir` under its slug filename
pub fn write_json(doc: &ControllerConfig, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_filename(doc, ExportFormat::Json));
    let json = to_json_pretty(doc)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {:?}", path))?;
    info!(path = %path.display(), name = %doc.name, "Exported JSON");
    Ok(path)
}

/// Parse an imported document. Whatever id the file carried is replaced
/// with a fresh one and the price cache is recomputed.
pub fn import_document(contents: &str) -> Result<ControllerConfig> {
    let mut doc: ControllerConfig = serde_json::from_str(contents)
        .inspect_err(|e| error!(error = %e, "Error importing configuration"))
        .context("Invalid configuration file. Please try again with a valid JSON file.")?;
    doc.id = new_id();
    doc.refresh_price();
    Ok(doc)
}

pub fn read_import(path: &Path) -> Result<ControllerConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file {:?}", path))?;
    import_document(&contents).with_context(|| format!("Failed to import {:?}", path))
}
