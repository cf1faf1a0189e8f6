//! Application settings
//!
//! A small JSON file under the platform config dir. Missing keys fall back
//! to defaults; a missing file is created with defaults on first load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::fmt::MakeWriter;

use crate::constants::config::{APP_DIR, FILENAME, STORE_FILENAME, WORKING_FILENAME};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Saved-documents file; defaults to the platform data dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Working document file; defaults to the platform data dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_path: Option<PathBuf>,

    /// Where exports land when no output path is given
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            store_path: None,
            working_path: None,
            export_dir: default_export_dir(),
        }
    }
}

impl Settings {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    /// `<data dir>/arcade-designer/<filename>`
    pub fn default_data_path(filename: &str) -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(filename);
        path
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Settings file not found, creating default settings at {:?}", path);
            let settings = Settings::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;
        Ok(settings)
    }

    /// Load settings at `path` and resolve the effective log level with a
    /// temporary subscriber at `level` writing to `make_writer`, so events
    /// raised before the real subscriber exists are still shown
    pub fn load_logged<W>(path: &Path, level: Level, make_writer: W) -> Result<(Self, Level)>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let bootstrap = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(make_writer)
            .finish();
        tracing::subscriber::with_default(bootstrap, || {
            let settings = Self::load_from(path)?;
            let level = settings.effective_log_level();
            Ok((settings, level))
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;
        fs::write(path, json).with_context(|| format!("Failed to write settings to {:?}", path))?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| Self::default_data_path(STORE_FILENAME))
    }

    pub fn working_path(&self) -> PathBuf {
        self.working_path
            .clone()
            .unwrap_or_else(|| Self::default_data_path(WORKING_FILENAME))
    }

    /// Effective log level: `LOG_LEVEL` env var first, then the settings file
    pub fn effective_log_level(&self) -> Level {
        let raw = env::var("LOG_LEVEL").unwrap_or_else(|_| self.log_level.clone());
        parse_level(&raw)
    }
}

/// Level for logging that happens before settings are read: `LOG_LEVEL` when
/// it names a level, otherwise info
pub fn bootstrap_level() -> Level {
    env::var("LOG_LEVEL")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(Level::INFO)
}

pub fn parse_level(raw: &str) -> Level {
    match raw.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => {
            warn!(level = %other, "Unknown log level, using info");
            Level::INFO
        }
    }
}
