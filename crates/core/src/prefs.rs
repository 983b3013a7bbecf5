//! # Display Preferences
//!
//! The single persisted preference: the light/dark display mode. Stored as
//! a one-word file under the runtime data directory, read once at startup
//! and written on every toggle.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;

/// File holding the persisted mode, relative to the data directory
const MODE_FILE: &str = "mode";

/// Light/dark display mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(format!("unknown display mode: {}", other)),
        }
    }
}

/// Get the runtime data directory (.vitrine)
///
/// Honors the `VITRINE_DATA_DIR` environment variable override.
pub fn data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("VITRINE_DATA_DIR") {
        return PathBuf::from(path);
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".vitrine")
}

/// Load the persisted display mode, defaulting to light when the file is
/// absent or unreadable.
pub async fn load_mode(dir: &Path) -> DisplayMode {
    let path = dir.join(MODE_FILE);
    match fs::read_to_string(&path).await {
        Ok(contents) => contents.parse().unwrap_or_else(|err: String| {
            tracing::warn!(%err, ?path, "ignoring invalid display mode file");
            DisplayMode::default()
        }),
        Err(_) => DisplayMode::default(),
    }
}

/// Persist the display mode
pub async fn save_mode(dir: &Path, mode: DisplayMode) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create data directory: {:?}", dir))?;

    let path = dir.join(MODE_FILE);
    fs::write(&path, mode.as_str())
        .await
        .with_context(|| format!("Failed to write display mode: {:?}", path))
}
