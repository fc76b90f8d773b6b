//! Table editing configuration persistence
//!
//! Stores user preferences in `~/.config/pipegrid/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::table::RowFill;

/// Table editing configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Padding of synthesized rows ("compat" leaves all but the first cell zero-width)
    #[serde(default)]
    pub row_fill: RowFill,

    /// Append a row when moving to the next cell from the table's last cell
    #[serde(default)]
    pub tab_extends_table: bool,

    /// Refuse to delete a row when the table has this many rows or fewer
    #[serde(default = "default_min_rows_for_delete")]
    pub min_rows_for_delete: usize,
}

fn default_min_rows_for_delete() -> usize {
    2
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_fill: RowFill::default(),
            tab_extends_table: false,
            min_rows_for_delete: default_min_rows_for_delete(),
        }
    }
}

impl TableConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
