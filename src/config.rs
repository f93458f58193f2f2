//! Persistent identity defaults.
//!
//! A small JSON file holds the values worth keeping between sessions: who
//! you are, your role, the project you are on, and whether headers carry a
//! time. Composed statuses themselves are never persisted.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fields::Role;

/// Defaults seeded into a fresh form and into unset `format` flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub actor_name: String,
    pub role: Role,
    pub project: String,
    pub show_time: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            actor_name: String::new(),
            role: Role::Dev,
            project: String::new(),
            show_time: false,
        }
    }
}

impl Config {
    /// Load from a JSON file, falling back to defaults when the file is
    /// missing, unreadable, or does not parse. Never fatal.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(
                        "config at {} did not parse, using defaults: {e}",
                        path.display()
                    );
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("config at {} unreadable, using defaults: {e}", path.display());
                Config::default()
            }
        }
    }

    /// Save as pretty JSON. Writes a temp file in the same directory and
    /// renames it over the target.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let tmp = path.with_extension("json.tmp");
        let data = serde_json::to_string_pretty(self)?;
        let mut f = File::create(&tmp)
            .with_context(|| format!("creating {}", tmp.display()))?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(&tmp, path)
            .with_context(|| format!("replacing {}", path.display()))?;
        Ok(())
    }
}

/// Default config location: `~/.sup/config.json`.
pub fn default_config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".sup").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = Config::default();
        config.actor_name = "Akash".to_string();
        config.role = Role::Qa;
        config.show_time = true;
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path), config);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Config::load(&path), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"actor_name":"Priya"}"#).unwrap();
        let config = Config::load(&path);
        assert_eq!(config.actor_name, "Priya");
        assert_eq!(config.role, Role::Dev);
        assert!(!config.show_time);
    }
}
