//! # Configuration
//!
//! Pantry configuration is loaded with [`confique`], layering environment
//! variables over TOML files over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **CLI flags**: `--store` overrides `storage_file` (applied by the binary).
//! 2. **Environment variables**: `PANTRY_STORAGE_FILE`, `PANTRY_DEFAULT_UNIT`.
//! 3. **Files**: in the order passed to [`PantryConfig::load`]; earlier files win.
//!    The binary passes `./pantry.toml`, then the OS config directory's copy.
//! 4. **Compiled Defaults**: `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_file` | `var/data/items.csv` | CSV file holding every item |
//! | `default_unit` | `g` | Display unit for `list` when none is given |

use crate::error::{PantryError, Result};
use crate::model::Unit;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "pantry.toml";
pub const DEFAULT_STORAGE_FILE: &str = "var/data/items.csv";

/// Configuration for pantry, stored in `pantry.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PantryConfig {
    /// Path of the CSV file holding every item.
    #[config(env = "PANTRY_STORAGE_FILE", default = "var/data/items.csv")]
    pub storage_file: String,

    /// Unit used by `list` when none is requested (`g` or `kg`).
    #[config(env = "PANTRY_DEFAULT_UNIT", default = "g")]
    pub default_unit: String,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            storage_file: DEFAULT_STORAGE_FILE.to_string(),
            default_unit: Unit::default().as_str().to_string(),
        }
    }
}

impl PantryConfig {
    /// Loads env over `files` (earlier files win) over defaults.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        let config = builder.load()?;
        log::debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_file)
    }

    pub fn default_unit(&self) -> Result<Unit> {
        self.default_unit.parse().map_err(|_| {
            PantryError::InvalidArgument(format!(
                "default_unit must be g, kg, grams, or kilograms (got '{}')",
                self.default_unit
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_values() {
        let config = PantryConfig::default();
        assert_eq!(config.storage_file, "var/data/items.csv");
        assert_eq!(config.default_unit().unwrap(), Unit::Gram);
        assert_eq!(config.storage_path(), PathBuf::from("var/data/items.csv"));
    }

    #[test]
    fn test_long_unit_name_accepted() {
        let config = PantryConfig {
            default_unit: "kilograms".to_string(),
            ..Default::default()
        };
        assert_eq!(config.default_unit().unwrap(), Unit::Kilogram);
    }

    #[test]
    fn test_bad_unit_rejected() {
        let config = PantryConfig {
            default_unit: "lb".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.default_unit(),
            Err(PantryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_earlier_file_wins() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join("local.toml");
        let global = dir.path().join("global.toml");
        fs::write(&local, "storage_file = \"local.csv\"\n").unwrap();
        fs::write(
            &global,
            "storage_file = \"global.csv\"\ndefault_unit = \"kg\"\n",
        )
        .unwrap();

        let config = PantryConfig::load(&[&local, &global]).unwrap();
        // Env may override these in a developer shell; only assert when unset
        if std::env::var_os("PANTRY_STORAGE_FILE").is_none() {
            assert_eq!(config.storage_file, "local.csv");
        }
        if std::env::var_os("PANTRY_DEFAULT_UNIT").is_none() {
            assert_eq!(config.default_unit, "kg");
        }
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PantryConfig::load(&[dir.path().join("absent.toml")]).unwrap();
        if std::env::var_os("PANTRY_STORAGE_FILE").is_none() {
            assert_eq!(config.storage_file, DEFAULT_STORAGE_FILE);
        }
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "storage_file = [unclosed").unwrap();
        assert!(matches!(
            PantryConfig::load(&[&path]),
            Err(PantryError::Config(_))
        ));
    }
}
