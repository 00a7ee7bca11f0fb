use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{palette::PaletteName, persist::load_json};

/// Defaults for the command line, read from the user's config directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalConfig {
    pub palette: PaletteName,
    pub parallel: bool,
    pub strict: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            palette: PaletteName::Bgb,
            parallel: true,
            strict: false,
        }
    }
}

pub fn get_global_config_path() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("", "", "GBGraphics")
        .context("Unable to open global config directory.")?;
    let config_dir = project_dirs.config_dir();
    let config_path = config_dir.join("config.json");
    Ok(config_path)
}

pub fn load_global_config(path: &Path) -> Result<GlobalConfig> {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(GlobalConfig::default());
    }
    load_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_global_config(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"palette": "greyscale"}"#).unwrap();
        let config = load_global_config(&path).unwrap();
        assert_eq!(config.palette, PaletteName::Greyscale);
        assert!(config.parallel);
        assert!(!config.strict);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ palette: ").unwrap();
        assert!(load_global_config(&path).is_err());
    }
}
