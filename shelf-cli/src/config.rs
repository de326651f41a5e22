use crate::constants::SHELF_CLI;
use confy::ConfyError;
use serde::{Deserialize, Serialize};
use std::env::home_dir;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfCliConfig {
    pub data_file: String,
    pub catalog_file: Option<String>,
}

impl Default for ShelfCliConfig {
    fn default() -> Self {
        let data_file = home_dir()
            .map(|p| p.join(SHELF_CLI).join("prompts.json"))
            .unwrap_or_else(|| PathBuf::from("shelf/prompts.json"));

        Self {
            data_file: data_file.display().to_string(),
            catalog_file: None,
        }
    }
}

/// Paths the CLI works with once the config file and the command line are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub catalog_file: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(config: ShelfCliConfig, data_file: Option<String>) -> Settings {
        Settings {
            data_file: PathBuf::from(data_file.unwrap_or(config.data_file)),
            catalog_file: config.catalog_file.map(PathBuf::from),
        }
    }

    /// Directories that must exist before any command runs.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.data_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| vec![p.to_path_buf()])
            .unwrap_or_default()
    }
}

pub fn load_config() -> Result<ShelfCliConfig, ConfyError> {
    confy::load(SHELF_CLI, None)
}
