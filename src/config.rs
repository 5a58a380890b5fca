use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
pub struct Cli {
    #[arg(long)]
    pub file: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
    #[arg(long)]
    pub hide_earnings: bool,
    #[arg(long)]
    pub reset: bool,
}

/// Settings persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedConfig {
    pub data_path: Option<String>,
    pub json_mode: bool,
    pub show_earnings_column: bool,
    pub saved_at: DateTime<Utc>,
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("utilboard").join("config.json"))
}

/// Where the configuration lives, for display in the settings view.
pub fn config_path_display() -> String {
    match config_file_path() {
        Some(path) => path.display().to_string(),
        None => "<no config directory available>".to_string(),
    }
}

pub fn load_config() -> Option<SavedConfig> {
    load_config_from(&config_file_path()?)
}

pub fn save_config(config: &SavedConfig) -> Result<(), io::Error> {
    let path = config_file_path().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no config directory available")
    })?;
    save_config_to(&path, config)
}

/// Delete the saved configuration. Returns whether a file existed.
pub fn reset_config() -> Result<bool, io::Error> {
    match config_file_path() {
        Some(path) => remove_config_file(&path),
        None => Ok(false),
    }
}

fn load_config_from(path: &Path) -> Option<SavedConfig> {
    let contents = fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

fn save_config_to(path: &Path, config: &SavedConfig) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)
}

fn remove_config_file(path: &Path) -> Result<bool, io::Error> {
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_config() -> SavedConfig {
        SavedConfig {
            data_path: Some("/tmp/employees.json".to_string()),
            json_mode: false,
            show_earnings_column: true,
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("utilboard").join("config.json");

        let config = sample_config();
        save_config_to(&path, &config).unwrap();

        let loaded = load_config_from(&path).expect("config should load back");
        assert_eq!(loaded.data_path, config.data_path);
        assert_eq!(loaded.json_mode, config.json_mode);
        assert_eq!(loaded.show_earnings_column, config.show_earnings_column);
        assert_eq!(loaded.saved_at, config.saved_at);
    }

    #[test]
    fn loading_missing_or_corrupt_file_yields_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(load_config_from(&path).is_none());

        fs::write(&path, "not json").unwrap();
        assert!(load_config_from(&path).is_none());
    }

    #[test]
    fn remove_reports_whether_a_file_existed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(!remove_config_file(&path).unwrap());

        save_config_to(&path, &sample_config()).unwrap();
        assert!(remove_config_file(&path).unwrap());
        assert!(!path.exists());
    }
}
