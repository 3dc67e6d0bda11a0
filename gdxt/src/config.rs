//! Configuration module for the gdxt CLI.
//!
//! Settings live in `gdxt.toml`. Every key is optional; missing keys take
//! their defaults.
//!
//! ```toml
//! verbose = false
//! log_file = "/tmp/gdxt.log"
//!
//! [server]
//! name = "gdx"
//! diagnostic_source = "gdx"
//!
//! [check]
//! jobs = 8
//! ```

use std::path::{Path, PathBuf};

use dirs::config_dir;
use gdx_lsp::ServerConfig;
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};

use crate::error::{GdxtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "gdxt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Where `serve` writes its log; stderr when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Language server settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Settings for `check`.
    #[serde(default)]
    pub check: CheckSection,
}

/// Language server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    /// Name reported in `serverInfo`.
    #[serde(default = "default_name")]
    pub name: String,

    /// `source` field of published diagnostics.
    #[serde(default = "default_name")]
    pub diagnostic_source: String,
}

/// Settings for `check`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckSection {
    /// Number of files scanned in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,
}

fn default_name() -> String {
    "gdx".to_string()
}

fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            diagnostic_source: default_name(),
        }
    }
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches the current directory, then the user configuration
    /// directory. Returns the default configuration if neither has a file.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GdxtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| GdxtError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Builds the language server identity from the `[server]` section.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            name: self.server.name.clone(),
            diagnostic_source: self.server.diagnostic_source.clone(),
            ..ServerConfig::default()
        }
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("gdxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(config.log_file.is_none());
        assert_eq!(config.server.name, "gdx");
        assert_eq!(config.server.diagnostic_source, "gdx");
        assert!(config.check.jobs >= 1);
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let config = Config::parse("[server]\nname = \"godot-lsp\"\n").unwrap();
        assert_eq!(config.server.name, "godot-lsp");
        assert_eq!(config.server.diagnostic_source, "gdx");
        assert_eq!(config.check, CheckSection::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            "verbose = true\nlog_file = \"/tmp/gdxt.log\"\n\n[server]\nname = \"a\"\ndiagnostic_source = \"b\"\n\n[check]\njobs = 3\n",
        )
        .unwrap();
        assert!(config.verbose);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/gdxt.log")));
        assert_eq!(config.check.jobs, 3);

        let server = config.server_config();
        assert_eq!(server.name, "a");
        assert_eq!(server.diagnostic_source, "b");
        assert_eq!(server.version, ServerConfig::default().version);
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::parse("[check]\njobs = \"many\"\n").unwrap_err();
        assert!(matches!(err, GdxtError::Config(_)));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "verbose = true\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/gdxt.toml"));
        assert!(matches!(result, Err(GdxtError::Config(_))));
    }
}
