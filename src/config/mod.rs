use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "defaults::default_github_config")]
    pub github: GitHubConfig,
    #[serde(default = "defaults::default_audit_config")]
    pub audit: AuditConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    pub api_url: String,
    /// Name of the environment variable holding the access token.
    pub token_env: String,
    pub timeout_secs: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub window_years: u32,
    pub repository_list: String,
    pub summary_file: String,
}

impl Default for Config {
    fn default() -> Self {
        defaults::default_config()
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    pub fn token_env(&self) -> &str {
        &self.github.token_env
    }

    pub fn window_years(&self) -> u32 {
        self.audit.window_years
    }

    pub fn repository_list_path(&self) -> PathBuf {
        PathBuf::from(&self.audit.repository_list)
    }

    pub fn summary_path(&self) -> PathBuf {
        PathBuf::from(&self.audit.summary_file)
    }
}
