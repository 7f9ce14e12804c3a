use super::{AuditConfig, Config, GitHubConfig};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WINDOW_YEARS: u32 = 1;
pub const DEFAULT_REPOSITORY_LIST: &str = "masterRepoList.txt";
pub const DEFAULT_SUMMARY_FILE: &str = "repoCleaner_summary.txt";

pub const CONFIG_PATH_ENV: &str = "REPO_CLEANER_CONFIG_PATH";

pub fn default_config() -> Config {
    Config {
        github: default_github_config(),
        audit: default_audit_config(),
    }
}

pub fn default_github_config() -> GitHubConfig {
    GitHubConfig {
        api_url: DEFAULT_API_URL.to_string(),
        token_env: DEFAULT_TOKEN_ENV.to_string(),
        timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
}

pub fn default_audit_config() -> AuditConfig {
    AuditConfig {
        window_years: DEFAULT_WINDOW_YEARS,
        repository_list: DEFAULT_REPOSITORY_LIST.to_string(),
        summary_file: DEFAULT_SUMMARY_FILE.to_string(),
    }
}

pub fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "repo-cleaner") {
        proj_dirs.config_dir().to_path_buf()
    } else if let Some(base_dirs) = directories::BaseDirs::new() {
        base_dirs.home_dir().join(".config").join("repo-cleaner")
    } else {
        PathBuf::from(".repo-cleaner")
    }
}

pub fn get_config_file_path() -> PathBuf {
    // Allow environment variable override for config path (used in tests)
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
