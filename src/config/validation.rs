use super::{AuditConfig, Config, ConfigError, GitHubConfig, Result};

pub fn validate_config(config: &Config) -> Result<()> {
    validate_github_config(&config.github)?;
    validate_audit_config(&config.audit)?;
    Ok(())
}

pub fn validate_github_config(github: &GitHubConfig) -> Result<()> {
    if github.api_url.trim().is_empty() {
        return Err(ConfigError::Validation(
            "GitHub API URL cannot be empty".to_string(),
        ));
    }

    if !(github.api_url.starts_with("https://") || github.api_url.starts_with("http://")) {
        return Err(ConfigError::Validation(format!(
            "Invalid GitHub API URL '{}'. Must start with http:// or https://",
            github.api_url
        )));
    }

    if github.token_env.trim().is_empty() {
        return Err(ConfigError::Validation(
            "Token environment variable name cannot be empty".to_string(),
        ));
    }

    if github.token_env.contains('=') || github.token_env.contains(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "Invalid token environment variable name '{}'",
            github.token_env
        )));
    }

    if github.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "Request timeout must be at least 1 second".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_audit_config(audit: &AuditConfig) -> Result<()> {
    if audit.window_years == 0 {
        return Err(ConfigError::Validation(
            "Stale window must be at least 1 year".to_string(),
        ));
    }

    if audit.repository_list.trim().is_empty() {
        return Err(ConfigError::Validation(
            "Repository list path cannot be empty".to_string(),
        ));
    }

    if audit.summary_file.trim().is_empty() {
        return Err(ConfigError::Validation(
            "Summary file path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
