use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing credential: set the {variable} environment variable to a GitHub access token")]
    MissingCredential { variable: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Invalid repository identifier '{value}': {reason}")]
    InvalidRepository { value: String, reason: String },

    #[error("Cannot access repository {repository}: {message}")]
    RepositoryAccess { repository: String, message: String },

    #[error("GitHub API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CleanerError>;

impl CleanerError {
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn missing_credential(variable: impl Into<String>) -> Self {
        Self::MissingCredential {
            variable: variable.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn invalid_repository(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRepository {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn repository_access(repository: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RepositoryAccess {
            repository: repository.into(),
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn report_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReportWrite {
            path: path.into(),
            source,
        }
    }
}
