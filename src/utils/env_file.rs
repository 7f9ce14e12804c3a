use std::path::{Path, PathBuf};

/// Loads `KEY=value` pairs from a `.env` file into the process environment.
///
/// With no explicit path the file is searched for in the current directory and
/// its ancestors. Variables that are already set keep their value, and a missing
/// file is not an error.
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment file");
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable .env file");
            None
        }
    }
}
