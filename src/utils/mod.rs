pub mod env_file;
pub mod error;
pub mod logging;
pub mod repo_list;

pub use error::{CleanerError, Result};
pub use repo_list::{read_repositories, RepositoryList};
