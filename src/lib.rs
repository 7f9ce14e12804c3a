pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use core::model::{BranchRecord, RepositoryId, RepositorySummaries, RepositorySummary};
pub use core::remote::{RemoteClient, RemoteRepository};
pub use core::staleness::StaleBranchAnalyzer;
pub use utils::{CleanerError, Result};
