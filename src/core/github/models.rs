//! Subset of GitHub REST payloads the cleaner reads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryInfo {
    pub full_name: String,
    #[serde(default)]
    pub default_branch: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchEntry {
    pub name: String,
    pub commit: CommitPointer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitPointer {
    pub sha: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetails {
    pub sha: String,
    pub commit: GitCommit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitCommit {
    pub committer: Option<Signature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Signature {
    /// Offsets in the payload are normalized to UTC on deserialization.
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

impl CommitDetails {
    pub fn committer_date(&self) -> Option<DateTime<Utc>> {
        self.commit.committer.as_ref().map(|signature| signature.date)
    }
}
