//! Seam between the audit pipeline and the hosting service.
//!
//! The pipeline never talks to HTTP directly; it receives a [`RemoteClient`]
//! and asks it for per-repository handles.

use super::model::{BranchRecord, RepositoryId};
use crate::utils::Result;

pub trait RemoteClient {
    /// Resolves a repository handle, failing if the repository cannot be reached.
    fn repository(&self, id: &RepositoryId) -> Result<Box<dyn RemoteRepository + '_>>;
}

pub trait RemoteRepository {
    /// Canonical `owner/name` as reported by the host.
    fn full_name(&self) -> &str;

    /// Every branch with the committer timestamp of its tip commit, in host order.
    fn branches(&self) -> Result<Vec<BranchRecord>>;

    /// Deletes the `heads/<branch>` reference.
    fn delete_branch(&self, branch: &str) -> Result<()>;
}
