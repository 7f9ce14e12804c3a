use super::model::{BranchRecord, RepositoryId, RepositorySummary};
use super::remote::RemoteRepository;
use crate::utils::Result;
use chrono::{DateTime, Duration, Utc};

/// Years are counted as a flat 365 days; leap days are not considered.
pub const DAYS_PER_YEAR: i64 = 365;

#[derive(Debug, Clone, Copy)]
pub struct StaleBranchAnalyzer {
    cutoff: DateTime<Utc>,
}

impl StaleBranchAnalyzer {
    pub fn new(now: DateTime<Utc>, window_years: u32) -> Self {
        Self {
            cutoff: cutoff_instant(now, window_years),
        }
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    pub fn is_stale(&self, branch: &BranchRecord) -> bool {
        branch.last_commit < self.cutoff
    }

    pub fn summarize(
        &self,
        repository: &RepositoryId,
        branches: &[BranchRecord],
    ) -> RepositorySummary {
        let stale_branches = branches
            .iter()
            .filter(|branch| self.is_stale(branch))
            .map(|branch| branch.name.clone())
            .collect();

        RepositorySummary {
            repository: repository.clone(),
            total_branches: branches.len(),
            stale_branches,
        }
    }

    /// Lists the branches of `handle` and summarizes them. Read-only.
    pub fn classify(
        &self,
        repository: &RepositoryId,
        handle: &dyn RemoteRepository,
    ) -> Result<RepositorySummary> {
        let branches = handle.branches()?;
        let summary = self.summarize(repository, &branches);

        tracing::debug!(
            repository = %repository,
            total = summary.total_branches,
            stale = summary.stale_count(),
            cutoff = %self.cutoff,
            "classified branches"
        );

        Ok(summary)
    }
}

pub fn cutoff_instant(now: DateTime<Utc>, window_years: u32) -> DateTime<Utc> {
    now - Duration::days(i64::from(window_years) * DAYS_PER_YEAR)
}
