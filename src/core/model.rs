use crate::utils::{CleanerError, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static REPOSITORY_REGEX: OnceLock<Regex> = OnceLock::new();

/// An `owner/name` pair naming a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId(String);

impl RepositoryId {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CleanerError::invalid_repository(
                value,
                "Repository identifier cannot be empty",
            ));
        }

        let valid_regex = REPOSITORY_REGEX.get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$")
                .expect("REPOSITORY_REGEX should be valid")
        });
        if !valid_regex.is_match(value) {
            return Err(CleanerError::invalid_repository(
                value,
                "Expected the form owner/name using letters, digits, '.', '_' or '-'",
            ));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RepositoryId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRecord {
    pub name: String,
    pub last_commit: DateTime<Utc>,
}

impl BranchRecord {
    pub fn new(name: impl Into<String>, last_commit: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            last_commit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    pub repository: RepositoryId,
    pub total_branches: usize,
    /// Stale branch names in the order the remote listed them.
    pub stale_branches: Vec<String>,
}

impl RepositorySummary {
    pub fn stale_count(&self) -> usize {
        self.stale_branches.len()
    }

    pub fn has_stale_branches(&self) -> bool {
        !self.stale_branches.is_empty()
    }

    /// Looks up a stale branch by its 1-based display position.
    pub fn stale_branch_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.stale_branches.get(idx))
            .map(String::as_str)
    }
}

/// Per-repository summaries, kept in the order repositories were processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositorySummaries {
    summaries: Vec<RepositorySummary>,
}

impl RepositorySummaries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a summary. A repository seen again keeps its original position.
    pub fn insert(&mut self, summary: RepositorySummary) {
        match self
            .summaries
            .iter_mut()
            .find(|existing| existing.repository == summary.repository)
        {
            Some(existing) => *existing = summary,
            None => self.summaries.push(summary),
        }
    }

    pub fn get(&self, repository: &str) -> Option<&RepositorySummary> {
        self.summaries
            .iter()
            .find(|summary| summary.repository == *repository)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepositorySummary> {
        self.summaries.iter()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn total_stale(&self) -> usize {
        self.summaries.iter().map(RepositorySummary::stale_count).sum()
    }
}

impl FromIterator<RepositorySummary> for RepositorySummaries {
    fn from_iter<I: IntoIterator<Item = RepositorySummary>>(iter: I) -> Self {
        let mut summaries = Self::new();
        for summary in iter {
            summaries.insert(summary);
        }
        summaries
    }
}

/// Ordered mapping of repository to branch names.
///
/// Used both for the branches requested for deletion and for the branches
/// that were actually deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchesByRepository {
    entries: Vec<(RepositoryId, Vec<String>)>,
}

pub type DeletionSelection = BranchesByRepository;
pub type DeletionOutcome = BranchesByRepository;

impl BranchesByRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a repository without any branches if it is not present yet.
    pub fn ensure_repository(&mut self, repository: &RepositoryId) -> &mut Vec<String> {
        let position = match self
            .entries
            .iter()
            .position(|(existing, _)| existing == repository)
        {
            Some(position) => position,
            None => {
                self.entries.push((repository.clone(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].1
    }

    pub fn push(&mut self, repository: &RepositoryId, branch: impl Into<String>) {
        self.ensure_repository(repository).push(branch.into());
    }

    pub fn branches_for(&self, repository: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == *repository)
            .map(|(_, branches)| branches.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RepositoryId, &[String])> {
        self.entries
            .iter()
            .map(|(repository, branches)| (repository, branches.as_slice()))
    }

    pub fn repository_count(&self) -> usize {
        self.entries.len()
    }

    pub fn branch_count(&self) -> usize {
        self.entries.iter().map(|(_, branches)| branches.len()).sum()
    }

    /// True when no branch is recorded for any repository.
    pub fn is_empty(&self) -> bool {
        self.branch_count() == 0
    }
}
