//! Turns the operator's selection line into the branches to delete.
//!
//! Accepted forms:
//! - empty input: delete nothing
//! - `all` (any case): every stale branch of every repository
//! - `owner/name:N, owner/name:M, ...`: 1-based positions from the report
//!
//! Bad entries are rejected one by one; the rest of the line still applies.

use super::model::{DeletionSelection, RepositoryId, RepositorySummaries};
use thiserror::Error;

pub const SELECT_ALL: &str = "all";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("expected <owner/name>:<number>")]
    Malformed,

    #[error("'{value}' is not a positive branch number")]
    InvalidIndex { value: String },

    #[error("unknown repository '{repository}'")]
    UnknownRepository { repository: String },

    #[error("{repository} has no stale branch #{position} ({available} listed)")]
    OutOfRange {
        repository: String,
        position: usize,
        available: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub entry: String,
    pub error: SelectionError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Skip,
    All,
    Entries,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResolution {
    pub mode: SelectionMode,
    pub selection: DeletionSelection,
    pub rejected: Vec<RejectedEntry>,
}

impl SelectionResolution {
    fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selection: DeletionSelection::new(),
            rejected: Vec::new(),
        }
    }
}

pub fn resolve(raw: &str, summaries: &RepositorySummaries) -> SelectionResolution {
    let input = raw.trim();

    if input.is_empty() {
        return SelectionResolution::new(SelectionMode::Skip);
    }

    if input.eq_ignore_ascii_case(SELECT_ALL) {
        let mut resolution = SelectionResolution::new(SelectionMode::All);
        for summary in summaries.iter() {
            for branch in &summary.stale_branches {
                resolution.selection.push(&summary.repository, branch.clone());
            }
        }
        return resolution;
    }

    let mut resolution = SelectionResolution::new(SelectionMode::Entries);
    for entry in input.split(',').map(str::trim) {
        match resolve_entry(entry, summaries) {
            Ok((repository, branch)) => {
                resolution.selection.push(repository, branch);
            }
            Err(error) => {
                tracing::debug!(entry, %error, "rejected selection entry");
                resolution.rejected.push(RejectedEntry {
                    entry: entry.to_string(),
                    error,
                });
            }
        }
    }

    resolution
}

fn resolve_entry<'a>(
    entry: &str,
    summaries: &'a RepositorySummaries,
) -> Result<(&'a RepositoryId, &'a str), SelectionError> {
    let (repository, index) = entry.split_once(':').ok_or(SelectionError::Malformed)?;
    let (repository, index) = (repository.trim(), index.trim());

    if repository.is_empty() || index.is_empty() {
        return Err(SelectionError::Malformed);
    }

    let position = parse_position(index)?;

    let summary = summaries
        .get(repository)
        .ok_or_else(|| SelectionError::UnknownRepository {
            repository: repository.to_string(),
        })?;

    let branch = summary
        .stale_branch_at(position)
        .ok_or_else(|| SelectionError::OutOfRange {
            repository: repository.to_string(),
            position,
            available: summary.stale_count(),
        })?;

    Ok((&summary.repository, branch))
}

fn parse_position(value: &str) -> Result<usize, SelectionError> {
    match value.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(SelectionError::InvalidIndex {
            value: value.to_string(),
        }),
    }
}
