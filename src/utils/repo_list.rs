use crate::core::model::RepositoryId;
use crate::utils::{CleanerError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub content: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryList {
    pub repositories: Vec<RepositoryId>,
    pub skipped: Vec<SkippedLine>,
}

/// Reads one `owner/name` per line. Blank lines are ignored; malformed lines are skipped.
pub fn read_repositories(path: &Path) -> Result<RepositoryList> {
    if !path.exists() {
        return Err(CleanerError::file_not_found(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    Ok(parse_repositories(&content))
}

pub fn parse_repositories(content: &str) -> RepositoryList {
    let mut list = RepositoryList::default();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match RepositoryId::parse(trimmed) {
            Ok(repository) => list.repositories.push(repository),
            Err(e) => list.skipped.push(SkippedLine {
                line_number: index + 1,
                content: trimmed.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    list
}
