use super::model::{DeletionOutcome, RepositorySummaries};
use crate::utils::{CleanerError, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub const REPORT_TITLE: &str = "RepoCleaner Execution Summary";
pub const RULE_WIDTH: usize = 50;

pub fn render_summary(summaries: &RepositorySummaries, outcome: &DeletionOutcome) -> String {
    let mut report = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(report, "{REPORT_TITLE}");
    let _ = writeln!(report, "{}", "=".repeat(RULE_WIDTH));

    for summary in summaries.iter() {
        let _ = writeln!(report, "\nRepository: {}", summary.repository);
        let _ = writeln!(report, "   - Total branches: {}", summary.total_branches);
        let _ = writeln!(report, "   - Stale branches: {}", summary.stale_count());
    }

    // Repositories reached during deletion are listed even when every delete failed.
    if outcome.repository_count() > 0 {
        let _ = writeln!(report, "\nDeleted Branches:");
        for (repository, branches) in outcome.iter() {
            let _ = writeln!(report, "{repository}:");
            for branch in branches {
                let _ = writeln!(report, "   - {branch}");
            }
        }
    }

    report
}

/// Overwrites `path` with the execution summary.
pub fn write_summary(
    path: &Path,
    summaries: &RepositorySummaries,
    outcome: &DeletionOutcome,
) -> Result<()> {
    let report = render_summary(summaries, outcome);

    fs::write(path, report)
        .map_err(|e| CleanerError::report_write(path.display().to_string(), e))?;

    tracing::info!(path = %path.display(), "wrote execution summary");
    Ok(())
}
