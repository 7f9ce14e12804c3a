use crate::core::model::RepositorySummaries;
use std::fmt::Write as _;

const RULE_WIDTH: usize = 50;

pub fn render_consolidated_summary(summaries: &RepositorySummaries) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nConsolidated Summary:");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    if summaries.is_empty() {
        let _ = writeln!(out, "\nNo repositories could be audited.");
        return out;
    }

    for summary in summaries.iter() {
        let _ = writeln!(out, "\nRepository: {}", summary.repository);
        let _ = writeln!(out, "   - Total branches: {}", summary.total_branches);
        let _ = writeln!(out, "   - Stale branches: {}", summary.stale_count());

        for (position, branch) in summary.stale_branches.iter().enumerate() {
            let _ = writeln!(out, "     {}. {}", position + 1, branch);
        }
    }

    out
}

pub fn present(summaries: &RepositorySummaries) {
    print!("{}", render_consolidated_summary(summaries));
}
