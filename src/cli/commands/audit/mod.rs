pub mod interaction;
pub mod reporter;

use crate::cli::parser::AuditArgs;
use crate::config::Config;
use crate::core::deletion::BranchDeleter;
use crate::core::github::GitHubClient;
use crate::core::model::{DeletionOutcome, RepositoryId, RepositorySummaries, RepositorySummary};
use crate::core::remote::RemoteClient;
use crate::core::report::write_summary;
use crate::core::selection::{self, RejectedEntry, SelectionMode};
use crate::core::staleness::StaleBranchAnalyzer;
use crate::utils::{read_repositories, CleanerError, Result};
use chrono::Utc;
use interaction::SelectionPrompt;
use std::path::PathBuf;

pub fn execute(config: Config, args: AuditArgs) -> Result<()> {
    let token = load_token(config.token_env())?;
    let settings = AuditSettings::resolve(&config, &args);

    let client = GitHubClient::new(&config.github, &token)?;
    tracing::info!(api = %client.api_url(), "using GitHub API");

    let list = read_repositories(&settings.repository_list)?;
    for skipped in &list.skipped {
        eprintln!(
            "⚠️  Skipping line {} of {} ('{}'): {}",
            skipped.line_number,
            settings.repository_list.display(),
            skipped.content,
            skipped.reason
        );
    }

    let prompt = SelectionPrompt::new(args.select.clone());
    let analyzer = StaleBranchAnalyzer::new(Utc::now(), settings.window_years);
    tracing::info!(cutoff = %analyzer.cutoff(), years = settings.window_years, "staleness cutoff");

    let auditor = RepositoryAuditor::new(&client, analyzer);
    auditor.run(&list.repositories, &settings, &prompt)?;

    Ok(())
}

/// Reads the access token; absence is a fatal startup condition.
pub fn load_token(variable: &str) -> Result<String> {
    match std::env::var(variable) {
        Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(CleanerError::missing_credential(variable)),
    }
}

/// Effective run settings after applying command-line overrides to the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSettings {
    pub window_years: u32,
    pub repository_list: PathBuf,
    pub summary_path: PathBuf,
    pub dry_run: bool,
}

impl AuditSettings {
    pub fn resolve(config: &Config, args: &AuditArgs) -> Self {
        Self {
            window_years: args.years.unwrap_or_else(|| config.window_years()),
            repository_list: args
                .repos
                .clone()
                .unwrap_or_else(|| config.repository_list_path()),
            summary_path: args.output.clone().unwrap_or_else(|| config.summary_path()),
            dry_run: args.dry_run,
        }
    }
}

#[derive(Debug, Default)]
pub struct AuditReport {
    pub summaries: RepositorySummaries,
    pub outcome: DeletionOutcome,
    pub rejected: Vec<RejectedEntry>,
    pub errors: Vec<String>,
}

pub struct RepositoryAuditor<'a> {
    client: &'a dyn RemoteClient,
    analyzer: StaleBranchAnalyzer,
}

impl<'a> RepositoryAuditor<'a> {
    pub fn new(client: &'a dyn RemoteClient, analyzer: StaleBranchAnalyzer) -> Self {
        Self { client, analyzer }
    }

    /// Classifies each repository; unreachable ones are reported and left out.
    pub fn collect_summaries(
        &self,
        repositories: &[RepositoryId],
        errors: &mut Vec<String>,
    ) -> RepositorySummaries {
        let mut summaries = RepositorySummaries::new();

        for repository in repositories {
            let summary = self
                .client
                .repository(repository)
                .and_then(|handle| self.analyzer.classify(repository, handle.as_ref()));

            match summary {
                Ok(summary) => summaries.insert(summary),
                Err(e) => {
                    let message = format!("Error accessing {repository}: {e}");
                    eprintln!("❌ {message}");
                    tracing::warn!(repository = %repository, error = %e, "skipping repository");
                    errors.push(message);
                }
            }
        }

        summaries
    }

    pub fn run(
        &self,
        repositories: &[RepositoryId],
        settings: &AuditSettings,
        prompt: &SelectionPrompt,
    ) -> Result<AuditReport> {
        let mut report = AuditReport::default();

        println!("\nProcessing all repositories...\n");
        report.summaries = self.collect_summaries(repositories, &mut report.errors);

        reporter::present(&report.summaries);

        if settings.dry_run {
            println!("\nDry run: no branches will be deleted");
        } else {
            if report
                .summaries
                .iter()
                .any(RepositorySummary::has_stale_branches)
            {
                println!(
                    "\nFound {} stale branches",
                    report.summaries.total_stale()
                );
            } else {
                println!("\n✨ No stale branches found");
            }

            self.select_and_delete(&mut report, prompt);
        }

        write_summary(&settings.summary_path, &report.summaries, &report.outcome)?;
        println!(
            "\nExecution summary saved in {}",
            settings.summary_path.display()
        );

        Ok(report)
    }

    /// Reads the one selection line of the run and deletes what it resolves to.
    fn select_and_delete(&self, report: &mut AuditReport, prompt: &SelectionPrompt) {
        prompt.show_instructions();

        let raw = match prompt.read_selection() {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Error reading selection: {e}");
                return;
            }
        };

        let resolution = selection::resolve(&raw, &report.summaries);
        prompt.report_rejected(&resolution.rejected);
        report.rejected = resolution.rejected;

        if resolution.mode == SelectionMode::Skip {
            println!("Skipping deletion");
            return;
        }

        if resolution.selection.is_empty() {
            println!("No valid branches selected; nothing to delete");
            return;
        }

        println!(
            "\nDeleting {} branches across {} repositories...",
            resolution.selection.branch_count(),
            resolution.selection.repository_count()
        );

        let results = BranchDeleter::new(self.client).execute(&resolution.selection);
        results.show_results();
        report.errors.extend(results.errors);
        report.outcome = results.outcome;
    }
}
