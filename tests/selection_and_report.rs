use chrono::{Duration, TimeZone, Utc};
use repo_cleaner::config::{defaults::default_config, ConfigManager};
use repo_cleaner::core::deletion::BranchDeleter;
use repo_cleaner::core::model::{BranchRecord, DeletionOutcome, RepositoryId, RepositorySummaries};
use repo_cleaner::core::remote::{RemoteClient, RemoteRepository};
use repo_cleaner::core::report::{render_summary, write_summary};
use repo_cleaner::core::selection::{resolve, SelectionError, SelectionMode};
use repo_cleaner::core::staleness::StaleBranchAnalyzer;
use repo_cleaner::utils::repo_list::parse_repositories;
use repo_cleaner::{CleanerError, Result};
use std::cell::RefCell;
use tempfile::TempDir;

/// A single-repository remote that records deletions.
struct RecordingRemote {
    id: RepositoryId,
    branches: Vec<BranchRecord>,
    deleted: RefCell<Vec<String>>,
}

struct RecordingRepository<'a> {
    remote: &'a RecordingRemote,
}

impl RemoteClient for RecordingRemote {
    fn repository(&self, id: &RepositoryId) -> Result<Box<dyn RemoteRepository + '_>> {
        if id != &self.id {
            return Err(CleanerError::repository_access(id.as_str(), "Not Found"));
        }
        Ok(Box::new(RecordingRepository { remote: self }))
    }
}

impl RemoteRepository for RecordingRepository<'_> {
    fn full_name(&self) -> &str {
        self.remote.id.as_str()
    }

    fn branches(&self) -> Result<Vec<BranchRecord>> {
        Ok(self.remote.branches.clone())
    }

    fn delete_branch(&self, branch: &str) -> Result<()> {
        self.remote.deleted.borrow_mut().push(branch.to_string());
        Ok(())
    }
}

fn id(value: &str) -> RepositoryId {
    RepositoryId::parse(value).unwrap()
}

fn audited_remote() -> (RecordingRemote, RepositorySummaries) {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let remote = RecordingRemote {
        id: id("acme/docs"),
        branches: vec![
            BranchRecord::new("main", now - Duration::days(2)),
            BranchRecord::new("legacy", now - Duration::days(700)),
            BranchRecord::new("spike", now - Duration::days(366)),
        ],
        deleted: RefCell::new(Vec::new()),
    };

    let analyzer = StaleBranchAnalyzer::new(now, 1);
    let handle = remote.repository(&id("acme/docs")).unwrap();
    let summary = analyzer.classify(&id("acme/docs"), handle.as_ref()).unwrap();
    drop(handle);

    let summaries = std::iter::once(summary).collect();
    (remote, summaries)
}

#[test]
fn test_repository_list_feeds_the_audit() {
    let list = parse_repositories("acme/docs\n\n  acme/site  \nnot a repo\n");

    let names: Vec<_> = list.repositories.iter().map(|r| r.as_str()).collect();
    assert_eq!(names, vec!["acme/docs", "acme/site"]);
    assert_eq!(list.skipped.len(), 1);
    assert_eq!(list.skipped[0].line_number, 4);
}

#[test]
fn test_selection_deletes_exactly_the_chosen_branches() {
    let (remote, summaries) = audited_remote();
    let docs = summaries.get("acme/docs").unwrap();
    assert_eq!(docs.total_branches, 3);
    assert_eq!(docs.stale_branches, vec!["legacy", "spike"]);

    let resolution = resolve("acme/docs:2, acme/docs:9, other/repo:1, acme/docs:0", &summaries);
    assert_eq!(resolution.mode, SelectionMode::Entries);
    assert_eq!(resolution.selection.branch_count(), 1);
    assert_eq!(resolution.rejected.len(), 3);
    assert!(matches!(
        resolution.rejected[0].error,
        SelectionError::OutOfRange { position: 9, available: 2, .. }
    ));
    assert!(matches!(
        resolution.rejected[1].error,
        SelectionError::UnknownRepository { .. }
    ));
    assert!(matches!(
        resolution.rejected[2].error,
        SelectionError::InvalidIndex { .. }
    ));

    let results = BranchDeleter::new(&remote).execute(&resolution.selection);

    assert!(results.errors.is_empty());
    assert_eq!(*remote.deleted.borrow(), vec!["spike"]);
    assert_eq!(results.outcome.branches_for("acme/docs").unwrap(), ["spike"]);
}

#[test]
fn test_summary_file_after_deleting_all() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("repoCleaner_summary.txt");
    let (remote, summaries) = audited_remote();

    let resolution = resolve("ALL", &summaries);
    let results = BranchDeleter::new(&remote).execute(&resolution.selection);
    write_summary(&path, &summaries, &results.outcome).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "RepoCleaner Execution Summary\n\
         ==================================================\n\
         \n\
         Repository: acme/docs\n   - Total branches: 3\n   - Stale branches: 2\n\
         \n\
         Deleted Branches:\n\
         acme/docs:\n   - legacy\n   - spike\n"
    );
}

#[test]
fn test_skipped_selection_omits_deleted_section() {
    let (_, summaries) = audited_remote();
    let resolution = resolve("  ", &summaries);

    assert_eq!(resolution.mode, SelectionMode::Skip);
    let rendered = render_summary(&summaries, &DeletionOutcome::new());
    assert!(!rendered.contains("Deleted Branches"));
}

#[test]
fn test_config_file_round_trip_through_manager() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    let mut config = default_config();
    config.audit.window_years = 2;
    ConfigManager::save_to_path(&config, &path).unwrap();

    let loaded = ConfigManager::load_with_path(Some(&path)).unwrap();
    assert_eq!(loaded.window_years(), 2);
    assert_eq!(loaded.token_env(), "GITHUB_TOKEN");
}
