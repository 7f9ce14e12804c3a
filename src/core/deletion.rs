use super::model::{DeletionOutcome, DeletionSelection};
use super::remote::RemoteClient;

#[derive(Debug, Default)]
pub struct DeletionResults {
    pub outcome: DeletionOutcome,
    pub errors: Vec<String>,
}

impl DeletionResults {
    pub fn deleted_count(&self) -> usize {
        self.outcome.branch_count()
    }

    pub fn show_results(&self) {
        println!("\n🧹 Deletion Complete");
        println!("===================\n");

        if self.deleted_count() > 0 {
            println!("  ✅ Deleted {} stale branches", self.deleted_count());
        }

        if !self.errors.is_empty() {
            println!("\n⚠️  Some branches couldn't be deleted:");
            for error in &self.errors {
                println!("  • {error}");
            }
        }

        if self.deleted_count() == 0 && self.errors.is_empty() {
            println!("✨ Nothing was deleted");
        }
    }
}

/// Deletes selected branches one by one. A failure only affects its own branch.
pub struct BranchDeleter<'a> {
    client: &'a dyn RemoteClient,
}

impl<'a> BranchDeleter<'a> {
    pub fn new(client: &'a dyn RemoteClient) -> Self {
        Self { client }
    }

    pub fn execute(&self, selection: &DeletionSelection) -> DeletionResults {
        let mut results = DeletionResults::default();

        for (repository, branches) in selection.iter() {
            let handle = match self.client.repository(repository) {
                Ok(handle) => handle,
                Err(e) => {
                    let message = format!("Error processing {repository}: {e}");
                    eprintln!("  ❌ {message}");
                    tracing::warn!(repository = %repository, error = %e, "skipping deletions");
                    results.errors.push(message);
                    continue;
                }
            };

            results.outcome.ensure_repository(repository);

            for branch in branches {
                match handle.delete_branch(branch) {
                    Ok(()) => {
                        println!("  🗑️  Deleted branch: {}/{branch}", handle.full_name());
                        tracing::info!(repository = %repository, branch = %branch, "deleted branch");
                        results.outcome.push(repository, branch.clone());
                    }
                    Err(e) => {
                        let message =
                            format!("Error deleting {}/{branch}: {e}", handle.full_name());
                        eprintln!("  ❌ {message}");
                        results.errors.push(message);
                    }
                }
            }
        }

        results
    }
}
