pub mod test_helpers {
    use crate::core::model::{BranchRecord, RepositoryId, RepositorySummary};
    use crate::core::remote::{RemoteClient, RemoteRepository};
    use crate::utils::{CleanerError, Result};
    use chrono::{DateTime, Duration, Utc};
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    pub fn repo_id(id: &str) -> RepositoryId {
        RepositoryId::parse(id).expect("valid repository id in test")
    }

    pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
        now - Duration::days(days)
    }

    pub fn summary(id: &str, total_branches: usize, stale: &[&str]) -> RepositorySummary {
        RepositorySummary {
            repository: repo_id(id),
            total_branches,
            stale_branches: stale.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// In-memory stand-in for the hosting service. Deletions mutate its state.
    #[derive(Debug, Default)]
    pub struct MockRemote {
        branches: RefCell<HashMap<String, Vec<BranchRecord>>>,
        unreachable: HashSet<String>,
        failing_listings: HashSet<String>,
        failing_deletes: HashSet<(String, String)>,
    }

    impl MockRemote {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_repository(self, id: &str, branches: Vec<BranchRecord>) -> Self {
            self.branches.borrow_mut().insert(id.to_string(), branches);
            self
        }

        pub fn unreachable(mut self, id: &str) -> Self {
            self.unreachable.insert(id.to_string());
            self
        }

        pub fn failing_listing(mut self, id: &str) -> Self {
            self.failing_listings.insert(id.to_string());
            self
        }

        pub fn failing_delete(mut self, id: &str, branch: &str) -> Self {
            self.failing_deletes
                .insert((id.to_string(), branch.to_string()));
            self
        }

        pub fn branch_names(&self, id: &str) -> Vec<String> {
            self.branches
                .borrow()
                .get(id)
                .map(|branches| branches.iter().map(|b| b.name.clone()).collect())
                .unwrap_or_default()
        }
    }

    impl RemoteClient for MockRemote {
        fn repository(&self, id: &RepositoryId) -> Result<Box<dyn RemoteRepository + '_>> {
            let known = self.branches.borrow().contains_key(id.as_str());
            if self.unreachable.contains(id.as_str()) || !known {
                return Err(CleanerError::repository_access(
                    id.as_str(),
                    "GitHub API returned 404: Not Found",
                ));
            }

            Ok(Box::new(MockRepository {
                remote: self,
                full_name: id.to_string(),
            }))
        }
    }

    struct MockRepository<'a> {
        remote: &'a MockRemote,
        full_name: String,
    }

    impl RemoteRepository for MockRepository<'_> {
        fn full_name(&self) -> &str {
            &self.full_name
        }

        fn branches(&self) -> Result<Vec<BranchRecord>> {
            if self.remote.failing_listings.contains(&self.full_name) {
                return Err(CleanerError::api(500, "Server Error"));
            }

            Ok(self
                .remote
                .branches
                .borrow()
                .get(&self.full_name)
                .cloned()
                .unwrap_or_default())
        }

        fn delete_branch(&self, branch: &str) -> Result<()> {
            let key = (self.full_name.clone(), branch.to_string());
            if self.remote.failing_deletes.contains(&key) {
                return Err(CleanerError::api(422, "Reference update failed"));
            }

            let mut all_branches = self.remote.branches.borrow_mut();
            let branches = all_branches.entry(self.full_name.clone()).or_default();
            match branches.iter().position(|b| b.name == branch) {
                Some(position) => {
                    branches.remove(position);
                    Ok(())
                }
                None => Err(CleanerError::api(422, "Reference does not exist")),
            }
        }
    }
}
