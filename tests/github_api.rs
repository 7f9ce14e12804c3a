//! Request-level tests for the GitHub client.
//!
//! The client is blocking, so each test owns a small tokio runtime that only
//! drives the wiremock server; requests are issued from the test thread.

use chrono::{TimeZone, Utc};
use repo_cleaner::config::defaults::default_github_config;
use repo_cleaner::core::github::GitHubClient;
use repo_cleaner::core::model::RepositoryId;
use repo_cleaner::core::remote::RemoteClient;
use repo_cleaner::CleanerError;
use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

struct GitHubStub {
    server: MockServer,
    runtime: Runtime,
}

impl GitHubStub {
    fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }

    fn client(&self) -> GitHubClient {
        let mut settings = default_github_config();
        settings.api_url = self.server.uri();
        GitHubClient::new(&settings, TOKEN).unwrap()
    }
}

fn branch_page(names: impl IntoIterator<Item = String>) -> Value {
    Value::Array(
        names
            .into_iter()
            .map(|name| {
                let sha = format!("sha-{}", name.replace('/', "-"));
                json!({ "name": name, "commit": { "sha": sha } })
            })
            .collect(),
    )
}

fn branches_page_mock(page: &str, body: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path("/repos/acme/docs/branches"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

fn repository_mock() -> Mock {
    Mock::given(method("GET"))
        .and(path("/repos/acme/docs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "full_name": "acme/docs", "default_branch": "main" })),
        )
}

fn docs() -> RepositoryId {
    RepositoryId::parse("acme/docs").unwrap()
}

#[test]
fn test_full_page_fetches_the_next_page() {
    let stub = GitHubStub::start();
    stub.mount(
        branches_page_mock("1", branch_page((0..100).map(|i| format!("b{i:03}")))).expect(1),
    );
    stub.mount(branches_page_mock("2", branch_page(["tail".to_string()])).expect(1));
    stub.mount(branches_page_mock("3", json!([])).expect(0));

    let branches = stub.client().list_branches("acme/docs").unwrap();

    assert_eq!(branches.len(), 101);
    assert_eq!(branches[0].name, "b000");
    assert_eq!(branches[99].name, "b099");
    assert_eq!(branches[100].name, "tail");
    assert_eq!(branches[100].commit.sha, "sha-tail");
    stub.verify();
}

#[test]
fn test_short_page_ends_the_walk() {
    let stub = GitHubStub::start();
    stub.mount(
        branches_page_mock("1", branch_page(["main".to_string(), "dev".to_string()])).expect(1),
    );
    stub.mount(branches_page_mock("2", json!([])).expect(0));

    let branches = stub.client().list_branches("acme/docs").unwrap();

    let names: Vec<_> = branches.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["main", "dev"]);
    stub.verify();
}

#[test]
fn test_branches_carry_tip_committer_dates() {
    let stub = GitHubStub::start();
    stub.mount(
        Mock::given(method("GET"))
            .and(path("/repos/acme/docs"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("accept", "application/vnd.github+json"))
            .and(header("x-github-api-version", "2022-11-28"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "full_name": "acme/docs" })))
            .expect(1),
    );
    stub.mount(branches_page_mock(
        "1",
        branch_page(["main".to_string(), "feature/old".to_string()]),
    ));
    stub.mount(
        Mock::given(method("GET"))
            .and(path("/repos/acme/docs/commits/sha-main"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sha": "sha-main",
                "commit": { "committer": { "name": "a", "date": "2024-05-30T10:00:00Z" } }
            })))
            .expect(1),
    );
    stub.mount(
        Mock::given(method("GET"))
            .and(path("/repos/acme/docs/commits/sha-feature-old"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sha": "sha-feature-old",
                "commit": { "committer": { "name": "b", "date": "2021-01-02T03:04:05+02:00" } }
            })))
            .expect(1),
    );

    let client = stub.client();
    let handle = client.repository(&docs()).unwrap();
    let branches = handle.branches().unwrap();

    assert_eq!(handle.full_name(), "acme/docs");
    assert_eq!(branches.len(), 2);
    assert_eq!(branches[0].name, "main");
    assert_eq!(
        branches[0].last_commit,
        Utc.with_ymd_and_hms(2024, 5, 30, 10, 0, 0).unwrap()
    );
    assert_eq!(branches[1].name, "feature/old");
    assert_eq!(
        branches[1].last_commit,
        Utc.with_ymd_and_hms(2021, 1, 2, 1, 4, 5).unwrap()
    );
    stub.verify();
}

#[test]
fn test_commit_without_committer_fails_the_listing() {
    let stub = GitHubStub::start();
    stub.mount(repository_mock());
    stub.mount(branches_page_mock("1", branch_page(["main".to_string()])));
    stub.mount(
        Mock::given(method("GET"))
            .and(path("/repos/acme/docs/commits/sha-main"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "sha": "sha-main", "commit": { "committer": null } })),
            ),
    );

    let client = stub.client();
    let handle = client.repository(&docs()).unwrap();

    assert!(matches!(
        handle.branches(),
        Err(CleanerError::RepositoryAccess { .. })
    ));
}

#[test]
fn test_delete_targets_the_heads_ref() {
    let stub = GitHubStub::start();
    stub.mount(repository_mock());
    stub.mount(
        Mock::given(method("DELETE"))
            .and(path("/repos/acme/docs/git/refs/heads/feature/login"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1),
    );

    let client = stub.client();
    let handle = client.repository(&docs()).unwrap();

    handle.delete_branch("feature/login").unwrap();
    stub.verify();
}

#[test]
fn test_failed_delete_maps_status_and_message() {
    let stub = GitHubStub::start();
    stub.mount(repository_mock());
    stub.mount(
        Mock::given(method("DELETE"))
            .and(path("/repos/acme/docs/git/refs/heads/gone"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "Reference does not exist",
                "documentation_url": "https://docs.github.com/rest"
            }))),
    );

    let client = stub.client();
    let handle = client.repository(&docs()).unwrap();

    match handle.delete_branch("gone") {
        Err(CleanerError::Api { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "Reference does not exist");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[test]
fn test_unknown_repository_is_an_access_error() {
    let stub = GitHubStub::start();
    stub.mount(
        Mock::given(method("GET"))
            .and(path("/repos/acme/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" }))),
    );

    let client = stub.client();
    let result = client.repository(&RepositoryId::parse("acme/missing").unwrap());

    match result {
        Err(CleanerError::RepositoryAccess { repository, message }) => {
            assert_eq!(repository, "acme/missing");
            assert_eq!(message, "GitHub API returned 404: Not Found");
        }
        Err(other) => panic!("expected a repository access error, got {other:?}"),
        Ok(_) => panic!("expected a repository access error"),
    }
}
