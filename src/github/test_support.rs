// src/github/test_support.rs
// Helpers shared by the tests that talk to a wiremock server.

use serde_json::{json, Value};
use url::Url;

use crate::config::ExportConfig;
use crate::github::RepoRef;

/// Configuration for octo/hello pointing at a mock server
pub fn test_config(server_uri: &str) -> ExportConfig {
    let api_url = Url::parse(server_uri).expect("mock server uri is a valid url");
    ExportConfig::new(RepoRef::new("octo", "hello"), "secret", api_url)
}

/// Minimal issue object as the list endpoint returns it
pub fn issue_json(number: u64, comments: u32) -> Value {
    json!({
        "id": 1000 + number,
        "number": number,
        "title": format!("Issue {}", number),
        "body": format!("Body of issue {}", number),
        "created_at": "2023-03-05T10:00:00Z",
        "comments": comments,
        "labels": [],
        "state": "open",
        "user": {"login": "octocat"}
    })
}

pub fn comment_json(id: u64, body: &str) -> Value {
    json!({
        "id": id,
        "body": body,
        "user": {"login": "octocat"},
        "created_at": "2023-03-06T08:00:00Z"
    })
}
