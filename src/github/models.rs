// src/github/models.rs
// =============================================================================
// The subset of GitHub's issue JSON that the exporter actually reads.
//
// GitHub sends dozens of fields per issue (user, assignees, milestone,
// reactions, urls...). Serde ignores any field we don't declare, so we only
// model what ends up in a post: title, body, creation date, number, label
// names and the comment count.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::Deserialize;

/// One issue as returned by `GET /repos/{owner}/{repo}/issues`
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    /// GitHub sends `null` for issues created without a description
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Number of comments reported by the list endpoint
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Present only when the "issue" is actually a pull request
    #[serde(default)]
    pull_request: Option<IgnoredAny>,
    /// Filled by the comment enricher, never by deserialization
    #[serde(skip)]
    pub comments_list: Vec<Comment>,
}

impl Issue {
    /// Returns a copy of this issue with its comments attached
    pub fn with_comments(self, comments_list: Vec<Comment>) -> Self {
        Issue {
            comments_list,
            ..self
        }
    }

    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

/// The comments endpoint reuses the issue envelope; we only need these two
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_issue_ignores_unknown_fields() {
        let json = r#"{
            "id": 1001,
            "number": 42,
            "title": "UI bug",
            "body": "It breaks",
            "created_at": "2023-03-05T10:00:00Z",
            "comments": 2,
            "labels": [{"id": 7, "name": "bug", "color": "d73a4a", "description": null}],
            "user": {"login": "octocat"},
            "milestone": null,
            "state": "open"
        }"#;

        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.number, 42);
        assert_eq!(issue.comments, 2);
        assert_eq!(issue.labels[0].name, "bug");
        assert_eq!(issue.created_at.to_rfc3339(), "2023-03-05T10:00:00+00:00");
        assert!(issue.comments_list.is_empty());
        assert!(!issue.is_pull_request());
    }

    #[test]
    fn test_null_body_and_pull_request_marker() {
        let json = r#"{
            "id": 1,
            "number": 3,
            "title": "Add feature",
            "body": null,
            "created_at": "2021-01-01T00:00:00Z",
            "comments": 0,
            "labels": [],
            "pull_request": {"url": "https://api.github.com/repos/a/b/pulls/3"}
        }"#;

        let issue: Issue = serde_json::from_str(json).unwrap();
        assert!(issue.body.is_none());
        assert!(issue.is_pull_request());
    }

    #[test]
    fn test_with_comments_keeps_other_fields() {
        let json = r#"{"id": 5, "number": 9, "title": "t", "body": "b",
                       "created_at": "2022-06-01T12:00:00Z", "comments": 1}"#;
        let issue: Issue = serde_json::from_str(json).unwrap();

        let enriched = issue.with_comments(vec![Comment {
            id: 77,
            body: Some("hello".to_string()),
        }]);

        assert_eq!(enriched.number, 9);
        assert_eq!(enriched.comments_list.len(), 1);
        assert_eq!(enriched.comments_list[0].id, 77);
    }
}
