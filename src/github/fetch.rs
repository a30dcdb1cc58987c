// src/github/fetch.rs
// =============================================================================
// Fetching the issues of one repository and attaching their comments.
//
// Strategy:
// - Walk /repos/{owner}/{repo}/issues page by page until an empty page
// - For every issue whose `comments` count is > 0, GET its comments once
//   (or page through them with --paginate-comments)
// - Issues with no comments never cause a comments request
//
// Comment fetches are independent, so they run on a bounded stream. The
// stream is ordered: results come back in fetch order whatever the
// concurrency.
// =============================================================================

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, warn};

use super::client::GithubClient;
use super::models::{Comment, Issue};
use super::repo::RepoRef;
use crate::config::ExportConfig;
use crate::error::ExportResult;

fn issues_path(repo: &RepoRef) -> String {
    format!("/repos/{}/{}/issues", repo.owner, repo.name)
}

fn comments_path(repo: &RepoRef, number: u64) -> String {
    format!("{}/{}/comments", issues_path(repo), number)
}

/// Fetches every issue of the configured repository, in server order
pub async fn fetch_all_issues(
    client: &GithubClient,
    config: &ExportConfig,
) -> ExportResult<Vec<Issue>> {
    let extra = [("state", config.state.as_str().to_string())];
    let issues: Vec<Issue> = client
        .fetch_all_pages(&issues_path(&config.repo), config.page_size, &extra)
        .await?;

    info!(repo = %config.repo, count = issues.len(), "Fetched issues");
    Ok(issues)
}

pub async fn fetch_comments(
    client: &GithubClient,
    config: &ExportConfig,
    number: u64,
) -> ExportResult<Vec<Comment>> {
    let path = comments_path(&config.repo, number);

    if config.paginate_comments {
        client.fetch_all_pages(&path, config.page_size, &[]).await
    } else {
        client.get_json(&path, &[]).await
    }
}

/// Attaches comments to `issue` when it reports any; otherwise returns it as is
pub async fn enrich_issue(
    client: &GithubClient,
    config: &ExportConfig,
    issue: Issue,
) -> ExportResult<Issue> {
    if issue.comments == 0 {
        return Ok(issue);
    }

    let comments = fetch_comments(client, config, issue.number).await?;
    debug!(issue = issue.number, count = comments.len(), "Fetched comments");

    if comments.len() < issue.comments as usize && !config.paginate_comments {
        warn!(
            issue = issue.number,
            reported = issue.comments,
            received = comments.len(),
            "Some comments were not returned; use --paginate-comments to fetch them all"
        );
    }

    Ok(issue.with_comments(comments))
}

/// Enriches every issue, keeping the input order. Stops at the first error.
pub async fn enrich_issues(
    client: &GithubClient,
    config: &ExportConfig,
    issues: Vec<Issue>,
) -> ExportResult<Vec<Issue>> {
    stream::iter(issues)
        .map(|issue| enrich_issue(client, config, issue))
        .buffered(config.comment_concurrency.max(1))
        .try_collect()
        .await
}
