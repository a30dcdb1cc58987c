// src/export.rs
// =============================================================================
// One export run, start to finish:
//
//   fetch all issues -> (drop pull requests) -> attach comments -> write posts
//
// Nothing is written until every request has succeeded, so an API error
// leaves the output directory untouched.
// =============================================================================

use tracing::info;

use crate::config::ExportConfig;
use crate::error::ExportResult;
use crate::github::{self, GithubClient};
use crate::render::{self, ExportedPost};

pub async fn run_export(config: &ExportConfig) -> ExportResult<Vec<ExportedPost>> {
    let client = GithubClient::new(config)?;

    let mut issues = github::fetch_all_issues(&client, config).await?;

    if config.skip_pull_requests {
        let before = issues.len();
        issues.retain(|issue| !issue.is_pull_request());
        info!(skipped = before - issues.len(), "Skipped pull requests");
    }

    let issues = github::enrich_issues(&client, config, issues).await?;

    render::write_posts(&issues, config).await
}
