// src/config.rs
// =============================================================================
// Explicit configuration for one export run.
//
// Everything the fetcher and the writer need is carried in ExportConfig,
// which is built once from the command-line arguments in main.rs and then
// passed down by reference. Nothing is read from global state.
// =============================================================================

use std::path::PathBuf;

use clap::ValueEnum;
use url::Url;

use crate::cli::ExportArgs;
use crate::error::ExportResult;
use crate::github::RepoRef;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OUTPUT_DIR: &str = "_posts";
/// GitHub caps `per_page` at 100
pub const MAX_PAGE_SIZE: u32 = 100;

/// Which issues the list endpoint should return (`state` query parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IssueState {
    Open,
    Closed,
    All,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::All => "all",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub repo: RepoRef,
    pub token: String,
    pub page_size: u32,
    pub state: IssueState,
    pub api_url: Url,
    pub output_dir: PathBuf,
    pub create_output_dir: bool,
    /// Upper bound on comment requests in flight at once
    pub comment_concurrency: usize,
    pub paginate_comments: bool,
    pub skip_pull_requests: bool,
    pub dry_run: bool,
}

impl ExportConfig {
    /// Configuration with every optional setting at its default
    pub fn new(repo: RepoRef, token: impl Into<String>, api_url: Url) -> Self {
        ExportConfig {
            repo,
            token: token.into(),
            page_size: MAX_PAGE_SIZE,
            state: IssueState::Open,
            api_url,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            create_output_dir: false,
            comment_concurrency: 1,
            paginate_comments: false,
            skip_pull_requests: false,
            dry_run: false,
        }
    }

    pub fn from_args(args: ExportArgs) -> ExportResult<Self> {
        let repo = RepoRef::parse(&args.repo)?;

        Ok(ExportConfig {
            page_size: args.per_page,
            state: args.state,
            output_dir: args.output_dir,
            create_output_dir: args.create_output_dir,
            comment_concurrency: args.comment_concurrency,
            paginate_comments: args.paginate_comments,
            skip_pull_requests: args.skip_pull_requests,
            dry_run: args.dry_run,
            ..ExportConfig::new(repo, args.token, args.api_url)
        })
    }
}
