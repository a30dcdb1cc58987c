// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things). The parsed arguments are
// turned into an ExportConfig (src/config.rs) before any work starts.
// =============================================================================

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::config::{IssueState, DEFAULT_API_URL, DEFAULT_OUTPUT_DIR};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "issue-poster",
    version,
    about = "Export GitHub issues and their comments as Jekyll posts",
    long_about = "issue-poster downloads every issue of a GitHub repository, together with its \
                  comments, and writes one post per issue into a Jekyll _posts directory."
)]
pub struct Cli {
    /// Log every request and response at debug level
    ///
    /// RUST_LOG, when set, takes precedence over this flag
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all issues of a repository and write them as posts
    ///
    /// Example: issue-poster export irlogcat/android-faq --output-dir _posts
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Repository to export: owner/repo or https://github.com/owner/repo
    pub repo: String,

    /// GitHub token sent in the Authorization header
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Number of issues requested per page (1-100)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: u32,

    /// Which issues to export
    #[arg(long, value_enum, default_value_t = IssueState::Open)]
    pub state: IssueState,

    /// Directory the posts are written to (must exist unless --create-output-dir)
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Create the output directory if it is missing
    #[arg(long)]
    pub create_output_dir: bool,

    /// Base URL of the GitHub REST API (for GitHub Enterprise)
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// How many comment requests may be in flight at once
    #[arg(long, default_value_t = 1, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub comment_concurrency: usize,

    /// Page through comments instead of taking only the first response
    ///
    /// Without this flag, issues with more comments than GitHub's default
    /// page size (30) lose the extra comments.
    #[arg(long)]
    pub paginate_comments: bool,

    /// Leave out pull requests (GitHub lists them as issues too)
    #[arg(long)]
    pub skip_pull_requests: bool,

    /// Fetch and render everything but do not write any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why a subcommand for a single action?
//    - It leaves room for more commands without breaking existing scripts
//    - `issue-poster export ...` reads well in a CI job
//
// 2. What does `env = "GITHUB_TOKEN"` do?
//    - If --token is not given, clap reads the environment variable
//    - hide_env_values keeps the token out of --help output
//
// 3. Why is api_url a Url and not a String?
//    - clap parses it with Url's FromStr implementation
//    - A typo like "htps:/api" is rejected before any request is made
// -----------------------------------------------------------------------------
