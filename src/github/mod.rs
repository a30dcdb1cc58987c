// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// - client: authenticated reqwest client and the page-walking loop
// - fetch: issue listing and comment enrichment
// - models: the fields of issues and comments we actually use
// - repo: parsing "owner/repo" and github.com URLs
// =============================================================================

mod client;
mod fetch;
mod models;
mod repo;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::GithubClient;
pub use fetch::{enrich_issues, fetch_all_issues};
pub use models::Issue;
pub use repo::RepoRef;
