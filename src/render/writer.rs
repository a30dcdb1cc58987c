// src/render/writer.rs
// =============================================================================
// Writes rendered posts to the output directory.
//
// Files are written one after another, in issue order. An existing file is
// overwritten. The first filesystem error stops the run; posts written
// before it stay on disk.
// =============================================================================

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use super::post::{post_path, render_post};
use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};
use crate::github::Issue;

/// One line of the export summary
#[derive(Debug, Clone, Serialize)]
pub struct ExportedPost {
    pub number: u64,
    pub title: String,
    pub comments: usize,
    pub path: PathBuf,
}

pub async fn write_posts(issues: &[Issue], config: &ExportConfig) -> ExportResult<Vec<ExportedPost>> {
    let dir = &config.output_dir;

    if config.create_output_dir && !config.dry_run {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| ExportError::Filesystem {
                path: dir.clone(),
                source,
            })?;
    }

    let mut posts = Vec::with_capacity(issues.len());

    for issue in issues {
        let path = post_path(dir, issue);
        let content = render_post(issue);

        if config.dry_run {
            debug!(path = %path.display(), bytes = content.len(), "Dry run, not writing");
        } else {
            tokio::fs::write(&path, content)
                .await
                .map_err(|source| ExportError::Filesystem {
                    path: path.clone(),
                    source,
                })?;
            debug!(path = %path.display(), "Wrote post");
        }

        posts.push(ExportedPost {
            number: issue.number,
            title: issue.title.clone(),
            comments: issue.comments_list.len(),
            path,
        });
    }

    if !config.dry_run {
        info!(count = posts.len(), dir = %dir.display(), "Wrote posts");
    }

    Ok(posts)
}
