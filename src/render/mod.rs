// src/render/mod.rs
// =============================================================================
// This module turns issues into Jekyll posts and writes them to disk.
//
// Submodules:
// - post: pure rendering of one issue and its file name
// - writer: filesystem side, one file per issue
// =============================================================================

mod post;
mod writer;

pub use writer::{write_posts, ExportedPost};
