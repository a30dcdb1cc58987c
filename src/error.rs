// src/error.rs
// =============================================================================
// Error type shared by the fetch and render stages.
//
// Every failure is fatal: nothing is retried or recovered locally. Errors
// bubble up with `?` until they reach `run()` in main.rs, which logs them
// and exits with a non-zero code.
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// Connection-level failure (DNS, TLS, reset, timeout...)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-2xx status
    #[error("GitHub API error at {url}: {} {message}", .status.as_u16())]
    Api {
        url: String,
        status: StatusCode,
        message: String,
    },

    /// The body did not match the shape we expected
    #[error("Malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not write {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid repository '{0}': expected owner/repo or a github.com URL")]
    InvalidRepository(String),

    #[error("GitHub token contains characters not allowed in an HTTP header")]
    InvalidToken,
}

pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status_and_message() {
        let err = ExportError::Api {
            url: "https://api.github.com/repos/a/b/issues".to_string(),
            status: StatusCode::NOT_FOUND,
            message: "Not Found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("Not Found"));
    }

    #[test]
    fn test_filesystem_error_names_path() {
        let err = ExportError::Filesystem {
            path: PathBuf::from("_posts/2023-03-05-42.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("_posts/2023-03-05-42.html"));
    }
}
