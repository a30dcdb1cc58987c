// src/github/repo.rs
// =============================================================================
// Parsing the repository argument into an owner/name pair.
//
// Supported formats:
//   - owner/repo
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo
// =============================================================================

use std::fmt;

use crate::error::{ExportError, ExportResult};

/// A repository on GitHub, identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepoRef {
            owner: owner.into(),
            name: name.into(),
        }
    }

    // Example:
    //   "https://github.com/rust-lang/rust" -> RepoRef { owner: "rust-lang", name: "rust" }
    pub fn parse(input: &str) -> ExportResult<Self> {
        let invalid = || ExportError::InvalidRepository(input.to_string());

        // Remove common prefixes
        let url = input
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.");

        let path = match url.strip_prefix("github.com/") {
            Some(path) => path,
            // Anything else that looks like a host is not GitHub
            None if url.contains("://") => return Err(invalid()),
            None => url,
        };

        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        if parts.len() < 2 || parts[0].contains('.') {
            return Err(invalid());
        }

        let owner = parts[0];
        let name = parts[1].trim_end_matches(".git");
        if name.is_empty() {
            return Err(invalid());
        }

        Ok(RepoRef::new(owner, name))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_url() {
        let repo = RepoRef::parse("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(repo, RepoRef::new("rust-lang", "rust"));
    }

    #[test]
    fn test_parse_github_url_with_git() {
        let repo = RepoRef::parse("https://github.com/user/repo.git").unwrap();
        assert_eq!(repo.owner, "user");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_owner_slash_repo() {
        let repo = RepoRef::parse("irlogcat/android-faq").unwrap();
        assert_eq!(repo.to_string(), "irlogcat/android-faq");
    }

    #[test]
    fn test_parse_url_with_extra_path() {
        let repo = RepoRef::parse("github.com/octo/hello.world/issues").unwrap();
        assert_eq!(repo, RepoRef::new("octo", "hello.world"));
    }

    #[test]
    fn test_parse_invalid_url() {
        assert!(RepoRef::parse("https://gitlab.com/user/repo").is_err());
        assert!(RepoRef::parse("just-a-name").is_err());
        assert!(RepoRef::parse("ftp://github.org/a/b").is_err());
    }
}
