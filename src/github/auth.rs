//! GitHub client construction and token resolution.
//!
//! Token order:
//! 1. The `--token` flag
//! 2. `GITHUB_TOKEN` environment variable
//! 3. `GH_TOKEN` environment variable
//! 4. Anonymous access (lower rate limit)

use std::env;

use octocrab::Octocrab;
use tracing::debug;

use crate::error::GitHubError;

/// Resolve the API token to use, if any.
///
/// An explicit flag value wins over the environment. `None` means the run
/// proceeds anonymously.
pub fn resolve_token(flag: Option<&str>) -> Option<String> {
    if let Some(token) = flag {
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }

    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(token) = env::var(var) {
            if !token.is_empty() {
                debug!(source = var, "Using API token from environment");
                return Some(token);
            }
        }
    }

    None
}

/// Build an octocrab client, authenticated when a token is available.
pub fn build_client(token: Option<String>) -> Result<Octocrab, GitHubError> {
    let builder = Octocrab::builder();

    let builder = match token {
        Some(token) => builder.personal_token(token),
        None => builder,
    };

    builder
        .build()
        .map_err(|e| GitHubError::BuildClient(Box::new(e)))
}
