//! GitHub API operations using octocrab.

pub mod auth;
pub mod prs;
pub mod releases;

pub use auth::{build_client, resolve_token};
pub use prs::{PullRequest, collect_merged_since};
pub use releases::{Release, fetch_releases, select_baseline};

use crate::config::RepoRef;
use crate::error::GitHubError;

/// Map an octocrab error to the matching taxonomy variant.
///
/// Octocrab buries the HTTP status in the error text, so rate limiting and
/// missing repositories are recognized from both the Display and Debug
/// renderings.
pub(crate) fn classify_api_error(
    err: octocrab::Error,
    repo: &RepoRef,
    wrap: fn(Box<octocrab::Error>) -> GitHubError,
) -> GitHubError {
    let display = err.to_string();
    let debug = format!("{err:?}");

    if display.to_lowercase().contains("rate limit") || debug.to_lowercase().contains("rate limit")
    {
        return GitHubError::RateLimited;
    }

    if display.contains("Not Found") || debug.contains("Not Found") {
        return GitHubError::RepositoryNotFound {
            owner: repo.owner.clone(),
            repo: repo.repo.clone(),
        };
    }

    wrap(Box::new(err))
}
