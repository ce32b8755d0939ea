//! Error types for release-notes modules using thiserror.

use thiserror::Error;

/// Errors from version string parsing.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("'{0}' does not look like a version string: {1}")]
    ParseFailed(String, #[source] semver::Error),
}

/// Errors from interpreting the `--since` value.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error(
        "Invalid since policy '{0}': expected one of any, patch, minor, major, or a semantic version"
    )]
    Invalid(String, #[source] VersionError),
}

/// Errors from selecting the baseline release.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Cannot evaluate release against the since policy: {0}")]
    BadTag(#[source] VersionError),

    #[error("No release matches the since policy ({candidates} published release(s) checked)")]
    NoneMatched { candidates: usize },
}

/// Errors from GitHub API operations.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Failed to build GitHub client: {0}")]
    BuildClient(#[source] Box<octocrab::Error>),

    #[error("Failed to list releases: {0}")]
    ListReleases(#[source] Box<octocrab::Error>),

    #[error("Failed to list pull requests: {0}")]
    ListPullRequests(#[source] Box<octocrab::Error>),

    #[error(
        "Rate limited by GitHub API. Pass --token or set GITHUB_TOKEN to raise the anonymous limit"
    )]
    RateLimited,

    #[error("Repository not found: {owner}/{repo}")]
    RepositoryNotFound { owner: String, repo: String },

    #[error("Operation cancelled")]
    Cancelled,
}
