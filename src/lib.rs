//! release-notes - a CLI tool that generates a markdown changelog of merged
//! pull requests since the last qualifying release.
//!
//! # Overview
//!
//! release-notes queries the GitHub API twice: once to pick the baseline
//! release for a since policy (`any`, `patch`, `minor`, `major`, or an
//! explicit version), and once to stream closed pull requests in
//! update-time order, keeping those merged after the baseline's publish
//! timestamp.

pub mod changelog;
pub mod config;
pub mod error;
pub mod github;
pub mod version;

// Re-export commonly used types
pub use changelog::format_pr_line;
pub use config::RepoRef;
pub use error::{GitHubError, PolicyError, ReleaseError, VersionError};
pub use github::{PullRequest, Release};
pub use version::SincePolicy;
