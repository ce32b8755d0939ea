//! Markdown rendering of collected pull requests.

use crate::config::RepoRef;
use crate::github::PullRequest;

/// Render a pull request as a markdown changelog list item:
/// `* <title> [#<number>](https://github.com/<org>/<repo>/pull/<number>)`
pub fn format_pr_line(pr: &PullRequest, repo: &RepoRef) -> String {
    format!(
        "* {} [#{}](https://github.com/{}/{}/pull/{})",
        pr.title, pr.number, repo.owner, repo.repo, pr.number
    )
}
