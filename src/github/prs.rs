//! Merged-PR collection via octocrab.

use chrono::{DateTime, Utc};
use octocrab::{Octocrab, params};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::RepoRef;
use crate::error::GitHubError;
use crate::github::classify_api_error;

/// A closed pull request, trimmed to the fields the changelog needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub updated_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

const PER_PAGE: u8 = 20;

/// Safety limit to prevent runaway pagination.
const MAX_PAGES: u32 = 50;

/// Collect pull requests merged strictly after `cutoff`.
///
/// Pages closed PRs in the host's update-time descending order. Once an
/// item updated before the cutoff appears, every remaining item and page
/// can only be older (merge time never exceeds update time), so collection
/// returns right there. The result keeps the host's order.
pub async fn collect_merged_since(
    octocrab: &Octocrab,
    repo: &RepoRef,
    cutoff: DateTime<Utc>,
    cancel: &CancellationToken,
) -> Result<Vec<PullRequest>, GitHubError> {
    let pulls = octocrab.pulls(&repo.owner, &repo.repo);

    let mut collected = Vec::new();
    let mut page = 1u32;

    loop {
        let request = pulls
            .list()
            .state(params::State::Closed)
            .sort(params::pulls::Sort::Updated)
            .direction(params::Direction::Descending)
            .per_page(PER_PAGE)
            .page(page)
            .send();

        let result = tokio::select! {
            () = cancel.cancelled() => return Err(GitHubError::Cancelled),
            result = request => result,
        };

        let pr_page =
            result.map_err(|e| classify_api_error(e, repo, GitHubError::ListPullRequests))?;

        let has_next = pr_page.next.is_some();
        if pr_page.items.is_empty() {
            break;
        }

        for pr in pr_page.items {
            // The list endpoint always sets updated_at.
            let Some(updated_at) = pr.updated_at else {
                continue;
            };

            if updated_at < cutoff {
                debug!(
                    number = pr.number,
                    "Reached pull requests last updated before the cutoff"
                );
                return Ok(collected);
            }

            if let Some(merged_at) = pr.merged_at {
                if merged_at > cutoff {
                    collected.push(PullRequest {
                        number: pr.number,
                        title: pr.title.unwrap_or_default(),
                        updated_at,
                        merged_at: Some(merged_at),
                    });
                }
            }
        }

        if !has_next {
            break;
        }

        page += 1;

        if page > MAX_PAGES {
            warn!(
                "Reached {}-page safety limit while listing pull requests for {}",
                MAX_PAGES, repo
            );
            break;
        }
    }

    Ok(collected)
}
