//! Release listing and baseline selection.

use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::RepoRef;
use crate::error::{GitHubError, ReleaseError};
use crate::github::classify_api_error;
use crate::version::{SincePolicy, parse_tag};

/// A published release, as returned by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub published_at: DateTime<Utc>,
}

const PER_PAGE: u8 = 100;

/// Safety limit to prevent runaway pagination.
const MAX_PAGES: u32 = 50;

/// List releases for the repository, newest first.
///
/// Drafts carry no publish timestamp and are skipped; only published
/// releases can anchor a changelog cutoff.
pub async fn fetch_releases(
    octocrab: &Octocrab,
    repo: &RepoRef,
    cancel: &CancellationToken,
) -> Result<Vec<Release>, GitHubError> {
    let repos = octocrab.repos(&repo.owner, &repo.repo);
    let handler = repos.releases();

    let mut releases = Vec::new();
    let mut page = 1u32;

    loop {
        let request = handler.list().per_page(PER_PAGE).page(page).send();

        let result = tokio::select! {
            () = cancel.cancelled() => return Err(GitHubError::Cancelled),
            result = request => result,
        };

        let release_page =
            result.map_err(|e| classify_api_error(e, repo, GitHubError::ListReleases))?;

        let has_next = release_page.next.is_some();
        if release_page.items.is_empty() {
            break;
        }

        for item in release_page.items {
            let Some(published_at) = item.published_at else {
                debug!(tag = %item.tag_name, "Skipping unpublished draft release");
                continue;
            };

            releases.push(Release {
                tag_name: item.tag_name,
                published_at,
            });
        }

        if !has_next {
            break;
        }

        page += 1;

        if page > MAX_PAGES {
            warn!(
                "Reached {}-page safety limit while listing releases for {}",
                MAX_PAGES, repo
            );
            break;
        }
    }

    Ok(releases)
}

/// Pick the baseline release: the first (newest) whose tag satisfies the
/// policy, in the host's listing order.
///
/// A tag that fails to parse as a semantic version is fatal, not skipped.
pub fn select_baseline<'a>(
    releases: &'a [Release],
    policy: &SincePolicy,
) -> Result<&'a Release, ReleaseError> {
    for release in releases {
        let version = parse_tag(&release.tag_name).map_err(ReleaseError::BadTag)?;

        if policy.matches(&version) {
            debug!(tag = %release.tag_name, "Selected baseline release");
            return Ok(release);
        }
    }

    Err(ReleaseError::NoneMatched {
        candidates: releases.len(),
    })
}
