//! release-notes - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use release_notes::changelog::format_pr_line;
use release_notes::config::RepoRef;
use release_notes::error::GitHubError;
use release_notes::github::{auth, collect_merged_since, fetch_releases, select_baseline};
use release_notes::version::SincePolicy;

/// Generate a markdown changelog of merged pull requests since last release.
#[derive(Parser, Debug)]
#[command(name = "release-notes")]
#[command(about = "Generate a markdown changelog of merged pull requests since last release")]
#[command(version)]
struct Cli {
    /// GitHub organization or user that owns the repository
    org: String,

    /// Repository name
    repo: String,

    /// Personal GitHub token, to raise the anonymous API rate limit
    #[arg(long)]
    token: Option<String>,

    /// The previous release up to which PRs are collected (one of any,
    /// patch, minor, major, or a valid semver)
    #[arg(long, default_value = "patch")]
    since: SincePolicy,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr; stdout carries only the changelog lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let repo = RepoRef::new(cli.org, cli.repo);

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_cancel.cancel();
    });

    match run(&repo, &cli.since, cli.token, &cancel).await {
        Err(e) if is_cancelled(&e) => {
            info!("Aborted.");
            Ok(())
        }
        other => other,
    }
}

async fn run(
    repo: &RepoRef,
    since: &SincePolicy,
    token: Option<String>,
    cancel: &CancellationToken,
) -> Result<()> {
    let token = auth::resolve_token(token.as_deref());
    let octocrab = auth::build_client(token).context("Failed to set up the GitHub client")?;

    let releases = fetch_releases(&octocrab, repo, cancel)
        .await
        .with_context(|| format!("Failed to list releases for {repo}"))?;

    let baseline = select_baseline(&releases, since)
        .with_context(|| format!("No usable baseline release for {repo}"))?;

    eprintln!(
        "Collecting pull requests that were merged since the last release: {} ({})",
        baseline.tag_name, baseline.published_at
    );

    let pull_requests = collect_merged_since(&octocrab, repo, baseline.published_at, cancel)
        .await
        .with_context(|| format!("Failed to list pull requests for {repo}"))?;

    for pr in &pull_requests {
        println!("{}", format_pr_line(pr, repo));
    }

    Ok(())
}

/// Resolve once an interrupt or termination signal arrives.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!("Could not install SIGTERM handler: {e}");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Ctrl-C is a clean abort, not a failure.
fn is_cancelled(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| matches!(cause.downcast_ref::<GitHubError>(), Some(GitHubError::Cancelled)))
}
