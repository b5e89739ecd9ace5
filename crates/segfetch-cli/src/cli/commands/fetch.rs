//! Fetch command: retrieve a format entry into the output file.

use super::input::{fetch_options, load_descriptor};
use anyhow::{Context, Result};
use segfetch_core::config::SegfetchConfig;
use segfetch_core::retry::{run_with_retry, RetryPolicy};
use segfetch_core::{CurlClient, ProgressReport, SegmentedFetcher};
use std::path::Path;

/// Whole-fetch retry policy: `--retries` wins, then config.toml `[retry]`,
/// otherwise a single attempt.
pub(crate) fn select_policy(cfg: &SegfetchConfig, retries: Option<u32>) -> RetryPolicy {
    match (retries, &cfg.retry) {
        (Some(n), _) => RetryPolicy {
            max_attempts: n.max(1),
            ..cfg.retry_policy()
        },
        (None, Some(retry)) => retry.to_policy(),
        (None, None) => RetryPolicy::once(),
    }
}

/// Fetch the format entry at `format` into `output` and print the finished report as JSON.
pub async fn run_fetch(
    cfg: &SegfetchConfig,
    format: &Path,
    output: &Path,
    test: bool,
    retries: Option<u32>,
) -> Result<()> {
    let descriptor = load_descriptor(format).await?;
    let options = fetch_options(cfg, test);
    let policy = select_policy(cfg, retries);
    let curl_opts = cfg.curl_options();
    let destination = output.to_path_buf();

    tracing::info!(
        output = %destination.display(),
        strategy = descriptor.strategy.name(),
        test,
        max_attempts = policy.max_attempts,
        "fetch requested"
    );

    let report = tokio::task::spawn_blocking(move || {
        let mut fetcher = SegmentedFetcher::new(CurlClient::new(curl_opts));
        let mut finished: Option<ProgressReport> = None;
        run_with_retry(&policy, |attempt| {
            if attempt > 1 {
                tracing::info!(attempt, "restarting fetch from the beginning");
            }
            fetcher.fetch(
                &descriptor,
                &destination,
                options,
                &mut |r: &ProgressReport| finished = Some(r.clone()),
            )
        })?;
        Ok::<_, segfetch_core::FetchError>(finished)
    })
    .await
    .context("fetch task panicked")?
    .with_context(|| format!("fetch into {}", output.display()))?;

    if let Some(report) = report {
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
