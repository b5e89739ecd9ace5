//! Shared input handling: format entry JSON from a file or stdin.

use anyhow::{Context, Result};
use segfetch_core::{FetchOptions, MediaDescriptor};
use segfetch_core::config::SegfetchConfig;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Reads and converts the format entry at `path` (`-` = stdin).
pub(crate) async fn load_descriptor(path: &Path) -> Result<MediaDescriptor> {
    let json = if path == Path::new("-") {
        let mut s = String::new();
        tokio::io::stdin()
            .read_to_string(&mut s)
            .await
            .context("read format entry from stdin")?;
        s
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read {}", path.display()))?
    };
    let descriptor = MediaDescriptor::from_json(&json)
        .with_context(|| format!("format entry {}", path.display()))?;
    Ok(descriptor)
}

/// Fetch options for a normal or `--test` run.
pub(crate) fn fetch_options(cfg: &SegfetchConfig, test: bool) -> FetchOptions {
    FetchOptions {
        size_cap: test.then_some(cfg.test_file_size),
    }
}
