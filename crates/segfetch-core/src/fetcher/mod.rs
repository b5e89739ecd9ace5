//! Segmented media fetch orchestration.
//!
//! Consumes a `MediaDescriptor`, picks the retrieval strategy once, issues
//! GETs strictly in order through a `RangeFetch` client and appends each body
//! to `<destination>.part`. On success the temp file is synced, renamed onto
//! `destination` and a single `finished` progress event is emitted. Any error
//! aborts the fetch and leaves the `.part` file in place.

mod byte_ranges;
mod plan;
mod progress;
mod segments;

pub use plan::FetchPlan;
pub use progress::{NoProgress, ProgressHook, ProgressReport, ProgressStatus};

use crate::client::{FetchRequest, RangeFetch};
use crate::error::FetchError;
use crate::manifest::{FetchOptions, MediaDescriptor};
use crate::storage::{self, StorageWriter};
use std::path::Path;
use std::time::Instant;

/// Drives one fetch at a time over a borrowed or owned `RangeFetch` client.
pub struct SegmentedFetcher<C> {
    client: C,
}

impl<C: RangeFetch> SegmentedFetcher<C> {
    pub fn new(client: C) -> Self {
        SegmentedFetcher { client }
    }

    pub fn into_client(self) -> C {
        self.client
    }

    /// Fetches `descriptor` into `destination` and returns the bytes written.
    ///
    /// `destination`'s parent directory must exist. Configuration problems are
    /// reported before any request is made or file created.
    pub fn fetch<H: ProgressHook>(
        &mut self,
        descriptor: &MediaDescriptor,
        destination: &Path,
        options: FetchOptions,
        hook: &mut H,
    ) -> Result<u64, FetchError> {
        let plan = FetchPlan::new(descriptor, options)?;
        let started = Instant::now();
        tracing::info!(
            destination = %destination.display(),
            strategy = descriptor.strategy.name(),
            requests = plan.request_count(),
            "starting fetch"
        );

        let temp_path = storage::temp_path(destination);
        let mut writer = StorageWriter::create(&temp_path)?;

        let total_bytes = match &plan {
            FetchPlan::ByteRanges { url, walk } => {
                byte_ranges::walk_byte_ranges(&mut self.client, &mut writer, url, walk.clone())?
            }
            FetchPlan::Segments {
                initialization_url,
                segment_urls,
                size_cap,
            } => segments::fetch_segments(
                &mut self.client,
                &mut writer,
                initialization_url.as_deref(),
                segment_urls,
                *size_cap,
            )?,
        };

        writer.sync()?;
        let downloaded_bytes = writer.finalize(destination)?;

        tracing::info!(
            destination = %destination.display(),
            bytes = downloaded_bytes,
            elapsed_secs = started.elapsed().as_secs_f64(),
            "fetch finished"
        );
        hook.on_progress(&ProgressReport {
            downloaded_bytes,
            total_bytes,
            filename: destination.display().to_string(),
            status: ProgressStatus::Finished,
        });
        Ok(downloaded_bytes)
    }
}

/// Fetches `descriptor` into `destination` with a one-off fetcher.
pub fn fetch<C: RangeFetch, H: ProgressHook>(
    client: &mut C,
    descriptor: &MediaDescriptor,
    destination: &Path,
    options: FetchOptions,
    hook: &mut H,
) -> Result<u64, FetchError> {
    SegmentedFetcher::new(client).fetch(descriptor, destination, options, hook)
}

/// Issues `request`, truncates the body to `request.limit` and appends it.
/// Returns the bytes written. Shared by both strategies so truncation and
/// accounting are identical.
fn append<C: RangeFetch>(
    client: &mut C,
    writer: &mut StorageWriter,
    request: &FetchRequest,
    target_name: &str,
) -> Result<u64, FetchError> {
    tracing::debug!(url = %request.url, "downloading {}", target_name);
    let mut data = client.get(request)?;
    if let Some(limit) = request.limit {
        data.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    writer.append(&data)?;
    Ok(data.len() as u64)
}
