//! Discrete-segment retrieval: init segment, then each segment in index order.

use super::append;
use crate::client::{FetchRequest, RangeFetch};
use crate::error::FetchError;
use crate::segmenter::ByteRange;
use crate::storage::StorageWriter;

/// Appends the init segment (unranged, outside the cap) then the segments.
///
/// With `size_cap` set, each segment is requested as `bytes=0-(remaining-1)`,
/// truncated to `remaining`, and the loop stops once the cap is used up.
/// Returns the bytes written, init segment included.
pub(super) fn fetch_segments<C: RangeFetch>(
    client: &mut C,
    writer: &mut StorageWriter,
    initialization_url: Option<&str>,
    segment_urls: &[String],
    size_cap: Option<u64>,
) -> Result<u64, FetchError> {
    let mut written = 0u64;
    if let Some(url) = initialization_url {
        written += append(client, writer, &FetchRequest::get(url), "initialization segment")?;
    }

    let mut remaining = size_cap;
    let count = segment_urls.len();
    for (i, url) in segment_urls.iter().enumerate() {
        let request = match remaining {
            Some(r) => FetchRequest::get(url.as_str())
                .with_range(ByteRange::new(0, r - 1))
                .with_limit(r),
            None => FetchRequest::get(url.as_str()),
        };
        let name = format!("segment {} / {}", i + 1, count);
        let len = append(client, writer, &request, &name)?;
        written += len;
        if let Some(r) = remaining.as_mut() {
            *r = r.saturating_sub(len);
            if *r == 0 {
                tracing::debug!(skipped = count - i - 1, "size cap reached");
                break;
            }
        }
    }
    Ok(written)
}
