//! Byte-range walk over a single resource URL.

use super::append;
use crate::client::{FetchRequest, RangeFetch};
use crate::error::FetchError;
use crate::segmenter::ByteRangeWalk;
use crate::storage::StorageWriter;

/// Requests every window of `walk` from `url` in order and appends the bodies.
/// Returns the planned total size. A window that comes back short is an error.
pub(super) fn walk_byte_ranges<C: RangeFetch>(
    client: &mut C,
    writer: &mut StorageWriter,
    url: &str,
    walk: ByteRangeWalk,
) -> Result<u64, FetchError> {
    let total = walk.total_len();
    let count = walk.window_count();
    for (i, window) in walk.enumerate() {
        let wanted = window.len().min(window.bytes_remaining_overall);
        let request = FetchRequest::get(url)
            .with_range(window.range())
            .with_limit(wanted);
        let name = format!(
            "bytes {}-{} ({} / {})",
            window.start,
            window.end,
            i + 1,
            count
        );
        let received = append(client, writer, &request, &name)?;
        if received < wanted {
            return Err(FetchError::ShortRead {
                url: url.to_string(),
                expected: wanted,
                received,
            });
        }
    }
    Ok(total)
}
