//! Byte-range walk: successive inclusive windows over one continuous resource.
//!
//! `ByteRangeWalk` is a pure stepper. It is planned (and validated) before the
//! fetch touches the network or the filesystem, then iterated one window per
//! ranged GET.

use super::range::{parse_leading_int, ByteRange};
use crate::error::FetchError;

/// One window of a byte-range walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    /// First byte offset (inclusive).
    pub start: u64,
    /// Last byte offset (inclusive).
    pub end: u64,
    /// Bytes from `start` through the last wanted byte, this window included.
    pub bytes_remaining_overall: u64,
}

impl FetchWindow {
    pub fn range(&self) -> ByteRange {
        ByteRange::new(self.start, self.end)
    }

    /// Number of bytes this window should yield.
    pub fn len(&self) -> u64 {
        self.range().len()
    }
}

/// Window iterator for the byte-range strategy.
///
/// The first window is `[start, min(last, start + window_size)]`; every later
/// window begins right after the previous end and is `window_size` bytes long,
/// except the final one which is clipped to `last`. Termination is driven only
/// by the remaining-byte counter (`last - start`, decremented by `window_size`
/// per window), so a walk yields `max(1, ceil((last - start) / window_size))`
/// windows.
#[derive(Debug, Clone)]
pub struct ByteRangeWalk {
    first: u64,
    last: u64,
    window_size: u64,
    start: u64,
    end: u64,
    remaining: u64,
    done: bool,
}

impl ByteRangeWalk {
    /// Plans a walk from manifest fields.
    ///
    /// `filesize` is required. When `size_cap` is set the walk stops after at
    /// most `size_cap` bytes.
    pub fn plan(
        initialization_range: &str,
        incremental_bytes: u64,
        filesize: Option<u64>,
        size_cap: Option<u64>,
    ) -> Result<Self, FetchError> {
        let filesize = filesize.ok_or_else(|| {
            FetchError::config("filesize is required for byte-range fetches")
        })?;
        if filesize == 0 {
            return Err(FetchError::config("filesize must be positive"));
        }
        let first = parse_leading_int(initialization_range).ok_or_else(|| {
            FetchError::config(format!(
                "unparsable initialization_range {:?}",
                initialization_range
            ))
        })?;
        let mut last = filesize - 1;
        if let Some(cap) = size_cap {
            if cap == 0 {
                return Err(FetchError::config("size cap must be positive"));
            }
            // Cap counts bytes from `first`, not from offset 0.
            last = last.min(first.saturating_add(cap - 1));
        }
        Self::new(first, last, incremental_bytes)
    }

    /// Walk over `[first, last]` (inclusive) in `window_size` steps.
    pub fn new(first: u64, last: u64, window_size: u64) -> Result<Self, FetchError> {
        if window_size == 0 {
            return Err(FetchError::config("incremental_bytes must be positive"));
        }
        if first > last {
            return Err(FetchError::config(format!(
                "initialization range starts at {} past last byte {}",
                first, last
            )));
        }
        Ok(ByteRangeWalk {
            first,
            last,
            window_size,
            start: first,
            end: first.saturating_add(window_size).min(last),
            remaining: last - first,
            done: false,
        })
    }

    /// Total bytes the walk covers (`last - first + 1`).
    pub fn total_len(&self) -> u64 {
        self.last - self.first + 1
    }

    /// Number of windows a fresh walk yields.
    pub fn window_count(&self) -> u64 {
        let span = self.last - self.first;
        span.div_ceil(self.window_size).max(1)
    }

    pub fn window_size(&self) -> u64 {
        self.window_size
    }
}

impl Iterator for ByteRangeWalk {
    type Item = FetchWindow;

    fn next(&mut self) -> Option<FetchWindow> {
        if self.done {
            return None;
        }
        let window = FetchWindow {
            start: self.start,
            end: self.end,
            bytes_remaining_overall: self.last - self.start + 1,
        };
        if self.remaining <= self.window_size {
            self.done = true;
        } else {
            self.remaining -= self.window_size;
            // Inclusive ends: next window starts one past the previous end.
            self.start = self.end + 1;
            self.end = self.end.saturating_add(self.window_size).min(self.last);
        }
        Some(window)
    }
}
