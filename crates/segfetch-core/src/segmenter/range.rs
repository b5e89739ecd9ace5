//! Inclusive byte range type and manifest range parsing.

/// A byte range `[start, end]` (both inclusive), as carried by `Range: bytes=start-end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte offset (inclusive).
    pub start: u64,
    /// Last byte offset (inclusive).
    pub end: u64,
}

impl ByteRange {
    pub fn new(start: u64, end: u64) -> Self {
        ByteRange { start, end }
    }

    /// Number of bytes covered. A range with `end < start` is empty.
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// HTTP Range header value: `bytes=start-end`.
    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }

    /// Range in the form libcurl expects (`start-end`, no `bytes=` prefix).
    pub fn curl_value(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// Parses the leading integer of a `start-end` manifest range (`"0-99"` → `0`).
///
/// Returns `None` when the part before the first `-` is empty or not a number.
pub fn parse_leading_int(range: &str) -> Option<u64> {
    let head = range.split('-').next()?.trim();
    head.parse::<u64>().ok()
}
