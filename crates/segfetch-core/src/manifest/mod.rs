//! Media descriptor model.
//!
//! A manifest parser (outside this crate) emits one `FormatEntry` per
//! downloadable format. `MediaDescriptor::from_format` turns it into a tagged
//! descriptor carrying only the fields its retrieval strategy needs.

mod format;

pub use format::FormatEntry;

use crate::error::FetchError;

/// How the parts of a resource are addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Explicit segment files, concatenated in order after an optional init segment.
    Segments {
        initialization_url: Option<String>,
        segment_urls: Vec<String>,
    },
    /// One continuous resource walked with ranged GETs of `incremental_bytes`.
    ByteRanges {
        /// `start-end` of the initialization segment; the walk begins at `start`.
        initialization_range: String,
        incremental_bytes: u64,
    },
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Segments { .. } => "segments",
            Strategy::ByteRanges { .. } => "byte-ranges",
        }
    }
}

/// Resolved, strategy-tagged description of one media resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    /// Resource URL; root for relative segment URLs.
    pub base_url: String,
    /// Total size in bytes, when known. Required by `Strategy::ByteRanges`.
    pub filesize: Option<u64>,
    pub strategy: Strategy,
}

impl MediaDescriptor {
    /// Builds a descriptor from a manifest format entry.
    ///
    /// Strategy-specific fields must be present; `filesize` is checked later by
    /// the byte-range planner so direct constructions get the same validation.
    pub fn from_format(entry: &FormatEntry) -> Result<Self, FetchError> {
        let strategy = if entry.incremental_byte_ranges.unwrap_or(false) {
            let initialization_range = entry.initialization_range.clone().ok_or_else(|| {
                FetchError::config("initialization_range is required for byte-range fetches")
            })?;
            let incremental_bytes = entry.incremental_bytes.ok_or_else(|| {
                FetchError::config("incremental_bytes is required for byte-range fetches")
            })?;
            Strategy::ByteRanges {
                initialization_range,
                incremental_bytes,
            }
        } else {
            let segment_urls = entry.segment_urls.clone().ok_or_else(|| {
                FetchError::config("segment_urls is required for segment fetches")
            })?;
            Strategy::Segments {
                initialization_url: entry.initialization_url.clone(),
                segment_urls,
            }
        };
        Ok(MediaDescriptor {
            base_url: entry.url.clone(),
            filesize: entry.filesize,
            strategy,
        })
    }

    /// Parses a JSON format entry and converts it.
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let entry: FormatEntry = serde_json::from_str(json)
            .map_err(|e| FetchError::config(format!("invalid format entry: {}", e)))?;
        Self::from_format(&entry)
    }
}

/// Per-call fetch options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Upper bound on bytes retrieved (abbreviated verification runs).
    pub size_cap: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_range_entry() {
        let d = MediaDescriptor::from_json(
            r#"{
                "url": "https://cdn.example.com/v/video.mp4",
                "incremental_byte_ranges": true,
                "initialization_range": "0-719",
                "incremental_bytes": 3900,
                "filesize": "1048576",
                "format_note": "DASH video"
            }"#,
        )
        .unwrap();
        assert_eq!(d.filesize, Some(1_048_576));
        assert_eq!(
            d.strategy,
            Strategy::ByteRanges {
                initialization_range: "0-719".into(),
                incremental_bytes: 3900,
            }
        );
    }

    #[test]
    fn segment_entry_defaults_to_segments() {
        let d = MediaDescriptor::from_json(
            r#"{
                "url": "https://cdn.example.com/v/",
                "initialization_url": "init.mp4",
                "segment_urls": ["s1.m4s", "s2.m4s"]
            }"#,
        )
        .unwrap();
        assert_eq!(d.strategy.name(), "segments");
        assert_eq!(d.filesize, None);
        match d.strategy {
            Strategy::Segments {
                initialization_url,
                segment_urls,
            } => {
                assert_eq!(initialization_url.as_deref(), Some("init.mp4"));
                assert_eq!(segment_urls, vec!["s1.m4s", "s2.m4s"]);
            }
            other => panic!("expected segments, got {:?}", other),
        }
    }

    #[test]
    fn missing_strategy_fields_are_configuration_errors() {
        let no_range = r#"{"url": "https://x/", "incremental_byte_ranges": true, "incremental_bytes": 10}"#;
        let no_step = r#"{"url": "https://x/", "incremental_byte_ranges": true, "initialization_range": "0-1"}"#;
        let no_segments = r#"{"url": "https://x/"}"#;
        for json in [no_range, no_step, no_segments] {
            let err = MediaDescriptor::from_json(json).unwrap_err();
            assert!(matches!(err, FetchError::Configuration(_)), "{json}");
        }
    }

    #[test]
    fn malformed_json_is_configuration_error() {
        let err = MediaDescriptor::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FetchError::Configuration(_)));
    }
}
