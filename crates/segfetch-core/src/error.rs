//! Fetch error type.
//!
//! Every failure aborts the whole fetch; the variants exist so callers can
//! classify (e.g. for a whole-fetch retry) before converting to anyhow.

use std::path::PathBuf;

/// Error returned by a segmented fetch or a single ranged GET.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Descriptor fields missing or unparsable. Raised before any network call.
    #[error("configuration: {0}")]
    Configuration(String),

    /// Curl reported an error (timeout, connection, DNS, ...).
    #[error("GET {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// Server answered a range starting past byte 0 with a full `200` body.
    #[error("GET {url}: server ignored Range {range}")]
    RangeNotHonored { url: String, range: String },

    /// Response body shorter than the requested window. Never padded.
    #[error("short read from {url}: expected {expected} bytes, got {received}")]
    ShortRead {
        url: String,
        expected: u64,
        received: u64,
    },

    /// Temp file create/write/sync or the final rename failed.
    #[error("{}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        FetchError::Configuration(msg.into())
    }

    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// True for failures of the transport (curl error, bad status, short body).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FetchError::Transport { .. }
                | FetchError::Http { .. }
                | FetchError::RangeNotHonored { .. }
                | FetchError::ShortRead { .. }
        )
    }
}
