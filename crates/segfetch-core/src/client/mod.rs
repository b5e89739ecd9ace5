//! Ranged HTTP GET transport.
//!
//! `RangeFetch` is the seam between the fetch orchestration and the network:
//! one GET, optional inclusive byte range, body read to completion and capped
//! at `limit` bytes. `CurlClient` is the libcurl implementation. No retries
//! happen at this layer.

mod curl_client;

pub use curl_client::CurlClient;

use crate::error::FetchError;
use crate::segmenter::ByteRange;
use std::collections::BTreeMap;
use std::time::Duration;

/// One GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    /// Sent as `Range: bytes=start-end` when set.
    pub range: Option<ByteRange>,
    /// Keep at most this many body bytes.
    pub limit: Option<u64>,
}

impl FetchRequest {
    /// Unranged, uncapped GET.
    pub fn get(url: impl Into<String>) -> Self {
        FetchRequest {
            url: url.into(),
            range: None,
            limit: None,
        }
    }

    pub fn with_range(mut self, range: ByteRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Executes a single GET and returns the (capped) response body.
pub trait RangeFetch {
    fn get(&mut self, request: &FetchRequest) -> Result<Vec<u8>, FetchError>;
}

impl<T: RangeFetch + ?Sized> RangeFetch for &mut T {
    fn get(&mut self, request: &FetchRequest) -> Result<Vec<u8>, FetchError> {
        (**self).get(request)
    }
}

/// Transport tuning for `CurlClient` (built from `SegfetchConfig`).
#[derive(Debug, Clone)]
pub struct CurlOptions {
    pub connect_timeout: Duration,
    /// Abort if throughput stays below `low_speed_limit` bytes/s for `low_speed_time`.
    pub low_speed_limit: u32,
    pub low_speed_time: Duration,
    /// Hard wall-clock timeout per request.
    pub timeout: Duration,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
    /// Extra request headers (`Name: value`).
    pub headers: BTreeMap<String, String>,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            low_speed_limit: 1024,
            low_speed_time: Duration::from_secs(60),
            timeout: Duration::from_secs(3600),
            max_redirections: 10,
            user_agent: None,
            headers: BTreeMap::new(),
        }
    }
}
