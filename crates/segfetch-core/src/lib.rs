//! segfetch core: ordered retrieval of segmented media into a single file.
//!
//! A `MediaDescriptor` (from a manifest format entry) is fetched either as a
//! list of discrete segment URLs or as a byte-range walk over one resource.
//! Bytes are appended in request order to `<destination>.part`, which is
//! renamed into place on success.

pub mod config;
pub mod logging;

pub mod client;
pub mod error;
pub mod fetcher;
pub mod manifest;
pub mod retry;
pub mod segmenter;
pub mod storage;
pub mod url_model;

pub use client::{CurlClient, CurlOptions, FetchRequest, RangeFetch};
pub use error::FetchError;
pub use fetcher::{fetch, FetchPlan, ProgressHook, ProgressReport, ProgressStatus, SegmentedFetcher};
pub use manifest::{FetchOptions, FormatEntry, MediaDescriptor, Strategy};
