//! Strategy selection and up-front validation.
//!
//! Everything that can be wrong with a descriptor is detected here, before the
//! fetch creates a temp file or issues a request.

use crate::error::FetchError;
use crate::manifest::{FetchOptions, MediaDescriptor, Strategy};
use crate::segmenter::ByteRangeWalk;
use crate::url_model::{resolve_segment_url, validate_base_url};

/// Validated retrieval plan for one fetch.
#[derive(Debug, Clone)]
pub enum FetchPlan {
    /// Ranged GETs against `url`, one per window.
    ByteRanges { url: String, walk: ByteRangeWalk },
    /// Absolute URLs in fetch order. `size_cap` applies to `segment_urls` only.
    Segments {
        initialization_url: Option<String>,
        segment_urls: Vec<String>,
        size_cap: Option<u64>,
    },
}

impl FetchPlan {
    /// Picks the strategy for `descriptor` and validates its fields.
    pub fn new(descriptor: &MediaDescriptor, options: FetchOptions) -> Result<Self, FetchError> {
        validate_base_url(&descriptor.base_url)?;
        if options.size_cap == Some(0) {
            return Err(FetchError::config("size cap must be positive"));
        }
        let base = descriptor.base_url.as_str();
        match &descriptor.strategy {
            Strategy::ByteRanges {
                initialization_range,
                incremental_bytes,
            } => {
                let walk = ByteRangeWalk::plan(
                    initialization_range,
                    *incremental_bytes,
                    descriptor.filesize,
                    options.size_cap,
                )?;
                Ok(FetchPlan::ByteRanges {
                    url: descriptor.base_url.clone(),
                    walk,
                })
            }
            Strategy::Segments {
                initialization_url,
                segment_urls,
            } => Ok(FetchPlan::Segments {
                initialization_url: initialization_url
                    .as_deref()
                    .map(|u| resolve_segment_url(base, u)),
                segment_urls: segment_urls
                    .iter()
                    .map(|u| resolve_segment_url(base, u))
                    .collect(),
                size_cap: options.size_cap,
            }),
        }
    }

    /// Number of GETs the plan issues at most.
    pub fn request_count(&self) -> u64 {
        match self {
            FetchPlan::ByteRanges { walk, .. } => walk.window_count(),
            FetchPlan::Segments {
                initialization_url,
                segment_urls,
                ..
            } => segment_urls.len() as u64 + u64::from(initialization_url.is_some()),
        }
    }
}
