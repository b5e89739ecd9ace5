//! Serde model of a manifest format entry.

use serde::{Deserialize, Deserializer};

/// One format record as produced by the manifest parser. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatEntry {
    /// Base/resource URL.
    pub url: String,
    #[serde(default)]
    pub segment_urls: Option<Vec<String>>,
    #[serde(default)]
    pub initialization_url: Option<String>,
    /// Selects the byte-range strategy; absent or null means segments.
    #[serde(default)]
    pub incremental_byte_ranges: Option<bool>,
    #[serde(default)]
    pub initialization_range: Option<String>,
    #[serde(default)]
    pub incremental_bytes: Option<u64>,
    /// Accepts a number or a numeric string (sizes scraped from `Content-Range`).
    #[serde(default, deserialize_with = "size_from_int_or_str")]
    pub filesize: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrStr {
    Int(u64),
    Str(String),
}

fn size_from_int_or_str<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrStr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrStr::Int(n)) => Ok(Some(n)),
        Some(IntOrStr::Str(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid filesize {:?}", s))),
    }
}
