//! URL modeling for segment targets.
//!
//! Segment and initialization URLs in a manifest are either absolute or
//! relative to the format's base URL. Resolution is textual: an absolute URL
//! is passed through untouched, a relative one is joined with a single `/`.

use crate::error::FetchError;

/// True if `target` starts with `scheme://` (RFC 3986 scheme characters).
pub fn has_scheme(target: &str) -> bool {
    let Some((scheme, _)) = target.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Resolves a segment URL against `base_url`.
///
/// - `resolve_segment_url("https://cdn/x/", "seg1.m4s")` → `"https://cdn/x/seg1.m4s"`
/// - `resolve_segment_url("https://cdn/x", "seg1.m4s")` → `"https://cdn/x/seg1.m4s"`
/// - `resolve_segment_url("https://cdn/x", "https://other/seg1.m4s")` → unchanged
pub fn resolve_segment_url(base_url: &str, target: &str) -> String {
    if has_scheme(target) {
        return target.to_string();
    }
    let sep = if base_url.ends_with('/') { "" } else { "/" };
    format!("{}{}{}", base_url, sep, target)
}

/// Checks that `base_url` parses as an absolute URL.
pub fn validate_base_url(base_url: &str) -> Result<(), FetchError> {
    url::Url::parse(base_url)
        .map(|_| ())
        .map_err(|e| FetchError::config(format!("invalid base url {:?}: {}", base_url, e)))
}
