//! Whole-fetch retry policy for callers.
//!
//! The fetcher itself never retries: any failure aborts the fetch. Callers
//! that want another attempt classify the `FetchError` here and re-run the
//! complete fetch after an exponential backoff.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
