//! Completion event handed to the caller's progress hook.

use serde::Serialize;

/// Status carried by a `ProgressReport`. Only completion is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    Finished,
}

/// Emitted exactly once, after the destination file is renamed into place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    /// Bytes written to the destination.
    pub downloaded_bytes: u64,
    /// Best-known total: the planned size for byte-range walks, otherwise
    /// the downloaded byte count.
    pub total_bytes: u64,
    /// Destination path.
    pub filename: String,
    pub status: ProgressStatus,
}

/// Receives progress events. Implemented for any `FnMut(&ProgressReport)`.
pub trait ProgressHook {
    fn on_progress(&mut self, report: &ProgressReport);
}

impl<F: FnMut(&ProgressReport)> ProgressHook for F {
    fn on_progress(&mut self, report: &ProgressReport) {
        self(report)
    }
}

/// Hook that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressHook for NoProgress {
    fn on_progress(&mut self, _report: &ProgressReport) {}
}
