//! Disk I/O and file lifecycle.
//!
//! Writes retrieved bytes in arrival order to a temp file next to the
//! destination, then finalizes with an atomic rename from `.part` to the final
//! name. A failed fetch leaves the `.part` file behind for inspection.

mod writer;

pub use writer::StorageWriter;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `video.mp4` → `video.mp4.part`).
pub fn temp_path(final_path: &std::path::Path) -> std::path::PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    std::path::PathBuf::from(o)
}
