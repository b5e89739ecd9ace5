//! Sequential writer for temp download files.

use crate::error::FetchError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only writer for a temp download file.
///
/// Bytes land in the order `append` is called; the file is owned exclusively
/// by one fetch until `finalize` renames it into place.
pub struct StorageWriter {
    file: File,
    temp_path: PathBuf,
    written: u64,
}

impl StorageWriter {
    /// Create a new temp file at `temp_path` (e.g. `destination.part`).
    /// Overwrites if the path already exists.
    pub fn create(temp_path: &Path) -> Result<Self, FetchError> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .map_err(|e| FetchError::fs(temp_path, e))?;
        Ok(StorageWriter {
            file,
            temp_path: temp_path.to_path_buf(),
            written: 0,
        })
    }

    /// Append `data` at the current end of the file.
    pub fn append(&mut self, data: &[u8]) -> Result<(), FetchError> {
        self.file
            .write_all(data)
            .map_err(|e| FetchError::fs(&self.temp_path, e))?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Total bytes appended so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Sync file data to disk. Call before `finalize` for durability.
    pub fn sync(&self) -> Result<(), FetchError> {
        self.file
            .sync_all()
            .map_err(|e| FetchError::fs(&self.temp_path, e))
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Atomically rename the temp file to the final path. Consumes the writer and closes the file.
    /// Fails if `final_path` is on a different filesystem.
    pub fn finalize(self, final_path: &Path) -> Result<u64, FetchError> {
        let StorageWriter {
            file,
            temp_path,
            written,
        } = self;
        drop(file);

        std::fs::rename(&temp_path, final_path).map_err(|e| FetchError::fs(final_path, e))?;
        Ok(written)
    }
}
