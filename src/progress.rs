// src/progress.rs
use std::path::Path;

use crate::download::DownloadError;

/// Lightweight progress reporting for the download run.
/// The CLI implements this to print lines; tests implement it to record.
pub trait Progress {
    /// Called at the start with the number of samples to download.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one sample has been fully written to disk.
    fn item_done(&mut self, _index: usize, _path: &Path) {}

    /// Called when one sample fails; the run continues regardless.
    fn item_failed(&mut self, _url: &str, _err: &DownloadError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
