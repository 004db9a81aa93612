// src/progress.rs
use std::path::Path;

/// Step notifications from `runner::run`.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Input is about to be read.
    fn begin(&mut self, _input: &Path) {}

    /// Input parsed into `_records` rows.
    fn parsed(&mut self, _records: usize) {}

    /// Document written to `_output`.
    fn written(&mut self, _output: &Path) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
