// src/progress.rs
/// Lightweight progress reporting for the scrape/export run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of listing entries.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one listing entry has been parsed, looked up and merged.
    fn item_done(&mut self, _index: usize, _title: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
