// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the listing responded, with the number of article blocks.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one record was emitted.
    fn item_done(&mut self, _title: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
