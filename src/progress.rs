// src/progress.rs
/// Lightweight progress reporting used by the harvesters.
/// The CLI uses [`LogProgress`]; tests pass [`NullProgress`] or their own recorder.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One identifier finished; `count` is how many records it produced.
    fn item_done(&mut self, _id: &str, _count: usize) {}

    /// One identifier failed and was skipped.
    fn item_failed(&mut self, _id: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress sink that writes through the crate's tracing macros.
pub struct LogProgress {
    label: &'static str,
    done: usize,
    failed: usize,
    total: usize,
}

impl LogProgress {
    pub fn new(label: &'static str) -> Self {
        Self { label, done: 0, failed: 0, total: 0 }
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logf!("{}: {} item(s) queued", self.label, total);
    }
    fn log(&mut self, msg: &str) {
        logf!("{}: {}", self.label, msg);
    }
    fn item_done(&mut self, id: &str, count: usize) {
        self.done += 1;
        logf!(
            "{}: {} -> {} record(s) ({}/{})",
            self.label, id, count, self.done + self.failed, self.total
        );
    }
    fn item_failed(&mut self, id: &str, reason: &str) {
        self.failed += 1;
        loge!("{}: {} failed: {}", self.label, id, reason);
    }
    fn finish(&mut self) {
        logf!("{}: complete ({} ok, {} failed)", self.label, self.done, self.failed);
    }
}
