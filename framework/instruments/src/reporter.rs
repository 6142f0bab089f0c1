use parking_lot::Mutex;

use crate::RunResult;

/// Thread-safe sink for results arriving from concurrently running units.
///
/// Append-only while the run is in flight. Units never read each other's
/// results; the coordinator takes the full set once after every unit has
/// joined.
#[derive(Debug, Default)]
pub struct Reporter {
    results: Mutex<Vec<RunResult>>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, result: RunResult) {
        log::debug!(
            "user-{} finished, success: {}, elapsed: {}ms",
            result.user_id,
            result.success,
            result.elapsed_ms
        );
        self.results.lock().push(result);
    }

    pub fn len(&self) -> usize {
        self.results.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take all recorded results, leaving the reporter empty.
    pub fn take_results(&self) -> Vec<RunResult> {
        std::mem::take(&mut *self.results.lock())
    }
}
