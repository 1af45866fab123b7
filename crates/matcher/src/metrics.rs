// Metrics hooks for the `matcher` crate.
//
// Callers install a global `CompareMetrics` implementation via
// [`set_compare_metrics`]; every call to [`compare`](crate::compare) then
// reports file count, candidate and retained pairs, and latency.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for compare operations.
pub trait CompareMetrics: Send + Sync {
    /// Record the outcome of one `compare` call.
    ///
    /// `candidate_pairs` is always `files * (files - 1) / 2`; `retained_pairs`
    /// is the number left after threshold filtering.
    fn record_compare(
        &self,
        files: usize,
        candidate_pairs: usize,
        retained_pairs: usize,
        latency: Duration,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CompareMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn CompareMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn CompareMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global compare metrics recorder.
pub fn set_compare_metrics(recorder: Option<Arc<dyn CompareMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
