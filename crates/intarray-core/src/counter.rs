//! Process-wide count of live [`IntArray`](crate::IntArray) values.
//!
//! Only construction and `Drop` touch the counter, so it always equals the
//! number of arrays that exist. Updates are atomic; arrays may be created
//! and dropped on any thread.

use std::sync::atomic::{AtomicUsize, Ordering};

static LIVE_INSTANCES: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn register() {
    LIVE_INSTANCES.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn unregister() {
    let prev = LIVE_INSTANCES.fetch_sub(1, Ordering::Relaxed);
    debug_assert!(prev > 0, "live instance counter underflow");
}

/// Number of arrays currently alive in this process.
pub fn live_instances() -> usize {
    LIVE_INSTANCES.load(Ordering::Relaxed)
}
