//! Test utilities for intarray development.
//!
//! - [`counter_lock`] serialises tests that assert on the process-wide
//!   live-instance count.
//! - [`fixtures`] builds arrays and inputs: sequential runs, explicit
//!   values, and seeded pseudo-random contents.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Mutex, MutexGuard};

pub use fixtures::{array_from, random_values, sequential, token_text};

static COUNTER_LOCK: Mutex<()> = Mutex::new(());

/// Hold this for the duration of any test that observes
/// [`IntArray::instance_count`](intarray_core::IntArray::instance_count).
///
/// Tests in one binary run on parallel threads and share the counter, so
/// every test in such a binary must take the lock, including ones that
/// only create arrays. A test that panicked while holding the lock does not
/// poison it for the rest.
pub fn counter_lock() -> MutexGuard<'static, ()> {
    COUNTER_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
