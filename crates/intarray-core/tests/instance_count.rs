//! Live-instance counter behaviour.
//!
//! Every test in this binary holds `counter_lock()` because the counter is
//! process-wide and the harness runs tests on parallel threads.

use std::panic;
use std::sync::Barrier;
use std::thread;

use intarray_core::IntArray;
use intarray_test_utils::{counter_lock, sequential};

#[test]
fn counter_starts_at_zero() {
    let _guard = counter_lock();
    assert_eq!(IntArray::instance_count(), 0);
}

#[test]
fn every_constructor_counts() {
    let _guard = counter_lock();
    let a = IntArray::default();
    assert_eq!(IntArray::instance_count(), 1);
    let b = IntArray::new(7);
    assert_eq!(IntArray::instance_count(), 2);
    let c = b.clone();
    assert_eq!(IntArray::instance_count(), 3);
    let d = IntArray::try_new(-4).unwrap();
    assert_eq!(IntArray::instance_count(), 4);
    drop((a, b, c, d));
    assert_eq!(IntArray::instance_count(), 0);
}

#[test]
fn n_constructed_minus_m_dropped() {
    let _guard = counter_lock();
    let mut arrays: Vec<IntArray> = (1..=12).map(IntArray::new).collect();
    let copies = arrays[..3].to_vec();
    arrays.extend(copies);
    assert_eq!(IntArray::instance_count(), 15);
    arrays.truncate(9);
    assert_eq!(IntArray::instance_count(), 9);
    arrays.clear();
    assert_eq!(IntArray::instance_count(), 0);
}

#[test]
fn assignment_does_not_change_count() {
    let _guard = counter_lock();
    let src = sequential(12);
    let mut dst = IntArray::new(3);
    assert_eq!(IntArray::instance_count(), 2);
    dst.assign(&src);
    dst.clone_from(&src);
    assert_eq!(IntArray::instance_count(), 2);
}

#[test]
fn failed_construction_is_not_counted() {
    let _guard = counter_lock();
    assert!(IntArray::try_new(isize::MAX).is_err());
    assert_eq!(IntArray::instance_count(), 0);
}

#[test]
fn unwinding_releases_every_instance() {
    let _guard = counter_lock();
    let result = panic::catch_unwind(|| {
        let _a = IntArray::new(3);
        let _b = IntArray::default();
        assert_eq!(IntArray::instance_count(), 2);
        panic!("bail out mid-scope");
    });
    assert!(result.is_err());
    assert_eq!(IntArray::instance_count(), 0);
}

#[test]
fn out_of_bounds_panic_releases_the_array() {
    let _guard = counter_lock();
    let result = panic::catch_unwind(|| {
        let a = IntArray::new(2);
        a[5]
    });
    assert!(result.is_err());
    assert_eq!(IntArray::instance_count(), 0);
}

#[test]
fn concurrent_construction_is_counted_exactly() {
    let _guard = counter_lock();
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;
    let created = Barrier::new(THREADS + 1);
    let checked = Barrier::new(THREADS + 1);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                let arrays: Vec<IntArray> =
                    (0..PER_THREAD).map(|i| IntArray::new(i as isize)).collect();
                created.wait();
                checked.wait();
                drop(arrays);
            });
        }
        created.wait();
        assert_eq!(IntArray::instance_count(), THREADS * PER_THREAD);
        checked.wait();
    });

    assert_eq!(IntArray::instance_count(), 0);
}
