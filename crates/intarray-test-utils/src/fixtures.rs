//! Reusable array fixtures.

use intarray_core::IntArray;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Array holding exactly `values`.
///
/// # Panics
///
/// Panics if `values` is empty; arrays always hold at least one element.
pub fn array_from(values: &[i32]) -> IntArray {
    assert!(!values.is_empty(), "array_from needs at least one value");
    let mut array = IntArray::new(values.len() as isize);
    for (i, &v) in values.iter().enumerate() {
        array[i] = v;
    }
    array
}

/// Array of `len` elements holding `1..=len`.
pub fn sequential(len: usize) -> IntArray {
    let values: Vec<i32> = (1..=len as i32).collect();
    array_from(&values)
}

/// `len` deterministic pseudo-random values for `seed`.
///
/// Uses ChaCha8 so the sequence is identical across platforms.
pub fn random_values(seed: u64, len: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1_000_000..=1_000_000)).collect()
}

/// Space-separated tokens for `values` on a single line.
pub fn token_text(values: &[i32]) -> String {
    let mut text = values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    text.push('\n');
    text
}
