//! Benchmark profiles for intarray.
//!
//! Each [`Profile`] names an array length and a seed. Contents come from
//! [`random_values`](intarray_test_utils::random_values), so every run
//! benchmarks the same data.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use intarray_core::IntArray;
use intarray_test_utils::{array_from, random_values};

/// A named benchmark input size.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    /// Label used in benchmark IDs.
    pub name: &'static str,
    /// Number of elements.
    pub len: usize,
    /// Seed for the element values.
    pub seed: u64,
}

/// One line of output.
pub const SMALL: Profile = Profile {
    name: "small",
    len: 10,
    seed: 1,
};

/// A hundred lines of output.
pub const MEDIUM: Profile = Profile {
    name: "medium",
    len: 1_000,
    seed: 2,
};

/// Large enough that allocation and copying dominate.
pub const LARGE: Profile = Profile {
    name: "large",
    len: 100_000,
    seed: 3,
};

/// All profiles, smallest first.
pub const PROFILES: [Profile; 3] = [SMALL, MEDIUM, LARGE];

impl Profile {
    /// Element values for this profile.
    pub fn values(&self) -> Vec<i32> {
        random_values(self.seed, self.len)
    }

    /// A populated array for this profile.
    pub fn array(&self) -> IntArray {
        array_from(&self.values())
    }

    /// The array rendered in the array text layout.
    pub fn text(&self) -> String {
        self.array().to_string()
    }
}
