//! Fixed-length integer arrays with checked indexing and whole-array text I/O.
//!
//! [`IntArray`] is a heap-backed sequence of `i32` whose length is fixed at
//! construction. It behaves as a value: cloning deep-copies, `==` compares
//! element by element, and [`IntArray::assign`] replaces one array's
//! contents with a copy of another's.
//!
//! # Failure policy
//!
//! Indexing outside `0..len()` panics and the infallible constructors panic
//! on allocation failure. Nothing is clamped or wrapped. The `try_*`,
//! `checked*`, and reader APIs return [`IntArrayError`] instead.
//!
//! # Text layout
//!
//! ```text
//! 1 2 3 4 5 6 7 8 9 10 ⏎
//! 11 12 ⏎
//! ```
//!
//! Every value is followed by one space, lines hold ten values, and the
//! output ends with exactly one line break. Input is any whitespace-separated
//! run of integers; see [`TokenReader`].
//!
//! # Instance counting
//!
//! [`IntArray::instance_count`] reports how many arrays are alive in the
//! process. The count is maintained atomically by construction and `Drop`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
mod counter;
pub mod error;
pub mod text;

pub use array::IntArray;
pub use config::{ArrayConfig, SizePolicy};
pub use error::IntArrayError;
pub use text::{TokenReader, VALUES_PER_LINE};
