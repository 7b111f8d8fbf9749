//! The fixed-length integer array.
//!
//! [`IntArray`] owns a single zero-initialised `Box<[i32]>`. The length is
//! chosen at construction and only changes when [`IntArray::assign`]
//! replaces the whole buffer. Every live value is counted in the
//! process-wide [`instance_count`](IntArray::instance_count).

use std::fmt;
use std::io::{self, BufRead};
use std::ops::{Index, IndexMut};

use log::{debug, trace};

use crate::config::ArrayConfig;
use crate::counter;
use crate::error::IntArrayError;
use crate::text::{self, TokenReader};

/// A heap-backed, fixed-length sequence of `i32` with value semantics.
///
/// Cloning deep-copies the buffer. Indexing outside `0..len()` panics;
/// there is no clamping or wrap-around. Use [`checked`](Self::checked) for
/// a recoverable error instead.
#[derive(Debug)]
pub struct IntArray {
    elements: Box<[i32]>,
}

impl IntArray {
    /// Create a zeroed array of `requested` elements.
    ///
    /// Non-positive sizes fall back to [`ArrayConfig::DEFAULT_LEN`].
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated.
    pub fn new(requested: isize) -> Self {
        match Self::try_new(requested) {
            Ok(array) => array,
            Err(e) => panic!("IntArray::new({requested}): {e}"),
        }
    }

    /// Like [`new`](Self::new), but reports allocation failure as an error.
    pub fn try_new(requested: isize) -> Result<Self, IntArrayError> {
        Self::with_config(requested, &ArrayConfig::default())
    }

    /// Create a zeroed array, resolving `requested` through `config`.
    pub fn with_config(requested: isize, config: &ArrayConfig) -> Result<Self, IntArrayError> {
        config.validate()?;
        let len = config.resolve_len(requested)?;
        Ok(Self::from_buffer(zeroed(len)?))
    }

    fn from_buffer(elements: Box<[i32]>) -> Self {
        counter::register();
        trace!("created IntArray of {} elements", elements.len());
        Self { elements }
    }

    /// Number of arrays currently alive in this process.
    pub fn instance_count() -> usize {
        counter::live_instances()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`: arrays hold at least one element.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Read-only view of the elements.
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    /// Element at a signed index.
    ///
    /// # Panics
    ///
    /// Panics unless `0 <= index < len()`.
    #[track_caller]
    pub fn at(&self, index: isize) -> &i32 {
        match self.slot(index) {
            Some(i) => &self.elements[i],
            None => out_of_bounds(index, self.len()),
        }
    }

    /// Mutable element at a signed index.
    ///
    /// # Panics
    ///
    /// Panics unless `0 <= index < len()`.
    #[track_caller]
    pub fn at_mut(&mut self, index: isize) -> &mut i32 {
        match self.slot(index) {
            Some(i) => &mut self.elements[i],
            None => out_of_bounds(index, self.len()),
        }
    }

    /// Element at `index`, or [`IntArrayError::OutOfBounds`].
    pub fn checked(&self, index: isize) -> Result<i32, IntArrayError> {
        self.slot(index)
            .map(|i| self.elements[i])
            .ok_or(IntArrayError::OutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Mutable element at `index`, or [`IntArrayError::OutOfBounds`].
    pub fn checked_mut(&mut self, index: isize) -> Result<&mut i32, IntArrayError> {
        let len = self.len();
        match self.slot(index) {
            Some(i) => Ok(&mut self.elements[i]),
            None => Err(IntArrayError::OutOfBounds { index, len }),
        }
    }

    fn slot(&self, index: isize) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < self.len())
    }

    /// Replace this array's length and contents with a copy of `other`'s.
    ///
    /// The live-instance count is unchanged.
    pub fn assign(&mut self, other: &IntArray) -> &mut Self {
        debug!(
            "assigning {} elements over {} elements",
            other.len(),
            self.len()
        );
        if self.len() == other.len() {
            self.elements.copy_from_slice(&other.elements);
        } else {
            self.elements = other.elements.clone();
        }
        self
    }

    /// Overwrite every element with the next `len()` integers from `input`.
    ///
    /// All or nothing: on a malformed token or early end of input the
    /// array is left untouched and the error says which element failed.
    /// Tokens after the last one consumed stay in `input`.
    pub fn read_from<R: BufRead>(
        &mut self,
        input: &mut TokenReader<R>,
    ) -> Result<(), IntArrayError> {
        let staged = text::read_values(input, self.len())?;
        self.elements.copy_from_slice(&staged);
        debug!("read {} values", self.len());
        Ok(())
    }

    /// [`read_from`](Self::read_from) over an in-memory string.
    pub fn read_from_str(&mut self, input: &str) -> Result<(), IntArrayError> {
        self.read_from(&mut TokenReader::new(input.as_bytes()))
    }

    /// Write every element in the array text layout, ten per line.
    pub fn write_to<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

fn zeroed(len: usize) -> Result<Box<[i32]>, IntArrayError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| IntArrayError::AllocationFailed { requested: len })?;
    buf.resize(len, 0);
    Ok(buf.into_boxed_slice())
}

#[cold]
#[track_caller]
fn out_of_bounds(index: impl fmt::Display, len: usize) -> ! {
    panic!("IntArray index out of bounds: the len is {len} but the index is {index}")
}

impl Default for IntArray {
    fn default() -> Self {
        Self::new(ArrayConfig::DEFAULT_LEN as isize)
    }
}

impl Clone for IntArray {
    fn clone(&self) -> Self {
        Self::from_buffer(self.elements.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl Drop for IntArray {
    fn drop(&mut self) {
        trace!("dropping IntArray of {} elements", self.elements.len());
        counter::unregister();
    }
}

impl PartialEq for IntArray {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| a == b)
    }
}

impl Eq for IntArray {}

impl Index<usize> for IntArray {
    type Output = i32;

    #[track_caller]
    fn index(&self, index: usize) -> &i32 {
        match self.elements.get(index) {
            Some(v) => v,
            None => out_of_bounds(index, self.len()),
        }
    }
}

impl IndexMut<usize> for IntArray {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        let len = self.len();
        match self.elements.get_mut(index) {
            Some(v) => v,
            None => out_of_bounds(index, len),
        }
    }
}

impl fmt::Display for IntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_values(f, &self.elements)
    }
}
