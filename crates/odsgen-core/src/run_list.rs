//! Sparse sequence with an implicit blank tail
//!
//! [`RunList`] is the storage behind rows (cells by column), tables (rows by
//! index) and column definitions. Positions that were never written, and
//! positions past the end, read as a designated `blank` value. Writing a
//! non-blank value far past the end backfills the gap with blanks, and the
//! list never ends with a blank: trailing blanks are trimmed after every
//! structural mutation.

use std::ops::{Range, RangeBounds};

use crate::error::Result;
use crate::index::IntoIndex;

/// An index-addressable sequence that treats one value as "absent"
///
/// Invariants:
/// - `len()` is the index of the last non-blank element plus one, or 0
/// - `get(i)` for `i >= len()` returns the blank
/// - the backing vector never ends with a blank
#[derive(Debug, Clone)]
pub struct RunList<T> {
    items: Vec<T>,
    blank: T,
}

impl<T: Clone + PartialEq> RunList<T> {
    /// Backing capacity used by [`RunList::new`]
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Create an empty list with the given blank value
    pub fn new(blank: T) -> Self {
        Self::with_capacity(blank, Self::DEFAULT_CAPACITY)
    }

    /// Create an empty list with a backing capacity hint
    ///
    /// The capacity is a performance hint only; the list grows past it.
    pub fn with_capacity(blank: T, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            blank,
        }
    }

    /// The value read at unset positions
    pub fn blank(&self) -> &T {
        &self.blank
    }

    /// Apparent length: last non-blank index plus one
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list holds no non-blank element
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the element at `index` is the blank value
    pub fn is_blank_at(&self, index: usize) -> bool {
        *self.get(index) == self.blank
    }

    /// Get the element at `index`, or the blank when past the end
    pub fn get(&self, index: usize) -> &T {
        self.items.get(index).unwrap_or(&self.blank)
    }

    /// Get the element at a caller-supplied, possibly negative, position
    pub fn get_checked<I: IntoIndex>(&self, index: I) -> Result<&T> {
        Ok(self.get(index.into_index()?))
    }

    /// Set the element at `index`, returning the previous value
    ///
    /// Setting the blank at the last position shrinks the list and trims any
    /// blanks that become trailing. Setting a non-blank past the end
    /// backfills with blanks first.
    pub fn set(&mut self, index: usize, value: T) -> T {
        let len = self.items.len();
        if index >= len {
            if value != self.blank {
                self.backfill(index);
                self.items.push(value);
            }
            return self.blank.clone();
        }

        let previous = std::mem::replace(&mut self.items[index], value);
        if index + 1 == len {
            self.trim();
        }
        previous
    }

    /// Set the element at a caller-supplied, possibly negative, position
    pub fn set_checked<I: IntoIndex>(&mut self, index: I, value: T) -> Result<T> {
        Ok(self.set(index.into_index()?, value))
    }

    /// Insert at `index`, shifting the following elements
    ///
    /// Inserting a blank at or past the end is a no-op.
    pub fn insert(&mut self, index: usize, value: T) {
        if index >= self.items.len() {
            if value != self.blank {
                self.backfill(index);
                self.items.push(value);
            }
            return;
        }
        self.items.insert(index, value);
    }

    /// Append an element after the last non-blank one
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.trim();
    }

    /// Remove the element at `index`, shifting the following elements
    ///
    /// Returns the blank when `index` is past the end.
    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.items.len() {
            return self.blank.clone();
        }
        let removed = self.items.remove(index);
        self.trim();
        removed
    }

    /// Mutate the element at `index` in place
    ///
    /// The position is backfilled if needed and the list is trimmed after
    /// `f` returns, so `f` may leave the element blank.
    pub fn update<R>(&mut self, index: usize, f: impl FnOnce(&mut T) -> R) -> R {
        if index >= self.items.len() {
            self.backfill(index);
            self.items.push(self.blank.clone());
        }
        let result = f(&mut self.items[index]);
        self.trim();
        result
    }

    /// Keep only the elements matching `f`
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        self.items.retain(f);
        self.trim();
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove the first `count` elements and return them
    ///
    /// Following elements move down by `count` positions.
    pub fn drain_front(&mut self, count: usize) -> std::vec::Drain<'_, T> {
        let count = count.min(self.items.len());
        self.items.drain(..count)
    }

    /// Iterate over the elements up to the apparent length
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements up to the apparent length
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// A sub-slice of the stored elements
    ///
    /// The range is clamped to the apparent length.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> &[T] {
        let range = clamp_range(range, self.items.len());
        &self.items[range]
    }

    /// Position of the first element equal to `value`
    ///
    /// The blank is always found, at the latest at `len()`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        match self.items.iter().position(|e| e == value) {
            Some(i) => Some(i),
            None if *value == self.blank => Some(self.items.len()),
            None => None,
        }
    }

    /// Check if `value` is in the list (the blank always is)
    pub fn contains(&self, value: &T) -> bool {
        *value == self.blank || self.items.contains(value)
    }

    /// Fill with blanks until `len() == index`
    fn backfill(&mut self, index: usize) {
        if index > self.items.len() {
            self.items.resize(index, self.blank.clone());
        }
    }

    fn trim(&mut self) {
        while self.items.last().is_some_and(|e| *e == self.blank) {
            self.items.pop();
        }
    }
}

impl<T: Clone + PartialEq> RunList<Option<T>> {
    /// Get the element at `index`, creating it with `f` if absent
    pub fn get_or_insert_with(&mut self, index: usize, f: impl FnOnce() -> T) -> &mut T {
        if index >= self.items.len() {
            self.backfill(index);
            self.items.push(None);
        }
        self.items[index].get_or_insert_with(f)
    }

    /// Get a mutable reference to a present element
    pub fn get_some_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index).and_then(Option::as_mut)
    }
}

impl<T: PartialEq> PartialEq for RunList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.blank == other.blank && self.items == other.items
    }
}

impl<'a, T> IntoIterator for &'a RunList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn clamp_range<R: RangeBounds<usize>>(range: R, len: usize) -> Range<usize> {
    use std::ops::Bound;
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e + 1,
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    let end = end.min(len);
    start.min(end)..end
}
