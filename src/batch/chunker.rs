// Lazy fixed-size chunking over any ordered sequence.
// -----------------------------------------------------
// `chunk` wraps the input's iterator in a single-pass cursor. Every `next()` pulls up to
// `size` items into a brand new Vec, so a yielded chunk never aliases internal state.
// Iterating again means calling `chunk` again on the same input.

use std::iter::FusedIterator;

use crate::error::{UtilError, UtilResult};

// ------------------------------- Iterator ------------------------------------

/// Single-pass iterator of ordered chunks. Built by [`chunk`].
#[derive(Debug, Clone)]
pub struct Chunks<I: Iterator> {
    cursor: I,
    size: usize,
    done: bool,
}

impl<I: Iterator> Chunks<I> {
    /// Configured chunk size (always >= 1).
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut current = Vec::with_capacity(self.size);
        while current.len() < self.size {
            match self.cursor.next() {
                Some(item) => current.push(item),
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if current.is_empty() {
            None
        } else {
            Some(current)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.cursor.size_hint();
        (lo.div_ceil(self.size), hi.map(|h| h.div_ceil(self.size)))
    }
}

impl<I: Iterator> FusedIterator for Chunks<I> {}

// ------------------------------- Entry points --------------------------------

/// Split `sequence` into ordered chunks of `size` items; the last chunk may be short.
///
/// Fails with `InvalidArgument` when `size` is zero. Nothing is consumed from the
/// input until the returned iterator is advanced.
pub fn chunk<S>(sequence: S, size: usize) -> UtilResult<Chunks<S::IntoIter>>
where
    S: IntoIterator,
{
    if size == 0 {
        return Err(UtilError::invalid("chunk size must be a positive integer"));
    }
    log::trace!("chunking sequence with size {}", size);
    Ok(Chunks {
        cursor: sequence.into_iter(),
        size,
        done: false,
    })
}

/// Borrowing variant for callers that already hold a slice.
pub fn chunk_slice<T>(items: &[T], size: usize) -> UtilResult<std::slice::Chunks<'_, T>> {
    if size == 0 {
        return Err(UtilError::invalid("chunk size must be a positive integer"));
    }
    Ok(items.chunks(size))
}

// ---------------------------------- Tests ------------------------------------
