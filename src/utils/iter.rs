//! Utility functions to get rid of explicit casts to BoxedIter which are
//! tedious

use std::iter;

/// A type-erased iterator, returned from object-safe trait methods
pub type BoxedIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// BoxedIter of a single element
pub fn box_once<'a, T: 'a>(t: T) -> BoxedIter<'a, T> { Box::new(iter::once(t)) }
