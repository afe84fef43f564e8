//! Unique identities that keep anonymous names apart

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{self, AtomicU64};

/// Identity of an anonymous name. Two anonymous names are the same name
/// exactly if their ids are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnonId(NonZeroU64);
impl AnonId {
  /// The raw number, suitable for arbitrary ordering or display
  pub fn get(self) -> NonZeroU64 { self.0 }
}
impl fmt::Debug for AnonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// Hands out [AnonId]s. Every id is produced once per generator, including
/// when the generator is shared between threads.
#[derive(Debug, Default)]
pub struct IdGenerator {
  issued: AtomicU64,
}
impl IdGenerator {
  /// Create a generator that has not issued anything yet
  pub fn new() -> Self { Self::default() }

  /// Obtain an id that this generator has never returned before
  pub fn fresh(&self) -> AnonId {
    let prev = self.issued.fetch_add(1, atomic::Ordering::Relaxed);
    AnonId(NonZeroU64::MIN.saturating_add(prev))
  }
}

#[cfg(test)]
mod test {
  use hashbrown::HashSet;
  use rayon::prelude::*;

  use super::IdGenerator;

  #[test]
  fn sequential_ids_differ() {
    let idgen = IdGenerator::new();
    let a = idgen.fresh();
    let b = idgen.fresh();
    assert_ne!(a, b);
    assert!(a < b);
    assert!(a.get() < b.get());
    assert_eq!(a.get().get(), 1);
  }

  #[test]
  fn concurrent_ids_differ() {
    let idgen = IdGenerator::new();
    let ids = (0..10_000).into_par_iter().map(|_| idgen.fresh()).collect::<Vec<_>>();
    let distinct = ids.iter().copied().collect::<HashSet<_>>();
    assert_eq!(distinct.len(), ids.len());
  }
}
