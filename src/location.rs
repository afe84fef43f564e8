//! Source ranges attached to names for diagnostics. Ranges never take part in
//! the identity of the values that carry them.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A span of characters in a source file, or the absence of one. Cheap to
/// clone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodeRange {
  /// Location information lost or the value was generated on the fly
  #[default]
  Unknown,
  /// Character slice of a file
  Range {
    /// The file the characters belong to
    file: Arc<PathBuf>,
    /// Index of the first character
    start: usize,
    /// Index one past the last character
    end: usize,
  },
}

impl CodeRange {
  /// A range within a file
  pub fn new(file: impl Into<PathBuf>, range: std::ops::Range<usize>) -> Self {
    Self::Range { file: Arc::new(file.into()), start: range.start, end: range.end }
  }

  /// Character indices, if known
  pub fn span(&self) -> Option<std::ops::Range<usize>> {
    match self {
      Self::Unknown => None,
      Self::Range { start, end, .. } => Some(*start..*end),
    }
  }

  /// File, if known
  pub fn file(&self) -> Option<&Path> {
    match self {
      Self::Unknown => None,
      Self::Range { file, .. } => Some(file.as_path()),
    }
  }

  /// Whether any location information is present
  pub fn is_known(&self) -> bool { matches!(self, Self::Range { .. }) }

  /// The smallest range covering both operands. If they are in different
  /// files the left one wins; an unknown range yields to the other side.
  #[must_use]
  pub fn fuse(self, other: Self) -> Self {
    match (self, other) {
      (Self::Unknown, other) => other,
      (this, Self::Unknown) => this,
      (Self::Range { file, start, end }, Self::Range { file: f2, start: s2, end: e2 })
        if file == f2 =>
        Self::Range { file, start: start.min(s2), end: end.max(e2) },
      (this, _) => this,
    }
  }
}

impl fmt::Display for CodeRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Unknown => write!(f, "unknown"),
      Self::Range { file, start, end } => write!(f, "{}:{start}..{end}", file.display()),
    }
  }
}

/// Values that know which span of source they were read from
pub trait HasRange {
  /// The span covering the whole value
  fn range(&self) -> CodeRange;
}

/// Values whose range can be substituted
pub trait SetRange: HasRange {
  /// A copy of the value pointing at a different span
  #[must_use = "This is a pure function"]
  fn with_range(self, range: CodeRange) -> Self;
}

/// Values that can have every range inside them erased
pub trait KillRange {
  /// A copy of the value with all ranges set to [CodeRange::Unknown]
  #[must_use = "This is a pure function"]
  fn kill_range(self) -> Self;
}

impl HasRange for CodeRange {
  fn range(&self) -> CodeRange { self.clone() }
}

impl<T: HasRange> HasRange for [T] {
  fn range(&self) -> CodeRange {
    self.iter().fold(CodeRange::Unknown, |acc, t| acc.fuse(t.range()))
  }
}

#[cfg(test)]
mod test {
  use std::path::Path;

  use super::{CodeRange, HasRange};

  #[test]
  fn fuse_same_file() {
    let l = CodeRange::new("a.lang", 4..6);
    let r = CodeRange::new("a.lang", 10..12);
    assert_eq!(l.clone().fuse(r.clone()), CodeRange::new("a.lang", 4..12));
    assert_eq!(r.fuse(l), CodeRange::new("a.lang", 4..12));
  }

  #[test]
  fn fuse_prefers_known() {
    let r = CodeRange::new("a.lang", 1..2);
    assert_eq!(CodeRange::Unknown.fuse(r.clone()), r);
    assert_eq!(r.clone().fuse(CodeRange::Unknown), r);
    let other = CodeRange::new("b.lang", 0..40);
    assert_eq!(r.clone().fuse(other), r);
  }

  #[test]
  fn slice_range() {
    let parts = [CodeRange::new("m.lang", 3..4), CodeRange::Unknown, CodeRange::new("m.lang", 7..9)];
    assert_eq!(parts.range(), CodeRange::new("m.lang", 3..9));
    assert_eq!(<[CodeRange]>::range(&[]), CodeRange::Unknown);
  }

  #[test]
  fn accessors() {
    let r = CodeRange::new("x/y.lang", 1..5);
    assert!(r.is_known());
    assert_eq!(r.span(), Some(1..5));
    assert_eq!(r.file(), Some(Path::new("x/y.lang")));
    assert!(!CodeRange::Unknown.is_known());
    assert_eq!(CodeRange::Unknown.span(), None);
    assert_eq!(CodeRange::Unknown.file(), None);
  }

  #[test]
  fn display() {
    assert_eq!(CodeRange::Unknown.to_string(), "unknown");
    assert_eq!(CodeRange::new("x/y.lang", 1..5).to_string(), "x/y.lang:1..5");
  }
}
