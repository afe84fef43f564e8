//! Dot-qualified names such as `Data.List._++_`

use std::fmt;

use crate::fixity::NumHoles;
use crate::location::{CodeRange, HasRange, KillRange, SetRange};
use crate::name::{IsNoName, Name};

/// Separates the segments of a qualified name
pub const QUALIFIER: char = '.';

/// A non-empty path of names, outermost module first.
///
/// The range of a qualified name is not stored, it is the fusion of the
/// ranges of its segments. Like [Name], equality and ordering ignore ranges.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QName {
  /// A module segment followed by the rest of the path
  Qualified(Name, Box<QName>),
  /// The innermost segment
  Simple(Name),
}

impl QName {
  /// An unqualified name
  pub fn simple(x: Name) -> Self { Self::Simple(x) }

  /// Build a path from its segments, outermost first. None if there are no
  /// segments.
  pub fn from_parts(parts: impl IntoIterator<Item = Name>) -> Option<Self> {
    let mut parts = parts.into_iter().collect::<Vec<_>>();
    let last = parts.pop()?;
    Some(parts.into_iter().rfold(Self::Simple(last), |q, x| Self::Qualified(x, Box::new(q))))
  }

  /// Read a dotted name, splitting every segment into mixfix parts. All
  /// segments get the same range.
  pub fn parse(range: CodeRange, dotted: &str) -> Self {
    let segments = dotted.split(QUALIFIER).map(|s| Name::from_raw(range.clone(), s));
    Self::from_parts(segments).expect("str::split always yields at least one segment")
  }

  /// Append `x` as the new innermost segment, so `A.B` qualified with `x` is
  /// `A.B.x`
  #[must_use = "This is a pure function"]
  pub fn qualify(self, x: Name) -> Self {
    match self {
      Self::Simple(m) => Self::Qualified(m, Box::new(Self::Simple(x))),
      Self::Qualified(m, rest) => Self::Qualified(m, Box::new(rest.qualify(x))),
    }
  }

  /// The innermost segment. Its range is replaced with that of the whole
  /// path, so diagnostics still point at everything the user wrote.
  pub fn unqualify(&self) -> Name { self.last().clone().with_range(self.range()) }

  /// The innermost segment as it is stored
  pub fn last(&self) -> &Name {
    match self {
      Self::Simple(x) => x,
      Self::Qualified(_, rest) => rest.last(),
    }
  }

  /// The outermost segment
  pub fn first(&self) -> &Name {
    match self {
      Self::Simple(x) | Self::Qualified(x, _) => x,
    }
  }

  /// Iterate over the segments, outermost first
  pub fn iter(&self) -> Segments<'_> { Segments(Some(self)) }

  /// All segments, outermost first
  pub fn parts(&self) -> Vec<Name> { self.iter().cloned().collect() }

  /// Whether there is more than one segment
  pub fn is_qualified(&self) -> bool { matches!(self, Self::Qualified(..)) }

  /// The sole segment of an unqualified name
  pub fn is_unqualified(&self) -> Option<&Name> {
    match self {
      Self::Simple(x) => Some(x),
      Self::Qualified(..) => None,
    }
  }
}

/// Iterator over the segments of a [QName]
#[derive(Clone)]
pub struct Segments<'a>(Option<&'a QName>);
impl<'a> Iterator for Segments<'a> {
  type Item = &'a Name;
  fn next(&mut self) -> Option<Self::Item> {
    match self.0.take()? {
      QName::Simple(x) => Some(x),
      QName::Qualified(x, rest) => {
        self.0 = Some(rest);
        Some(x)
      },
    }
  }
}
impl<'a> IntoIterator for &'a QName {
  type Item = &'a Name;
  type IntoIter = Segments<'a>;
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl HasRange for QName {
  fn range(&self) -> CodeRange { self.iter().fold(CodeRange::Unknown, |r, x| r.fuse(x.range())) }
}
impl KillRange for QName {
  fn kill_range(self) -> Self {
    match self {
      Self::Simple(x) => Self::Simple(x.kill_range()),
      Self::Qualified(x, rest) => Self::Qualified(x.kill_range(), Box::new(rest.kill_range())),
    }
  }
}

/// Qualification does not change the arity of an operator
impl NumHoles for QName {
  fn num_holes(&self) -> usize { self.last().num_holes() }
}

impl IsNoName for QName {
  fn is_no_name(&self) -> bool { self.is_unqualified().is_some_and(Name::is_no_name) }
}

/// Segments that are no-names in front are not printed; qualification by an
/// anonymous module is invisible.
impl fmt::Display for QName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Qualified(m, rest) if m.is_no_name() => write!(f, "{rest}"),
      Self::Qualified(m, rest) => write!(f, "{m}{QUALIFIER}{rest}"),
      Self::Simple(x) => write!(f, "{x}"),
    }
  }
}
impl fmt::Debug for QName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "QName({self})") }
}
