//! Possibly mixfix identifiers as the user wrote them.
//!
//! A [Name] is either a sequence of literal tokens and argument slots, such as
//! `if_then_else_`, or the wildcard `_` written in binding position. Names
//! compare equal regardless of where they were read from.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use intern_all::{i, Tok};
use itertools::Itertools;

use crate::id::{AnonId, IdGenerator};
use crate::location::{CodeRange, HasRange, KillRange, SetRange};

/// The character that marks an argument slot in a mixfix name. On its own it
/// is the wildcard.
pub const HOLE: char = '_';
/// [HOLE] as a string
pub const HOLE_STR: &str = "_";

/// One token of a mixfix name
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum NamePart {
  /// An argument slot, written `_`
  Hole,
  /// A literal token. Never empty.
  Id(Tok<String>),
}
impl NamePart {
  /// Intern a literal token
  pub fn id(text: &str) -> Self { Self::Id(i(text)) }
  /// Whether this is an argument slot
  pub fn is_hole(&self) -> bool { matches!(self, Self::Hole) }
  /// The text of a literal token
  pub fn as_id(&self) -> Option<&str> {
    match self {
      Self::Hole => None,
      Self::Id(t) => Some(t.as_str()),
    }
  }
}
impl Ord for NamePart {
  fn cmp(&self, other: &Self) -> Ordering {
    match (self, other) {
      (Self::Hole, Self::Hole) => Ordering::Equal,
      (Self::Hole, Self::Id(_)) => Ordering::Less,
      (Self::Id(_), Self::Hole) => Ordering::Greater,
      (Self::Id(l), Self::Id(r)) => l.as_str().cmp(r.as_str()),
    }
  }
}
impl PartialOrd for NamePart {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
impl fmt::Display for NamePart {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Hole => write!(f, "{HOLE}"),
      Self::Id(t) => write!(f, "{}", t.as_str()),
    }
  }
}
impl fmt::Debug for NamePart {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Hole => write!(f, "Hole"),
      Self::Id(t) => f.debug_tuple("Id").field(&t.as_str()).finish(),
    }
  }
}

/// Split a raw identifier at every [HOLE].
///
/// The wildcard itself is kept as a literal token so that the name of the `_`
/// token remains expressible. Empty spans between markers are dropped, and the
/// empty string has no parts at all.
pub fn parts_from_raw(raw: &str) -> Vec<NamePart> {
  if raw == HOLE_STR {
    return vec![NamePart::id(HOLE_STR)];
  }
  let mut parts = Vec::new();
  for (n, span) in raw.split(HOLE).enumerate() {
    if n != 0 {
      parts.push(NamePart::Hole)
    }
    if !span.is_empty() {
      parts.push(NamePart::id(span))
    }
  }
  parts
}

/// A name as it appears in source code, before scope checking.
///
/// Equality, ordering and hashing ignore the range. Anonymous names sort
/// before all identifiers.
#[derive(Clone)]
pub enum Name {
  /// A possibly mixfix identifier. The parts are not expected to be empty.
  Identifier {
    /// Where the identifier was written
    range: CodeRange,
    /// Literal tokens and argument slots in order
    parts: Vec<NamePart>,
  },
  /// The wildcard `_` in binding position. Every occurrence is a distinct
  /// name.
  Anonymous {
    /// Where the wildcard was written
    range: CodeRange,
    /// Identity of this occurrence
    id: AnonId,
  },
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
enum NameKey<'a> {
  Anonymous(AnonId),
  Identifier(&'a [NamePart]),
}

impl Name {
  /// An identifier made of the given parts
  pub fn new(range: CodeRange, parts: impl IntoIterator<Item = NamePart>) -> Self {
    Self::Identifier { range, parts: parts.into_iter().collect() }
  }
  /// Read a raw identifier, see [parts_from_raw]
  pub fn from_raw(range: CodeRange, raw: &str) -> Self {
    Self::Identifier { range, parts: parts_from_raw(raw) }
  }
  /// An identifier consisting of a single literal token
  pub fn simple(range: CodeRange, text: &str) -> Self {
    Self::Identifier { range, parts: vec![NamePart::id(text)] }
  }
  /// An infix operator `_text_`
  pub fn binary_operator(range: CodeRange, text: &str) -> Self {
    Self::Identifier { range, parts: vec![NamePart::Hole, NamePart::id(text), NamePart::Hole] }
  }
  /// The name consisting of a single argument slot
  pub fn hole(range: CodeRange) -> Self { Self::Identifier { range, parts: vec![NamePart::Hole] } }
  /// A wildcard with an identity no other wildcard from `ids` has
  pub fn anonymous(range: CodeRange, ids: &IdGenerator) -> Self {
    Self::Anonymous { range, id: ids.fresh() }
  }

  /// Whether this is a wildcard occurrence
  pub fn is_anonymous(&self) -> bool { matches!(self, Self::Anonymous { .. }) }

  /// The parts of the name as it would be printed. This is never empty for
  /// anonymous names, which print as a single `_` token.
  pub fn printed_parts(&self) -> Cow<'_, [NamePart]> {
    match self {
      Self::Identifier { parts, .. } => Cow::Borrowed(parts),
      Self::Anonymous { .. } => Cow::Owned(vec![NamePart::id(HOLE_STR)]),
    }
  }

  /// The literal tokens of the name, without the argument slots. These are the
  /// fragments the name can be searched by.
  pub fn string_parts(&self) -> Vec<Tok<String>> {
    (self.printed_parts().iter())
      .filter_map(|p| match p {
        NamePart::Hole => None,
        NamePart::Id(t) => Some(t.clone()),
      })
      .collect()
  }

  /// The name rendered back into a raw identifier
  pub fn to_raw(&self) -> String { self.to_string() }

  fn key(&self) -> NameKey<'_> {
    match self {
      Self::Identifier { parts, .. } => NameKey::Identifier(parts),
      Self::Anonymous { id, .. } => NameKey::Anonymous(*id),
    }
  }
}

impl PartialEq for Name {
  fn eq(&self, other: &Self) -> bool { self.key() == other.key() }
}
impl Eq for Name {}
impl Ord for Name {
  fn cmp(&self, other: &Self) -> Ordering { self.key().cmp(&other.key()) }
}
impl PartialOrd for Name {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
impl Hash for Name {
  fn hash<H: Hasher>(&self, state: &mut H) { self.key().hash(state) }
}

impl fmt::Display for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Identifier { parts, .. } => write!(f, "{}", parts.iter().format("")),
      Self::Anonymous { .. } => write!(f, "{HOLE}"),
    }
  }
}
impl fmt::Debug for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Identifier { .. } => write!(f, "Name({self})"),
      Self::Anonymous { id, .. } => write!(f, "Name({HOLE}{id:?})"),
    }
  }
}

impl HasRange for Name {
  fn range(&self) -> CodeRange {
    match self {
      Self::Identifier { range, .. } | Self::Anonymous { range, .. } => range.clone(),
    }
  }
}
impl SetRange for Name {
  fn with_range(self, range: CodeRange) -> Self {
    match self {
      Self::Identifier { parts, .. } => Self::Identifier { range, parts },
      Self::Anonymous { id, .. } => Self::Anonymous { range, id },
    }
  }
}
impl KillRange for Name {
  fn kill_range(self) -> Self { self.with_range(CodeRange::Unknown) }
}

/// Recognizes what the user wrote as `_` in a binding position, as opposed to
/// the argument slots of an operator
pub trait IsNoName {
  /// Whether this stands for the wildcard
  fn is_no_name(&self) -> bool;
}
impl IsNoName for str {
  fn is_no_name(&self) -> bool { self == HOLE_STR }
}
impl IsNoName for Name {
  fn is_no_name(&self) -> bool {
    match self {
      Self::Anonymous { .. } => true,
      Self::Identifier { parts, .. } => match &parts[..] {
        [] | [NamePart::Hole] => true,
        [NamePart::Id(t)] => t.as_str().is_no_name(),
        _ => false,
      },
    }
  }
}
