//! Marking names that failed to resolve.
//!
//! Diagnostics flag a name as not in scope by prefixing its first literal
//! token with [NOT_IN_SCOPE_MARK]. The mark cannot be produced by the lexer,
//! so it never collides with a real identifier, and it can be removed again
//! to recover the name as written.

use intern_all::{i, Tok};

use crate::name::{Name, NamePart};
use crate::qname::QName;

/// The sentinel put in front of the first token of a name that is not in
/// scope
pub const NOT_IN_SCOPE_MARK: &str = ";";

/// Values carrying a name that may be marked as not in scope
pub trait NotInScope: Clone {
  /// Mark the value. Marking twice has the same result as marking once.
  #[must_use = "This is a pure function"]
  fn mark_not_in_scope(&self) -> Self;
  /// The value without the mark, or None if it was not marked
  fn strip_not_in_scope(&self) -> Option<Self>;
  /// The value without the mark if it had one, otherwise unchanged
  #[must_use = "This is a pure function"]
  fn remove_not_in_scope(&self) -> Self {
    self.strip_not_in_scope().unwrap_or_else(|| self.clone())
  }
  /// Whether the value is marked
  fn is_marked_not_in_scope(&self) -> bool { self.strip_not_in_scope().is_some() }
}

impl NotInScope for Tok<String> {
  fn mark_not_in_scope(&self) -> Self {
    if self.starts_with(NOT_IN_SCOPE_MARK) {
      self.clone()
    } else {
      i(&*format!("{NOT_IN_SCOPE_MARK}{}", self.as_str()))
    }
  }
  /// A token that is the bare mark has nothing to recover, literal tokens
  /// are never empty.
  fn strip_not_in_scope(&self) -> Option<Self> {
    self.strip_prefix(NOT_IN_SCOPE_MARK).filter(|s| !s.is_empty()).map(i)
  }
}

/// Only the first literal token is marked, argument slots in front of it are
/// skipped.
impl NotInScope for Vec<NamePart> {
  fn mark_not_in_scope(&self) -> Self {
    map_first_id(self, |t| Some(t.mark_not_in_scope())).unwrap_or_else(|| self.clone())
  }
  fn strip_not_in_scope(&self) -> Option<Self> { map_first_id(self, |t| t.strip_not_in_scope()) }
}

fn map_first_id(
  parts: &[NamePart],
  f: impl FnOnce(&Tok<String>) -> Option<Tok<String>>,
) -> Option<Vec<NamePart>> {
  let (n, tok) = parts.iter().enumerate().find_map(|(n, p)| match p {
    NamePart::Hole => None,
    NamePart::Id(t) => Some((n, t)),
  })?;
  let mut parts = parts.to_vec();
  parts[n] = NamePart::Id(f(tok)?);
  Some(parts)
}

/// Anonymous names have no token to mark and are left alone
impl NotInScope for Name {
  fn mark_not_in_scope(&self) -> Self {
    match self {
      Self::Identifier { range, parts } =>
        Self::Identifier { range: range.clone(), parts: parts.mark_not_in_scope() },
      Self::Anonymous { .. } => self.clone(),
    }
  }
  fn strip_not_in_scope(&self) -> Option<Self> {
    match self {
      Self::Identifier { range, parts } =>
        Some(Self::Identifier { range: range.clone(), parts: parts.strip_not_in_scope()? }),
      Self::Anonymous { .. } => None,
    }
  }
}

/// Only the outermost segment is marked
impl NotInScope for QName {
  fn mark_not_in_scope(&self) -> Self {
    match self {
      Self::Simple(x) => Self::Simple(x.mark_not_in_scope()),
      Self::Qualified(m, rest) => Self::Qualified(m.mark_not_in_scope(), rest.clone()),
    }
  }
  fn strip_not_in_scope(&self) -> Option<Self> {
    match self {
      Self::Simple(x) => Some(Self::Simple(x.strip_not_in_scope()?)),
      Self::Qualified(m, rest) => Some(Self::Qualified(m.strip_not_in_scope()?, rest.clone())),
    }
  }
}
