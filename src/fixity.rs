//! The shape of a mixfix name, derived from where its argument slots are.
//!
//! This says nothing of precedence or associativity, only which ends of an
//! operator are open.

use std::borrow::Cow;

use crate::name::{Name, NamePart};

/// Which ends of a name take arguments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fixity {
  /// Starts with a token and ends with a slot, like `-_` or `if_then_else_`
  Prefix,
  /// Starts with a slot and ends with a token, like `_!`
  Postfix,
  /// Starts and ends with a slot, like `_+_`. The lone slot `_` is also
  /// infix.
  Infix,
  /// Starts and ends with a token, like `foo` or `[_]`
  Nonfix,
}
impl Fixity {
  /// Classify a part sequence. Empty sequences have no fixity.
  pub fn of(parts: &[NamePart]) -> Option<Self> {
    let (first, last) = (parts.first()?, parts.last()?);
    Some(match (first.is_hole(), last.is_hole()) {
      (false, true) => Self::Prefix,
      (true, false) => Self::Postfix,
      (true, true) => Self::Infix,
      (false, false) => Self::Nonfix,
    })
  }
}

/// Anything that can be viewed as a sequence of mixfix parts
pub trait Mixfix {
  /// The parts the classification is based on
  fn mixfix_parts(&self) -> Cow<'_, [NamePart]>;

  /// See [Fixity::of]
  fn fixity(&self) -> Option<Fixity> { Fixity::of(&self.mixfix_parts()) }
  /// Token first, slot last
  fn is_prefix(&self) -> bool { self.fixity() == Some(Fixity::Prefix) }
  /// Slot first, token last
  fn is_postfix(&self) -> bool { self.fixity() == Some(Fixity::Postfix) }
  /// Slot on both ends
  fn is_infix(&self) -> bool { self.fixity() == Some(Fixity::Infix) }
  /// Token on both ends
  fn is_nonfix(&self) -> bool { self.fixity() == Some(Fixity::Nonfix) }
  /// More than one part, so either some slot or several tokens
  fn is_operator(&self) -> bool { self.mixfix_parts().len() > 1 }
  /// An operator with at least one open end
  fn is_open_mixfix(&self) -> bool {
    let parts = self.mixfix_parts();
    parts.len() > 1
      && (parts.first().is_some_and(NamePart::is_hole) || parts.last().is_some_and(NamePart::is_hole))
  }
}

impl Mixfix for [NamePart] {
  fn mixfix_parts(&self) -> Cow<'_, [NamePart]> { Cow::Borrowed(self) }
}

/// The wildcard classifies as the single token it prints as
impl Mixfix for Name {
  fn mixfix_parts(&self) -> Cow<'_, [NamePart]> { self.printed_parts() }
}

/// The arity of an operator
pub trait NumHoles {
  /// Number of argument slots
  fn num_holes(&self) -> usize;
}
impl NumHoles for [NamePart] {
  fn num_holes(&self) -> usize { self.iter().filter(|p| p.is_hole()).count() }
}
impl NumHoles for Name {
  fn num_holes(&self) -> usize {
    match self {
      Self::Identifier { parts, .. } => parts.num_holes(),
      Self::Anonymous { .. } => 0,
    }
  }
}

#[cfg(test)]
mod test {
  use super::{Fixity, Mixfix, NumHoles};
  use crate::id::IdGenerator;
  use crate::location::CodeRange;
  use crate::name::{parts_from_raw, Name, NamePart};

  fn name(raw: &str) -> Name { Name::from_raw(CodeRange::Unknown, raw) }

  #[test]
  fn classify() {
    assert_eq!(name("-_").fixity(), Some(Fixity::Prefix));
    assert_eq!(name("if_then_else_").fixity(), Some(Fixity::Prefix));
    assert_eq!(name("_!").fixity(), Some(Fixity::Postfix));
    assert_eq!(name("_+_").fixity(), Some(Fixity::Infix));
    assert_eq!(name("[_]").fixity(), Some(Fixity::Nonfix));
    assert_eq!(name("foo").fixity(), Some(Fixity::Nonfix));
    assert_eq!(name("").fixity(), None);
  }

  #[test]
  fn exactly_one_class() {
    for raw in ["-_", "_!", "_+_", "[_]", "foo", "__", "a_b", "_a_b", "a_b_"] {
      let x = name(raw);
      let hits = [x.is_prefix(), x.is_postfix(), x.is_infix(), x.is_nonfix()];
      assert_eq!(hits.iter().filter(|b| **b).count(), 1, "{raw} has exactly one fixity");
    }
    let empty: &[NamePart] = &[];
    assert!(!(empty.is_prefix() || empty.is_postfix() || empty.is_infix() || empty.is_nonfix()));
  }

  #[test]
  fn lone_hole_is_infix() {
    // The lone slot is also a no-name; both views are kept on purpose.
    let hole = Name::hole(CodeRange::Unknown);
    assert!(hole.is_infix());
    assert!(!hole.is_operator());
    assert!(!hole.is_open_mixfix());
  }

  #[test]
  fn operators() {
    assert!(name("_+_").is_operator());
    assert!(name("[_]").is_operator());
    assert!(!name("foo").is_operator());
    assert!(!name("_").is_operator());
    let ids = IdGenerator::new();
    let anon = Name::anonymous(CodeRange::Unknown, &ids);
    assert!(!anon.is_operator());
    assert!(anon.is_nonfix());
  }

  #[test]
  fn open_mixfix() {
    assert!(name("_+_").is_open_mixfix());
    assert!(name("-_").is_open_mixfix());
    assert!(name("_!").is_open_mixfix());
    assert!(!name("[_]").is_open_mixfix());
    assert!(!name("foo").is_open_mixfix());
  }

  #[test]
  fn holes() {
    assert_eq!(name("if_then_else_").num_holes(), 3);
    assert_eq!(name("foo").num_holes(), 0);
    assert_eq!(parts_from_raw("__").num_holes(), 2);
    assert_eq!(name("_").num_holes(), 0);
    let ids = IdGenerator::new();
    assert_eq!(Name::anonymous(CodeRange::Unknown, &ids).num_holes(), 0);
  }
}
