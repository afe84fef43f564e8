//! Variations of a name that avoid clashes when printing, `x`, `x₁`, `x₂` and
//! so on.
//!
//! A name is varied in its last literal token. A token that already ends in a
//! counter of some style keeps that style.

use intern_all::i;

use crate::name::{IsNoName, Name, NamePart};

const SUBSCRIPT_ZERO: u32 = '₀' as u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Suffix {
  /// `x''`
  Prime(usize),
  /// `x12`
  Index(u64),
  /// `x₁₂`
  Subscript(u64),
}

fn from_subscript(c: char) -> Option<char> {
  let n = (c as u32).checked_sub(SUBSCRIPT_ZERO).filter(|n| *n < 10)?;
  char::from_digit(n, 10)
}

fn to_subscript(n: u64) -> String {
  (n.to_string().chars())
    .filter_map(|d| d.to_digit(10).and_then(|d| char::from_u32(SUBSCRIPT_ZERO + d)))
    .collect()
}

/// Split a token into its root and counter
fn suffix_view(s: &str) -> (&str, Option<Suffix>) {
  let primes = s.len() - s.trim_end_matches('\'').len();
  if primes != 0 {
    return (&s[..s.len() - primes], Some(Suffix::Prime(primes)));
  }
  let root = s.trim_end_matches(|c: char| c.is_ascii_digit());
  if root.len() != s.len() {
    if let Ok(n) = s[root.len()..].parse() {
      return (root, Some(Suffix::Index(n)));
    }
  }
  let root = s.trim_end_matches(|c| from_subscript(c).is_some());
  if root.len() != s.len() {
    let digits = s[root.len()..].chars().filter_map(from_subscript).collect::<String>();
    if let Ok(n) = digits.parse() {
      return (root, Some(Suffix::Subscript(n)));
    }
  }
  (s, None)
}

/// The next variation of a token. A counter that cannot be incremented is
/// treated as part of the root and a new counter is started after it, so the
/// result always differs from `s`.
pub fn next_str(s: &str) -> String {
  match suffix_view(s) {
    (root, Some(Suffix::Prime(n))) => format!("{root}{}", "'".repeat(n + 1)),
    (root, Some(Suffix::Index(n))) if n < u64::MAX => format!("{root}{}", n + 1),
    (root, Some(Suffix::Subscript(n))) if n < u64::MAX => format!("{root}{}", to_subscript(n + 1)),
    _ => format!("{s}{}", to_subscript(1)),
  }
}

/// A token without its counter
pub fn str_root(s: &str) -> &str { suffix_view(s).0 }

fn last_id_index(parts: &[NamePart]) -> Option<usize> { parts.iter().rposition(|p| !p.is_hole()) }

impl Name {
  /// The next variation of the name. None if there is no literal token to
  /// vary, as for the wildcard.
  pub fn next_name(&self) -> Option<Self> {
    let Self::Identifier { range, parts } = self else { return None };
    if self.is_no_name() {
      return None;
    }
    let n = last_id_index(parts)?;
    let mut parts = parts.clone();
    parts[n] = NamePart::Id(i(&*next_str(parts[n].as_id()?)));
    Some(Self::Identifier { range: range.clone(), parts })
  }

  /// The rendered name with the counter of its last literal token removed
  pub fn name_root(&self) -> String {
    let parts = self.printed_parts();
    match last_id_index(&parts) {
      None => self.to_raw(),
      Some(n) => (parts.iter().enumerate())
        .map(|(k, p)| match p.as_id() {
          Some(s) if k == n => str_root(s).to_string(),
          _ => p.to_string(),
        })
        .collect(),
    }
  }
}

/// Whether two names are variations of each other
pub fn same_root(x: &Name, y: &Name) -> bool { x.name_root() == y.name_root() }

/// The first variation of `x`, starting with `x` itself, that is not taken.
/// None if `x` is taken and cannot be varied.
pub fn first_non_taken_name(taken: impl Fn(&Name) -> bool, x: Name) -> Option<Name> {
  let mut x = x;
  while taken(&x) {
    x = x.next_name()?;
  }
  Some(x)
}

#[cfg(test)]
mod test {
  use hashbrown::HashSet;

  use super::{first_non_taken_name, next_str, same_root, str_root, to_subscript};
  use crate::id::IdGenerator;
  use crate::location::CodeRange;
  use crate::name::Name;

  fn name(raw: &str) -> Name { Name::from_raw(CodeRange::Unknown, raw) }

  #[test]
  fn next_strings() {
    assert_eq!(next_str("x"), "x₁");
    assert_eq!(next_str("x₁"), "x₂");
    assert_eq!(next_str("x₉"), "x₁₀");
    assert_eq!(next_str("x'"), "x''");
    assert_eq!(next_str("x9"), "x10");
    assert_eq!(str_root("x₁₂"), "x");
    assert_eq!(str_root("f''"), "f");
    assert_eq!(str_root("y"), "y");
  }

  #[test]
  fn saturated_counter_restarts() {
    let max = format!("x{}", u64::MAX);
    assert_eq!(next_str(&max), format!("{max}₁"));
    assert_eq!(next_str(&format!("{max}₁")), format!("{max}₂"));
    let sub_max = format!("x{}", to_subscript(u64::MAX));
    assert_eq!(next_str(&sub_max), format!("{sub_max}₁"));
    let x = name(&max);
    assert_eq!(first_non_taken_name(|n| *n == x, x.clone()), Some(name(&format!("{max}₁"))));
  }

  #[test]
  fn varies_last_token() {
    assert_eq!(name("if_then_else_").next_name(), Some(name("if_then_else₁_")));
    assert_eq!(name("x").next_name(), Some(name("x₁")));
    assert_eq!(name("__").next_name(), None);
    assert_eq!(name("_").next_name(), None);
    let ids = IdGenerator::new();
    assert_eq!(Name::anonymous(CodeRange::Unknown, &ids).next_name(), None);
  }

  #[test]
  fn roots() {
    assert_eq!(name("x₃").name_root(), "x");
    assert_eq!(name("_+'_").name_root(), "_+_");
    assert!(same_root(&name("x"), &name("x₁₂")));
    assert!(!same_root(&name("x"), &name("y")));
  }

  #[test]
  fn first_free() {
    let taken = ["x", "x₁", "x₂"].into_iter().map(name).collect::<HashSet<_>>();
    assert_eq!(first_non_taken_name(|n| taken.contains(n), name("x")), Some(name("x₃")));
    assert_eq!(first_non_taken_name(|n| taken.contains(n), name("y")), Some(name("y")));
    assert_eq!(first_non_taken_name(|_| true, name("_")), None);
    assert_eq!(first_non_taken_name(|_| true, name("__")), None);
  }
}
