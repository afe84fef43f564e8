//! Dotted names of compilation units and their place in the file system.
//!
//! A module `A.B.C` lives in `A/B/C.<ext>` relative to the project root. Only
//! path strings are manipulated here, nothing is read from disk.

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::path::{Component, Path, PathBuf};

use intern_all::{i, Tok};
use itertools::Itertools;
use trait_set::trait_set;

use crate::error::{
  FileOutsideRoot, InternalError, ProjectError, ProjectResult, UnexpectedExtension,
};
use crate::location::{CodeRange, HasRange, KillRange, SetRange};
use crate::qname::{QName, QUALIFIER};

trait_set! {
  /// Traits that all module path iterators implement
  pub trait NameIter = Iterator<Item = Tok<String>> + DoubleEndedIterator + ExactSizeIterator;
}

/// The fully qualified name of a compilation unit. Never empty.
///
/// Equality, ordering and hashing only look at the parts.
#[derive(Clone)]
pub struct TopLevelModuleName {
  range: CodeRange,
  parts: Vec<Tok<String>>,
}

impl TopLevelModuleName {
  /// Assert that the sequence and every part in it is nonempty and wrap it.
  /// Breaking either is the fault of whoever produced the parts, so it is
  /// reported as an [InternalError].
  pub fn new(
    range: CodeRange,
    parts: impl IntoIterator<Item = Tok<String>>,
  ) -> ProjectResult<Self> {
    let parts = parts.into_iter().collect::<Vec<_>>();
    if parts.is_empty() {
      return Err(InternalError::new("a top-level module name has no parts", range).pack());
    }
    if parts.iter().any(|t| t.is_empty()) {
      return Err(InternalError::new("a top-level module name has an empty part", range).pack());
    }
    Ok(Self { range, parts })
  }

  /// Read a `.` separated module name. The empty string is not a module name,
  /// and neither is anything with an empty component like `A..B` or `A.`.
  pub fn parse(range: CodeRange, dotted: &str) -> ProjectResult<Self> {
    let parts: Vec<Tok<String>> =
      if dotted.is_empty() { vec![] } else { dotted.split(QUALIFIER).map(i).collect() };
    Self::new(range, parts)
  }

  /// The module name denoted by a qualified name, one part per printed
  /// segment
  pub fn from_qname(q: &QName) -> Self {
    let parts = q.iter().map(|x| i(&*x.to_string())).collect();
    Self { range: q.range(), parts }
  }

  /// Recover the module name of `file` from the project root it was loaded
  /// from. This is the inverse of [TopLevelModuleName::to_file_name].
  pub fn from_file_name(root: &Path, file: &Path, ext: &str) -> ProjectResult<Self> {
    let ext = bare_extension(ext);
    let rel = (file.strip_prefix(root))
      .map_err(|_| FileOutsideRoot { root: root.to_path_buf(), file: file.to_path_buf() }.pack())?;
    if rel.extension() != Some(OsStr::new(ext)) {
      return Err(UnexpectedExtension { file: file.to_path_buf(), expected: ext.to_string() }.pack());
    }
    let parts = (rel.with_extension("").components())
      .filter_map(|c| match c {
        Component::Normal(s) => Some(i(&*s.to_string_lossy())),
        _ => None,
      })
      .collect::<Vec<_>>();
    let name = Self::new(CodeRange::new(file, 0..0), parts)?;
    log::debug!("{} holds module {name}", file.display());
    Ok(name)
  }

  /// The parts, outermost first
  pub fn parts(&self) -> &[Tok<String>] { &self.parts }
  /// Iterate over the parts
  pub fn iter(&self) -> impl NameIter + '_ { self.parts.iter().cloned() }
  /// Iterate over the text of the parts
  pub fn str_iter(&self) -> impl Iterator<Item = &'_ str> { self.parts.iter().map(|s| s.as_str()) }
  /// Number of parts
  #[allow(clippy::len_without_is_empty)] // never empty
  pub fn len(&self) -> NonZeroUsize {
    NonZeroUsize::new(self.parts.len()).expect("TopLevelModuleName never empty")
  }
  /// The path of the module's source file relative to the project root. All
  /// but the last part are directories, the last part is the file stem. The
  /// extension may be given with or without a leading dot.
  pub fn to_file_name(&self, ext: &str) -> PathBuf {
    let mut parts = self.iter();
    let last = parts.next_back().expect("TopLevelModuleName never empty");
    let mut path = parts.map(|t| t.as_str().to_string()).collect::<PathBuf>();
    let mut file = OsString::from(last.as_str());
    file.push(".");
    file.push(bare_extension(ext));
    path.push(file);
    path
  }

  /// The directory the module name was resolved against, given the path of
  /// the file that was loaded for it. That is the file's directory, then one
  /// level up for every part but the last.
  ///
  /// The file is trusted to correspond to this module. Ascending past the top
  /// of the path stops there.
  pub fn project_root(&self, file: &Path) -> PathBuf {
    let root = file.ancestors().take(self.len().get() + 1).last().unwrap_or(file);
    log::debug!("project root of {self} loaded from {} is {}", file.display(), root.display());
    root.to_path_buf()
  }
}

fn bare_extension(ext: &str) -> &str { ext.strip_prefix('.').unwrap_or(ext) }

impl From<&QName> for TopLevelModuleName {
  fn from(q: &QName) -> Self { Self::from_qname(q) }
}

impl PartialEq for TopLevelModuleName {
  fn eq(&self, other: &Self) -> bool { self.parts == other.parts }
}
impl Eq for TopLevelModuleName {}
impl Ord for TopLevelModuleName {
  fn cmp(&self, other: &Self) -> Ordering { self.str_iter().cmp(other.str_iter()) }
}
impl PartialOrd for TopLevelModuleName {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
impl Hash for TopLevelModuleName {
  fn hash<H: Hasher>(&self, state: &mut H) { self.parts.hash(state) }
}

impl fmt::Display for TopLevelModuleName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.str_iter().join(&QUALIFIER.to_string()))
  }
}
impl fmt::Debug for TopLevelModuleName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TopLevelModuleName({self})")
  }
}

impl HasRange for TopLevelModuleName {
  fn range(&self) -> CodeRange { self.range.clone() }
}
impl SetRange for TopLevelModuleName {
  fn with_range(self, range: CodeRange) -> Self { Self { range, ..self } }
}
impl KillRange for TopLevelModuleName {
  fn kill_range(self) -> Self { self.with_range(CodeRange::Unknown) }
}

#[cfg(test)]
mod test {
  use std::path::{Path, PathBuf};

  use hashbrown::HashSet;
  use intern_all::i;

  use super::TopLevelModuleName;
  use crate::error::{DynProjectError, FileOutsideRoot, InternalError, UnexpectedExtension};
  use crate::id::IdGenerator;
  use crate::location::{CodeRange, HasRange, KillRange};
  use crate::name::Name;
  use crate::qname::QName;

  fn module(dotted: &str) -> TopLevelModuleName {
    TopLevelModuleName::parse(CodeRange::Unknown, dotted).expect("module name literal")
  }

  #[test]
  fn from_qname() {
    let r = CodeRange::new("m.lang", 7..12);
    let m = TopLevelModuleName::from_qname(&QName::parse(r.clone(), "A.B.C"));
    assert_eq!(m.str_iter().collect::<Vec<_>>(), ["A", "B", "C"]);
    assert_eq!(m.range(), r);
    assert_eq!(m.to_string(), "A.B.C");
  }

  #[test]
  fn from_qname_prints_segments() {
    let ids = IdGenerator::new();
    let q = QName::simple(Name::simple(CodeRange::Unknown, "M"))
      .qualify(Name::anonymous(CodeRange::Unknown, &ids));
    assert_eq!(TopLevelModuleName::from(&q).str_iter().collect::<Vec<_>>(), ["M", "_"]);
  }

  #[test]
  fn file_name() {
    assert_eq!(module("A.B.C").to_file_name("lang"), PathBuf::from("A/B/C.lang"));
    assert_eq!(module("A.B.C").to_file_name(".lang"), PathBuf::from("A/B/C.lang"));
    assert_eq!(module("Main").to_file_name("lang"), PathBuf::from("Main.lang"));
  }

  #[test]
  fn parts_iteration() {
    let m = module("A.B.C");
    assert_eq!(m.len().get(), 3);
    assert_eq!(m.iter().len(), 3);
    let rev = m.iter().rev().map(|t| t.as_str().to_string()).collect::<Vec<_>>();
    assert_eq!(rev, ["C", "B", "A"]);
  }

  #[test]
  fn project_root() {
    let m = module("A.B.C");
    assert_eq!(m.project_root(Path::new("/foo/A/B/C.lang")), Path::new("/foo/"));
    assert_eq!(module("Main").project_root(Path::new("/src/Main.lang")), Path::new("/src"));
    // Ascending stops at the top of the path
    assert_eq!(m.project_root(Path::new("/C.lang")), Path::new("/"));
  }

  #[test]
  fn file_roundtrip() {
    let m = module("Data.List.Properties");
    let file = Path::new("/proj/lib").join(m.to_file_name("lang"));
    let root = m.project_root(&file);
    assert_eq!(root, Path::new("/proj/lib"));
    assert_eq!(TopLevelModuleName::from_file_name(&root, &file, "lang").expect("inverse"), m);
  }

  #[test]
  fn bad_files() {
    let err = TopLevelModuleName::from_file_name(Path::new("/a"), Path::new("/b/C.lang"), "lang")
      .expect_err("outside of root");
    assert!(err.is::<FileOutsideRoot>());
    let err = TopLevelModuleName::from_file_name(Path::new("/a"), Path::new("/a/C.txt"), "lang")
      .expect_err("wrong extension");
    assert!(err.is::<UnexpectedExtension>());
    assert!(err.message().contains(".txt"));
    let ext = err.downcast_ref::<UnexpectedExtension>().expect("checked by is");
    assert_eq!(ext.expected, "lang");
    assert!(err.downcast_ref::<FileOutsideRoot>().is_none());
  }

  #[test]
  fn empty_is_internal_error() {
    let err = TopLevelModuleName::new(CodeRange::Unknown, []).expect_err("empty module name");
    assert!(err.is::<InternalError>());
    assert!(TopLevelModuleName::parse(CodeRange::Unknown, "").is_err());
    assert!(err.to_string().contains("internal error"));
  }

  #[test]
  fn empty_component_is_internal_error() {
    for dotted in ["A..B", "A.", ".A", "."] {
      let err = TopLevelModuleName::parse(CodeRange::Unknown, dotted).expect_err(dotted);
      let internal = err.downcast_ref::<InternalError>().expect("internal error");
      assert!(internal.invariant.contains("empty part"), "{dotted}");
    }
    assert!(TopLevelModuleName::new(CodeRange::Unknown, [i("A"), i("")]).is_err());
  }

  #[test]
  fn range_blind_identity() {
    let a = TopLevelModuleName::new(CodeRange::new("x.lang", 0..1), [i("A"), i("B")])
      .expect("nonempty");
    let b = a.clone().kill_range();
    assert_eq!(a, b);
    let set = [a, b].into_iter().collect::<HashSet<_>>();
    assert_eq!(set.len(), 1);
    assert!(module("A.B") < module("A.C"));
    assert!(module("A") < module("A.B"));
  }
}
