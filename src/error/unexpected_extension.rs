use std::path::PathBuf;

use crate::error::ProjectError;
use crate::location::CodeRange;

/// Error produced when a file is asked to hold a module but its extension is
/// not that of source files
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnexpectedExtension {
  /// The offending file
  pub file: PathBuf,
  /// The extension source files should have
  pub expected: String,
}
impl ProjectError for UnexpectedExtension {
  const DESCRIPTION: &'static str = "a source file has the wrong extension";
  fn message(&self) -> String {
    match self.file.extension() {
      Some(ext) => format!(
        "{} has extension .{}, expected .{}",
        self.file.display(),
        ext.to_string_lossy(),
        self.expected
      ),
      None => format!("{} has no extension, expected .{}", self.file.display(), self.expected),
    }
  }
  fn one_position(&self) -> CodeRange { CodeRange::new(self.file.clone(), 0..0) }
}
