use std::path::PathBuf;

use crate::error::{ErrorPosition, ProjectError};
use crate::location::CodeRange;

/// Error produced when a file that should hold a module is not located
/// under the project root the module name is resolved against
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileOutsideRoot {
  /// The project root
  pub root: PathBuf,
  /// The loaded file
  pub file: PathBuf,
}
impl ProjectError for FileOutsideRoot {
  const DESCRIPTION: &'static str = "a source file is outside of the project root";
  fn message(&self) -> String {
    format!("{} is not inside {}", self.file.display(), self.root.display())
  }
  fn positions(&self) -> impl IntoIterator<Item = ErrorPosition> {
    [ErrorPosition {
      range: CodeRange::new(self.file.clone(), 0..0),
      message: Some(format!("expected to be below {}", self.root.display())),
    }]
  }
}
