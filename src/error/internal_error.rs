use crate::error::ProjectError;
use crate::location::CodeRange;

/// An invariant that upstream phases are responsible for was found broken.
/// This is a defect in the compiler rather than in the code being compiled,
/// the driver should report it and abandon the compilation unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InternalError {
  /// The broken invariant
  pub invariant: &'static str,
  /// The range of the value that broke it
  pub range: CodeRange,
}
impl InternalError {
  /// Record the violation. The violation is logged immediately because some
  /// drivers only print the first error of a unit.
  pub fn new(invariant: &'static str, range: CodeRange) -> Self {
    log::error!("internal error at {range}: {invariant}");
    Self { invariant, range }
  }
}
impl ProjectError for InternalError {
  const DESCRIPTION: &'static str = "internal error, an invariant of the compiler was violated";
  fn message(&self) -> String { format!("internal error: {}", self.invariant) }
  fn one_position(&self) -> CodeRange { self.range.clone() }
}
