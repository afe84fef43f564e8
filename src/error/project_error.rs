use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::location::CodeRange;
use crate::utils::{box_once, BoxedIter};

/// A point of interest in resolving the error, such as the name that could not
/// be resolved or the file that was loaded for a module
pub struct ErrorPosition {
  /// The suspected range
  pub range: CodeRange,
  /// Any information about the role of this range
  pub message: Option<String>,
}

/// Errors raised while deriving or validating names, addressed either to the
/// user or, for [super::InternalError], to the maintainers of an upstream
/// phase
pub trait ProjectError: Sized + Send + Sync + 'static {
  /// A general description of this type of error
  const DESCRIPTION: &'static str;
  /// A formatted message that includes specific parameters
  #[must_use]
  fn message(&self) -> String { Self::DESCRIPTION.to_string() }
  /// Code positions relevant to this error. If you don't implement this, you
  /// must implement [ProjectError::one_position]
  #[must_use]
  fn positions(&self) -> impl IntoIterator<Item = ErrorPosition> {
    box_once(ErrorPosition { range: self.one_position(), message: None })
  }
  /// Short way to provide a single range. If you don't implement this, you
  /// must implement [ProjectError::positions]
  #[must_use]
  fn one_position(&self) -> CodeRange {
    unimplemented!("Error type did not implement either positions or one_position")
  }
  /// Convert the error into an `Arc<dyn DynProjectError>` to be able to
  /// handle various errors together
  #[must_use]
  fn pack(self) -> ProjectErrorObj { Arc::new(self) }
}

/// Object-safe version of [ProjectError]. Implement that instead of this.
pub trait DynProjectError: Send + Sync {
  /// Access type information about this error
  #[must_use]
  fn as_any(&self) -> &dyn Any;
  /// A general description of this type of error
  #[must_use]
  fn description(&self) -> &str;
  /// A formatted message that includes specific parameters
  #[must_use]
  fn message(&self) -> String { self.description().to_string() }
  /// Code positions relevant to this error.
  #[must_use]
  fn positions(&self) -> BoxedIter<ErrorPosition>;
}

impl<T> DynProjectError for T
where T: ProjectError
{
  fn as_any(&self) -> &dyn Any { self }
  fn description(&self) -> &str { T::DESCRIPTION }
  fn message(&self) -> String { ProjectError::message(self) }
  fn positions(&self) -> BoxedIter<ErrorPosition> {
    Box::new(ProjectError::positions(self).into_iter())
  }
}

impl dyn DynProjectError {
  /// Whether the error is of the given concrete type
  pub fn is<T: ProjectError>(&self) -> bool { self.as_any().is::<T>() }
  /// Recover the concrete error
  pub fn downcast_ref<T: ProjectError>(&self) -> Option<&T> { self.as_any().downcast_ref() }
}

impl fmt::Display for dyn DynProjectError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let description = self.description();
    let message = self.message();
    let positions = self.positions().collect::<Vec<_>>();
    writeln!(f, "Project error: {description}\n{message}")?;
    if positions.is_empty() {
      writeln!(f, "No locations specified")?;
    } else {
      for ErrorPosition { range, message } in positions {
        match message {
          None => writeln!(f, "@{range}"),
          Some(msg) => writeln!(f, "@{range}: {msg}"),
        }?
      }
    }
    Ok(())
  }
}

impl fmt::Debug for dyn DynProjectError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{self}") }
}

/// Type-erased [ProjectError] implementor through the [DynProjectError]
/// object-trait
pub type ProjectErrorObj = Arc<dyn DynProjectError>;
/// Alias for a result with an error of [Arc] of [ProjectError] trait object.
/// This is the type of result returned by every fallible operation on names.
pub type ProjectResult<T> = Result<T, ProjectErrorObj>;
