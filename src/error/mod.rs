//! Errors raised while deriving and validating names
mod file_outside_root;
mod internal_error;
mod project_error;
mod unexpected_extension;

pub use file_outside_root::FileOutsideRoot;
pub use internal_error::InternalError;
pub use project_error::{
  DynProjectError, ErrorPosition, ProjectError, ProjectErrorObj, ProjectResult,
};
pub use unexpected_extension::UnexpectedExtension;
