//! Small helpers shared by the name types and the error machinery
pub mod iter;

pub use iter::{box_once, BoxedIter};
