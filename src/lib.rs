#![warn(missing_docs)]
//! Concrete names as written in source code: mixfix identifiers with argument
//! slots, their dot-qualified paths, and the names of compilation units
//! together with the files they are loaded from.
//!
//! Names remember where they were written, but two names written in different
//! places are still the same name. Equality, ordering and hashing never look
//! at source ranges.
pub mod error;
pub mod fixity;
pub mod fresh;
pub mod id;
pub mod in_scope;
pub mod location;
pub mod module_name;
pub mod name;
pub mod qname;
pub mod utils;

pub use fixity::{Fixity, Mixfix, NumHoles};
pub use id::{AnonId, IdGenerator};
pub use in_scope::NotInScope;
pub use location::{CodeRange, HasRange, KillRange, SetRange};
pub use module_name::TopLevelModuleName;
pub use name::{IsNoName, Name, NamePart};
pub use qname::QName;
