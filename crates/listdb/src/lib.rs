#![doc = include_str!("../README.md")]

#[cfg(feature = "derive")]
pub use listdb_derive::Model;

mod error;
mod key_path;
mod kind;
mod list;
mod notify;
mod object;
mod schema;
mod timestamp;
mod traits;
mod value;

pub use error::*;
pub use kind::*;
pub use list::*;
pub use notify::*;
pub use object::*;
pub use schema::*;
pub use timestamp::*;
pub use traits::*;
pub use value::*;

/// Key that addresses the elements themselves rather than one of their fields.
pub const SELF_KEY: &str = "self";

/// Separator of multi-segment key paths (`"owner.age"`).
pub const KEY_PATH_SEPARATOR: char = '.';

/// Maximum number of elements rendered by `Display` before eliding the rest.
const DESCRIPTION_MAX_ELEMENTS: usize = 100;

/// Maximum nesting of linked objects rendered by `Display` and serde.
const DESCRIPTION_MAX_DEPTH: usize = 5;
