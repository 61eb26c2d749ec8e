mod model;
mod predicate;

pub use model::*;
pub use predicate::*;
