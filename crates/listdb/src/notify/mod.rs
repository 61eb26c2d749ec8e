mod index_set;
mod sink;

pub use index_set::*;
pub use sink::*;
