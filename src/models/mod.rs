pub mod board;
pub mod column;
pub mod tag;
pub mod task;

pub use board::*;
pub use column::*;
pub use tag::*;
pub use task::*;
