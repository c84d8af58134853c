pub mod legend;
pub mod lookup;
pub mod manager;
pub mod normalize;
pub mod session;
pub mod validate;

pub use manager::{BoardManager, DropPosition, DropResult, Outcome, Rejection};
pub use session::BoardSession;
