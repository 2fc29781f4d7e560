pub mod confetti;
pub mod view;

pub use confetti::Confetti;
pub use view::{Screen, Status, ViewState};
