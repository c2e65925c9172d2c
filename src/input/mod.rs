pub mod controller;
pub mod handler;
pub mod swipe;

pub use controller::InputController;
pub use handler::{InputHandler, KeyAction};
pub use swipe::SwipeTracker;
