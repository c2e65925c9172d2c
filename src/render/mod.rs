pub mod board;
pub mod presenter;
pub mod renderer;

pub use board::{Board, BoardView};
pub use presenter::Presenter;
pub use renderer::Renderer;
