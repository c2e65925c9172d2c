//! Drag gesture tracking.
//!
//! A swipe starts on pointer-down and resolves on pointer-up; motion in
//! between does not matter.

/// Remembers where the current drag started
#[derive(Debug, Default, Clone)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    /// Finish the drag at `(x, y)` and return its delta.
    ///
    /// `None` if no drag was in progress.
    pub fn end(&mut self, x: i32, y: i32) -> Option<(i32, i32)> {
        self.start.take().map(|(sx, sy)| (x - sx, y - sy))
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Convert a delta in terminal cells to surface pixels.
///
/// One tile is drawn two columns wide and one row high.
pub fn cells_to_pixels(columns: i32, rows: i32, grid_size: u32) -> (i32, i32) {
    let grid = grid_size as i32;
    (columns * grid / 2, rows * grid)
}
