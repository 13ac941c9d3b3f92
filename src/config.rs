use std::time::Duration;

use ratatui::symbols::border;

use crate::input::Direction;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// The fixed 20×20 playing field.
pub const GRID: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Direction the snake starts moving in.
pub const START_DIRECTION: Direction = Direction::Right;

/// Fixed simulation cadence. The game has no speed curve.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// How long the host loop waits for a key event between redraws.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};
