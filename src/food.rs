use rand::Rng;
use thiserror::Error;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Raised when food placement is requested while the snake covers every
/// cell of the grid. The game treats this as a terminal state: there is
/// nothing left to eat.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("no free cell left for food on the {width}×{height} grid")]
pub struct GridFull {
    pub width: u16,
    pub height: u16,
}

/// Picks a food cell uniformly among the cells the snake does not occupy.
///
/// Enumerating free cells instead of rejection-sampling keeps placement
/// O(grid) even when the snake covers most of the board, and makes the
/// full-grid case an explicit error rather than an infinite loop.
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Result<Position, GridFull> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return Err(GridFull {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}
