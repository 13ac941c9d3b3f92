use crate::config::GridSize;
use crate::game::GameState;
use crate::snake::Position;

/// What a single grid cell holds, from the renderer's point of view.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cell {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

/// A full-board snapshot derived from one `GameState`.
///
/// Recomputed from scratch for every frame; render consumers never see a
/// partial update. Row-major storage, `(0, 0)` top-left.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CellGrid {
    bounds: GridSize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Returns the grid bounds of this snapshot.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the cell at `(x, y)`. Out-of-bounds reads are empty.
    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        if x >= self.bounds.width || y >= self.bounds.height {
            return Cell::Empty;
        }
        self.cells[usize::from(y) * usize::from(self.bounds.width) + usize::from(x)]
    }

    /// Iterates over `(x, y, cell)` triples in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, Cell)> + '_ {
        let width = self.bounds.width;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let x = (index % usize::from(width)) as u16;
            let y = (index / usize::from(width)) as u16;
            (x, y, *cell)
        })
    }
}

/// Projects game state into a cell grid.
///
/// Pure and read-only: it inspects the state and never feeds anything
/// back into the transition logic. Snake segments paint over food, so a
/// cell never renders ambiguously even from a hand-built state.
#[must_use]
pub fn project(state: &GameState) -> CellGrid {
    let bounds = state.bounds();
    let mut cells = vec![Cell::Empty; bounds.total_cells()];

    let index_of = |position: Position| -> Option<usize> {
        let x = u16::try_from(position.x).ok()?;
        let y = u16::try_from(position.y).ok()?;
        if x >= bounds.width || y >= bounds.height {
            return None;
        }
        Some(usize::from(y) * usize::from(bounds.width) + usize::from(x))
    };

    if let Some(index) = index_of(state.food) {
        cells[index] = Cell::Food;
    }

    let head = state.snake.head();
    for segment in state.snake.segments() {
        if let Some(index) = index_of(*segment) {
            cells[index] = if *segment == head {
                Cell::SnakeHead
            } else {
                Cell::SnakeBody
            };
        }
    }

    CellGrid { bounds, cells }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::game::GameState;
    use crate::snake::{Position, Snake};

    use super::{project, Cell};

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    #[test]
    fn projection_marks_head_body_food_and_empty() {
        let mut state = GameState::new_with_seed(BOUNDS, 1);
        state.snake = Snake::from_segments(vec![
            Position { x: 4, y: 4 },
            Position { x: 3, y: 4 },
        ]);
        state.food = Position { x: 7, y: 2 };

        let grid = project(&state);

        assert_eq!(grid.cell(4, 4), Cell::SnakeHead);
        assert_eq!(grid.cell(3, 4), Cell::SnakeBody);
        assert_eq!(grid.cell(7, 2), Cell::Food);
        assert_eq!(grid.cell(0, 0), Cell::Empty);
    }

    #[test]
    fn projection_covers_every_cell_exactly_once() {
        let state = GameState::new_with_seed(BOUNDS, 2);

        let grid = project(&state);

        assert_eq!(grid.iter().count(), BOUNDS.total_cells());
        let snake_cells = grid
            .iter()
            .filter(|(_, _, cell)| matches!(cell, Cell::SnakeHead | Cell::SnakeBody))
            .count();
        let food_cells = grid
            .iter()
            .filter(|(_, _, cell)| *cell == Cell::Food)
            .count();
        assert_eq!(snake_cells, state.snake.len());
        assert_eq!(food_cells, 1);
    }

    #[test]
    fn out_of_bounds_reads_are_empty() {
        let state = GameState::new_with_seed(BOUNDS, 3);
        let grid = project(&state);

        assert_eq!(grid.cell(BOUNDS.width, 0), Cell::Empty);
        assert_eq!(grid.cell(0, BOUNDS.height), Cell::Empty);
    }
}
