use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighbouring position one cell away in `direction`,
    /// without wrapping.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }

    /// Returns this position wrapped into bounds on both axes.
    ///
    /// The grid is a torus: stepping past an edge re-enters from the
    /// opposite edge.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Snake body as an ordered sequence of cells, head first.
///
/// Invariant: at least one segment, and no duplicate cells while the game
/// is alive. The transition functions preserve this by checking the next
/// head against the whole body before advancing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);
        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns a snake moved one cell: `next_head` prepended, tail dropped.
    #[must_use]
    pub fn advanced(mut self, next_head: Position) -> Self {
        self.body.push_front(next_head);
        let _ = self.body.pop_back();
        self
    }

    /// Returns a snake grown one cell: `next_head` prepended, tail kept.
    #[must_use]
    pub fn grown(mut self, next_head: Position) -> Self {
        self.body.push_front(next_head);
        self
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 8,
    };

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let wrapped_left = Position { x: -1, y: 3 }.wrapped(BOUNDS);
        let wrapped_bottom = Position { x: 4, y: 8 }.wrapped(BOUNDS);

        assert_eq!(wrapped_left, Position { x: 9, y: 3 });
        assert_eq!(wrapped_bottom, Position { x: 4, y: 0 });
    }

    #[test]
    fn stepping_moves_exactly_one_cell_on_one_axis() {
        let origin = Position { x: 4, y: 4 };

        assert_eq!(origin.stepped(Direction::Up), Position { x: 4, y: 3 });
        assert_eq!(origin.stepped(Direction::Down), Position { x: 4, y: 5 });
        assert_eq!(origin.stepped(Direction::Left), Position { x: 3, y: 4 });
        assert_eq!(origin.stepped(Direction::Right), Position { x: 5, y: 4 });
    }

    #[test]
    fn step_then_wrap_crosses_every_edge() {
        let top = Position { x: 4, y: 0 }.stepped(Direction::Up).wrapped(BOUNDS);
        let bottom = Position { x: 4, y: 7 }
            .stepped(Direction::Down)
            .wrapped(BOUNDS);
        let left = Position { x: 0, y: 3 }
            .stepped(Direction::Left)
            .wrapped(BOUNDS);
        let right = Position { x: 9, y: 3 }
            .stepped(Direction::Right)
            .wrapped(BOUNDS);

        assert_eq!(top, Position { x: 4, y: 7 });
        assert_eq!(bottom, Position { x: 4, y: 0 });
        assert_eq!(left, Position { x: 9, y: 3 });
        assert_eq!(right, Position { x: 0, y: 3 });
    }

    #[test]
    fn advancing_keeps_length_constant() {
        let snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 3, y: 5 },
        ]);

        let moved = snake.advanced(Position { x: 6, y: 5 });

        assert_eq!(moved.len(), 3);
        assert_eq!(moved.head(), Position { x: 6, y: 5 });
        assert!(!moved.occupies(Position { x: 3, y: 5 }));
    }

    #[test]
    fn growing_keeps_the_previous_tail() {
        let snake = Snake::new(Position { x: 5, y: 5 });

        let grown = snake.grown(Position { x: 6, y: 5 });

        assert_eq!(grown.len(), 2);
        assert_eq!(grown.head(), Position { x: 6, y: 5 });
        assert!(grown.occupies(Position { x: 5, y: 5 }));
    }
}
