use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, START_DIRECTION};
use crate::food;
use crate::input::{direction_change_is_valid, Direction};
use crate::snake::{Position, Snake};

/// Complete game state for one session.
///
/// This is a plain value: the transition functions (`ticked`,
/// `with_direction`, `restart`) consume the current state and return the
/// next one, and the host replaces its single owned copy wholesale after
/// each call. Nothing here is shared or mutated in place across calls.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub game_over: bool,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game with food placed from an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::from_rng(StdRng::from_entropy(), bounds)
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), bounds)
    }

    fn from_rng(mut rng: StdRng, bounds: GridSize) -> Self {
        let start = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let snake = Snake::new(start);
        let food = food::place(&mut rng, bounds, &snake)
            .expect("a fresh board always has a free cell for food");

        Self {
            snake,
            food,
            direction: START_DIRECTION,
            game_over: false,
            bounds,
            rng,
        }
    }

    /// Returns the grid bounds this game is played on.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Discards this session and returns the initial configuration, with
    /// freshly placed food. Always succeeds; the RNG carries over so a
    /// seeded session stays reproducible across restarts.
    #[must_use]
    pub fn restart(self) -> Self {
        Self::from_rng(self.rng, self.bounds)
    }

    /// Advances the game by one tick.
    ///
    /// The next head cell is the current head stepped in the travel
    /// direction and wrapped on the toroidal grid. Hitting any current
    /// body cell ends the game with the body untouched; the tail counts,
    /// because it only vacates its cell after the head has moved.
    /// Eating food keeps the tail (the snake grows by one); otherwise the
    /// tail is dropped and the length stays constant.
    ///
    /// A tick on a finished game is a no-op, so a straggling timer event
    /// cannot corrupt the final state.
    #[must_use]
    pub fn ticked(mut self) -> Self {
        if self.game_over {
            return self;
        }

        let next_head = self.snake.head().stepped(self.direction).wrapped(self.bounds);

        if self.snake.occupies(next_head) {
            self.game_over = true;
            return self;
        }

        if next_head == self.food {
            self.snake = self.snake.grown(next_head);
            match food::place(&mut self.rng, self.bounds, &self.snake) {
                Ok(food) => self.food = food,
                // The snake covers the whole grid. Nothing left to eat.
                Err(_) => self.game_over = true,
            }
        } else {
            self.snake = self.snake.advanced(next_head);
        }

        self
    }

    /// Applies a direction-change request.
    ///
    /// A request that reverses the current direction is dropped silently;
    /// accepting it would drive the head straight into the neck. Requests
    /// on a finished game are also dropped.
    #[must_use]
    pub fn with_direction(mut self, requested: Direction) -> Self {
        if self.game_over {
            return self;
        }

        if direction_change_is_valid(self.direction, requested) {
            self.direction = requested;
        }

        self
    }
}
