use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GameError;
use crate::food;
use crate::grid::{self, Direction, Pos};
use crate::snake::Snake;

pub const MIN_BOARD_SIZE: u16 = 3;

/// Below this size a session can start but is barely playable.
const COMFORTABLE_BOARD_SIZE: u16 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
}

/// What a single call into the game did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session opened, first food placed.
    Started,
    /// Plain move, length unchanged.
    Moved,
    /// Head landed on food; the snake grew and new food was placed.
    Ate,
    /// Head ran into the body. The session is over and the scheduler should stop.
    Collided,
    /// The session was already over; nothing changed.
    AlreadyOver,
}

/// Everything a renderer or scheduler needs to observe after a call.
#[derive(Clone, Debug, PartialEq)]
pub struct TickResult {
    /// Snake body, head first.
    pub snake: Vec<Pos>,
    pub food: Option<Pos>,
    pub food_changed: bool,
    pub score: u32,
    pub status: GameStatus,
    pub outcome: TickOutcome,
}

impl TickResult {
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }
}

/// One snake session on a square wrap-around board.
///
/// `advance` is the only thing that moves the snake, places food, or
/// changes the score. Once the status is [`GameStatus::Over`] every call is
/// a no-op; a new session needs a new `Game`.
#[derive(Debug)]
pub struct Game<R = StdRng> {
    board_size: u16,
    speed: f64,
    snake: Snake,
    food: Option<Pos>,
    direction: Direction,
    pending_direction: Direction,
    score: u32,
    status: GameStatus,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(board_size: u16, speed: f64) -> Result<Self, GameError> {
        Self::with_rng(board_size, speed, StdRng::from_entropy())
    }

    /// Same as [`Game::new`] with reproducible food placement.
    pub fn seeded(board_size: u16, speed: f64, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(board_size, speed, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(board_size: u16, speed: f64, rng: R) -> Result<Self, GameError> {
        if board_size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall {
                size: board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        if !speed.is_finite() || speed <= 0.0 {
            return Err(GameError::InvalidSpeed(speed));
        }
        if board_size < COMFORTABLE_BOARD_SIZE {
            warn!("Board size {} leaves almost no room to play", board_size);
        }

        Ok(Game {
            board_size,
            speed,
            snake: Snake::new(Pos::center(board_size)),
            food: None,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            status: GameStatus::Running,
            rng,
        })
    }

    pub fn board_size(&self) -> u16 {
        self.board_size
    }

    /// Ticks per second requested at construction.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Pos> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Places the first food. Calling it again once food exists changes nothing.
    pub fn start(&mut self) -> Result<TickResult, GameError> {
        if self.is_over() {
            return Ok(self.result(false, TickOutcome::AlreadyOver));
        }

        let placed = match self.food {
            Some(_) => false,
            None => {
                let pos = food::place(&self.snake, self.board_size, &mut self.rng)?;
                info!("Session started on a {0}x{0} board, food at {1:?}", self.board_size, pos);
                self.food = Some(pos);
                true
            }
        };

        Ok(self.result(placed, TickOutcome::Started))
    }

    /// Queues a direction from an input symbol (`w`/`a`/`s`/`d` or a direction name).
    ///
    /// Returns false for unknown symbols, for the reverse of the current
    /// heading, and once the session is over. A rejected call changes nothing.
    pub fn set_direction(&mut self, symbol: &str) -> bool {
        match symbol.parse::<Direction>() {
            Ok(direction) => self.turn(direction),
            Err(_) => {
                debug!("Ignoring unknown direction symbol {:?}", symbol);
                false
            }
        }
    }

    /// Queues `direction` for the next tick. The last accepted call before a tick wins.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.is_over() {
            return false;
        }
        if direction == self.direction.opposite() {
            debug!("Rejecting reversal from {} to {}", self.direction, direction);
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Runs one tick.
    ///
    /// Fails with [`GameError::NoSpace`] only when eating would leave no free
    /// cell for the next food; the state is left as it was in that case.
    pub fn advance(&mut self) -> Result<TickResult, GameError> {
        if self.is_over() {
            return Ok(self.result(false, TickOutcome::AlreadyOver));
        }

        let direction = self.pending_direction;
        let new_head = grid::step(self.snake.head(), direction, self.board_size);

        let mut outcome = TickOutcome::Moved;
        let mut food_changed = false;

        if self.food == Some(new_head) {
            // The grown body is committed only once the next food has a place.
            let mut grown = self.snake.clone();
            grown.move_head(new_head);
            let next_food = food::place(&grown, self.board_size, &mut self.rng)?;

            self.snake = grown;
            self.food = Some(next_food);
            self.score += 1;
            food_changed = true;
            outcome = TickOutcome::Ate;
            info!("Ate food at {:?}, score {}, next food at {:?}", new_head, self.score, next_food);
        } else {
            self.snake.move_head(new_head);
            self.snake.drop_tail();
        }
        self.direction = direction;

        if self.snake.has_self_collision() {
            self.status = GameStatus::Over;
            outcome = TickOutcome::Collided;
            info!("Game over at {:?} with score {}", new_head, self.score);
        }

        Ok(self.result(food_changed, outcome))
    }

    fn result(&self, food_changed: bool, outcome: TickOutcome) -> TickResult {
        TickResult {
            snake: self.snake.to_vec(),
            food: self.food,
            food_changed,
            score: self.score,
            status: self.status,
            outcome,
        }
    }
}
