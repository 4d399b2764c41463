use super::direction::Direction;
use super::snake::Snake;
use crate::command::Command;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// A message fed into [`GameState::reduce()`]: the periodic timer firing, a
/// mapped key press, or the reset control.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Msg {
    Tick,
    Key(Command),
    Reset,
}

/// One complete snapshot of the game.
///
/// Every transition consumes a snapshot and returns the next one; nothing is
/// mutated in place, so the model can be exercised without a terminal.
///
/// `running == false` covers both "paused" and "game over"; the two are not
/// distinguished.  Toggling back to running after a collision leaves the
/// snake where it died, and the next tick re-attempts the same fatal move
/// unless the player steers away first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(crate) snake: Snake,
    pub(crate) direction: Direction,
    pub(crate) food: Position,
    pub(crate) score: u32,
    pub(crate) running: bool,
}

impl GameState {
    pub(crate) fn new<R: Rng>(rng: &mut R) -> GameState {
        let snake = Snake::initial();
        let food = place_food(rng, &snake);
        GameState {
            snake,
            direction: Direction::East,
            food,
            score: 0,
            running: true,
        }
    }

    pub(crate) fn reduce<R: Rng>(self, msg: Msg, rng: &mut R) -> GameState {
        match msg {
            Msg::Tick => self.tick(rng),
            Msg::Key(cmd) => self.apply_key(cmd),
            Msg::Reset => GameState::new(rng),
        }
    }

    fn tick<R: Rng>(self, rng: &mut R) -> GameState {
        if !self.running {
            return self;
        }
        let Some(head) = self.direction.advance(self.snake.head()) else {
            return GameState {
                running: false,
                ..self
            };
        };
        // Collision is checked against the pre-move body, tail included, so
        // moving into the cell the tail is about to vacate still kills.
        if self.snake.contains(head) {
            return GameState {
                running: false,
                ..self
            };
        }
        if head == self.food {
            let snake = self.snake.grown(head);
            let food = place_food(rng, &snake);
            GameState {
                snake,
                food,
                score: self.score + 1,
                ..self
            }
        } else {
            GameState {
                snake: self.snake.stepped(head),
                ..self
            }
        }
    }

    fn apply_key(self, cmd: Command) -> GameState {
        match cmd {
            Command::Up => self.turned(Direction::North),
            Command::Down => self.turned(Direction::South),
            Command::Left => self.turned(Direction::West),
            Command::Right => self.turned(Direction::East),
            // Space and Enter toggle unconditionally: the same pair of keys
            // pauses, resumes, and revives a game-over state.
            Command::Space | Command::Enter => GameState {
                running: !self.running,
                ..self
            },
            _ => self,
        }
    }

    /// Turn towards `direction`, unless it is the exact inverse of the
    /// current heading.
    fn turned(self, direction: Direction) -> GameState {
        if direction == self.direction.reverse() {
            self
        } else {
            GameState { direction, ..self }
        }
    }

    /// What occupies a given board cell, for the render layer.  The head
    /// wins over the body; food never overlaps the snake.
    pub(crate) fn classify(&self, pos: Position) -> Cell {
        if pos == self.snake.head() {
            Cell::SnakeHead
        } else if self.snake.contains(pos) {
            Cell::SnakeBody
        } else if pos == self.food {
            Cell::Food
        } else {
            Cell::Empty
        }
    }
}

/// Classification of a board cell for drawing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cell {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

/// Pick a food cell by rejection sampling: draw uniformly over the whole
/// board and retry while the cell lies on the snake.  The snake never covers
/// the board, so this terminates.
fn place_food<R: Rng>(rng: &mut R, snake: &Snake) -> Position {
    loop {
        let pos = Position::new(
            rng.random_range(0..consts::BOARD_SIZE),
            rng.random_range(0..consts::BOARD_SIZE),
        );
        if !snake.contains(pos) {
            return pos;
        }
    }
}
