use crate::consts;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Move `pos` one cell in this direction.  Returns `None` if the step
    /// would leave the board.
    pub(crate) fn advance(self, pos: Position) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => {
                y = decrement_in_bounds(y)?;
            }
            Direction::East => {
                x = increment_in_bounds(x)?;
            }
            Direction::South => {
                y = increment_in_bounds(y)?;
            }
            Direction::West => {
                x = decrement_in_bounds(x)?;
            }
        }
        Some(Position { x, y })
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Return the glyph to use for drawing the snake's head while it is
    /// travelling in this direction
    pub(crate) fn head_symbol(self) -> char {
        match self {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }
}

fn decrement_in_bounds(x: u16) -> Option<u16> {
    x.checked_sub(1)
}

fn increment_in_bounds(x: u16) -> Option<u16> {
    x.checked_add(1).filter(|&x2| x2 < consts::BOARD_SIZE)
}
