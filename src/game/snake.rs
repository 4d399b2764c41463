use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake's cells, head first.
///
/// A snake always has at least one cell, and while the game is running no
/// two cells are equal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    segments: VecDeque<Position>,
}

impl Snake {
    /// The starting snake: [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH]
    /// cells in a horizontal line with the head at
    /// [`INITIAL_HEAD`][consts::INITIAL_HEAD] and the body trailing west.
    pub(crate) fn initial() -> Snake {
        let head = consts::INITIAL_HEAD;
        let segments = (0..consts::INITIAL_SNAKE_LENGTH)
            .map(|i| Position::new(head.x - i, head.y))
            .collect();
        Snake { segments }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        *self.segments.front().expect("snake is never empty")
    }

    /// Whether any cell of the snake, head included, occupies `pos`
    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// The snake's cells from head to tail
    pub(crate) fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Prepend a new head, keeping the tail (a growth step, so net length
    /// increases by one)
    pub(crate) fn grown(mut self, head: Position) -> Snake {
        self.segments.push_front(head);
        self
    }

    /// Prepend a new head and drop the tail (a normal step, leaving the
    /// length unchanged)
    pub(crate) fn stepped(mut self, head: Position) -> Snake {
        self.segments.push_front(head);
        let _ = self.segments.pop_back();
        self
    }

    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Position>>(cells: I) -> Snake {
        let segments = VecDeque::from_iter(cells);
        assert!(!segments.is_empty(), "snake must have at least one cell");
        Snake { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snake() {
        let snake = Snake::initial();
        assert_eq!(
            snake,
            Snake::from_cells([
                Position::new(8, 10),
                Position::new(7, 10),
                Position::new(6, 10),
            ])
        );
        assert_eq!(snake.head(), Position::new(8, 10));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn stepped_moves_without_growing() {
        let snake = Snake::initial().stepped(Position::new(9, 10));
        assert_eq!(
            snake,
            Snake::from_cells([
                Position::new(9, 10),
                Position::new(8, 10),
                Position::new(7, 10),
            ])
        );
    }

    #[test]
    fn grown_keeps_the_tail() {
        let snake = Snake::initial().grown(Position::new(9, 10));
        assert_eq!(
            snake,
            Snake::from_cells([
                Position::new(9, 10),
                Position::new(8, 10),
                Position::new(7, 10),
                Position::new(6, 10),
            ])
        );
    }

    #[test]
    fn contains_covers_head_and_body() {
        let snake = Snake::initial();
        assert!(snake.contains(Position::new(8, 10)));
        assert!(snake.contains(Position::new(6, 10)));
        assert!(!snake.contains(Position::new(9, 10)));
    }
}
