use std::collections::VecDeque;
use std::iter;

use crate::board::Cell;
use crate::config::INITIAL_SNAKE_LENGTH;
use crate::input::Velocity;

/// Result of advancing the snake by one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The head moved and the tail was dropped.
    Moved,
    /// The head landed on the food; the tail was kept.
    Ate,
}

/// Snake body, head first.
///
/// The head is stored apart from the rest of the body so a snake can never be
/// empty. Duplicate cells are allowed: they mean the snake bit itself, which
/// the collision detector reports.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    head: Cell,
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates the canonical starting snake on the top row, heading right:
    /// `[(4u, 0), (3u, 0), (2u, 0), (u, 0), (0, 0)]`.
    #[must_use]
    pub fn initial(unit: u16) -> Self {
        let unit = i32::from(unit);
        let last = INITIAL_SNAKE_LENGTH - 1;

        Self {
            head: Cell::new(cell_offset(last, unit), 0),
            body: (0..last)
                .rev()
                .map(|index| Cell::new(cell_offset(index, unit), 0))
                .collect(),
        }
    }

    /// Creates a snake from explicit segments, head first. Returns `None` for
    /// an empty list.
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let mut segments = segments.into_iter();
        let head = segments.next()?;
        Some(Self {
            head,
            body: segments.collect(),
        })
    }

    /// Moves the head one velocity step.
    ///
    /// The new head is prepended. When it lands on `food` the tail stays and
    /// the snake is one cell longer; otherwise the tail cell is removed.
    pub fn step(&mut self, velocity: Velocity, food: Cell) -> StepOutcome {
        let next_head = self.head.offset(velocity);
        self.body.push_front(self.head);
        self.head = next_head;

        if next_head == food {
            return StepOutcome::Ate;
        }

        let _ = self.body.pop_back();
        StepOutcome::Moved
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.head
    }

    /// Segments behind the head, neck first.
    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Iterates over all segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        iter::once(self.head).chain(self.body())
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Always false: a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn cell_offset(index: usize, unit: i32) -> i32 {
    i32::try_from(index).map_or(0, |index| index * unit)
}

#[cfg(test)]
mod tests {
    use super::{Snake, StepOutcome};
    use crate::board::Cell;
    use crate::input::{Direction, Velocity};

    const UNIT: u16 = 25;
    const FAR_AWAY: Cell = Cell::new(400, 400);

    fn right() -> Velocity {
        Velocity::new(Direction::Right, UNIT)
    }

    #[test]
    fn initial_snake_is_canonical_five_cells() {
        let snake = Snake::initial(UNIT);

        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![
                Cell::new(100, 0),
                Cell::new(75, 0),
                Cell::new(50, 0),
                Cell::new(25, 0),
                Cell::new(0, 0),
            ]
        );
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn from_segments_requires_a_head() {
        assert!(Snake::from_segments(Vec::new()).is_none());

        let snake = Snake::from_segments([Cell::new(0, 0)]).expect("one segment is enough");
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.body().count(), 0);
    }

    #[test]
    fn step_without_food_keeps_length() {
        let mut snake = Snake::initial(UNIT);

        let outcome = snake.step(right(), FAR_AWAY);

        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Cell::new(125, 0));
        assert!(!snake.occupies(Cell::new(0, 0)));
    }

    #[test]
    fn step_onto_food_keeps_tail() {
        let mut snake = Snake::initial(UNIT);

        let outcome = snake.step(right(), Cell::new(125, 0));

        assert_eq!(outcome, StepOutcome::Ate);
        assert_eq!(snake.len(), 6);
        assert!(snake.occupies(Cell::new(0, 0)));
    }

    #[test]
    fn single_cell_snake_moves() {
        let mut snake = Snake::from_segments([Cell::new(50, 50)]).expect("non-empty");

        snake.step(Velocity::new(Direction::Up, UNIT), FAR_AWAY);

        assert_eq!(snake.segments().collect::<Vec<_>>(), vec![Cell::new(50, 25)]);
    }

    #[test]
    fn step_can_leave_the_board() {
        let mut snake = Snake::from_segments([Cell::new(0, 0)]).expect("non-empty");

        snake.step(Velocity::new(Direction::Left, UNIT), FAR_AWAY);

        assert_eq!(snake.head(), Cell::new(-25, 0));
    }
}
