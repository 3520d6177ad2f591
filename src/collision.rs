use crate::board::Board;
use crate::snake::Snake;

/// Why a tick ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    /// The head left the board.
    Wall,
    /// The head landed on another segment.
    SelfBite,
}

/// Inspects the head after a motion step.
#[must_use]
pub fn detect(snake: &Snake, board: Board) -> Option<Collision> {
    let head = snake.head();

    if !board.in_bounds(head) {
        return Some(Collision::Wall);
    }

    if snake.body().any(|segment| segment == head) {
        return Some(Collision::SelfBite);
    }

    None
}

#[must_use]
pub fn is_game_over(snake: &Snake, board: Board) -> bool {
    detect(snake, board).is_some()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Collision, detect, is_game_over};
    use crate::board::{Board, Cell};
    use crate::snake::Snake;

    fn board() -> Board {
        Board::new(500, 500, 25).expect("reference board should be valid")
    }

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::from_segments(cells.iter().map(|&(x, y)| Cell::new(x, y))).expect("non-empty")
    }

    #[rstest]
    #[case(-1, 0)]
    #[case(-25, 100)]
    #[case(500, 0)]
    #[case(0, 500)]
    #[case(100, -25)]
    fn head_off_the_board_is_a_wall_hit(#[case] x: i32, #[case] y: i32) {
        let snake = snake(&[(x, y), (0, 0)]);
        assert_eq!(detect(&snake, board()), Some(Collision::Wall));
        assert!(is_game_over(&snake, board()));
    }

    #[test]
    fn head_on_any_body_segment_is_a_self_bite() {
        let looped = snake(&[(50, 50), (75, 50), (75, 75), (50, 75), (25, 75), (50, 50)]);
        assert_eq!(detect(&looped, board()), Some(Collision::SelfBite));

        let neck = snake(&[(50, 50), (50, 50)]);
        assert_eq!(detect(&neck, board()), Some(Collision::SelfBite));
    }

    #[test]
    fn free_head_is_not_game_over() {
        let snake = snake(&[(475, 475), (450, 475), (425, 475)]);
        assert_eq!(detect(&snake, board()), None);
        assert!(!is_game_over(&snake, board()));
    }

    #[test]
    fn single_cell_snake_cannot_bite_itself() {
        assert!(!is_game_over(&snake(&[(0, 0)]), board()));
    }
}
