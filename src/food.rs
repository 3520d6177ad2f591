use std::collections::HashSet;

use log::debug;
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::board::{Board, Cell};
use crate::error::FoodError;
use crate::snake::Snake;

/// Random samples tried before falling back to a scan of the free cells.
pub const MAX_RANDOM_ATTEMPTS: usize = 64;

/// Picks a uniformly random grid cell that the snake does not occupy.
///
/// Samples the grid up to [`MAX_RANDOM_ATTEMPTS`] times, then picks among the
/// remaining free cells directly, so a nearly full board still terminates.
/// Returns [`FoodError::NoFreeCell`] when the snake covers every cell.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    board: Board,
    snake: &Snake,
) -> Result<Cell, FoodError> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let cell = random_cell(rng, board);
        if !snake.occupies(cell) {
            return Ok(cell);
        }
    }

    debug!(
        "food sampling missed {MAX_RANDOM_ATTEMPTS} times (snake length {}), scanning free cells",
        snake.len()
    );

    let occupied: HashSet<Cell> = snake.segments().collect();
    board
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .choose(rng)
        .ok_or(FoodError::NoFreeCell)
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, board: Board) -> Cell {
    let column = rng.gen_range(0..board.columns());
    let row = rng.gen_range(0..board.rows());
    board.cell_at(column, row)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::place_food;
    use crate::board::{Board, Cell};
    use crate::error::FoodError;
    use crate::snake::Snake;

    #[test]
    fn food_never_overlaps_initial_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::new(500, 500, 25).expect("valid board");
        let snake = Snake::initial(25);

        for _ in 0..200 {
            let food = place_food(&mut rng, board, &snake).expect("board has free cells");
            assert!(!snake.occupies(food));
            assert!(board.in_bounds(food));
            assert_eq!(food.x % 25, 0);
            assert_eq!(food.y % 25, 0);
        }
    }

    #[test]
    fn full_board_reports_no_free_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::new(150, 25, 25).expect("valid board");
        let snake = Snake::from_segments(board.cells()).expect("non-empty");

        assert_eq!(
            place_food(&mut rng, board, &snake),
            Err(FoodError::NoFreeCell)
        );
    }

    #[test]
    fn nearly_full_board_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::new(250, 250, 25).expect("valid board");
        let free = Cell::new(125, 200);
        let snake =
            Snake::from_segments(board.cells().filter(|cell| *cell != free)).expect("non-empty");

        for _ in 0..10 {
            assert_eq!(place_food(&mut rng, board, &snake), Ok(free));
        }
    }

    proptest! {
        #[test]
        fn food_is_never_on_the_snake(
            seed in any::<u64>(),
            occupied in proptest::collection::vec((0u16..10, 0u16..8), 1..79),
        ) {
            let board = Board::new(250, 200, 25).expect("valid board");
            let snake = Snake::from_segments(
                occupied.iter().map(|&(column, row)| board.cell_at(column, row)),
            )
            .expect("non-empty");
            let mut rng = StdRng::seed_from_u64(seed);

            let food = place_food(&mut rng, board, &snake)
                .expect("at most 78 of 80 cells are occupied");

            prop_assert!(!snake.occupies(food));
            prop_assert!(board.in_bounds(food));
        }
    }
}
