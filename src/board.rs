use crate::config::INITIAL_SNAKE_LENGTH;
use crate::error::ConfigError;
use crate::input::Velocity;

/// One grid square, addressed by its top-left corner in board units.
///
/// Both coordinates are multiples of the unit size while on the board. A head
/// that has just left the board can hold negative or out-of-range values.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this cell moved by one velocity step.
    #[must_use]
    pub fn offset(self, velocity: Velocity) -> Self {
        let (dx, dy) = velocity.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Board dimensions and unit size, validated at setup time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    width: u16,
    height: u16,
    unit: u16,
}

impl Board {
    /// Validates a board configuration.
    ///
    /// Width and height must be non-zero multiples of `unit`, and the grid
    /// must be wide enough for the initial snake on its top row with at least
    /// one cell left over for food.
    pub fn new(width: u16, height: u16, unit: u16) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || unit == 0 {
            return Err(ConfigError::ZeroDimension {
                width,
                height,
                unit,
            });
        }

        if width % unit != 0 || height % unit != 0 {
            return Err(ConfigError::NotMultipleOfUnit {
                width,
                height,
                unit,
            });
        }

        let board = Self {
            width,
            height,
            unit,
        };

        if usize::from(board.columns()) < INITIAL_SNAKE_LENGTH
            || board.total_cells() <= INITIAL_SNAKE_LENGTH
        {
            return Err(ConfigError::BoardTooSmall {
                columns: board.columns(),
                rows: board.rows(),
                length: INITIAL_SNAKE_LENGTH,
            });
        }

        Ok(board)
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    #[must_use]
    pub fn unit(self) -> u16 {
        self.unit
    }

    /// Number of cells along the x axis.
    #[must_use]
    pub fn columns(self) -> u16 {
        self.width / self.unit
    }

    /// Number of cells along the y axis.
    #[must_use]
    pub fn rows(self) -> u16 {
        self.height / self.unit
    }

    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.columns()) * usize::from(self.rows())
    }

    /// Returns true when `cell` lies on the board: `0 <= x < W && 0 <= y < H`.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.width)
            && cell.y < i32::from(self.height)
    }

    /// Returns the cell at grid column `column` and row `row`.
    #[must_use]
    pub fn cell_at(self, column: u16, row: u16) -> Cell {
        let unit = i32::from(self.unit);
        Cell {
            x: i32::from(column) * unit,
            y: i32::from(row) * unit,
        }
    }

    /// Maps an on-board cell back to its `(column, row)` grid index.
    #[must_use]
    pub fn grid_index(self, cell: Cell) -> Option<(u16, u16)> {
        if !self.in_bounds(cell) {
            return None;
        }

        let unit = i32::from(self.unit);
        let column = u16::try_from(cell.x / unit).ok()?;
        let row = u16::try_from(cell.y / unit).ok()?;
        Some((column, row))
    }

    /// Iterates over every cell row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.rows())
            .flat_map(move |row| (0..self.columns()).map(move |column| self.cell_at(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Board, Cell};
    use crate::error::ConfigError;

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(475, 475), true)]
    #[case(Cell::new(-25, 0), false)]
    #[case(Cell::new(-1, 0), false)]
    #[case(Cell::new(500, 0), false)]
    #[case(Cell::new(0, 500), false)]
    #[case(Cell::new(0, -25), false)]
    fn in_bounds_is_half_open(#[case] cell: Cell, #[case] expected: bool) {
        let board = Board::new(500, 500, 25).expect("reference board should be valid");
        assert_eq!(board.in_bounds(cell), expected);
    }

    #[test]
    fn grid_dimensions_follow_unit_size() {
        let board = Board::new(500, 250, 25).expect("board should be valid");

        assert_eq!(board.columns(), 20);
        assert_eq!(board.rows(), 10);
        assert_eq!(board.total_cells(), 200);
        assert_eq!(board.cells().count(), 200);
        assert_eq!(board.cell_at(3, 2), Cell::new(75, 50));
        assert_eq!(board.grid_index(Cell::new(75, 50)), Some((3, 2)));
        assert_eq!(board.grid_index(Cell::new(500, 50)), None);
    }

    #[test]
    fn rejects_dimensions_not_multiple_of_unit() {
        let error = Board::new(510, 500, 25).expect_err("510 is not a multiple of 25");
        assert!(matches!(error, ConfigError::NotMultipleOfUnit { .. }));
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            Board::new(0, 500, 25),
            Err(ConfigError::ZeroDimension { .. })
        ));
        assert!(matches!(
            Board::new(500, 500, 0),
            Err(ConfigError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn rejects_board_that_cannot_fit_initial_snake() {
        assert!(matches!(
            Board::new(100, 500, 25),
            Err(ConfigError::BoardTooSmall { .. })
        ));
        assert!(matches!(
            Board::new(125, 25, 25),
            Err(ConfigError::BoardTooSmall { .. })
        ));
        assert!(Board::new(150, 25, 25).is_ok());
    }
}
