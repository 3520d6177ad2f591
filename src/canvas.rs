use crate::board::{Board, Cell};
use crate::presenter::{CellRole, Renderer};

/// Retained framebuffer the scheduler draws into between terminal frames.
///
/// One slot per grid cell. Cells drawn off the board (a head that just hit
/// the wall) are dropped.
#[derive(Debug, Clone)]
pub struct Canvas {
    board: Board,
    slots: Vec<Option<CellRole>>,
    game_over_visible: bool,
    score: u32,
}

impl Canvas {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            slots: vec![None; board.total_cells()],
            game_over_visible: false,
            score: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Role drawn at grid `column`/`row`, if any.
    #[must_use]
    pub fn role_at(&self, column: u16, row: u16) -> Option<CellRole> {
        self.slot_index(column, row)
            .and_then(|index| self.slots.get(index).copied().flatten())
    }

    #[must_use]
    pub fn game_over_visible(&self) -> bool {
        self.game_over_visible
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    fn slot_index(&self, column: u16, row: u16) -> Option<usize> {
        if column >= self.board.columns() || row >= self.board.rows() {
            return None;
        }

        Some(usize::from(row) * usize::from(self.board.columns()) + usize::from(column))
    }
}

impl Renderer for Canvas {
    fn clear(&mut self) {
        self.slots.fill(None);
    }

    fn draw_cell(&mut self, cell: Cell, role: CellRole) {
        let Some((column, row)) = self.board.grid_index(cell) else {
            return;
        };

        if let Some(slot) = self
            .slot_index(column, row)
            .and_then(|index| self.slots.get_mut(index))
        {
            *slot = Some(role);
        }
    }

    fn show_game_over(&mut self) {
        self.game_over_visible = true;
    }

    fn hide_game_over(&mut self) {
        self.game_over_visible = false;
    }

    fn show_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::Canvas;
    use crate::board::{Board, Cell};
    use crate::presenter::{CellRole, Renderer};

    fn canvas() -> Canvas {
        Canvas::new(Board::new(250, 125, 25).expect("valid board"))
    }

    #[test]
    fn draw_cell_maps_board_units_to_grid_slots() {
        let mut canvas = canvas();

        canvas.draw_cell(Cell::new(75, 50), CellRole::Food);
        canvas.draw_cell(Cell::new(0, 0), CellRole::SnakeBody);

        assert_eq!(canvas.role_at(3, 2), Some(CellRole::Food));
        assert_eq!(canvas.role_at(0, 0), Some(CellRole::SnakeBody));
        assert_eq!(canvas.role_at(1, 0), None);
        assert_eq!(canvas.role_at(10, 0), None);
    }

    #[test]
    fn off_board_cells_are_ignored() {
        let mut canvas = canvas();

        canvas.draw_cell(Cell::new(-25, 0), CellRole::SnakeBody);
        canvas.draw_cell(Cell::new(250, 0), CellRole::SnakeBody);

        assert!((0..10).all(|column| canvas.role_at(column, 0).is_none()));
    }

    #[test]
    fn clear_wipes_cells_but_keeps_overlay_and_score() {
        let mut canvas = canvas();
        canvas.draw_cell(Cell::new(25, 25), CellRole::Food);
        canvas.show_score(3);
        canvas.show_game_over();

        canvas.clear();

        assert_eq!(canvas.role_at(1, 1), None);
        assert_eq!(canvas.score(), 3);
        assert!(canvas.game_over_visible());

        canvas.hide_game_over();
        assert!(!canvas.game_over_visible());
    }
}
