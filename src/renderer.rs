use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::canvas::Canvas;
use crate::config::{CELL_WIDTH_COLUMNS, Theme};
use crate::game::RunState;
use crate::presenter::CellRole;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

const GLYPH_FOOD: &str = "██";
const GLYPH_SNAKE: &str = "▐▌";
const GLYPH_EMPTY: &str = "  ";

/// Renders the full terminal frame from the canvas framebuffer.
pub fn render(frame: &mut Frame<'_>, canvas: &Canvas, run_state: RunState, theme: &Theme) {
    let area = frame.area();
    let [column] = Layout::horizontal([Constraint::Length(framed_width(canvas))])
        .flex(Flex::Center)
        .areas(area);
    let [column] = Layout::vertical([Constraint::Length(framed_height(canvas) + 1)])
        .flex(Flex::Center)
        .areas(column);

    let play_area = render_hud(frame, column, canvas.score(), run_state, theme);

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_cells(frame.buffer_mut(), inner, canvas, theme);

    if run_state == RunState::Idle {
        render_start_menu(frame, play_area, theme);
    } else if canvas.game_over_visible() {
        render_game_over_menu(frame, play_area, canvas.score(), theme);
    }
}

fn render_cells(buffer: &mut Buffer, inner: Rect, canvas: &Canvas, theme: &Theme) {
    let board = canvas.board();

    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let Some((x, y)) = grid_to_terminal(inner, column, row) else {
                continue;
            };

            let (glyph, style) = match canvas.role_at(column, row) {
                Some(CellRole::Food) => (GLYPH_FOOD, Style::new().fg(theme.food)),
                Some(CellRole::SnakeBody) => (
                    GLYPH_SNAKE,
                    Style::new().fg(theme.snake).bg(theme.snake_border),
                ),
                None => (GLYPH_EMPTY, Style::new().bg(theme.board_bg)),
            };

            buffer.set_string(x, y, glyph, style);
        }
    }
}

fn framed_width(canvas: &Canvas) -> u16 {
    canvas
        .board()
        .columns()
        .saturating_mul(CELL_WIDTH_COLUMNS)
        .saturating_add(2)
}

fn framed_height(canvas: &Canvas) -> u16 {
    canvas.board().rows().saturating_add(2)
}

/// Top-left terminal position of a grid cell, or `None` when clipped.
fn grid_to_terminal(inner: Rect, column: u16, row: u16) -> Option<(u16, u16)> {
    let x = inner
        .x
        .checked_add(column.checked_mul(CELL_WIDTH_COLUMNS)?)?;
    let y = inner.y.checked_add(row)?;

    if x.saturating_add(CELL_WIDTH_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{grid_to_terminal, render};
    use crate::board::{Board, Cell};
    use crate::canvas::Canvas;
    use crate::config::THEME_CLASSIC;
    use crate::game::RunState;
    use crate::presenter::{CellRole, Renderer};

    #[test]
    fn grid_cells_are_two_columns_wide() {
        let inner = Rect::new(1, 1, 20, 10);

        assert_eq!(grid_to_terminal(inner, 0, 0), Some((1, 1)));
        assert_eq!(grid_to_terminal(inner, 3, 2), Some((7, 3)));
        assert_eq!(grid_to_terminal(inner, 9, 9), Some((19, 10)));
        assert_eq!(grid_to_terminal(inner, 10, 0), None);
        assert_eq!(grid_to_terminal(inner, 0, 10), None);
    }

    #[test]
    fn frame_shows_snake_food_and_game_over() {
        let board = Board::new(250, 125, 25).expect("valid board");
        let mut canvas = Canvas::new(board);
        canvas.draw_cell(Cell::new(0, 0), CellRole::SnakeBody);
        canvas.draw_cell(Cell::new(225, 100), CellRole::Food);
        canvas.show_score(4);
        canvas.show_game_over();

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, &canvas, RunState::GameOver, &THEME_CLASSIC))
            .expect("draw should succeed");

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("GAME OVER!!"));
        assert!(content.contains("Score: 4"));
    }
}
