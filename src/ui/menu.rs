use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;

const GAME_OVER_TITLE: &str = "GAME OVER!!";

/// Draws the start prompt as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from("SNAKE"),
        Line::from(""),
        Line::from("[Enter]/[Space] Start"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    render_popup(frame, area, " start ", lines, theme);
}

/// Draws the game-over overlay as a centered popup.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let lines = vec![
        Line::from(GAME_OVER_TITLE),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(""),
        Line::from("[R] Reset"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    render_popup(frame, area, " game over ", lines, theme);
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    lines: Vec<Line<'_>>,
    theme: &Theme,
) {
    let popup = centered_popup(area, &lines);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.overlay_text)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered().title(title)),
        popup,
    );
}

/// Sizes the popup to its widest line plus border and padding, clamped to `area`.
fn centered_popup(area: Rect, lines: &[Line<'_>]) -> Rect {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width + 6)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);

    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use ratatui::text::Line;

    use super::centered_popup;

    #[test]
    fn popup_is_centered_and_fits_content() {
        let area = Rect::new(0, 0, 40, 20);
        let lines = vec![Line::from("abcd"), Line::from("ab")];

        let popup = centered_popup(area, &lines);

        assert_eq!(popup.width, 10);
        assert_eq!(popup.height, 4);
        assert_eq!(popup.x, 15);
        assert_eq!(popup.y, 8);
    }

    #[test]
    fn popup_is_clamped_to_small_areas() {
        let area = Rect::new(0, 0, 8, 3);
        let lines = vec![Line::from("a long line of text"), Line::from("x")];

        let popup = centered_popup(area, &lines);

        assert_eq!(popup.width, 8);
        assert_eq!(popup.height, 3);
    }
}
