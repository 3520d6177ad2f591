use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::RunState;

const HINT_RUNNING: &str = "←↑↓→/WASD move · R reset · Q quit";
const HINT_IDLE: &str = "Enter start · Q quit";
const HINT_GAME_OVER: &str = "R reset · Q quit";

/// Renders the one-line HUD under the board and returns the area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    run_state: RunState,
    theme: &Theme,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(hud_line(
            score,
            hint_for(run_state),
            usize::from(hud_area.width),
            theme,
        )),
        hud_area,
    );

    play_area
}

fn hint_for(run_state: RunState) -> &'static str {
    match run_state {
        RunState::Idle => HINT_IDLE,
        RunState::Running => HINT_RUNNING,
        RunState::GameOver => HINT_GAME_OVER,
    }
}

/// Score on the left, key hint pushed to the right edge.
///
/// The hint is dropped when both do not fit in `available_width`.
fn hud_line(score: u32, hint: &str, available_width: usize, theme: &Theme) -> Line<'static> {
    let score_text = format!(" Score: {score}");
    let used = score_text.width() + hint.width() + 1;

    let score_span = Span::styled(
        score_text,
        Style::default()
            .fg(theme.hud_score)
            .add_modifier(Modifier::BOLD),
    );

    if used > available_width {
        return Line::from(score_span);
    }

    Line::from(vec![
        score_span,
        Span::raw(" ".repeat(available_width - used)),
        Span::styled(hint.to_owned(), Style::default().fg(theme.hud_hint)),
        Span::raw(" "),
    ])
}
