//! Boundary between the game core and whatever draws it and plays its sounds.

use crate::board::Cell;

/// What a drawn cell represents.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellRole {
    Food,
    SnakeBody,
}

/// Audio cues played on state transitions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Track {
    Start,
    GameOver,
}

/// Drawing surface driven by the scheduler once per tick.
pub trait Renderer {
    /// Clears the board before a frame.
    fn clear(&mut self);

    fn draw_cell(&mut self, cell: Cell, role: CellRole);

    fn show_game_over(&mut self);

    fn hide_game_over(&mut self);

    /// Publishes the current score. Called at start and after every meal.
    fn show_score(&mut self, score: u32);
}

/// Fire-and-forget audio cues.
pub trait Audio {
    fn play_start(&mut self);

    fn play_game_over(&mut self);

    fn stop(&mut self, track: Track);
}

/// Audio adapter that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl Audio for NullAudio {
    fn play_start(&mut self) {}

    fn play_game_over(&mut self) {}

    fn stop(&mut self, _track: Track) {}
}
