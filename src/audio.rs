use std::io::{self, Write};

use log::warn;

use crate::presenter::{Audio, Track};

const BELL: &[u8] = b"\x07";

/// Audio adapter that rings the terminal bell on game over.
///
/// Terminals have no notion of a playing track, so the start cue and `stop`
/// are silent.
#[derive(Debug)]
pub struct TerminalBell<W = io::Stdout> {
    out: W,
    muted: bool,
}

impl TerminalBell<io::Stdout> {
    #[must_use]
    pub fn new(muted: bool) -> Self {
        Self::with_writer(io::stdout(), muted)
    }
}

impl<W: Write> TerminalBell<W> {
    #[must_use]
    pub fn with_writer(out: W, muted: bool) -> Self {
        Self { out, muted }
    }

    fn ring(&mut self) {
        if self.muted {
            return;
        }

        if let Err(error) = self.out.write_all(BELL).and_then(|()| self.out.flush()) {
            warn!("failed to ring terminal bell: {error}");
        }
    }
}

impl<W: Write> Audio for TerminalBell<W> {
    fn play_start(&mut self) {}

    fn play_game_over(&mut self) {
        self.ring();
    }

    fn stop(&mut self, _track: Track) {}
}
