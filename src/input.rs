use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Per-tick movement delta of exactly one unit along one axis.
///
/// Only constructible from a [`Direction`], so it is never diagonal and
/// never zero.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Velocity {
    direction: Direction,
    unit: u16,
}

impl Velocity {
    #[must_use]
    pub fn new(direction: Direction, unit: u16) -> Self {
        Self { direction, unit }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        self.direction
    }

    /// Returns the `(dx, dy)` offset applied to the head each tick.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        let unit = i32::from(self.unit);
        match self.direction {
            Direction::Up => (0, -unit),
            Direction::Down => (0, unit),
            Direction::Left => (-unit, 0),
            Direction::Right => (unit, 0),
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Applies a directional key press to the current velocity.
///
/// A key pointing straight back along the current axis of travel is ignored.
#[must_use]
pub fn steer(direction: Direction, current: Velocity) -> Velocity {
    if direction_change_is_valid(current.direction(), direction) {
        Velocity::new(direction, current.unit)
    } else {
        current
    }
}

/// Decodes arrow keys and WASD into a direction.
#[must_use]
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Direction::Right),
        _ => None,
    }
}

/// Key-driven velocity update: unrecognized keys leave `current` unchanged.
#[must_use]
pub fn on_direction_key(code: KeyCode, current: Velocity) -> Velocity {
    direction_for_key(code).map_or(current, |direction| steer(direction, current))
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Direction(Direction),
    Start,
    Reset,
    Quit,
}

impl Command {
    /// Maps one key press to a command. Key releases are ignored.
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Self::Quit);
        }

        if let Some(direction) = direction_for_key(key.code) {
            return Some(Self::Direction(direction));
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::Start),
            KeyCode::Char('r' | 'R') => Some(Self::Reset),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Polls the terminal for at most `timeout` and decodes one command.
pub fn poll_command(timeout: Duration) -> io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(Command::from_key_event(key)),
        _ => Ok(None),
    }
}
