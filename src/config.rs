use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;

use crate::board::Board;
use crate::error::ConfigError;

const APP_DIR_NAME: &str = "grid-snake";
const CONFIG_FILE_NAME: &str = "config.json";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// Length of the snake at game start.
pub const INITIAL_SNAKE_LENGTH: usize = 5;

pub const DEFAULT_BOARD_WIDTH: u16 = 500;

pub const DEFAULT_BOARD_HEIGHT: u16 = 500;

/// Edge length of one cell, in board units.
pub const DEFAULT_UNIT_SIZE: u16 = 25;

/// Fixed tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 75;

/// Board geometry and pacing, read from a JSON file with CLI overrides.
///
/// Every field is optional in the file; missing ones keep their defaults.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub unit: u16,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            unit: DEFAULT_UNIT_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Loads the config file from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(&config_path())
    }

    /// Loads config from `path`.
    ///
    /// Returns the defaults when the file does not exist. Returns `Err` when
    /// it exists but cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the board geometry.
    pub fn board(&self) -> Result<Board, ConfigError> {
        Board::new(self.width, self.height, self.unit)
    }

    /// Validated tick interval.
    pub fn tick_interval(&self) -> Result<Duration, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(Duration::from_millis(self.tick_interval_ms))
    }
}

/// Returns the platform-correct config file path.
#[must_use]
pub fn config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}

/// Returns the default log file path.
#[must_use]
pub fn log_path() -> PathBuf {
    let mut base = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Colors for every drawn element.
#[derive(Debug)]
pub struct Theme {
    pub board_bg: Color,
    pub snake: Color,
    /// Drawn between adjacent snake cells.
    pub snake_border: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_hint: Color,
    pub overlay_text: Color,
}

/// Dark red board, light green snake, white food.
pub const THEME_CLASSIC: Theme = Theme {
    board_bg: Color::Rgb(139, 0, 0),
    snake: Color::Rgb(144, 238, 144),
    snake_border: Color::Black,
    food: Color::White,
    border_fg: Color::Gray,
    hud_score: Color::White,
    hud_hint: Color::DarkGray,
    overlay_text: Color::White,
};

/// Terminal columns used to draw one grid cell, so cells look square.
pub const CELL_WIDTH_COLUMNS: u16 = 2;

/// Poll timeout of the host loop between timer updates.
pub const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);
