use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Setup-time problems with board dimensions, tick interval or the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board width, height and unit size must be non-zero (got {width}x{height}, unit {unit})")]
    ZeroDimension { width: u16, height: u16, unit: u16 },

    #[error("board {width}x{height} is not a multiple of unit size {unit}")]
    NotMultipleOfUnit { width: u16, height: u16, unit: u16 },

    #[error("a {columns}x{rows} grid cannot hold the initial {length}-cell snake plus food")]
    BoardTooSmall {
        columns: u16,
        rows: u16,
        length: usize,
    },

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,

    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Food could not be placed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum FoodError {
    #[error("no free cell left on the board")]
    NoFreeCell,
}

/// Top-level error for the library and the terminal binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Food(#[from] FoodError),

    #[error("terminal I/O failed")]
    Io(#[from] io::Error),

    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),
}
