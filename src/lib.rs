//! Grid-based Snake: tick scheduler, motion model, food placement and
//! collision detection, plus a ratatui front end.

pub mod audio;
pub mod board;
pub mod canvas;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod presenter;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;

pub use error::Error;
