//! GUI module for the Pentaroll game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod theme;

pub use app::PentarollApp;
pub use board_view::{BoardResponse, BoardView};
