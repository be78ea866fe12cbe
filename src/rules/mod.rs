//! Game rules for Pentaroll
//!
//! This module implements the rule set:
//! - Placement and push legality (edge cells, directional push-outs)
//! - Move application (sliding a run of marbles one step)
//! - Win condition (5-in-a-row) and the edge-ring draw

pub mod push;
pub mod win;

// Re-exports for convenient access
pub use push::{apply, can_push, legal_moves, run_length, Move};
pub use win::{edge_ring_full, find_winner, find_winning_line, has_win_for};
