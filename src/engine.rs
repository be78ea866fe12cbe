//! One-ply greedy AI engine
//!
//! The engine enumerates every legal move, simulates each on a copy of
//! the board and keeps the highest-scoring candidate:
//!
//! 1. A move that wins on the spot scores [`WIN_SCORE`].
//! 2. A move after which the *opponent* holds a finished line scores
//!    [`LOSS_SCORE`] — this penalizes pushes that accidentally complete
//!    the opponent's line on the very same board.
//! 3. Anything else scores the static run evaluation for the engine's
//!    own color.
//!
//! Ties resolve to the earliest candidate in [`legal_moves`] order
//! (row-major edge scan, directions in geometry order). There is no
//! minimax and no opponent-reply lookahead.

use crate::board::{Board, Marble};
use crate::eval::evaluate;
use crate::rules::{apply, has_win_for, legal_moves, Move};
use std::time::Instant;

/// Score for a move that completes the engine's own line
pub const WIN_SCORE: i32 = 1000;
/// Score for a move that leaves the opponent with a finished line
pub const LOSS_SCORE: i32 = -1000;

/// Which rung of the scoring ladder produced the chosen move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// The chosen move wins immediately
    ImmediateWin,
    /// Best static evaluation among the candidates
    Greedy,
}

/// Result of a move search with statistics for the debug panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any legal move exists
    pub best_move: Option<Move>,
    /// Score of the chosen move
    pub score: i32,
    /// How the move was found
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of candidate moves scored
    pub candidates: u32,
}

/// One-ply greedy move search engine.
///
/// Stateless between calls; a single instance can serve any number of
/// positions and either color.
#[derive(Debug, Clone, Copy, Default)]
pub struct AIEngine;

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Get the best move for `color`, or `None` when no legal move exists
    #[must_use]
    pub fn get_move(&self, board: &Board, color: Marble) -> Option<Move> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move along with search statistics.
    ///
    /// The input board is never mutated; every candidate is simulated on
    /// a copy.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, color: Marble) -> MoveResult {
        let start = Instant::now();

        let moves = legal_moves(board);
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for &mv in &moves {
            let score = self.score_move(board, mv, color);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let search_type = if best_score >= WIN_SCORE {
            SearchType::ImmediateWin
        } else {
            SearchType::Greedy
        };

        MoveResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            search_type,
            time_ms: start.elapsed().as_millis() as u64,
            candidates: moves.len() as u32,
        }
    }

    /// Score a single candidate move for `color` by simulation.
    ///
    /// [`WIN_SCORE`] for an immediate win, [`LOSS_SCORE`] when the
    /// post-move board is a win for the opponent, otherwise the static
    /// evaluation for `color`.
    #[must_use]
    pub fn score_move(&self, board: &Board, mv: Move, color: Marble) -> i32 {
        let mut sim = *board;
        if !apply(&mut sim, mv, color) {
            return LOSS_SCORE;
        }

        if has_win_for(&sim, color) {
            WIN_SCORE
        } else if has_win_for(&sim, color.opponent()) {
            LOSS_SCORE
        } else {
            evaluate(&sim, color)
        }
    }
}
