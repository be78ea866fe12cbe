//! Pentaroll game engine
//!
//! A marble board game on a 6x6 grid:
//! - Marbles enter only on the 20-cell edge ring
//! - Clicking an edge marble pushes the whole contiguous run one cell,
//!   and the mover's marble fills the vacated origin
//! - 5-in-a-row in any direction wins, anywhere on the board
//! - The game is drawn when the edge ring fills with no line
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Game rules (move legality, pushes, win and draw detection)
//! - [`eval`]: Position evaluation heuristic
//! - [`engine`]: One-ply greedy AI built on the evaluation
//! - [`game`]: Turn controller with pacing and an event queue
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use pentaroll::{AIEngine, Board, Marble, Pos};
//! use pentaroll::rules::apply;
//!
//! let mut board = Board::new();
//! let engine = AIEngine::new();
//!
//! // Red opens on the edge ring
//! board.place_marble(Pos::new(0, 2), Marble::Red);
//!
//! // The CPU responds as Green
//! if let Some(mv) = engine.get_move(&board, Marble::Green) {
//!     assert!(apply(&mut board, mv, Marble::Green));
//! }
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Marble, Pos, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use game::{GameController, GameEvent, GameMode, GameOutcome};
pub use rules::Move;
