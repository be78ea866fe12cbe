//! Game controller: turn order, input gating and pacing
//!
//! The controller owns the single live board and is its only writer.
//! It runs the phase machine
//!
//! `AwaitingInput -> Resolving -> AwaitingInput | AiThinking | Over`
//!
//! where `Resolving` holds the board for the animation delay and
//! `AiThinking` delays the CPU move in PvC mode. Both delays are pure
//! pacing: the machine is advanced by [`GameController::tick`] with a
//! caller-supplied instant, so zero-delay configurations step through the
//! same transitions deterministically (the tests do exactly that).
//!
//! State changes are reported through a drained event queue; invalid
//! submissions are rejected with a status and no state change.

use crate::board::{Board, Direction, Marble, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::{self, Move};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Animation hold after every accepted move
pub const DEFAULT_RESOLVE_DELAY: Duration = Duration::from_millis(500);
/// CPU thinking pause before the AI move is computed
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(1500);

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two humans, hotseat
    #[default]
    PvP,
    /// Human (Red) versus the CPU (Green)
    PvC,
}

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Marble),
    Draw,
}

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a move from the player to act
    AwaitingInput,
    /// A move was applied; the board is held for the animation delay
    Resolving { until: Instant },
    /// PvC only: the CPU's cosmetic thinking pause
    AiThinking { since: Instant },
    /// Terminal; only `reset` leaves this phase
    Over,
}

/// State change notifications for the renderer, drained via `poll_event`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    BoardChanged(Board),
    TurnChanged(Marble),
    GameOver(GameOutcome),
    DirectionChoiceNeeded { pos: Pos, directions: Vec<Direction> },
}

/// Orchestrates one game from first move to win, draw or reset
pub struct GameController {
    board: Board,
    mode: GameMode,
    current: Marble,
    phase: Phase,
    outcome: Option<GameOutcome>,
    last_move: Option<Move>,
    move_count: u32,
    engine: AIEngine,
    last_ai_result: Option<MoveResult>,
    resolve_delay: Duration,
    ai_delay: Duration,
    events: VecDeque<GameEvent>,
}

impl GameController {
    pub fn new(mode: GameMode) -> Self {
        Self::with_pacing(mode, DEFAULT_RESOLVE_DELAY, DEFAULT_AI_DELAY)
    }

    /// Create a controller with explicit pacing delays.
    ///
    /// Zero delays are valid and make every `tick` advance immediately.
    pub fn with_pacing(mode: GameMode, resolve_delay: Duration, ai_delay: Duration) -> Self {
        Self {
            board: Board::new(),
            mode,
            current: Marble::Red,
            phase: Phase::AwaitingInput,
            outcome: None,
            last_move: None,
            move_count: 0,
            engine: AIEngine::new(),
            last_ai_result: None,
            resolve_delay,
            ai_delay,
            events: VecDeque::new(),
        }
    }

    /// Start over in the given mode, dropping all game state
    pub fn reset(&mut self, mode: GameMode) {
        let resolve_delay = self.resolve_delay;
        let ai_delay = self.ai_delay;
        *self = Self::with_pacing(mode, resolve_delay, ai_delay);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_player(&self) -> Marble {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Statistics of the CPU's most recent search, for the debug panel
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over)
    }

    /// Whether the CPU owns the current turn
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::PvC && self.current == Marble::Green
    }

    /// Whether a human submission would currently be accepted
    pub fn accepting_input(&self) -> bool {
        matches!(self.phase, Phase::AwaitingInput) && !self.is_ai_turn()
    }

    /// Next pending state-change event, if any
    pub fn poll_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    /// Legal push directions for the marble at `pos` on the live board.
    ///
    /// Geometry directions filtered by push legality; empty for empty or
    /// interior cells. Used by the renderer to present the choice when a
    /// corner marble is selected.
    pub fn available_directions(&self, pos: Pos) -> Vec<Direction> {
        if self.board.is_empty(pos) {
            return Vec::new();
        }
        pos.available_directions()
            .iter()
            .copied()
            .filter(|&dir| rules::can_push(&self.board, pos, dir))
            .collect()
    }

    /// Submit a placement on an empty edge cell
    pub fn submit_placement(&mut self, pos: Pos) -> Result<(), String> {
        self.gate()?;
        self.apply_move(Move::Place(pos))
    }

    /// Submit a push of the marble at `pos` along `dir`
    pub fn submit_push(&mut self, pos: Pos, dir: Direction) -> Result<(), String> {
        self.gate()?;
        self.apply_move(Move::Push(pos, dir))
    }

    /// Dispatch a cell selection the way the game UI expects.
    ///
    /// Empty edge cell: place. Occupied cell with a single legal push
    /// direction: push right away. Several directions (a corner marble):
    /// emit `DirectionChoiceNeeded` and wait for `submit_push`.
    pub fn select_cell(&mut self, pos: Pos) -> Result<(), String> {
        self.gate()?;

        if !pos.is_edge() {
            return Err("Only edge cells are playable".to_string());
        }

        if self.board.is_empty(pos) {
            return self.apply_move(Move::Place(pos));
        }

        let directions = self.available_directions(pos);
        match directions.len() {
            0 => Err("This marble cannot be pushed anywhere".to_string()),
            1 => self.apply_move(Move::Push(pos, directions[0])),
            _ => {
                self.events
                    .push_back(GameEvent::DirectionChoiceNeeded { pos, directions });
                Ok(())
            }
        }
    }

    /// Advance the phase machine. Call once per frame (or per test step).
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Resolving { until } if now >= until => self.finish_resolving(now),
            Phase::AiThinking { since } if now.duration_since(since) >= self.ai_delay => {
                self.run_ai_move(now);
            }
            _ => {}
        }
    }

    /// Reject submissions outside a human `AwaitingInput` phase
    fn gate(&self) -> Result<(), String> {
        match self.phase {
            Phase::Over => Err("Game is over".to_string()),
            Phase::Resolving { .. } => Err("Move still resolving".to_string()),
            Phase::AiThinking { .. } => Err("CPU is thinking".to_string()),
            Phase::AwaitingInput if self.is_ai_turn() => Err("Not your turn".to_string()),
            Phase::AwaitingInput => Ok(()),
        }
    }

    /// Validate and apply a move for the current player
    fn apply_move(&mut self, mv: Move) -> Result<(), String> {
        if !rules::apply(&mut self.board, mv, self.current) {
            return Err("Invalid move".to_string());
        }

        self.last_move = Some(mv);
        self.move_count += 1;
        self.events.push_back(GameEvent::BoardChanged(self.board));

        // Outcome is decided now; announced when resolving finishes.
        self.outcome = if let Some(winner) = rules::find_winner(&self.board) {
            Some(GameOutcome::Winner(winner))
        } else if rules::edge_ring_full(&self.board) {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        self.phase = Phase::Resolving {
            until: Instant::now() + self.resolve_delay,
        };
        Ok(())
    }

    /// Leave `Resolving`: finish the game or hand the turn over
    fn finish_resolving(&mut self, now: Instant) {
        if let Some(outcome) = self.outcome {
            self.phase = Phase::Over;
            self.events.push_back(GameEvent::GameOver(outcome));
            return;
        }

        self.current = self.current.opponent();
        self.events.push_back(GameEvent::TurnChanged(self.current));

        self.phase = if self.is_ai_turn() {
            Phase::AiThinking { since: now }
        } else {
            Phase::AwaitingInput
        };
    }

    /// Compute and apply the CPU move
    fn run_ai_move(&mut self, _now: Instant) {
        let result = self.engine.get_move_with_stats(&self.board, self.current);
        self.last_ai_result = Some(result);

        match result.best_move {
            Some(mv) => {
                // The engine only proposes legal moves.
                let _ = self.apply_move(mv);
            }
            None => {
                // Unreachable while the game is live: an empty edge cell
                // always yields a placement and a full edge ring has
                // already ended the game as a draw.
                self.phase = Phase::AwaitingInput;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::EDGE;

    fn controller(mode: GameMode) -> GameController {
        GameController::with_pacing(mode, Duration::ZERO, Duration::ZERO)
    }

    fn drain(ctl: &mut GameController) -> Vec<GameEvent> {
        std::iter::from_fn(|| ctl.poll_event()).collect()
    }

    #[test]
    fn test_red_moves_first() {
        let ctl = controller(GameMode::PvP);
        assert_eq!(ctl.current_player(), Marble::Red);
        assert!(ctl.accepting_input());
        assert!(!ctl.is_over());
    }

    #[test]
    fn test_placement_resolves_then_switches_turn() {
        let mut ctl = controller(GameMode::PvP);

        ctl.submit_placement(Pos::new(0, 2)).unwrap();
        assert!(matches!(ctl.phase(), Phase::Resolving { .. }));
        assert_eq!(ctl.board().get(Pos::new(0, 2)), Marble::Red);

        // Gated while resolving
        assert!(ctl.submit_placement(Pos::new(0, 3)).is_err());

        ctl.tick(Instant::now());
        assert_eq!(ctl.current_player(), Marble::Green);
        assert!(ctl.accepting_input());

        let events = drain(&mut ctl);
        assert_eq!(
            events,
            vec![
                GameEvent::BoardChanged(*ctl.board()),
                GameEvent::TurnChanged(Marble::Green),
            ]
        );
    }

    #[test]
    fn test_invalid_submissions_rejected_without_state_change() {
        let mut ctl = controller(GameMode::PvP);

        // Interior cell
        assert!(ctl.submit_placement(Pos::new(2, 2)).is_err());
        // Push from an empty cell
        assert!(ctl.submit_push(Pos::new(0, 0), Direction::Down).is_err());

        assert!(ctl.board().is_board_empty());
        assert_eq!(ctl.move_count(), 0);
        assert!(drain(&mut ctl).is_empty());
    }

    #[test]
    fn test_select_cell_places_on_empty_edge() {
        let mut ctl = controller(GameMode::PvP);
        ctl.select_cell(Pos::new(5, 3)).unwrap();
        assert_eq!(ctl.board().get(Pos::new(5, 3)), Marble::Red);
    }

    #[test]
    fn test_select_cell_auto_pushes_single_direction() {
        let mut ctl = controller(GameMode::PvP);
        ctl.submit_placement(Pos::new(0, 2)).unwrap();
        ctl.tick(Instant::now());

        // Green selects the red marble on the top row: only Down is legal
        ctl.select_cell(Pos::new(0, 2)).unwrap();
        assert_eq!(ctl.board().get(Pos::new(1, 2)), Marble::Red);
        assert_eq!(ctl.board().get(Pos::new(0, 2)), Marble::Green);
    }

    #[test]
    fn test_select_cell_requests_direction_choice_at_corner() {
        let mut ctl = controller(GameMode::PvP);
        ctl.submit_placement(Pos::new(0, 0)).unwrap();
        ctl.tick(Instant::now());
        let _ = drain(&mut ctl);

        ctl.select_cell(Pos::new(0, 0)).unwrap();

        // No move happened yet, the choice goes to the renderer
        assert_eq!(ctl.board().marble_count(), 1);
        let events = drain(&mut ctl);
        assert_eq!(events.len(), 1);
        match &events[0] {
            GameEvent::DirectionChoiceNeeded { pos, directions } => {
                assert_eq!(*pos, Pos::new(0, 0));
                assert_eq!(directions.len(), 3);
            }
            other => panic!("expected DirectionChoiceNeeded, got {:?}", other),
        }

        // The follow-up push is a normal submission
        ctl.submit_push(Pos::new(0, 0), Direction::DownRight).unwrap();
        ctl.tick(Instant::now());
        assert_eq!(ctl.board().get(Pos::new(1, 1)), Marble::Red);
        assert_eq!(ctl.board().get(Pos::new(0, 0)), Marble::Green);
    }

    #[test]
    fn test_win_ends_game_and_gates_input() {
        let mut ctl = controller(GameMode::PvP);

        // Alternate: red builds row 0 cols 0-4, green parks on row 5
        for i in 0..4u8 {
            ctl.submit_placement(Pos::new(0, i)).unwrap();
            ctl.tick(Instant::now());
            ctl.submit_placement(Pos::new(5, i)).unwrap();
            ctl.tick(Instant::now());
        }
        let _ = drain(&mut ctl);

        ctl.submit_placement(Pos::new(0, 4)).unwrap();
        ctl.tick(Instant::now());

        assert!(ctl.is_over());
        assert_eq!(ctl.outcome(), Some(GameOutcome::Winner(Marble::Red)));
        let events = drain(&mut ctl);
        assert!(events.contains(&GameEvent::GameOver(GameOutcome::Winner(Marble::Red))));

        // Terminal phase rejects everything until reset
        assert!(ctl.submit_placement(Pos::new(5, 4)).is_err());
        ctl.tick(Instant::now());
        assert!(ctl.is_over());
    }

    #[test]
    fn test_pvc_ai_takes_its_turn() {
        let mut ctl = controller(GameMode::PvC);

        ctl.submit_placement(Pos::new(0, 2)).unwrap();
        ctl.tick(Instant::now()); // resolve -> AiThinking
        assert!(matches!(ctl.phase(), Phase::AiThinking { .. }));
        assert!(!ctl.accepting_input());
        assert!(ctl.submit_placement(Pos::new(0, 3)).is_err());

        ctl.tick(Instant::now()); // thinking delay elapsed -> AI moves
        assert_eq!(ctl.move_count(), 2);
        assert!(ctl.last_ai_result().is_some());

        ctl.tick(Instant::now()); // resolve AI move -> back to the human
        assert_eq!(ctl.current_player(), Marble::Red);
        assert!(ctl.accepting_input());
    }

    #[test]
    fn test_pvc_ai_wins_when_it_can() {
        let mut ctl = controller(GameMode::PvC);

        // Hand-build a board where green wins by placing at (0,5):
        // red is scattered, green holds row 0 cols 1-4.
        for col in 1..5 {
            ctl.board.place_marble(Pos::new(0, col), Marble::Green);
        }
        ctl.board.place_marble(Pos::new(5, 0), Marble::Red);
        ctl.board.place_marble(Pos::new(5, 2), Marble::Red);
        ctl.board.place_marble(Pos::new(3, 0), Marble::Red);
        ctl.current = Marble::Green;
        ctl.phase = Phase::AiThinking { since: Instant::now() };

        ctl.tick(Instant::now()); // AI moves
        ctl.tick(Instant::now()); // resolve

        assert!(ctl.is_over());
        assert_eq!(ctl.outcome(), Some(GameOutcome::Winner(Marble::Green)));
    }

    #[test]
    fn test_available_directions_filters_blocked_pushes() {
        let mut ctl = controller(GameMode::PvP);
        // Fill column 0 top to bottom so pushing Down from (0,0) is illegal
        for row in 0..6 {
            ctl.board.place_marble(Pos::new(row, 0), Marble::Red);
        }

        let dirs = ctl.available_directions(Pos::new(0, 0));
        assert!(!dirs.contains(&Direction::Down));
        assert!(dirs.contains(&Direction::Right));
        assert!(dirs.contains(&Direction::DownRight));

        // Occupied non-corner edge cell still has its single direction
        assert_eq!(ctl.available_directions(Pos::new(1, 0)), vec![Direction::Right]);
        // Empty and interior cells offer nothing
        assert!(ctl.available_directions(Pos::new(0, 1)).is_empty());
        assert!(ctl.available_directions(Pos::new(2, 2)).is_empty());
    }

    #[test]
    fn test_draw_detection() {
        let mut ctl = controller(GameMode::PvP);
        use Marble::{Green, Red};

        // Fill the edge ring minus one cell with a lineless pattern
        let top = [Red, Red, Green, Green, Red, Red];
        let bottom = [Green, Green, Red, Red, Green, Green];
        for col in 0..6u8 {
            ctl.board.place_marble(Pos::new(0, col), top[col as usize]);
            if col != EDGE {
                ctl.board.place_marble(Pos::new(5, col), bottom[col as usize]);
            }
        }
        let left = [Green, Red, Green, Red];
        let right = [Red, Green, Red, Green];
        for row in 1..5u8 {
            ctl.board.place_marble(Pos::new(row, 0), left[row as usize - 1]);
            ctl.board.place_marble(Pos::new(row, 5), right[row as usize - 1]);
        }

        // The final placement fills the ring without forming a line
        ctl.submit_placement(Pos::new(5, EDGE)).unwrap();
        ctl.tick(Instant::now());

        assert!(ctl.is_over());
        assert_eq!(ctl.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_reset_starts_fresh() {
        let mut ctl = controller(GameMode::PvP);
        ctl.submit_placement(Pos::new(0, 0)).unwrap();
        ctl.tick(Instant::now());

        ctl.reset(GameMode::PvC);
        assert!(ctl.board().is_board_empty());
        assert_eq!(ctl.current_player(), Marble::Red);
        assert_eq!(ctl.mode(), GameMode::PvC);
        assert_eq!(ctl.move_count(), 0);
        assert!(!ctl.is_over());
        assert!(drain(&mut ctl).is_empty());
    }
}
