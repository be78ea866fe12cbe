//! Heuristic evaluation function for Pentaroll board positions
//!
//! The score rewards connected runs: every marble contributes, per line
//! direction, the squared length of the same-owner run it sits in (runs of
//! one score nothing). A run of length L is therefore worth L * L^2 per
//! direction, once per member marble. There is no opponent term; win and
//! loss overrides live in the search, not here.

use crate::board::{Board, Marble, Pos};

/// Direction vectors for line checking (4 directions)
/// Each is scanned both ways from the marble, so 4 cover all 8 rays.
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Evaluate the board for `player`.
///
/// Returns the summed run score over all of `player`'s marbles; higher is
/// better. Returns 0 for `Marble::Empty`.
#[must_use]
pub fn evaluate(board: &Board, player: Marble) -> i32 {
    let Some(marbles) = board.marbles(player) else {
        return 0;
    };

    let mut score = 0;
    for pos in marbles.iter_ones() {
        score += run_score(board, pos, player);
    }
    score
}

/// Run contribution of a single marble across all 4 line directions
fn run_score(board: &Board, pos: Pos, player: Marble) -> i32 {
    let mut total = 0;

    for &(dr, dc) in &DIRECTIONS {
        let mut len = 1i32;

        // Positive direction
        let mut r = pos.row as i32 + dr;
        let mut c = pos.col as i32 + dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == player {
            len += 1;
            r += dr;
            c += dc;
        }

        // Negative direction
        r = pos.row as i32 - dr;
        c = pos.col as i32 - dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == player {
            len += 1;
            r -= dr;
            c -= dc;
        }

        if len >= 2 {
            total += len * len;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Marble::Red), 0);
        assert_eq!(evaluate(&board, Marble::Green), 0);
        assert_eq!(evaluate(&board, Marble::Empty), 0);
    }

    #[test]
    fn test_lone_marble_scores_zero() {
        let mut board = Board::new();
        board.place_marble(Pos::new(0, 3), Marble::Red);
        assert_eq!(evaluate(&board, Marble::Red), 0);
    }

    #[test]
    fn test_adjacent_pair() {
        let mut board = Board::new();
        board.place_marble(Pos::new(0, 2), Marble::Red);
        board.place_marble(Pos::new(0, 3), Marble::Red);

        // Each marble sees one horizontal run of 2: 2 * 2^2 = 8
        assert_eq!(evaluate(&board, Marble::Red), 8);
        assert_eq!(evaluate(&board, Marble::Green), 0);
    }

    #[test]
    fn test_three_in_a_row() {
        let mut board = Board::new();
        for col in 1..4 {
            board.place_marble(Pos::new(0, col), Marble::Green);
        }

        // Each of the 3 marbles sees the full run: 3 * 3^2 = 27
        assert_eq!(evaluate(&board, Marble::Green), 27);
    }

    #[test]
    fn test_runs_in_multiple_directions_add_up() {
        let mut board = Board::new();
        // L-shape at the corner: (0,0)-(0,1) horizontal, (0,0)-(1,0) vertical
        board.place_marble(Pos::new(0, 0), Marble::Red);
        board.place_marble(Pos::new(0, 1), Marble::Red);
        board.place_marble(Pos::new(1, 0), Marble::Red);

        // (0,0): horizontal 4 + vertical 4 = 8
        // (0,1): horizontal 4; (1,0): vertical 4
        assert_eq!(evaluate(&board, Marble::Red), 16);
    }

    #[test]
    fn test_opponent_marble_breaks_run() {
        let mut board = Board::new();
        board.place_marble(Pos::new(0, 1), Marble::Red);
        board.place_marble(Pos::new(0, 2), Marble::Green);
        board.place_marble(Pos::new(0, 3), Marble::Red);

        assert_eq!(evaluate(&board, Marble::Red), 0);
    }

    #[test]
    fn test_diagonal_run_counts() {
        let mut board = Board::new();
        board.place_marble(Pos::new(1, 1), Marble::Green);
        board.place_marble(Pos::new(2, 2), Marble::Green);

        assert_eq!(evaluate(&board, Marble::Green), 8);
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let mut board = Board::new();
        board.place_marble(Pos::new(0, 0), Marble::Red);
        board.place_marble(Pos::new(0, 1), Marble::Red);
        let snapshot = board;

        let _ = evaluate(&board, Marble::Red);
        assert_eq!(board, snapshot);
    }
}
