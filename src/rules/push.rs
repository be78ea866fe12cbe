//! Move generation and application
//!
//! A move is either a placement on an empty edge cell or a push: the
//! contiguous run of marbles starting at an occupied edge cell slides one
//! step along a permitted direction and the mover's marble fills the
//! vacated origin. A push is legal iff the run's landing cell stays on the
//! board; nothing is ever pushed off the edge.

use crate::board::{Board, Direction, Marble, Pos, BOARD_SIZE};

/// A move: placement on an empty edge cell, or a push from an occupied one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Pos),
    Push(Pos, Direction),
}

impl Move {
    /// The edge cell the move acts on
    #[inline]
    pub fn pos(self) -> Pos {
        match self {
            Move::Place(pos) => pos,
            Move::Push(pos, _) => pos,
        }
    }
}

/// Length of the contiguous occupied run from `pos` along `dir`, inclusive.
///
/// Returns 0 when `pos` itself is empty.
pub fn run_length(board: &Board, pos: Pos, dir: Direction) -> u32 {
    let (dr, dc) = dir.delta();
    let mut r = pos.row as i32;
    let mut c = pos.col as i32;
    let mut len = 0;

    while Pos::is_valid(r, c) && board.is_occupied(Pos::new(r as u8, c as u8)) {
        len += 1;
        r += dr;
        c += dc;
    }

    len
}

/// Check whether the run starting at `pos` can slide one step along `dir`.
///
/// The run's landing cell is `pos + run_length * dir`; the push is legal
/// iff that cell lies on the board. This is the only illegal-push
/// condition.
pub fn can_push(board: &Board, pos: Pos, dir: Direction) -> bool {
    if board.is_empty(pos) {
        return false;
    }

    let n = run_length(board, pos, dir) as i32;
    let (dr, dc) = dir.delta();
    Pos::is_valid(pos.row as i32 + n * dr, pos.col as i32 + n * dc)
}

/// Enumerate every legal move on the board.
///
/// Row-major scan of the edge ring: an empty cell yields a placement, an
/// occupied cell yields one push per geometrically permitted direction
/// that passes `can_push`. The order is deterministic and is the AI's
/// tie-break order.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();

    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            if !pos.is_edge() {
                continue;
            }

            if board.is_empty(pos) {
                moves.push(Move::Place(pos));
            } else {
                for &dir in pos.available_directions() {
                    if can_push(board, pos, dir) {
                        moves.push(Move::Push(pos, dir));
                    }
                }
            }
        }
    }

    moves
}

/// Apply a move for `player`, validating it first.
///
/// Returns `false` and leaves the board untouched when the move is
/// illegal: off-edge position, placement on an occupied cell, push from an
/// empty cell, direction not permitted by the cell's geometry, or a push
/// whose run would land off-board.
///
/// A successful push slides the whole run one step in its direction,
/// preserving owners and relative order, then places `player`'s marble at
/// the vacated origin. Exactly one marble is added; none are removed.
pub fn apply(board: &mut Board, mv: Move, player: Marble) -> bool {
    if player == Marble::Empty || !mv.pos().is_edge() {
        return false;
    }

    match mv {
        Move::Place(pos) => {
            if !board.is_empty(pos) {
                return false;
            }
            board.place_marble(pos, player);
            true
        }
        Move::Push(pos, dir) => {
            if !pos.available_directions().contains(&dir) || !can_push(board, pos, dir) {
                return false;
            }

            // Collect the run front-to-back, owners included.
            let mut run = Vec::new();
            let mut cur = pos;
            while board.is_occupied(cur) {
                run.push((cur, board.get(cur)));
                match cur.step(dir) {
                    Some(next) => cur = next,
                    None => break,
                }
            }

            // Slide one step: clear, then rewrite shifted. can_push
            // guaranteed every landing cell is in-bounds.
            for &(cell, _) in &run {
                board.remove_marble(cell);
            }
            for &(cell, owner) in &run {
                if let Some(next) = cell.step(dir) {
                    board.place_marble(next, owner);
                }
            }

            board.place_marble(pos, player);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::EDGE;

    fn fill_row(board: &mut Board, row: u8, cols: std::ops::Range<u8>, marble: Marble) {
        for col in cols {
            board.place_marble(Pos::new(row, col), marble);
        }
    }

    #[test]
    fn test_run_length() {
        let mut board = Board::new();
        fill_row(&mut board, 0, 0..3, Marble::Red);

        assert_eq!(run_length(&board, Pos::new(0, 0), Direction::Right), 3);
        assert_eq!(run_length(&board, Pos::new(0, 1), Direction::Right), 2);
        assert_eq!(run_length(&board, Pos::new(0, 0), Direction::Down), 1);
        assert_eq!(run_length(&board, Pos::new(0, 4), Direction::Right), 0);
    }

    #[test]
    fn test_run_length_mixed_owners() {
        let mut board = Board::new();
        board.place_marble(Pos::new(0, 0), Marble::Red);
        board.place_marble(Pos::new(0, 1), Marble::Green);
        board.place_marble(Pos::new(0, 2), Marble::Red);

        // Runs are contiguity of occupancy, not of ownership
        assert_eq!(run_length(&board, Pos::new(0, 0), Direction::Right), 3);
    }

    #[test]
    fn test_push_rejected_when_row_full() {
        let mut board = Board::new();
        fill_row(&mut board, 0, 0..6, Marble::Red);

        // Run length 6, landing col 6: off-board
        assert!(!can_push(&board, Pos::new(0, 0), Direction::Right));
    }

    #[test]
    fn test_push_allowed_with_gap() {
        let mut board = Board::new();
        fill_row(&mut board, 0, 0..5, Marble::Red);

        // Run length 5, landing col 5: still on the board
        assert!(can_push(&board, Pos::new(0, 0), Direction::Right));
    }

    #[test]
    fn test_push_from_empty_cell_rejected() {
        let board = Board::new();
        assert!(!can_push(&board, Pos::new(0, 0), Direction::Right));
        let mut board = board;
        assert!(!apply(
            &mut board,
            Move::Push(Pos::new(0, 0), Direction::Right),
            Marble::Red
        ));
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_apply_placement() {
        let mut board = Board::new();
        assert!(apply(&mut board, Move::Place(Pos::new(0, 2)), Marble::Red));
        assert_eq!(board.get(Pos::new(0, 2)), Marble::Red);

        // Occupied cell cannot receive a placement
        assert!(!apply(&mut board, Move::Place(Pos::new(0, 2)), Marble::Green));
        assert_eq!(board.get(Pos::new(0, 2)), Marble::Red);
    }

    #[test]
    fn test_apply_rejects_interior_placement() {
        let mut board = Board::new();
        assert!(!apply(&mut board, Move::Place(Pos::new(2, 2)), Marble::Red));
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_apply_rejects_illegal_direction() {
        let mut board = Board::new();
        board.place_marble(Pos::new(0, 2), Marble::Red);

        // Top-row cells may only push Down
        assert!(!apply(
            &mut board,
            Move::Push(Pos::new(0, 2), Direction::Right),
            Marble::Green
        ));
        assert_eq!(board.get(Pos::new(0, 2)), Marble::Red);
        assert_eq!(board.marble_count(), 1);
    }

    #[test]
    fn test_push_slides_run_preserving_owners() {
        let mut board = Board::new();
        board.place_marble(Pos::new(0, 2), Marble::Red);
        board.place_marble(Pos::new(1, 2), Marble::Green);

        assert!(apply(
            &mut board,
            Move::Push(Pos::new(0, 2), Direction::Down),
            Marble::Green
        ));

        // Run slid one step down, origin filled by the mover
        assert_eq!(board.get(Pos::new(0, 2)), Marble::Green);
        assert_eq!(board.get(Pos::new(1, 2)), Marble::Red);
        assert_eq!(board.get(Pos::new(2, 2)), Marble::Green);
        assert_eq!(board.marble_count(), 3);
    }

    #[test]
    fn test_push_adds_exactly_one_marble() {
        let mut board = Board::new();
        fill_row(&mut board, 0, 0..5, Marble::Red);
        let before = board.marble_count();

        assert!(apply(
            &mut board,
            Move::Push(Pos::new(0, 0), Direction::Right),
            Marble::Green
        ));
        assert_eq!(board.marble_count(), before + 1);

        // Whole run shifted right, no marble lost off the end
        assert_eq!(board.get(Pos::new(0, 0)), Marble::Green);
        for col in 1..6 {
            assert_eq!(board.get(Pos::new(0, col)), Marble::Red);
        }
    }

    #[test]
    fn test_corner_diagonal_push() {
        let mut board = Board::new();
        board.place_marble(Pos::new(0, 0), Marble::Red);

        assert!(apply(
            &mut board,
            Move::Push(Pos::new(0, 0), Direction::DownRight),
            Marble::Green
        ));
        assert_eq!(board.get(Pos::new(1, 1)), Marble::Red);
        assert_eq!(board.get(Pos::new(0, 0)), Marble::Green);
    }

    #[test]
    fn test_legal_moves_empty_board() {
        let board = Board::new();
        let moves = legal_moves(&board);

        // 20 edge cells, all placements
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|m| matches!(m, Move::Place(_))));
        assert!(moves.iter().all(|m| m.pos().is_edge()));

        // Row-major enumeration starts at the top-left corner
        assert_eq!(moves[0], Move::Place(Pos::new(0, 0)));
        assert_eq!(moves[19], Move::Place(Pos::new(EDGE, EDGE)));
    }

    #[test]
    fn test_legal_moves_occupied_corner() {
        let mut board = Board::new();
        board.place_marble(Pos::new(0, 0), Marble::Red);

        let moves = legal_moves(&board);
        let corner_moves: Vec<&Move> = moves
            .iter()
            .filter(|m| m.pos() == Pos::new(0, 0))
            .collect();

        // Corner marble with empty surroundings pushes all 3 ways
        assert_eq!(corner_moves.len(), 3);
        assert!(corner_moves.iter().all(|m| matches!(m, Move::Push(_, _))));
    }

    #[test]
    fn test_legal_moves_does_not_mutate() {
        let mut board = Board::new();
        board.place_marble(Pos::new(0, 0), Marble::Red);
        board.place_marble(Pos::new(5, 3), Marble::Green);
        let snapshot = board;

        let _ = legal_moves(&board);
        assert_eq!(board, snapshot);
    }
}
