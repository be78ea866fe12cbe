//! Win condition checking
//!
//! A player wins with 5 consecutive same-owner cells in one of 4 line
//! directions. Each direction is scanned only from its canonical anchor
//! half, which on a 6-wide board with 5-length lines covers every possible
//! line exactly once: a line in direction (dr,dc) starting at (r,c) needs
//! r+4*dr and c+4*dc in-bounds, forcing the anchor predicates below.
//!
//! The game is drawn when every edge cell is occupied and no line exists.

use crate::board::{Board, Marble, Pos, BOARD_SIZE};

/// Line directions in scan priority order
const LINE_DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Number of consecutive cells needed to win
const WIN_LENGTH: usize = 5;

/// Whether (row, col) is a canonical anchor for the direction at `dir_idx`
#[inline]
fn is_anchor(row: u8, col: u8, dir_idx: usize) -> bool {
    match dir_idx {
        0 => col <= 1,             // Horizontal
        1 => row <= 1,             // Vertical
        2 => row <= 1 && col <= 1, // Diagonal SE
        _ => row <= 1 && col >= 4, // Diagonal SW
    }
}

/// Check 5 consecutive cells owned by `player` from (row, col) along (dr, dc)
fn check_line(board: &Board, row: u8, col: u8, dr: i32, dc: i32, player: Marble) -> bool {
    for i in 0..WIN_LENGTH as i32 {
        let r = row as i32 + i * dr;
        let c = col as i32 + i * dc;
        if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != player {
            return false;
        }
    }
    true
}

/// Scan for a winner.
///
/// Row-major over occupied cells, directions in priority order
/// horizontal, vertical, SE, SW; the first line found decides. When a
/// single push completes lines for both players, this fixed order is the
/// tie-break.
pub fn find_winner(board: &Board) -> Option<Marble> {
    find_winning_line(board).map(|(winner, _)| winner)
}

/// Scan for a winner and return the winning line for highlighting
pub fn find_winning_line(board: &Board) -> Option<(Marble, [Pos; 5])> {
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let player = board.get(Pos::new(row, col));
            if player == Marble::Empty {
                continue;
            }

            for (dir_idx, &(dr, dc)) in LINE_DIRECTIONS.iter().enumerate() {
                if !is_anchor(row, col, dir_idx) {
                    continue;
                }
                if check_line(board, row, col, dr, dc, player) {
                    let mut line = [Pos::new(row, col); 5];
                    for (i, cell) in line.iter_mut().enumerate() {
                        *cell = Pos::new(
                            (row as i32 + i as i32 * dr) as u8,
                            (col as i32 + i as i32 * dc) as u8,
                        );
                    }
                    return Some((player, line));
                }
            }
        }
    }
    None
}

/// Fast win test for one player, used by the AI's move scoring
pub fn has_win_for(board: &Board, player: Marble) -> bool {
    if player == Marble::Empty {
        return false;
    }

    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            if board.get(Pos::new(row, col)) != player {
                continue;
            }
            for (dir_idx, &(dr, dc)) in LINE_DIRECTIONS.iter().enumerate() {
                if is_anchor(row, col, dir_idx) && check_line(board, row, col, dr, dc, player) {
                    return true;
                }
            }
        }
    }
    false
}

/// True when every edge cell is occupied. With no winner this is a draw.
pub fn edge_ring_full(board: &Board) -> bool {
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            if pos.is_edge() && board.is_empty(pos) {
                return false;
            }
        }
    }
    true
}
