//! Board structure holding one bitboard per player

use super::bitboard::Bitboard;
use super::{Marble, Pos, BOARD_SIZE};

/// Game board: two color bitboards over the 6x6 grid.
///
/// Copy is deliberate: the AI simulates candidate moves on plain copies,
/// which leaves the live board untouched by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// Red marbles bitboard (player 1)
    pub red: Bitboard,
    /// Green marbles bitboard (player 2)
    pub green: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            red: Bitboard::new(),
            green: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get marble at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Marble {
        if self.red.get(pos) {
            Marble::Red
        } else if self.green.get(pos) {
            Marble::Green
        } else {
            Marble::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.red.get(pos) && !self.green.get(pos)
    }

    /// Check if position holds a marble of either color
    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        !self.is_empty(pos)
    }

    /// Place a marble. Legality checks belong to `rules::apply`.
    #[inline]
    pub fn place_marble(&mut self, pos: Pos, marble: Marble) {
        match marble {
            Marble::Red => self.red.set(pos),
            Marble::Green => self.green.set(pos),
            Marble::Empty => {}
        }
    }

    /// Remove a marble
    #[inline]
    pub fn remove_marble(&mut self, pos: Pos) {
        self.red.clear(pos);
        self.green.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn marbles(&self, marble: Marble) -> Option<&Bitboard> {
        match marble {
            Marble::Red => Some(&self.red),
            Marble::Green => Some(&self.green),
            Marble::Empty => None,
        }
    }

    /// Total marbles on board
    #[inline]
    pub fn marble_count(&self) -> u32 {
        self.red.count() + self.green.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.red.is_empty() && self.green.is_empty()
    }
}
