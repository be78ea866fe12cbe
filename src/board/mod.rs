//! Board representation for Pentaroll

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (6x6)
pub const BOARD_SIZE: usize = 6;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 36

/// Last valid row/col index, the far edge
pub const EDGE: u8 = (BOARD_SIZE - 1) as u8;

/// Marble colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marble {
    Empty,
    /// Player 1, always moves first
    Red,
    /// Player 2 (the CPU side in PvC mode)
    Green,
}

impl Marble {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Marble {
        match self {
            Marble::Red => Marble::Green,
            Marble::Green => Marble::Red,
            Marble::Empty => Marble::Empty,
        }
    }
}

/// The eight compass directions a push can travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Unit vector (dRow, dCol)
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Arrow glyph for direction choice buttons
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "\u{2191}",
            Direction::Down => "\u{2193}",
            Direction::Left => "\u{2190}",
            Direction::Right => "\u{2192}",
            Direction::UpLeft => "\u{2196}",
            Direction::UpRight => "\u{2197}",
            Direction::DownLeft => "\u{2199}",
            Direction::DownRight => "\u{2198}",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step one cell in `dir`, None when that leaves the board
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if Pos::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Edge cells are the only placeable cells
    #[inline]
    pub fn is_edge(self) -> bool {
        self.row == 0 || self.row == EDGE || self.col == 0 || self.col == EDGE
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == EDGE) && (self.col == 0 || self.col == EDGE)
    }

    /// Push directions permitted by the geometry of this cell.
    ///
    /// Corners allow 3 directions (the two edge-aligned ones plus the
    /// inward diagonal), non-corner edge cells exactly 1 (straight
    /// inward), interior cells none. Whether a push actually fits on a
    /// concrete board is checked separately by `rules::can_push`.
    pub fn available_directions(self) -> &'static [Direction] {
        use Direction::*;
        match (self.row, self.col) {
            (0, 0) => &[Right, Down, DownRight],
            (0, EDGE) => &[Left, Down, DownLeft],
            (EDGE, 0) => &[Right, Up, UpRight],
            (EDGE, EDGE) => &[Left, Up, UpLeft],
            (0, _) => &[Down],
            (EDGE, _) => &[Up],
            (_, 0) => &[Right],
            (_, EDGE) => &[Left],
            _ => &[],
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
