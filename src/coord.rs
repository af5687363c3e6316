//! Validated grid coordinates.

use core::fmt;

use crate::common::BoardError;
use crate::config::GRID_SIZE;

/// Orthogonal offsets: right, left, down, up.
const STEPS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A (row, column) cell on the game grid, 0-indexed.
///
/// A `Coord` can only be built inside `0..GRID_SIZE` on both axes, so the rest
/// of the crate indexes grids with it without re-checking bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Validate `(row, col)` against the grid bounds.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Self::from_index(row, col))
    }

    /// Caller guarantees both indices are below `GRID_SIZE`.
    #[inline]
    pub(crate) fn from_index(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row: row as u8, col: col as u8 }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Offset by `(dr, dc)`, or `None` when that leaves the grid.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        let r = self.row().checked_add_signed(dr)?;
        let c = self.col().checked_add_signed(dc)?;
        Self::new(r, c).ok()
    }

    /// In-bounds orthogonal neighbours.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        STEPS.iter().filter_map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// Every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE).flat_map(|r| (0..GRID_SIZE).map(move |c| Coord::from_index(r, c)))
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

/// Renders as the familiar letter-column notation, e.g. `B7` for (6, 1).
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}
