//! Engine error type.
//!
//! The board engine has very few failure modes. Each one is a caller contract
//! violation that must surface instead of being silently ignored.

use std::fmt;

use crate::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board side length outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    InvalidSize { size: usize },
    /// A tile was requested on a board with no empty cell.
    BoardFull,
    /// Text that does not name a direction.
    UnknownDirection(String),
    /// Row data that does not form a square grid.
    NotSquare { rows: usize, row: usize, len: usize },
    /// A nonzero tile that is not a power of two.
    InvalidTile { value: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidSize { size } => write!(
                f,
                "board size {size} is outside the supported range \
                 {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
            ),
            EngineError::BoardFull => write!(f, "cannot spawn a tile on a full board"),
            EngineError::UnknownDirection(s) => write!(f, "unknown direction: {s:?}"),
            EngineError::NotSquare { rows, row, len } => write!(
                f,
                "row {row} has {len} cells but the board has {rows} rows"
            ),
            EngineError::InvalidTile { value } => {
                write!(f, "tile value {value} is not a power of two")
            }
        }
    }
}

impl std::error::Error for EngineError {}
