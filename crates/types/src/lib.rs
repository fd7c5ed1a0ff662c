//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is always square. Its side length is chosen per game:
//!
//! - **Default**: 4x4 (the classic game)
//! - **Minimum**: 2x2
//! - **Maximum**: 8x8
//!
//! # Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//! | `SPAWN_FOUR_IN_TEN` | 1 | Out of 10 spawns, how many are a 4 |
//! | `TICK_MS` | 16 | Frame cap for the terminal loop (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert!(dir.is_vertical());
//!
//! let action = GameAction::Move(dir);
//! assert_ne!(action, GameAction::NewGame);
//! ```

/// Board side length used when nothing else is configured
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Smallest supported board side length
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: usize = 8;

/// Number of tiles spawned onto a freshly created board
pub const INITIAL_TILES: usize = 2;

/// Out of every 10 spawns, how many produce a 4 instead of a 2
pub const SPAWN_FOUR_IN_TEN: u32 = 1;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Tile value the player is nominally chasing
pub const WINNING_TILE: u32 = 2048;

/// A single board cell: 0 is empty, otherwise a power of two
pub type Tile = u32;

/// Largest tile a board accepts or produces; two of these do not merge
pub const MAX_TILE: Tile = 1 << 30;

/// Axis-aligned rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Whether the cell at (x, y) lies inside the rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.w
            && (y - self.y) < self.h
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }
}

/// The four sliding directions
///
/// Every direction is reduced to `Left` by the engine before sliding; see
/// `tui_2048_core::moves` for the orientation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from a name or a single letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Whether the engine transposes the board for this direction
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether the engine reverses each row for this direction
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

/// Game actions that can be applied to the session
///
/// Produced by keyboard and mouse input; consumed by `GameState::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in a direction
    Move(Direction),
    /// Throw away the current board and start over at the same size
    NewGame,
    /// Start a new game one size larger
    GrowBoard,
    /// Start a new game one size smaller
    ShrinkBoard,
}
