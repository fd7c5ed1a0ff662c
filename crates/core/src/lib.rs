//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 board engine and the game session. It has
//! **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests beside every rule, property tests in `tests/`
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid with leftward slide/merge, transpose/reverse, spawning, game-over check
//! - [`moves`]: Direction canonicalization and complete moves
//! - [`game_state`]: Session with score, per-size high scores and the RNG
//! - [`rng`]: Seeded LCG used for tile placement
//! - [`snapshot`]: Render-ready copy of the session
//! - [`error`]: Engine contract violations
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes in one direction
//! - Two equal neighbours merge into one tile of double value, once per move
//! - The merged value is added to the score
//! - A move that changed anything spawns a 2 (90%) or a 4 (10%) on an empty cell
//! - The game is over when the board is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(4, 12345).unwrap();
//! game.apply_action(GameAction::Move(Direction::Left)).unwrap();
//! game.apply_action(GameAction::Move(Direction::Up)).unwrap();
//!
//! assert!(game.board().count_empty() < 16);
//! assert!(game.high_score() >= game.score());
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod moves;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{merge_row, slide_row, Board, Spawned};
pub use error::EngineError;
pub use game_state::GameState;
pub use moves::{can_move, legal_moves, make_move, parse_direction, shift, MoveOutcome, Shift};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
