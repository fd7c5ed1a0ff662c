//! Game state module - one player's session
//!
//! Owns the board, the running score, the per-size high score table and the
//! RNG. Input layers translate events into [`GameAction`]s and feed them to
//! [`GameState::apply_action`]; renderers read [`GameState::snapshot`].

use std::collections::BTreeMap;

use log::{debug, info};

use crate::board::Board;
use crate::error::EngineError;
use crate::moves::{make_move, MoveOutcome};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    seed: u32,
    score: u32,
    /// Best score per board size, for the lifetime of the process.
    high_scores: BTreeMap<usize, u32>,
    /// Moves that changed the board in the current game.
    moves: u32,
    /// Monotonic game id (increments on every new game).
    game_id: u32,
    game_over: bool,
}

impl GameState {
    /// Start a game on a `size` x `size` board with the given RNG seed
    pub fn new(size: usize, seed: u32) -> Result<Self, EngineError> {
        let mut rng = SimpleRng::new(seed);
        let board = Board::create(size, &mut rng)?;
        let mut high_scores = BTreeMap::new();
        high_scores.insert(size, 0);

        info!("new {size}x{size} game (seed {seed})");
        let game_over = board.is_game_over();
        Ok(Self {
            board,
            rng,
            seed,
            score: 0,
            high_scores,
            moves: 0,
            game_id: 0,
            game_over,
        })
    }

    /// Start a session from an existing board position
    pub fn with_board(board: Board, seed: u32) -> Self {
        let mut high_scores = BTreeMap::new();
        high_scores.insert(board.size(), 0);
        let game_over = board.is_game_over();
        Self {
            board,
            rng: SimpleRng::new(seed),
            seed,
            score: 0,
            high_scores,
            moves: 0,
            game_id: 0,
            game_over,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score for the active board size
    pub fn high_score(&self) -> u32 {
        self.high_score_for(self.size())
    }

    pub fn high_score_for(&self, size: usize) -> u32 {
        self.high_scores.get(&size).copied().unwrap_or(0)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Seed the session was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Apply an action
    ///
    /// Returns the move outcome for `Move`, `None` for everything else and for
    /// moves attempted after the game is over.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Option<MoveOutcome>, EngineError> {
        match action {
            GameAction::Move(direction) => self.play(direction),
            GameAction::NewGame => {
                self.new_game(self.size())?;
                Ok(None)
            }
            GameAction::GrowBoard => {
                self.resize(self.size() + 1)?;
                Ok(None)
            }
            GameAction::ShrinkBoard => {
                self.resize(self.size().saturating_sub(1))?;
                Ok(None)
            }
        }
    }

    /// Slide the board, add merge points to the score and re-check for game over
    pub fn play(&mut self, direction: Direction) -> Result<Option<MoveOutcome>, EngineError> {
        if self.game_over {
            debug!("ignoring move {} after game over", direction.as_str());
            return Ok(None);
        }

        let top_before = self.board.max_tile();
        let outcome = make_move(&mut self.board, direction, &mut self.rng)?;
        if outcome.changed {
            self.moves += 1;
            self.add_score(outcome.points);
        }
        if top_before < WINNING_TILE && self.board.max_tile() >= WINNING_TILE {
            info!("reached {WINNING_TILE} after {} moves", self.moves);
        }

        self.game_over = self.board.is_game_over();
        if self.game_over {
            info!(
                "game over after {} moves: score {}, max tile {}",
                self.moves,
                self.score,
                self.board.max_tile()
            );
        }

        Ok(Some(outcome))
    }

    /// Discard the board and start over on a `size` x `size` board
    pub fn new_game(&mut self, size: usize) -> Result<(), EngineError> {
        self.board = Board::create(size, &mut self.rng)?;
        self.score = 0;
        self.moves = 0;
        self.game_id = self.game_id.wrapping_add(1);
        self.game_over = self.board.is_game_over();
        self.high_scores.entry(size).or_insert(0);
        info!("new {size}x{size} game (#{})", self.game_id);
        Ok(())
    }

    /// Start a new game at another size; out-of-range sizes are ignored
    fn resize(&mut self, size: usize) -> Result<(), EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            debug!("board size {size} out of range, keeping {}", self.size());
            return Ok(());
        }
        self.new_game(size)
    }

    fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        let best = self.high_scores.entry(self.board.size()).or_insert(0);
        if self.score > *best {
            *best = self.score;
        }
    }

    /// Get a render-ready copy of the session
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its row allocation
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.size = self.board.size();
        snap.cells.clear();
        snap.cells.extend_from_slice(self.board.cells());
        snap.score = self.score;
        snap.high_score = self.high_score();
        snap.moves = self.moves;
        snap.game_id = self.game_id;
        snap.max_tile = self.board.max_tile();
        snap.game_over = self.game_over;
    }
}
