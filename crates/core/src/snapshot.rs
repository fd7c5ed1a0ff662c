use crate::types::Tile;

/// Render-ready copy of a [`crate::GameState`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major tiles, `size * size` long
    pub cells: Vec<Tile>,
    pub score: u32,
    pub high_score: u32,
    pub moves: u32,
    pub game_id: u32,
    pub max_tile: Tile,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Tile at column `x`, row `y`
    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells.get(y * self.size + x).copied()
    }
}
