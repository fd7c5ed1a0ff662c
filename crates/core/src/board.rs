//! Board module - manages the game grid
//!
//! The board is a square N x N grid of tiles. 0 is an empty cell, any other
//! value is a power of two. Storage is a flat row-major `Vec`, so a row is a
//! contiguous slice and the row helpers below work on it directly.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom).
//!
//! Sliding and merging only ever happen leftward here. Other directions are
//! reduced to leftward by [`crate::moves`] using [`Board::transpose`] and
//! [`Board::reverse_rows`].

use std::fmt;

use crate::error::EngineError;
use crate::rng::SimpleRng;
use crate::types::{Tile, INITIAL_TILES, MAX_BOARD_SIZE, MAX_TILE, MIN_BOARD_SIZE};

/// A tile placed by [`Board::spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawned {
    pub x: usize,
    pub y: usize,
    pub value: Tile,
}

/// The game board - N columns x N rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (y * size + x)
    cells: Vec<Tile>,
}

impl Board {
    /// Create an empty board
    pub fn new(size: usize) -> Result<Self, EngineError> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Create a board for a new game: empty, then two spawned tiles
    pub fn create(size: usize, rng: &mut SimpleRng) -> Result<Self, EngineError> {
        let mut board = Self::new(size)?;
        for _ in 0..INITIAL_TILES {
            board.spawn_tile(rng)?;
        }
        Ok(board)
    }

    /// Build a board from explicit rows
    ///
    /// Rows must form a square of a supported size and every nonzero value
    /// must be a power of two no smaller than 2.
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows(&[[2, 4], [4, 2]]).unwrap();
    /// assert_eq!(board.get(1, 0), Some(4));
    /// assert!(board.is_game_over());
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, EngineError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(EngineError::NotSquare {
                    rows: size,
                    row,
                    len: values.len(),
                });
            }
            for &value in values {
                if value != 0 && (value < 2 || value > MAX_TILE || !value.is_power_of_two()) {
                    return Err(EngineError::InvalidTile { value });
                }
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { size, cells })
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(y * self.size + x)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the tile at (x, y), or None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the tile at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Row `y` as a slice
    pub fn row(&self, y: usize) -> Option<&[Tile]> {
        if y >= self.size {
            return None;
        }
        let start = y * self.size;
        Some(&self.cells[start..start + self.size])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks_exact(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Coordinates `(x, y)` of every empty cell, row by row
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == 0)
            .map(move |(i, _)| (i % n, i / n))
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&t| t == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&t| t != 0)
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&t| t as u64).sum()
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell
    ///
    /// Fails with [`EngineError::BoardFull`] when no empty cell exists.
    pub fn spawn_tile(&mut self, rng: &mut SimpleRng) -> Result<Spawned, EngineError> {
        let empty = self.count_empty();
        if empty == 0 {
            return Err(EngineError::BoardFull);
        }

        let nth = rng.next_range(empty as u32) as usize;
        let (x, y) = self.empty_cells().nth(nth).ok_or(EngineError::BoardFull)?;

        let value = rng.spawn_value();
        self.cells[y * self.size + x] = value;
        Ok(Spawned { x, y, value })
    }

    /// Compact every row leftward
    /// Returns true if any cell changed
    pub fn slide(&mut self) -> bool {
        let mut changed = false;
        for row in self.cells.chunks_exact_mut(self.size) {
            changed |= slide_row(row);
        }
        changed
    }

    /// Merge adjacent equal tiles in every row, leftward
    /// Returns the points gained (0 if nothing merged)
    pub fn merge(&mut self) -> u32 {
        self.cells
            .chunks_exact_mut(self.size)
            .map(merge_row)
            .fold(0u32, u32::saturating_add)
    }

    /// Reverse every row in place (mirror across the vertical axis)
    pub fn reverse_rows(&mut self) {
        for row in self.cells.chunks_exact_mut(self.size) {
            row.reverse();
        }
    }

    /// Transpose in place (mirror across the main diagonal)
    pub fn transpose(&mut self) {
        let n = self.size;
        for y in 0..n {
            for x in 0..y {
                self.cells.swap(y * n + x, x * n + y);
            }
        }
    }

    /// True iff there is no empty cell and no two orthogonal neighbours are equal
    pub fn is_game_over(&self) -> bool {
        if !self.is_full() {
            return false;
        }

        let n = self.size;
        for y in 0..n {
            for x in 0..n {
                let tile = self.cells[y * n + x];
                if x + 1 < n && can_merge(tile, self.cells[y * n + x + 1]) {
                    return false;
                }
                if y + 1 < n && can_merge(tile, self.cells[(y + 1) * n + x]) {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, tile) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                if *tile == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }
        }
        Ok(())
    }
}

fn check_size(size: usize) -> Result<(), EngineError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(EngineError::InvalidSize { size })
    }
}

/// Compact nonzero tiles to the left of `row`, preserving their order
/// Returns true if any cell changed
///
/// ```
/// use tui_2048_core::board::slide_row;
///
/// let mut row = [0, 2, 0, 4];
/// assert!(slide_row(&mut row));
/// assert_eq!(row, [2, 4, 0, 0]);
/// assert!(!slide_row(&mut row));
/// ```
pub fn slide_row(row: &mut [Tile]) -> bool {
    let mut changed = false;
    let mut write = 0;
    for read in 0..row.len() {
        if row[read] == 0 {
            continue;
        }
        if read != write {
            row[write] = row[read];
            row[read] = 0;
            changed = true;
        }
        write += 1;
    }
    changed
}

/// Two tiles combine when they are equal, nonzero and below [`MAX_TILE`]
#[inline]
fn can_merge(a: Tile, b: Tile) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// Merge adjacent equal tiles of `row` into the left cell, scanning left to right
/// Returns the points gained
///
/// A merged cell is skipped over, so a tile combines at most once per pass.
/// Gaps are not bridged: call [`slide_row`] first.
///
/// ```
/// use tui_2048_core::board::merge_row;
///
/// let mut row = [2, 2, 2, 2];
/// assert_eq!(merge_row(&mut row), 8);
/// assert_eq!(row, [4, 0, 4, 0]);
/// ```
pub fn merge_row(row: &mut [Tile]) -> u32 {
    let mut points = 0u32;
    let mut x = 0;
    while x + 1 < row.len() {
        if can_merge(row[x], row[x + 1]) {
            row[x] *= 2;
            row[x + 1] = 0;
            points = points.saturating_add(row[x]);
            x += 2;
        } else {
            x += 1;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.count_empty(), 16);
        assert_eq!(board.max_tile(), 0);
    }

    #[test]
    fn size_outside_range_is_rejected() {
        assert_eq!(Board::new(1), Err(EngineError::InvalidSize { size: 1 }));
        assert_eq!(
            Board::new(MAX_BOARD_SIZE + 1),
            Err(EngineError::InvalidSize {
                size: MAX_BOARD_SIZE + 1
            })
        );
    }

    #[test]
    fn create_spawns_two_tiles() {
        let mut rng = SimpleRng::new(3);
        let board = Board::create(4, &mut rng).unwrap();
        assert_eq!(board.count_empty(), 14);
        assert!(board.cells().iter().all(|&t| t == 0 || t == 2 || t == 4));
    }

    #[test]
    fn create_fills_smallest_board_halfway() {
        let mut rng = SimpleRng::new(11);
        let board = Board::create(2, &mut rng).unwrap();
        assert_eq!(board.count_empty(), 2);
    }

    #[test]
    fn from_rows_rejects_ragged_and_bad_tiles() {
        assert_eq!(
            Board::from_rows(&[vec![2, 0], vec![0]]),
            Err(EngineError::NotSquare {
                rows: 2,
                row: 1,
                len: 1
            })
        );
        assert_eq!(
            Board::from_rows(&[[2, 6], [0, 0]]),
            Err(EngineError::InvalidTile { value: 6 })
        );
        assert_eq!(
            Board::from_rows(&[[1, 0], [0, 0]]),
            Err(EngineError::InvalidTile { value: 1 })
        );
        assert_eq!(
            Board::from_rows(&[[1u32 << 31, 1 << 31], [0, 0]]),
            Err(EngineError::InvalidTile { value: 1 << 31 })
        );
    }

    #[test]
    fn largest_tiles_never_merge() {
        let mut board = Board::from_rows(&[[MAX_TILE, MAX_TILE], [0, 0]]).unwrap();
        assert_eq!(board.merge(), 0);
        assert_eq!(board.row(0), Some(&[MAX_TILE, MAX_TILE][..]));

        let mut row = [MAX_TILE / 2, MAX_TILE / 2, MAX_TILE, MAX_TILE];
        assert_eq!(merge_row(&mut row), MAX_TILE);
        assert_eq!(row, [MAX_TILE, 0, MAX_TILE, MAX_TILE]);

        let full = Board::from_rows(&[[MAX_TILE, MAX_TILE], [2, 4]]).unwrap();
        assert!(full.is_game_over());
    }

    #[test]
    fn get_and_set_respect_bounds() {
        let mut board = Board::new(3).unwrap();
        assert!(board.set(2, 1, 8));
        assert_eq!(board.get(2, 1), Some(8));
        assert_eq!(board.row(1), Some(&[0, 0, 8][..]));
        assert!(!board.set(3, 0, 2));
        assert_eq!(board.get(0, 3), None);
        assert_eq!(board.row(3), None);
    }

    #[test]
    fn spawn_tile_fills_only_empty_cell() {
        let mut board = Board::from_rows(&[[2, 4], [8, 0]]).unwrap();
        let mut rng = SimpleRng::new(5);
        let spawned = board.spawn_tile(&mut rng).unwrap();
        assert_eq!((spawned.x, spawned.y), (1, 1));
        assert_eq!(board.get(1, 1), Some(spawned.value));
        assert!(board.is_full());
    }

    #[test]
    fn empty_cells_lists_gaps_row_by_row() {
        let board = Board::from_rows(&[[0, 2, 0], [4, 4, 4], [8, 0, 16]]).unwrap();
        let empty: Vec<_> = board.empty_cells().collect();
        assert_eq!(empty, vec![(0, 0), (2, 0), (1, 2)]);
        assert_eq!(board.count_empty(), empty.len());
    }

    #[test]
    fn spawn_tile_on_full_board_fails() {
        let mut board = Board::from_rows(&[[2, 4], [8, 16]]).unwrap();
        let before = board.clone();
        let mut rng = SimpleRng::new(5);
        assert_eq!(board.spawn_tile(&mut rng), Err(EngineError::BoardFull));
        assert_eq!(board, before);
    }

    #[test]
    fn slide_row_compacts_in_order() {
        let mut row = [0, 4, 0, 2];
        assert!(slide_row(&mut row));
        assert_eq!(row, [4, 2, 0, 0]);

        let mut packed = [2, 4, 0, 0];
        assert!(!slide_row(&mut packed));
        assert_eq!(packed, [2, 4, 0, 0]);
    }

    #[test]
    fn merge_row_only_merges_neighbours() {
        let mut gap = [2, 0, 2, 0];
        assert_eq!(merge_row(&mut gap), 0);
        assert_eq!(gap, [2, 0, 2, 0]);

        let mut triple = [2, 2, 2, 0];
        assert_eq!(merge_row(&mut triple), 4);
        assert_eq!(triple, [4, 0, 2, 0]);

        let mut chained = [4, 2, 2, 0];
        assert_eq!(merge_row(&mut chained), 4);
        assert_eq!(chained, [4, 4, 0, 0]);
    }

    #[test]
    fn slide_merge_slide_on_gapped_row() {
        let mut row = [2, 0, 2, 0];
        slide_row(&mut row);
        assert_eq!(merge_row(&mut row), 4);
        slide_row(&mut row);
        assert_eq!(row, [4, 0, 0, 0]);
    }

    #[test]
    fn transpose_and_reverse_are_involutions() {
        let original = Board::from_rows(&[[2, 4, 8], [16, 32, 64], [128, 256, 512]]).unwrap();

        let mut board = original.clone();
        board.transpose();
        assert_eq!(board.row(0), Some(&[2, 16, 128][..]));
        board.transpose();
        assert_eq!(board, original);

        board.reverse_rows();
        assert_eq!(board.row(0), Some(&[8, 4, 2][..]));
        board.reverse_rows();
        assert_eq!(board, original);
    }

    #[test]
    fn game_over_detection() {
        let stuck = Board::from_rows(&[[2, 4], [4, 2]]).unwrap();
        assert!(stuck.is_game_over());

        let has_gap = Board::from_rows(&[[2, 4], [4, 0]]).unwrap();
        assert!(!has_gap.is_game_over());

        let horizontal_pair = Board::from_rows(&[[2, 2], [4, 8]]).unwrap();
        assert!(!horizontal_pair.is_game_over());

        let vertical_pair = Board::from_rows(&[[2, 4], [2, 8]]).unwrap();
        assert!(!vertical_pair.is_game_over());
    }

    #[test]
    fn display_aligns_columns() {
        let board = Board::from_rows(&[[2, 0], [16, 4]]).unwrap();
        assert_eq!(board.to_string(), " 2  .\n16  4");
    }
}
