//! Move execution - one player move from start to finish
//!
//! Every direction is reduced to a leftward slide + merge. The board is first
//! put into canonical orientation, slid and merged leftward, then put back:
//!
//! | direction | before the slide | after the slide |
//! |-----------|------------------|-----------------|
//! | left  | -                       | -                       |
//! | right | reverse rows            | reverse rows            |
//! | up    | transpose               | transpose               |
//! | down  | transpose, reverse rows | reverse rows, transpose |
//!
//! A move that changes at least one cell spawns exactly one tile. A move that
//! changes nothing spawns nothing and scores nothing.

use log::debug;

use crate::board::{Board, Spawned};
use crate::error::EngineError;
use crate::rng::SimpleRng;
use crate::types::Direction;

/// Result of sliding a board without spawning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shift {
    /// True if any cell changed
    pub changed: bool,
    /// Sum of the values of tiles created by merges
    pub points: u32,
}

/// Result of a complete move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub changed: bool,
    pub points: u32,
    /// The tile spawned after the move; `None` iff nothing changed
    pub spawned: Option<Spawned>,
}

fn to_canonical(board: &mut Board, direction: Direction) {
    if direction.is_vertical() {
        board.transpose();
    }
    if direction.is_reversed() {
        board.reverse_rows();
    }
}

fn from_canonical(board: &mut Board, direction: Direction) {
    if direction.is_reversed() {
        board.reverse_rows();
    }
    if direction.is_vertical() {
        board.transpose();
    }
}

/// Slide and merge every tile in `direction`, without spawning
pub fn shift(board: &mut Board, direction: Direction) -> Shift {
    to_canonical(board, direction);

    let slid = board.slide();
    let points = board.merge();
    if points > 0 {
        // Merges leave gaps behind them.
        board.slide();
    }

    from_canonical(board, direction);

    Shift {
        changed: slid || points > 0,
        points,
    }
}

/// Perform a move, then spawn a tile if the board changed
///
/// ```
/// use tui_2048_core::{make_move, Board, SimpleRng};
/// use tui_2048_core::types::Direction;
///
/// let mut board = Board::from_rows(&[[2, 2], [0, 0]]).unwrap();
/// let mut rng = SimpleRng::new(1);
/// let outcome = make_move(&mut board, Direction::Left, &mut rng).unwrap();
/// assert_eq!(outcome.points, 4);
/// assert_eq!(board.get(0, 0), Some(4));
/// assert!(outcome.spawned.is_some());
/// ```
pub fn make_move(
    board: &mut Board,
    direction: Direction,
    rng: &mut SimpleRng,
) -> Result<MoveOutcome, EngineError> {
    let Shift { changed, points } = shift(board, direction);
    if !changed {
        debug!("move {} changed nothing", direction.as_str());
        return Ok(MoveOutcome::default());
    }

    let spawned = board.spawn_tile(rng)?;
    debug!(
        "move {} scored {} and spawned {} at ({}, {})",
        direction.as_str(),
        points,
        spawned.value,
        spawned.x,
        spawned.y
    );

    Ok(MoveOutcome {
        changed,
        points,
        spawned: Some(spawned),
    })
}

/// Parse a direction name, failing on anything unrecognized
pub fn parse_direction(s: &str) -> Result<Direction, EngineError> {
    Direction::from_str(s.trim()).ok_or_else(|| EngineError::UnknownDirection(s.to_string()))
}

/// True if sliding in `direction` would change the board
pub fn can_move(board: &Board, direction: Direction) -> bool {
    let mut probe = board.clone();
    shift(&mut probe, direction).changed
}

/// Directions that would change the board, in [`Direction::ALL`] order
pub fn legal_moves(board: &Board) -> impl Iterator<Item = Direction> + '_ {
    Direction::ALL
        .into_iter()
        .filter(move |&dir| can_move(board, dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[[u32; 4]]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn shift_left_merges_pair() {
        let mut b = board(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let shift = shift(&mut b, Direction::Left);
        assert_eq!(shift, Shift { changed: true, points: 4 });
        assert_eq!(b.row(0), Some(&[4, 0, 0, 0][..]));
    }

    #[test]
    fn shift_right_moves_to_far_edge() {
        let mut b = board(&[[2, 0, 2, 4], [0; 4], [0; 4], [0; 4]]);
        let shift = shift(&mut b, Direction::Right);
        assert_eq!(shift.points, 4);
        assert_eq!(b.row(0), Some(&[0, 0, 4, 4][..]));
    }

    #[test]
    fn shift_up_and_down_work_on_columns() {
        let start = board(&[[2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 8]]);

        let mut up = start.clone();
        assert_eq!(shift(&mut up, Direction::Up).points, 4);
        assert_eq!(
            up.to_rows(),
            vec![
                vec![4, 0, 0, 8],
                vec![4, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ]
        );

        let mut down = start;
        assert_eq!(shift(&mut down, Direction::Down).points, 4);
        assert_eq!(
            down.to_rows(),
            vec![
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![4, 0, 0, 0],
                vec![4, 0, 0, 8],
            ]
        );
    }

    #[test]
    fn merge_prefers_tiles_nearest_the_wall() {
        let mut left = board(&[[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
        shift(&mut left, Direction::Left);
        assert_eq!(left.row(0), Some(&[4, 2, 0, 0][..]));

        let mut right = board(&[[0, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
        shift(&mut right, Direction::Right);
        assert_eq!(right.row(0), Some(&[0, 0, 2, 4][..]));
    }

    #[test]
    fn no_change_move_spawns_nothing() {
        let mut b = board(&[[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = b.clone();
        let mut rng = SimpleRng::new(9);
        let outcome = make_move(&mut b, Direction::Left, &mut rng).unwrap();
        assert_eq!(outcome, MoveOutcome::default());
        assert_eq!(b, before);
    }

    #[test]
    fn changing_move_spawns_exactly_one_tile() {
        let mut b = board(&[[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let mut rng = SimpleRng::new(9);
        let outcome = make_move(&mut b, Direction::Left, &mut rng).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.points, 0);
        assert_eq!(b.count_empty(), 14);
        let spawned = outcome.spawned.unwrap();
        assert_eq!(b.get(spawned.x, spawned.y), Some(spawned.value));
        assert_ne!((spawned.x, spawned.y), (0, 0));
    }

    #[test]
    fn parse_direction_fails_fast() {
        assert_eq!(parse_direction(" Up "), Ok(Direction::Up));
        assert_eq!(
            parse_direction("x"),
            Err(EngineError::UnknownDirection("x".to_string()))
        );
    }

    #[test]
    fn legal_moves_on_stuck_board_is_empty() {
        let stuck = Board::from_rows(&[[2, 4], [4, 2]]).unwrap();
        assert_eq!(legal_moves(&stuck).count(), 0);

        let corner = Board::from_rows(&[[2, 0], [0, 0]]).unwrap();
        let legal: Vec<_> = legal_moves(&corner).collect();
        assert_eq!(legal, vec![Direction::Down, Direction::Right]);
    }
}
