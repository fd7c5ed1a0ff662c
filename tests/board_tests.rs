//! Board engine tests - worked examples for slide, merge, moves and game over

use tui_2048::core::{make_move, merge_row, shift, slide_row, Board, EngineError, SimpleRng};
use tui_2048::types::{Direction, MAX_TILE};

fn board(rows: &[[u32; 4]]) -> Board {
    Board::from_rows(rows).unwrap()
}

#[test]
fn test_left_merge_spawns_one_tile_and_scores() {
    let mut b = board(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut rng = SimpleRng::new(12345);

    let outcome = make_move(&mut b, Direction::Left, &mut rng).unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.points, 4);
    assert_eq!(b.get(0, 0), Some(4));

    // One tile from the merge, one spawned elsewhere.
    assert_eq!(b.count_empty(), 14);
    let spawned = outcome.spawned.unwrap();
    assert_ne!((spawned.x, spawned.y), (0, 0));
    assert!(spawned.value == 2 || spawned.value == 4);
    assert_eq!(b.get(spawned.x, spawned.y), Some(spawned.value));
}

#[test]
fn test_gapped_row_merges_after_compaction() {
    let mut row = [2, 0, 2, 0];
    slide_row(&mut row);
    let points = merge_row(&mut row);
    slide_row(&mut row);
    assert_eq!(row, [4, 0, 0, 0]);
    assert_eq!(points, 4);

    // Same thing through a whole board.
    let mut b = board(&[[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]);
    let s = shift(&mut b, Direction::Left);
    assert_eq!(s.points, 4);
    assert_eq!(b.row(0), Some(&[4, 0, 0, 0][..]));
}

#[test]
fn test_no_chained_merges() {
    let mut b = board(&[[4, 4, 8, 0], [2, 2, 2, 2], [0; 4], [0; 4]]);
    let s = shift(&mut b, Direction::Left);
    assert_eq!(b.row(0), Some(&[8, 8, 0, 0][..]));
    assert_eq!(b.row(1), Some(&[4, 4, 0, 0][..]));
    assert_eq!(s.points, 8 + 4 + 4);
}

#[test]
fn test_each_direction_on_same_board() {
    let start = board(&[
        [2, 0, 0, 2],
        [0, 4, 0, 0],
        [0, 4, 0, 0],
        [0, 0, 0, 0],
    ]);

    let mut left = start.clone();
    shift(&mut left, Direction::Left);
    assert_eq!(
        left.to_rows(),
        vec![vec![4, 0, 0, 0], vec![4, 0, 0, 0], vec![4, 0, 0, 0], vec![0; 4]]
    );

    let mut right = start.clone();
    shift(&mut right, Direction::Right);
    assert_eq!(
        right.to_rows(),
        vec![vec![0, 0, 0, 4], vec![0, 0, 0, 4], vec![0, 0, 0, 4], vec![0; 4]]
    );

    let mut up = start.clone();
    shift(&mut up, Direction::Up);
    assert_eq!(
        up.to_rows(),
        vec![vec![2, 8, 0, 2], vec![0; 4], vec![0; 4], vec![0; 4]]
    );

    let mut down = start;
    shift(&mut down, Direction::Down);
    assert_eq!(
        down.to_rows(),
        vec![vec![0; 4], vec![0; 4], vec![0; 4], vec![2, 8, 0, 2]]
    );
}

#[test]
fn test_blocked_move_leaves_board_untouched() {
    let mut b = board(&[[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
    let before = b.clone();
    let mut rng = SimpleRng::new(1);

    for dir in [Direction::Left, Direction::Right, Direction::Up] {
        let outcome = make_move(&mut b, dir, &mut rng).unwrap();
        assert!(!outcome.changed, "{dir:?} should be blocked");
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.spawned, None);
        assert_eq!(b, before);
    }
}

#[test]
fn test_game_over_small_board() {
    let stuck = Board::from_rows(&[[2, 4], [4, 2]]).unwrap();
    assert!(stuck.is_game_over());
}

#[test]
fn test_game_over_requires_full_board_and_no_pairs() {
    let checker = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(checker.is_game_over());

    let mut with_gap = checker.clone();
    with_gap.set(3, 3, 0);
    assert!(!with_gap.is_game_over());

    let mut row_pair = checker.clone();
    row_pair.set(1, 0, 2);
    assert!(!row_pair.is_game_over());

    let mut column_pair = checker;
    column_pair.set(0, 1, 2);
    assert!(!column_pair.is_game_over());
}

#[test]
fn test_spawn_on_full_board_fails_loudly() {
    let mut full = Board::from_rows(&[[2, 4], [4, 2]]).unwrap();
    let mut rng = SimpleRng::new(1);
    assert_eq!(full.spawn_tile(&mut rng), Err(EngineError::BoardFull));
}

#[test]
fn test_create_board_sizes() {
    let mut rng = SimpleRng::new(77);
    for size in 2..=8 {
        let b = Board::create(size, &mut rng).unwrap();
        assert_eq!(b.size(), size);
        assert_eq!(b.count_empty(), size * size - 2);
    }
    assert_eq!(
        Board::create(1, &mut rng),
        Err(EngineError::InvalidSize { size: 1 })
    );
}

#[test]
fn test_oversized_tiles_are_rejected_and_top_tiles_stay_put() {
    assert_eq!(
        Board::from_rows(&[[1u32 << 31, 1 << 31], [0, 0]]),
        Err(EngineError::InvalidTile { value: 1 << 31 })
    );

    let mut b = Board::from_rows(&[[MAX_TILE, MAX_TILE], [0, 0]]).unwrap();
    let before = b.clone();
    let mut rng = SimpleRng::new(3);
    let outcome = make_move(&mut b, Direction::Left, &mut rng).unwrap();

    assert!(!outcome.changed);
    assert_eq!(outcome.points, 0);
    assert_eq!(b, before);
    assert_eq!(b.tile_sum(), 2 * MAX_TILE as u64);
}
