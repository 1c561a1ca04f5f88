//! Board tests

use tty_tetris::core::{Board, Piece};
use tty_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(0, 0, Some(PieceKind::I)));
    assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(10, 0, Some(PieceKind::O)));
    assert!(!board.set(0, 21, Some(PieceKind::O)));
}

#[test]
fn test_blocks_walls_floor_and_stack() {
    let mut board = Board::new();
    board.set(4, 15, Some(PieceKind::S));

    assert!(board.blocks(-1, 5));
    assert!(board.blocks(10, 5));
    assert!(board.blocks(3, 21));
    assert!(board.blocks(4, 15));
    assert!(!board.blocks(5, 15));
    // Above the top is open sky.
    assert!(!board.blocks(4, -3));
}

#[test]
fn test_collides_only_on_filled_mask_cells() {
    let mut board = Board::new();
    // O occupies mask columns 1-2, so the anchor can sit one column past the wall.
    let piece = Piece::new(PieceKind::O).at(-1, 5);
    assert!(!board.collides(&piece));
    assert!(board.collides(&piece.at(-2, 5)));

    // Floor: O fills mask rows 1-2, so y=18 puts it on rows 19-20.
    assert!(!board.collides(&piece.at(3, 18)));
    assert!(board.collides(&piece.at(3, 19)));

    board.set(4, 20, Some(PieceKind::Z));
    assert!(board.collides(&piece.at(3, 18)));
}

#[test]
fn test_lock_writes_color_identity() {
    let mut board = Board::new();
    let piece = Piece::new(PieceKind::T).at(2, 18);
    board.lock(&piece);

    assert_eq!(board.occupied_count(), 4);
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
    for x in 3..=5 {
        assert_eq!(board.get(x, 20), Some(Some(PieceKind::T)));
    }

    let mut grid = [[0u8; 10]; 21];
    board.write_color_grid(&mut grid);
    assert_eq!(grid[20][3], 5);
    assert_eq!(grid[19][3], 0);
}

#[test]
fn test_clear_two_separated_rows() {
    let mut board = Board::new();
    board.fill_row(5, PieceKind::I);
    board.fill_row(2, PieceKind::I);
    board.set(0, 4, Some(PieceKind::Z));
    board.set(1, 3, Some(PieceKind::S));
    board.set(2, 1, Some(PieceKind::T));

    let cleared = board.clear_completed_rows();
    assert_eq!(cleared.as_slice(), &[5, 2]);

    // Rows 4 and 3 drop one (only row 5 was below them); row 1 drops two.
    assert_eq!(board.get(0, 5), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(1, 4), Some(Some(PieceKind::S)));
    assert_eq!(board.get(2, 3), Some(Some(PieceKind::T)));
    assert_eq!(board.occupied_count(), 3);
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.get(x, 0), Some(None));
        assert_eq!(board.get(x, 1), Some(None));
    }
}

#[test]
fn test_clear_adjacent_rows_at_bottom() {
    let mut board = Board::new();
    for y in 17..21 {
        board.fill_row(y, PieceKind::J);
    }
    board.set(7, 16, Some(PieceKind::L));

    let cleared = board.clear_completed_rows();
    assert_eq!(cleared.len(), 4);
    assert_eq!(board.occupied_count(), 1);
    assert_eq!(board.get(7, 20), Some(Some(PieceKind::L)));
}

#[test]
fn test_partial_rows_stay() {
    let mut board = Board::new();
    board.fill_row(20, PieceKind::O);
    board.set(9, 20, None);

    assert!(!board.is_row_full(20));
    assert!(board.clear_completed_rows().is_empty());
    assert_eq!(board.occupied_count(), 9);
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    board.fill_row(3, PieceKind::T);
    board.clear();
    assert_eq!(board.occupied_count(), 0);
}
