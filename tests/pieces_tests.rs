//! Piece catalog and movement tests

use tty_tetris::core::{rotate_cw, shape_of, Board, Piece};
use tty_tetris::types::PieceKind;

#[test]
fn test_every_shape_has_four_cells_of_its_kind() {
    for kind in PieceKind::ALL {
        let cells: Vec<_> = shape_of(kind).iter().flatten().flatten().collect();
        assert_eq!(cells.len(), 4, "{:?}", kind);
        assert!(cells.iter().all(|&&k| k == kind));
    }
}

#[test]
fn test_color_codes() {
    let codes: Vec<u8> = PieceKind::ALL.iter().map(|k| k.color()).collect();
    assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7]);
    for kind in PieceKind::ALL {
        assert_eq!(PieceKind::from_color(kind.color()), Some(kind));
    }
    assert_eq!(PieceKind::from_color(0), None);
    assert_eq!(PieceKind::from_color(8), None);
}

#[test]
fn test_four_rotations_restore_every_mask() {
    for kind in PieceKind::ALL {
        let mask = *shape_of(kind);
        let once = rotate_cw(&mask);
        let full = rotate_cw(&rotate_cw(&rotate_cw(&once)));
        assert_eq!(full, mask, "{:?}", kind);
        if kind != PieceKind::O {
            assert_ne!(once, mask, "{:?}", kind);
        }
    }
}

#[test]
fn test_rotation_preserves_kind() {
    let rotated = rotate_cw(shape_of(PieceKind::S));
    let kinds: Vec<_> = rotated.iter().flatten().flatten().collect();
    assert_eq!(kinds.len(), 4);
    assert!(kinds.iter().all(|&&k| k == PieceKind::S));
}

#[test]
fn test_rotate_clamps_to_right_wall() {
    let mut piece = Piece::new(PieceKind::I).at(8, 10);
    piece.rotate();
    assert_eq!(piece.x, 6);
}

#[test]
fn test_rotate_clamps_to_left_wall() {
    let mut piece = Piece::new(PieceKind::T).at(-1, 10);
    piece.rotate();
    assert_eq!(piece.x, 0);
}

#[test]
fn test_rotate_clamps_vertically() {
    let mut top = Piece::new(PieceKind::L).at(3, 0);
    top.rotate();
    assert_eq!(top.y, 1);

    let mut bottom = Piece::new(PieceKind::L).at(3, 19);
    bottom.rotate();
    assert_eq!(bottom.y, 17);
}

#[test]
fn test_rotate_ignores_stack() {
    let mut board = Board::new();
    for y in 5..21 {
        board.set(5, y, Some(PieceKind::O));
    }
    let mut piece = Piece::new(PieceKind::I).at(3, 8);
    piece.rotate();
    // The vertical I sits in mask column 2 (board column 5) on top of the stack.
    assert_eq!((piece.x, piece.y), (3, 8));
    assert!(board.collides(&piece));
}

#[test]
fn test_try_shift_and_landing() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::O);

    assert!(piece.try_shift(&board, 0, 1));
    assert_eq!(piece.y, 1);

    let landed = piece.landing(&board);
    assert_eq!(landed.y, 18);
    assert_eq!(piece.drop_distance(&board), 17);

    let mut low = landed;
    assert!(!low.try_shift(&board, 0, 1));
    assert_eq!(low, landed);
}
