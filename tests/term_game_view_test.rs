use tty_tetris::core::{GameSnapshot, GameState, Phase, Piece};
use tty_tetris::term::{Banner, GameView, Viewport};
use tty_tetris::types::PieceKind;

// With cell_w=2 the board is 20x20 inside a 22x22 border, plus one status line.
const BOARD_VP: Viewport = Viewport {
    width: 22,
    height: 23,
};

fn contains_text(fb: &tty_tetris::term::FrameBuffer, text: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(text))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, None, BOARD_VP);

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(21, 22).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[20][0] = 1;

    let fb = GameView::default().render(&snap, None, BOARD_VP);

    // Board row 20 is the 20th drawn row.
    assert_eq!(fb.get(1, 21).unwrap().ch, '█');
    assert_eq!(fb.get(2, 21).unwrap().ch, '█');
    assert_ne!(fb.get(3, 21).unwrap().ch, '█');
}

#[test]
fn term_view_hides_spawn_row() {
    let view = GameView::default();
    let empty = GameSnapshot::default();
    let mut top = GameSnapshot::default();
    top.board[0] = [3; 10];

    assert_eq!(
        view.render(&empty, None, BOARD_VP),
        view.render(&top, None, BOARD_VP)
    );
}

#[test]
fn term_view_draws_active_and_ghost() {
    let mut state = GameState::new(1);
    state.start();
    state.set_active(Piece::new(PieceKind::I));
    let fb = GameView::default().render(&state.snapshot(), None, BOARD_VP);

    // I at the spawn anchor fills board row 1, columns 3-6.
    for x in 7..15 {
        assert_eq!(fb.get(x, 2).unwrap().ch, '█', "x={}", x);
    }
    assert!(fb.row_text(21).contains('░'));
}

#[test]
fn term_view_side_panel_labels() {
    let mut state = GameState::new(1);
    state.start();
    state.hold();
    let fb = GameView::default().render(&state.snapshot(), None, Viewport::new(60, 24));

    for label in ["SCORE", "LEVEL", "LINES", "NEXT", "HELD"] {
        assert!(contains_text(&fb, label), "missing {}", label);
    }
}

#[test]
fn term_view_status_line_and_banners() {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    snap.lines = 12;
    snap.score = 340;

    let fb = view.render(&snap, None, BOARD_VP);
    assert!(fb.row_text(0).starts_with("Lines: 12"));
    assert!(fb.row_text(0).contains("PTS: 340"));

    let banner = Banner::LinesCleared {
        lines: 4,
        points: 1200,
    };
    let fb = view.render(&snap, Some(banner), BOARD_VP);
    assert!(fb.row_text(0).starts_with("LINES +4"));
    assert!(fb.row_text(0).contains("PTS +1200"));

    let fb = view.render(&snap, Some(Banner::LevelUp), BOARD_VP);
    assert!(fb.row_text(0).starts_with("LVL UP!"));
}

#[test]
fn term_view_game_over_overlay() {
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::GameOver;
    let fb = GameView::default().render(&snap, None, BOARD_VP);

    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(fb.row_text(12).contains("PRESS R TO RESTART"));
}

#[test]
fn term_view_menu_text() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render_menu(0, vp);

    assert!(contains_text(&fb, "Press any key to start"));
    assert!(contains_text(&fb, "Q - Quit"));
    assert!(contains_text(&fb, "|||"));

    // The logo colors cycle with the frame counter.
    assert_ne!(fb, view.render_menu(1, vp));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let mut state = GameState::new(1);
    state.start();
    let fb = GameView::default().render(&state.snapshot(), None, Viewport::new(8, 4));
    assert_eq!((fb.width(), fb.height()), (8, 4));
}
