use blockfall::core::{Session, SessionConfig, Snapshot};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Phase, PieceKind};

fn square_session() -> Session {
    Session::new(SessionConfig::default().with_piece_set(&[PieceKind::O])).unwrap()
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = square_session().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 a 20x10 grid is 20x20, plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = square_session().snapshot();
    snap.grid[19][0] = true;
    snap.active_cells.clear();
    snap.active_kind = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin.
    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let snap = square_session().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Square spawns at col 4 on the top row.
    assert_eq!(fb.get(1 + 8, 1).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 11, 2).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 12, 1).unwrap().ch, '·');
}

#[test]
fn term_view_skips_cells_above_the_grid() {
    let mut snap = square_session().snapshot();
    snap.active_cells.clear();
    snap.active_cells.push((-1, 0));

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert_eq!(fb.get(1, 0).unwrap().ch, '─');
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = square_session().snapshot();
    snap.score = 1234;
    snap.lines = 10;

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(60, 22)));
    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("LINES"));
    assert!(text.contains("PIECE"));
}

#[test]
fn term_view_omits_side_panel_when_narrow() {
    let snap = square_session().snapshot();
    let text = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(!text.contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = Snapshot::default();
    square_session().snapshot_into(&mut snap);
    snap.phase = Phase::GameOver;
    snap.score = 7;

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("SCORE 7"));
}

#[test]
fn term_view_render_into_resizes_buffer() {
    let snap = square_session().snapshot();
    let mut fb = FrameBuffer::new(1, 1);
    GameView::default().render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
}
