//! Board + compositor integration tests.

use tui_snake::core::BoardGrid;
use tui_snake::term::Compositor;
use tui_snake::types::Glyph;

fn render(compositor: &mut Compositor, board: &mut BoardGrid) -> String {
    let mut out = Vec::new();
    compositor.render(board, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Replay cursor moves and glyphs onto a blank screen of `lines` x `cols`.
fn replay(output: &str, lines: usize, cols: usize) -> Vec<String> {
    let mut screen = vec![vec![' '; cols]; lines];
    let mut chars = output.chars();
    let (mut line, mut col) = (0usize, 0usize);

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' => {
                assert_eq!(chars.next(), Some('['));
                let mut params = String::new();
                for c in chars.by_ref() {
                    if c == 'H' {
                        break;
                    }
                    params.push(c);
                }
                let (l, c) = params.split_once(';').unwrap();
                line = l.parse::<usize>().unwrap() - 1;
                col = c.parse::<usize>().unwrap() - 1;
            }
            '\r' | '\n' => {}
            glyph => {
                screen[line][col] = glyph;
                col += 1;
            }
        }
    }

    screen.into_iter().map(|l| l.into_iter().collect()).collect()
}

#[test]
fn walled_4x4_board_renders_closed_rectangle() {
    let mut board = BoardGrid::new(4, 4);
    board.init_walls();

    let out = render(&mut Compositor::new(), &mut board);
    assert_eq!(
        out,
        "\x1b[1;1H█\x1b[1;2H▀\x1b[1;3H▀\x1b[1;4H█\r\n\
         \x1b[2;1H█\x1b[2;2H▄\x1b[2;3H▄\x1b[2;4H█\r\n"
    );
    assert_eq!(replay(&out, 2, 4), vec!["█▀▀█", "█▄▄█"]);
}

#[test]
fn interior_is_painted_blank_on_first_frame() {
    let mut board = BoardGrid::new(6, 6);
    board.init_walls();

    let screen = replay(&render(&mut Compositor::new(), &mut board), 3, 6);
    assert_eq!(screen, vec!["█▀▀▀▀█", "█    █", "█▄▄▄▄█"]);
}

#[test]
fn second_render_without_changes_writes_nothing() {
    let mut board = BoardGrid::new(8, 6);
    board.init_walls();
    let mut compositor = Compositor::new();

    assert!(!render(&mut compositor, &mut board).is_empty());
    assert_eq!(render(&mut compositor, &mut board), "");
}

#[test]
fn only_changed_pairs_are_redrawn() {
    let mut board = BoardGrid::new(8, 6);
    board.init_walls();
    let mut compositor = Compositor::new();
    render(&mut compositor, &mut board);

    board.set(2, 3, true);
    board.set(3, 3, true);
    assert_eq!(render(&mut compositor, &mut board), "\x1b[2;4H█\r\n");

    // Writing the same value again is not a change.
    board.set(2, 3, true);
    assert_eq!(render(&mut compositor, &mut board), "");

    board.set(3, 3, false);
    assert_eq!(render(&mut compositor, &mut board), "\x1b[2;4H▀\r\n");
}

#[test]
fn every_visited_cell_is_clean_after_render() {
    let mut board = BoardGrid::new(10, 8);
    board.init_walls();
    board.set(4, 4, true);
    render(&mut Compositor::new(), &mut board);

    for row in 0..board.height() {
        for col in 0..board.width() {
            assert!(!board.is_dirty(row, col), "({row}, {col}) still dirty");
        }
    }
}

#[test]
fn full_redraw_after_mark_all_dirty() {
    let mut board = BoardGrid::new(4, 4);
    board.init_walls();
    let mut compositor = Compositor::new();
    let first = render(&mut compositor, &mut board);

    board.mark_all_dirty();
    assert_eq!(render(&mut compositor, &mut board), first);
}

#[test]
fn glyph_table() {
    assert_eq!(Glyph::from_pair(true, true), Glyph::Full);
    assert_eq!(Glyph::from_pair(true, false), Glyph::UpperHalf);
    assert_eq!(Glyph::from_pair(false, true), Glyph::LowerHalf);
    assert_eq!(Glyph::from_pair(false, false), Glyph::Empty);
}
