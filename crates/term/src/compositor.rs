//! Compositor: writes dirty board cells as half-block glyphs.
//!
//! Row pair `k` (board rows `2k` and `2k + 1`) is drawn on terminal line `k`.
//! Cursor moves use crossterm's `MoveTo(column, line)`, which emits the 1-based
//! `ESC[{line};{column}H` sequence.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::{BoardGrid, DirectionState};
use crate::types::{Direction, Glyph};

/// Incremental board painter.
#[derive(Debug, Default)]
pub struct Compositor {
    /// Terminal cell of board column 0, row pair 0 (0-based).
    origin: (u16, u16),
    echo: Option<Arc<DirectionState>>,
    last_echo: Option<(Direction, Direction)>,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset every cursor move by `(x, y)` terminal cells.
    pub fn with_origin(mut self, x: u16, y: u16) -> Self {
        self.origin = (x, y);
        self
    }

    /// Print the heading pair on the line below the board whenever it changes.
    pub fn with_heading_echo(mut self, state: Arc<DirectionState>) -> Self {
        self.echo = Some(state);
        self
    }

    pub fn origin(&self) -> (u16, u16) {
        self.origin
    }

    /// Force the heading echo to be repainted on the next render.
    pub fn invalidate(&mut self) {
        self.last_echo = None;
    }

    /// Paint every dirty cell, clear its dirty flag and flush `out` once.
    ///
    /// Returns the number of glyphs written. A second call with no board
    /// changes in between writes nothing.
    pub fn render<W: Write + ?Sized>(&mut self, grid: &mut BoardGrid, out: &mut W) -> Result<usize> {
        let glyphs = encode_dirty_into(grid, self.origin, out)?;
        self.echo_heading(grid.rows(), out)?;
        out.flush()?;
        tracing::trace!(glyphs, "frame rendered");
        Ok(glyphs)
    }

    fn echo_heading<W: Write + ?Sized>(&mut self, board_rows: u16, out: &mut W) -> Result<()> {
        let Some(state) = &self.echo else {
            return Ok(());
        };
        let snapshot = state.snapshot();
        if self.last_echo == Some(snapshot) {
            return Ok(());
        }

        let (current, from) = snapshot;
        out.queue(cursor::MoveTo(
            self.origin.0,
            self.origin.1.saturating_add(board_rows),
        ))?;
        out.queue(Print("heading: "))?;
        out.queue(Print(current.as_str()))?;
        out.queue(Print(" (from: "))?;
        out.queue(Print(from.as_str()))?;
        out.queue(Print(")"))?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        self.last_echo = Some(snapshot);
        Ok(())
    }
}

/// Encode all dirty row pairs into `out` without flushing.
///
/// Each dirty pair becomes a cursor move plus one glyph; both cells of the pair
/// are then marked clean. A row pair that produced output is terminated with
/// `"\r\n"`. Returns the number of glyphs written.
pub fn encode_dirty_into<W: Write + ?Sized>(
    grid: &mut BoardGrid,
    origin: (u16, u16),
    out: &mut W,
) -> Result<usize> {
    let mut glyphs = 0;

    for row in (0..grid.height()).step_by(2) {
        let line = origin.1.saturating_add(row / 2);
        let mut emitted = false;

        // Top and bottom flags are always set together, so the top one decides.
        for col in 0..grid.width() {
            if !grid.is_dirty(row, col) {
                continue;
            }

            let glyph = Glyph::from_pair(grid.occupied(row, col), grid.occupied(row + 1, col));
            out.queue(cursor::MoveTo(origin.0.saturating_add(col), line))?;
            out.queue(Print(glyph.as_char()))?;
            grid.clear_dirty(row, col);
            grid.clear_dirty(row + 1, col);

            glyphs += 1;
            emitted = true;
        }

        if emitted {
            out.queue(Print("\r\n"))?;
        }
    }

    Ok(glyphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(compositor: &mut Compositor, grid: &mut BoardGrid) -> (usize, String) {
        let mut out = Vec::new();
        let n = compositor.render(grid, &mut out).unwrap();
        (n, String::from_utf8(out).unwrap())
    }

    #[test]
    fn single_dirty_pair_emits_move_and_glyph() {
        let mut grid = BoardGrid::new(3, 4);
        let mut sink = Vec::new();
        encode_dirty_into(&mut grid, (0, 0), &mut sink).unwrap();

        grid.set(3, 2, true);
        let (n, out) = render_to_string(&mut Compositor::new(), &mut grid);
        assert_eq!(n, 1);
        // Row pair 1 is terminal line 2; column 2 is terminal column 3.
        assert_eq!(out, "\x1b[2;3H▄\r\n");
    }

    #[test]
    fn glyph_follows_pair_occupancy() {
        let mut grid = BoardGrid::new(4, 2);
        grid.set(0, 0, true);
        grid.set(1, 0, true);
        grid.set(0, 1, true);
        grid.set(1, 2, true);

        let (n, out) = render_to_string(&mut Compositor::new(), &mut grid);
        assert_eq!(n, 4);
        assert_eq!(
            out,
            "\x1b[1;1H█\x1b[1;2H▀\x1b[1;3H▄\x1b[1;4H \r\n"
        );
    }

    #[test]
    fn origin_offsets_cursor_moves() {
        let mut grid = BoardGrid::new(1, 2);
        let mut compositor = Compositor::new().with_origin(4, 2);
        assert_eq!(compositor.origin(), (4, 2));
        let (_, out) = render_to_string(&mut compositor, &mut grid);
        assert_eq!(out, "\x1b[3;5H \r\n");
    }

    #[test]
    fn render_clears_dirty_flags() {
        let mut grid = BoardGrid::new(5, 4);
        grid.init_walls();
        render_to_string(&mut Compositor::new(), &mut grid);
        assert_eq!(grid.dirty_count(), 0);
    }

    #[test]
    fn heading_echo_only_repaints_on_change() {
        let state = Arc::new(DirectionState::new());
        let mut compositor = Compositor::new().with_heading_echo(Arc::clone(&state));
        let mut grid = BoardGrid::new(2, 2);

        let (_, first) = render_to_string(&mut compositor, &mut grid);
        assert!(first.ends_with("\x1b[2;1Hheading: right (from: right)\x1b[K"));

        let (_, idle) = render_to_string(&mut compositor, &mut grid);
        assert!(idle.is_empty());

        state.try_set(crate::types::Direction::Up);
        let (n, changed) = render_to_string(&mut compositor, &mut grid);
        assert_eq!(n, 0);
        assert_eq!(changed, "\x1b[2;1Hheading: up (from: right)\x1b[K");
    }

    #[test]
    fn invalidate_repaints_unchanged_heading() {
        let state = Arc::new(DirectionState::new());
        let mut compositor = Compositor::new().with_heading_echo(state);
        let mut grid = BoardGrid::new(2, 2);
        render_to_string(&mut compositor, &mut grid);

        compositor.invalidate();
        let (n, out) = render_to_string(&mut compositor, &mut grid);
        assert_eq!(n, 0);
        assert_eq!(out, "\x1b[2;1Hheading: right (from: right)\x1b[K");
    }
}
