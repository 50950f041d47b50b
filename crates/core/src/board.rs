//! Board module - occupancy grid with dirty tracking
//!
//! The board is a `width x height` grid of booleans (occupied or empty) plus a
//! parallel dirty grid of the same size. Uses flat vectors in row-major order.
//! Coordinates: `(row, col)` where row ranges `0..height` (top to bottom) and
//! col ranges `0..width` (left to right).
//!
//! Rows are rendered in pairs (`2k`, `2k + 1`), so the height must be even and
//! both cells of a pair are always marked dirty together.
//!
//! Indices are generated internally from fixed dimensions, so out-of-range
//! access is a bug and panics instead of returning an error.

/// The game board: occupancy plus per-cell dirty flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    width: u16,
    height: u16,
    /// Flat array of occupancy, row-major order (row * width + col)
    cells: Vec<bool>,
    /// Cells whose rendered glyph may be stale
    dirty: Vec<bool>,
    /// Cells that have been written at least once
    written: Vec<bool>,
    walls_built: bool,
}

impl BoardGrid {
    /// Create an empty board where every cell is dirty.
    ///
    /// Starting fully dirty makes the first frame paint the whole board,
    /// erasing whatever the terminal showed before.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `height` is odd.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "board must be non-empty");
        assert!(height % 2 == 0, "board height must be even, got {height}");

        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![false; len],
            dirty: vec![true; len],
            written: vec![false; len],
            walls_built: false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of terminal lines the board occupies (one per row pair).
    pub fn rows(&self) -> u16 {
        self.height / 2
    }

    #[inline(always)]
    fn index(&self, row: u16, col: u16) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} board",
            self.height,
            self.width
        );
        (row as usize) * (self.width as usize) + (col as usize)
    }

    /// Write occupancy at `(row, col)`.
    ///
    /// The cell (and its row-pair partner) becomes dirty when the value differs
    /// from the stored one or the cell was never written. Returns whether the
    /// cell was marked dirty.
    pub fn set(&mut self, row: u16, col: u16, occupied: bool) -> bool {
        let idx = self.index(row, col);
        let changed = !self.written[idx] || self.cells[idx] != occupied;
        self.cells[idx] = occupied;
        self.written[idx] = true;
        if changed {
            self.mark_pair_dirty(row, col);
        }
        changed
    }

    pub fn occupied(&self, row: u16, col: u16) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn is_dirty(&self, row: u16, col: u16) -> bool {
        self.dirty[self.index(row, col)]
    }

    pub fn clear_dirty(&mut self, row: u16, col: u16) {
        let idx = self.index(row, col);
        self.dirty[idx] = false;
    }

    /// Number of dirty cells.
    pub fn dirty_count(&self) -> usize {
        self.dirty.iter().filter(|d| **d).count()
    }

    /// Force the next render to repaint every cell.
    ///
    /// Useful on terminal resize events.
    pub fn mark_all_dirty(&mut self) {
        self.dirty.fill(true);
    }

    /// Occupy every border cell and mark it dirty.
    ///
    /// Walls are built once; later calls leave the board untouched and return
    /// `false`. The interior is not written, so it keeps its initial dirty
    /// flag and renders as blank on the first frame.
    pub fn init_walls(&mut self) -> bool {
        if self.walls_built {
            return false;
        }

        let last_row = self.height - 1;
        let last_col = self.width - 1;
        for col in 0..self.width {
            self.build_wall(0, col);
            self.build_wall(last_row, col);
        }
        for row in 1..last_row {
            self.build_wall(row, 0);
            self.build_wall(row, last_col);
        }

        self.walls_built = true;
        tracing::debug!(
            width = self.width,
            height = self.height,
            "board walls initialized"
        );
        true
    }

    /// Whether `(row, col)` lies on the border.
    pub fn is_wall(&self, row: u16, col: u16) -> bool {
        row == 0 || col == 0 || row == self.height - 1 || col == self.width - 1
    }

    fn build_wall(&mut self, row: u16, col: u16) {
        let idx = self.index(row, col);
        self.cells[idx] = true;
        self.written[idx] = true;
        self.mark_pair_dirty(row, col);
    }

    fn mark_pair_dirty(&mut self, row: u16, col: u16) {
        let top = row & !1;
        let top_idx = self.index(top, col);
        let bottom_idx = self.index(top + 1, col);
        self.dirty[top_idx] = true;
        self.dirty[bottom_idx] = true;
    }
}
