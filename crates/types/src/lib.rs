//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, terminal rendering, input decoding).
//!
//! # Board Dimensions
//!
//! The board is addressed as `(row, col)`:
//!
//! - **Width**: 48 columns (indexed 0-47)
//! - **Height**: 24 rows (indexed 0-23), always even
//!
//! Two board rows share one terminal line (see [`Glyph`]), so the board
//! occupies `BOARD_HEIGHT / 2` lines on screen.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Default render tick |
//! | `INPUT_POLL_MS` | 50 | Timeout for event-based input polling |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Glyph, KeyEvent};
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(KeyEvent::Up.direction(), Some(Direction::Up));
//! assert_eq!(KeyEvent::Quit.direction(), None);
//! assert_eq!(Glyph::from_pair(true, false).as_char(), '▀');
//! ```

/// Board width in cells (48 columns)
pub const BOARD_WIDTH: u16 = 48;

/// Board height in cells (24 rows, rendered as 12 terminal lines)
pub const BOARD_HEIGHT: u16 = 24;

/// Default render tick in milliseconds
pub const TICK_MS: u64 = 100;

/// Timeout for a single event-based input poll in milliseconds
pub const INPUT_POLL_MS: u64 = 50;

/// Heading a mover would apply on its next step.
///
/// A heading always exists; it starts at [`Direction::Right`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four headings, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The reverse heading (Left↔Right, Up↔Down).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Lowercase name, as printed by the heading echo.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// One decoded input poll.
///
/// `Idle` means no recognized key arrived during the poll; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    Left,
    Right,
    Up,
    Down,
    Quit,
    Idle,
}

impl KeyEvent {
    /// The heading this event requests, if it is one of the arrow keys.
    pub fn direction(self) -> Option<Direction> {
        match self {
            KeyEvent::Left => Some(Direction::Left),
            KeyEvent::Right => Some(Direction::Right),
            KeyEvent::Up => Some(Direction::Up),
            KeyEvent::Down => Some(Direction::Down),
            KeyEvent::Quit | KeyEvent::Idle => None,
        }
    }
}

impl From<Direction> for KeyEvent {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Left => KeyEvent::Left,
            Direction::Right => KeyEvent::Right,
            Direction::Up => KeyEvent::Up,
            Direction::Down => KeyEvent::Down,
        }
    }
}

/// Why the frame loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The decoder produced [`KeyEvent::Quit`].
    UserQuit,
    /// A stop was requested from outside the loop.
    Stopped,
    /// The input byte source reached end-of-file.
    InputClosed,
}

/// Half-block glyph for a vertical pair of board cells.
///
/// | top | bottom | glyph |
/// |-----|--------|-------|
/// | occupied | occupied | `█` |
/// | occupied | empty | `▀` |
/// | empty | occupied | `▄` |
/// | empty | empty | space |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Empty,
    UpperHalf,
    LowerHalf,
    Full,
}

impl Glyph {
    /// Pick the glyph for a `(top, bottom)` occupancy pair.
    pub fn from_pair(top: bool, bottom: bool) -> Self {
        match (top, bottom) {
            (true, true) => Glyph::Full,
            (true, false) => Glyph::UpperHalf,
            (false, true) => Glyph::LowerHalf,
            (false, false) => Glyph::Empty,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Glyph::Empty => ' ',
            Glyph::UpperHalf => '▀',
            Glyph::LowerHalf => '▄',
            Glyph::Full => '█',
        }
    }
}
