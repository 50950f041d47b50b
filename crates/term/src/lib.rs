//! Terminal rendering module.
//!
//! Paints a [`BoardGrid`](crate::core::BoardGrid) straight to a terminal byte
//! sink using half-block glyphs: two board rows per terminal line, one column
//! per terminal column. Only dirty cells are written.
//!
//! Goals:
//! - Keep per-frame output proportional to changed cells, not board area
//! - Keep `core` free of I/O; everything terminal-specific lives here
//! - Own raw mode / alternate screen setup behind one acquire/release type

pub mod compositor;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use compositor::{encode_dirty_into, Compositor};
pub use session::TerminalSession;
