//! Terminal input module (engine-facing).
//!
//! This module turns keyboard input into [`crate::types::KeyEvent`]s behind a
//! single [`KeyDecoder`] trait, with one implementation per input backend:
//!
//! - [`AnsiDecoder`]: raw bytes from a POSIX terminal (`ESC [ A` and friends)
//! - [`ConsoleDecoder`]: raw bytes in DOS/Windows console scan-code form
//!   (`0xE0 0x48` and friends)
//! - [`CrosstermDecoder`]: crossterm key events with a poll timeout
//!
//! The backend is picked once at startup through [`InputBackend`]. On every
//! backend `q`/`Q` quits; anything unrecognized decodes to
//! [`KeyEvent::Idle`](crate::types::KeyEvent::Idle).

pub mod ansi;
pub mod console;
pub mod decoder;
pub mod map;

pub use tui_snake_types as types;

pub use ansi::AnsiDecoder;
pub use console::ConsoleDecoder;
pub use decoder::{InputBackend, KeyDecoder};
pub use map::{map_key_event, should_quit, CrosstermDecoder};
