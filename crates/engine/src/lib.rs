//! Frame loop: drives input sampling and board rendering.
//!
//! Two persistent units cooperate for the lifetime of [`FrameLoop::run`]:
//!
//! - an input worker thread that polls a [`KeyDecoder`](crate::input::KeyDecoder)
//!   and applies every decoded heading to the shared
//!   [`DirectionState`](crate::core::DirectionState)
//! - the render loop on the calling thread, painting one frame per tick
//!
//! They share state only through locks (heading, board, output sink) and a
//! wake-up channel the worker uses to end the loop. See [`config`] for the
//! environment variables read at startup.

pub mod config;
pub mod frame_loop;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use config::{ConfigError, LoopConfig};
pub use frame_loop::{FrameLoop, StopHandle};
