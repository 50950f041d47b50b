//! TUI Snake (workspace facade crate).
//!
//! This package exposes `tui_snake::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the logging
//! setup shared by the binaries.

pub mod logging;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
