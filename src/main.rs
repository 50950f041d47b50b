//! Terminal snake board runner (default binary).
//!
//! Draws the walled board with half-block glyphs and tracks the heading from
//! arrow keys until `q` is pressed. Configuration comes from `SNAKE_*`
//! environment variables (see `tui_snake::engine::config`).

use std::io;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};

use tui_snake::core::{BoardGrid, DirectionState};
use tui_snake::engine::{FrameLoop, LoopConfig};
use tui_snake::logging::init_file_logging;
use tui_snake::term::{Compositor, TerminalSession};
use tui_snake::types::{ExitReason, BOARD_HEIGHT, BOARD_WIDTH};

fn main() -> Result<()> {
    let config = LoopConfig::from_env().context("invalid SNAKE_* environment")?;
    let _log_guard = match &config.log_path {
        Some(path) => init_file_logging(path)?,
        None => None,
    };

    let mut term = TerminalSession::new();
    term.enter().context("failed to enter raw terminal mode")?;

    let result = run(&config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let reason = result?;
    tracing::info!(?reason, "exiting");
    if reason == ExitReason::InputClosed {
        eprintln!("input closed");
    }
    Ok(())
}

fn run(config: &LoopConfig) -> Result<ExitReason> {
    let direction = Arc::new(DirectionState::new());

    let mut board = BoardGrid::new(BOARD_WIDTH, BOARD_HEIGHT);
    board.init_walls();

    let mut compositor = Compositor::new();
    if config.debug_echo {
        compositor = compositor.with_heading_echo(Arc::clone(&direction));
    }

    let decoder = config.input.decoder(config.input_timeout);
    tracing::info!(
        input = config.input.as_str(),
        tick = ?config.tick,
        "starting frame loop"
    );

    let out = Arc::new(Mutex::new(io::stdout()));
    let mut frame_loop = FrameLoop::new(decoder, direction, board, out)
        .with_tick(config.tick)
        .with_compositor(compositor);
    frame_loop.run()
}
