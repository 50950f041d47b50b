//! Heading echo tool.
//!
//! Puts the terminal in raw mode, decodes arrow keys with the configured
//! backend and prints the heading after every accepted change. Reversals are
//! rejected and printed as `rejected: <name>`. Press `q` to quit.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::terminal;

use tui_snake::core::DirectionState;
use tui_snake::engine::LoopConfig;
use tui_snake::input::KeyDecoder;
use tui_snake::logging::init_file_logging;
use tui_snake::types::KeyEvent;

fn main() -> Result<()> {
    let config = LoopConfig::from_env().context("invalid SNAKE_* environment")?;
    let _log_guard = match &config.log_path {
        Some(path) => init_file_logging(path)?,
        None => None,
    };

    terminal::enable_raw_mode()?;
    let result = run(&config);
    let _ = terminal::disable_raw_mode();

    result?;
    println!("bye");
    Ok(())
}

fn run(config: &LoopConfig) -> Result<()> {
    // Long timeout: nothing else to do while waiting for a key.
    let mut decoder = config.input.decoder(Duration::from_secs(1));
    let heading = DirectionState::new();
    let mut stdout = io::stdout();

    write!(stdout, "press arrow keys, q to quit\r\n")?;
    stdout.flush()?;

    loop {
        let event = match decoder.poll() {
            Ok(event) => event,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        match event {
            KeyEvent::Quit => return Ok(()),
            KeyEvent::Idle => continue,
            _ => {}
        }

        if heading.apply(event) {
            write!(stdout, "{}\r\n", heading.current().as_str())?;
        } else if let Some(dir) = event.direction() {
            write!(stdout, "rejected: {}\r\n", dir.as_str())?;
        }
        stdout.flush()?;
    }
}
