//! Key mapping from crossterm events to key events.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent as TermKeyEvent, KeyEventKind, KeyModifiers,
};

use crate::decoder::KeyDecoder;
use crate::types::KeyEvent;

/// Map a terminal key event to a key event.
///
/// Only presses are decoded; repeats and releases are `Idle` so a held key
/// does not count as a stream of new requests.
pub fn map_key_event(key: TermKeyEvent) -> KeyEvent {
    if key.kind != KeyEventKind::Press {
        return KeyEvent::Idle;
    }
    if should_quit(key) {
        return KeyEvent::Quit;
    }

    match key.code {
        KeyCode::Up => KeyEvent::Up,
        KeyCode::Down => KeyEvent::Down,
        KeyCode::Left => KeyEvent::Left,
        KeyCode::Right => KeyEvent::Right,
        _ => KeyEvent::Idle,
    }
}

/// Check if key should quit.
///
/// Raw mode swallows SIGINT, so Ctrl+C is treated as a quit key as well.
pub fn should_quit(key: TermKeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Decoder backed by crossterm's event queue.
///
/// Each `poll` waits at most `timeout` for an event, so the caller regains
/// control even when no key is pressed.
#[derive(Debug, Clone)]
pub struct CrosstermDecoder {
    timeout: Duration,
}

impl CrosstermDecoder {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl KeyDecoder for CrosstermDecoder {
    fn poll(&mut self) -> io::Result<KeyEvent> {
        if !event::poll(self.timeout)? {
            return Ok(KeyEvent::Idle);
        }
        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(KeyEvent::Idle),
        }
    }
}
