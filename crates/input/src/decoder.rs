//! The decoder trait and backend selection.

use std::io::{self, Read};
use std::time::Duration;

use crate::types::KeyEvent;
use crate::{AnsiDecoder, ConsoleDecoder, CrosstermDecoder};

/// Source of decoded key events.
///
/// `poll` may block on the underlying input, but returns after at most one
/// logical key press. End of input is reported as an
/// [`io::ErrorKind::UnexpectedEof`] error rather than as a key event.
pub trait KeyDecoder {
    fn poll(&mut self) -> io::Result<KeyEvent>;
}

impl<D: KeyDecoder + ?Sized> KeyDecoder for Box<D> {
    fn poll(&mut self) -> io::Result<KeyEvent> {
        (**self).poll()
    }
}

/// Input backend chosen at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputBackend {
    /// crossterm key events with a poll timeout (never blocks a whole tick)
    #[default]
    Crossterm,
    /// POSIX escape sequences read from stdin
    Ansi,
    /// Console scan codes read from stdin
    Console,
}

impl InputBackend {
    /// Parse backend name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_input::InputBackend;
    ///
    /// assert_eq!(InputBackend::from_str("ANSI"), Some(InputBackend::Ansi));
    /// assert_eq!(InputBackend::from_str("console"), Some(InputBackend::Console));
    /// assert_eq!(InputBackend::from_str("joystick"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "crossterm" => Some(InputBackend::Crossterm),
            "ansi" => Some(InputBackend::Ansi),
            "console" => Some(InputBackend::Console),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputBackend::Crossterm => "crossterm",
            InputBackend::Ansi => "ansi",
            InputBackend::Console => "console",
        }
    }

    /// Build a decoder reading the process's own terminal input.
    ///
    /// `timeout` only applies to the crossterm backend; the byte backends block
    /// until the next byte arrives.
    pub fn decoder(self, timeout: Duration) -> Box<dyn KeyDecoder + Send> {
        match self {
            InputBackend::Crossterm => Box::new(CrosstermDecoder::new(timeout)),
            InputBackend::Ansi => Box::new(AnsiDecoder::new(io::stdin())),
            InputBackend::Console => Box::new(ConsoleDecoder::new(io::stdin())),
        }
    }
}

/// Read a single byte, retrying interrupted reads. `None` on end of input.
pub(crate) fn read_byte<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

pub(crate) fn input_closed() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
}
