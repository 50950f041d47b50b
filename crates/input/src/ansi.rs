//! POSIX terminal escape-sequence decoder.
//!
//! Arrow keys arrive as `ESC [ <code>` (or `ESC O <code>` when the terminal is
//! in application cursor mode). Lookahead is fixed at two bytes after `ESC`:
//! the decoder never waits for more than the sequence it can use. An `ESC`
//! inside a sequence aborts it and is kept as the first byte of the next poll.

use std::io::{self, Read};

use arrayvec::ArrayVec;

use crate::decoder::{input_closed, read_byte, KeyDecoder};
use crate::types::KeyEvent;

const ESC: u8 = 0x1b;

/// Decodes arrow keys and `q`/`Q` from a raw-mode byte stream.
#[derive(Debug)]
pub struct AnsiDecoder<R> {
    reader: R,
    /// Bytes of the sequence being decoded (`ESC`, introducer, final byte).
    seq: ArrayVec<u8, 3>,
    /// `ESC` that aborted the previous sequence.
    pending: Option<u8>,
}

impl<R: Read> AnsiDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            seq: ArrayVec::new(),
            pending: None,
        }
    }

    /// Bytes consumed by the most recent `poll`.
    pub fn last_sequence(&self) -> &[u8] {
        &self.seq
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = match self.pending.take() {
            Some(b) => Some(b),
            None => read_byte(&mut self.reader)?,
        };
        if let Some(b) = byte {
            let _ = self.seq.try_push(b);
        }
        Ok(byte)
    }

    fn decode_escape(&mut self) -> io::Result<KeyEvent> {
        let Some(intro) = self.next_byte()? else {
            return Ok(KeyEvent::Idle);
        };
        match intro {
            b'[' | b'O' => {}
            ESC => return Ok(self.restart()),
            _ => return Ok(self.unrecognized()),
        }

        let Some(code) = self.next_byte()? else {
            return Ok(KeyEvent::Idle);
        };
        Ok(match code {
            b'A' => KeyEvent::Up,
            b'B' => KeyEvent::Down,
            b'C' => KeyEvent::Right,
            b'D' => KeyEvent::Left,
            ESC => self.restart(),
            _ => self.unrecognized(),
        })
    }

    /// Abort the current sequence and replay its last `ESC` on the next poll.
    fn restart(&mut self) -> KeyEvent {
        self.seq.pop();
        self.pending = Some(ESC);
        self.unrecognized()
    }

    fn unrecognized(&self) -> KeyEvent {
        tracing::trace!(bytes = ?self.seq.as_slice(), "unrecognized escape sequence");
        KeyEvent::Idle
    }
}

impl<R: Read> KeyDecoder for AnsiDecoder<R> {
    fn poll(&mut self) -> io::Result<KeyEvent> {
        self.seq.clear();
        let Some(first) = self.next_byte()? else {
            return Err(input_closed());
        };

        match first {
            ESC => self.decode_escape(),
            b'q' | b'Q' => Ok(KeyEvent::Quit),
            _ => Ok(KeyEvent::Idle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(bytes: &[u8]) -> Vec<KeyEvent> {
        let mut decoder = AnsiDecoder::new(bytes);
        let mut events = Vec::new();
        loop {
            match decoder.poll() {
                Ok(ev) => events.push(ev),
                Err(e) => {
                    assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof);
                    return events;
                }
            }
        }
    }

    #[test]
    fn arrow_sequences_map_to_directions() {
        assert_eq!(
            decode_all(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
            vec![KeyEvent::Up, KeyEvent::Down, KeyEvent::Right, KeyEvent::Left]
        );
    }

    #[test]
    fn application_cursor_mode_is_accepted() {
        assert_eq!(decode_all(b"\x1bOA\x1bOD"), vec![KeyEvent::Up, KeyEvent::Left]);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(decode_all(b"qQ"), vec![KeyEvent::Quit, KeyEvent::Quit]);
    }

    #[test]
    fn other_bytes_are_idle() {
        assert_eq!(
            decode_all(b"x \r"),
            vec![KeyEvent::Idle, KeyEvent::Idle, KeyEvent::Idle]
        );
    }

    #[test]
    fn unknown_final_byte_is_idle() {
        // Home key: ESC [ H
        assert_eq!(decode_all(b"\x1b[Hq"), vec![KeyEvent::Idle, KeyEvent::Quit]);
    }

    #[test]
    fn non_introducer_stops_after_two_bytes() {
        let mut decoder = AnsiDecoder::new(&b"\x1bxA"[..]);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Idle);
        assert_eq!(decoder.last_sequence(), b"\x1bx");
        // The byte after the aborted sequence is decoded on its own.
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Idle);
        assert_eq!(decoder.last_sequence(), b"A");
    }

    #[test]
    fn escape_before_arrow_restarts_the_sequence() {
        assert_eq!(decode_all(b"\x1b\x1b[A"), vec![KeyEvent::Idle, KeyEvent::Up]);
        assert_eq!(decode_all(b"\x1bO\x1bOC"), vec![KeyEvent::Idle, KeyEvent::Right]);
    }

    #[test]
    fn escape_in_final_position_restarts_the_sequence() {
        let mut decoder = AnsiDecoder::new(&b"\x1b[\x1b[B"[..]);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Idle);
        assert_eq!(decoder.last_sequence(), b"\x1b[");
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Down);
        assert_eq!(decoder.last_sequence(), b"\x1b[B");
        assert_eq!(
            decoder.poll().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn into_inner_returns_unread_bytes() {
        let mut decoder = AnsiDecoder::new(&b"\x1b[Dq"[..]);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Left);
        let rest: &[u8] = decoder.into_inner();
        assert_eq!(rest, b"q");
    }

    #[test]
    fn lone_escape_is_not_quit() {
        assert_eq!(decode_all(b"\x1b"), vec![KeyEvent::Idle]);
        assert_eq!(decode_all(b"\x1b["), vec![KeyEvent::Idle]);
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut decoder = AnsiDecoder::new(&b""[..]);
        let err = decoder.poll().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
