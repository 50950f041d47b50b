//! DOS/Windows console scan-code decoder.
//!
//! Extended keys arrive as a marker byte (`0x00` or `0xE0`) followed by one
//! scan code. The decoder reads exactly one byte after the marker.

use std::io::{self, Read};

use crate::decoder::{input_closed, read_byte, KeyDecoder};
use crate::types::KeyEvent;

const MARKER_NUL: u8 = 0x00;
const MARKER_EXT: u8 = 0xe0;

const SCAN_UP: u8 = 72;
const SCAN_LEFT: u8 = 75;
const SCAN_RIGHT: u8 = 77;
const SCAN_DOWN: u8 = 80;

/// Decodes arrow-key scan codes and `q`/`Q` from a byte stream.
#[derive(Debug)]
pub struct ConsoleDecoder<R> {
    reader: R,
}

impl<R: Read> ConsoleDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> KeyDecoder for ConsoleDecoder<R> {
    fn poll(&mut self) -> io::Result<KeyEvent> {
        let Some(first) = read_byte(&mut self.reader)? else {
            return Err(input_closed());
        };

        match first {
            MARKER_NUL | MARKER_EXT => {
                let Some(scan) = read_byte(&mut self.reader)? else {
                    return Ok(KeyEvent::Idle);
                };
                Ok(match scan {
                    SCAN_UP => KeyEvent::Up,
                    SCAN_DOWN => KeyEvent::Down,
                    SCAN_RIGHT => KeyEvent::Right,
                    SCAN_LEFT => KeyEvent::Left,
                    _ => KeyEvent::Idle,
                })
            }
            b'q' | b'Q' => Ok(KeyEvent::Quit),
            _ => Ok(KeyEvent::Idle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_codes_with_either_marker() {
        let bytes = [0xe0, 72, 0x00, 80, 0xe0, 77, 0x00, 75];
        let mut decoder = ConsoleDecoder::new(&bytes[..]);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Up);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Down);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Right);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Left);
    }

    #[test]
    fn unknown_scan_code_is_idle() {
        // Home (71) is not a heading.
        let mut decoder = ConsoleDecoder::new(&[0xe0, 71, b'Q'][..]);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Idle);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Quit);
    }

    #[test]
    fn plain_arrow_letters_are_not_arrows() {
        // Scan code values are only meaningful after a marker.
        let mut decoder = ConsoleDecoder::new(&[72u8][..]);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Idle);
    }

    #[test]
    fn into_inner_returns_unread_bytes() {
        let mut decoder = ConsoleDecoder::new(&[0x00, 72, b'x'][..]);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Up);
        let rest: &[u8] = decoder.into_inner();
        assert_eq!(rest, b"x");
    }

    #[test]
    fn truncated_sequence_is_idle_then_eof() {
        let mut decoder = ConsoleDecoder::new(&[0xe0][..]);
        assert_eq!(decoder.poll().unwrap(), KeyEvent::Idle);
        assert_eq!(
            decoder.poll().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }
}
