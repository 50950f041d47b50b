//! The frame loop.
//!
//! The input worker may block inside `poll` for as long as the decoder likes
//! (byte-stream decoders wait for the next key). Rendering keeps ticking on its
//! own thread meanwhile, so frames never wait for key presses. Shutdown is
//! join-based: a stop request is noticed by the worker only when its current
//! `poll` returns.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::core::{BoardGrid, DirectionState};
use crate::input::KeyDecoder;
use crate::term::Compositor;
use crate::types::{ExitReason, KeyEvent, TICK_MS};

/// Cloneable handle that asks a running [`FrameLoop`] to stop.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Owns the decoder and the shared heading, board and output sink.
pub struct FrameLoop<D, W> {
    decoder: D,
    direction: Arc<DirectionState>,
    board: Arc<Mutex<BoardGrid>>,
    out: Arc<Mutex<W>>,
    compositor: Compositor,
    tick: Duration,
    stop: StopHandle,
    frames: u64,
}

impl<D, W> FrameLoop<D, W>
where
    D: KeyDecoder + Send,
    W: Write + Send,
{
    pub fn new(
        decoder: D,
        direction: Arc<DirectionState>,
        board: BoardGrid,
        out: Arc<Mutex<W>>,
    ) -> Self {
        Self {
            decoder,
            direction,
            board: Arc::new(Mutex::new(board)),
            out,
            compositor: Compositor::new(),
            tick: Duration::from_millis(TICK_MS),
            stop: StopHandle::new(),
            frames: 0,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_compositor(mut self, compositor: Compositor) -> Self {
        self.compositor = compositor;
        self
    }

    pub fn direction(&self) -> Arc<DirectionState> {
        Arc::clone(&self.direction)
    }

    /// Shared board handle for a collaborator that mutates cells between frames.
    pub fn board(&self) -> Arc<Mutex<BoardGrid>> {
        Arc::clone(&self.board)
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Frames rendered by the most recent `run`.
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Run until the decoder yields `Quit`, input closes, or a stop is requested.
    ///
    /// No frame is started after the worker has reported `Quit`.
    pub fn run(&mut self) -> Result<ExitReason> {
        let Self {
            decoder,
            direction,
            board,
            out,
            compositor,
            tick,
            stop,
            frames,
        } = self;
        *frames = 0;

        tracing::debug!(?tick, "frame loop started");

        let stop: &StopHandle = stop;
        let direction: &DirectionState = direction;
        let (wake_tx, wake_rx) = mpsc::channel::<()>();

        let (rendered, worker_result) = thread::scope(|s| {
            let worker = s.spawn(move || {
                let result = input_worker(decoder, direction, stop);
                stop.stop();
                let _ = wake_tx.send(());
                result
            });

            let rendered = render_loop(compositor, board, out, *tick, stop, &wake_rx, &mut *frames);
            // Release a worker still polling if rendering failed.
            stop.stop();
            (rendered, worker.join())
        });

        rendered?;
        let reason = match worker_result {
            Ok(result) => result.context("input worker failed")?,
            Err(panic) => std::panic::resume_unwind(panic),
        };

        tracing::debug!(?reason, frames = *frames, "frame loop finished");
        Ok(reason)
    }
}

fn input_worker<D: KeyDecoder>(
    decoder: &mut D,
    direction: &DirectionState,
    stop: &StopHandle,
) -> io::Result<ExitReason> {
    loop {
        if stop.is_stopped() {
            return Ok(ExitReason::Stopped);
        }

        match decoder.poll() {
            Ok(KeyEvent::Quit) => return Ok(ExitReason::UserQuit),
            Ok(KeyEvent::Idle) => {}
            Ok(event) => {
                if direction.apply(event) {
                    let (current, from) = direction.snapshot();
                    tracing::debug!(
                        current = current.as_str(),
                        from = from.as_str(),
                        "heading changed"
                    );
                }
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(ExitReason::InputClosed);
            }
            Err(e) => {
                tracing::warn!(error = %e, "input poll failed");
                return Err(e);
            }
        }
    }
}

fn render_loop<W: Write>(
    compositor: &mut Compositor,
    board: &Mutex<BoardGrid>,
    out: &Mutex<W>,
    tick: Duration,
    stop: &StopHandle,
    wake: &mpsc::Receiver<()>,
    frames: &mut u64,
) -> Result<()> {
    while !stop.is_stopped() {
        {
            // Lock order: board, then sink.
            let mut grid = board.lock().unwrap_or_else(PoisonError::into_inner);
            let mut sink = out.lock().unwrap_or_else(PoisonError::into_inner);
            compositor.render(&mut grid, &mut *sink)?;
        }
        *frames += 1;

        match wake.recv_timeout(tick) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    Ok(())
}
