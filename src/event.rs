use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, KeyEvent};
use tracing::warn;

pub enum Event {
    Key(KeyEvent),
}

/// Reads terminal events on a background thread so the frame loop never
/// blocks on input.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            match event::read() {
                Ok(crossterm::event::Event::Key(key)) => {
                    if tx.send(Event::Key(key)).is_err() {
                        return;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(%err, "terminal event reader stopped");
                    return;
                }
            }
        });

        Self { rx }
    }

    /// Everything that arrived since the last call, without waiting.
    pub fn drain(&self) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(ev) => events.push(ev),
                Err(TryRecvError::Empty) => return Ok(events),
                Err(TryRecvError::Disconnected) => {
                    return Err(anyhow!("terminal event reader disconnected"))
                }
            }
        }
    }
}

/// Caps the loop at a fixed frame rate by sleeping off whatever is left of
/// each frame.
pub struct FrameClock {
    frame: Duration,
    started: Instant,
    count: u64,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            started: Instant::now(),
            count: 0,
        }
    }

    /// Frames completed so far.
    pub fn frame(&self) -> u64 {
        self.count
    }

    /// Time left in the current frame.
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.started.elapsed())
    }

    /// Wait out the frame and start the next one.
    pub fn tick(&mut self) {
        let left = self.remaining();
        if !left.is_zero() {
            thread::sleep(left);
        }
        self.started = Instant::now();
        self.count += 1;
    }
}
