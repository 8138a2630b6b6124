//! Keyboard → game input.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// `true` while the key is held, `false` on release.
    Right(bool),
    Left(bool),
    /// Space: fire, start or restart depending on the phase.
    Action,
    Quit,
}

/// Map a terminal key event to a game input, if it is one.
pub fn translate(key: &KeyEvent) -> Option<Input> {
    let held = match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => true,
        KeyEventKind::Release => false,
    };

    match key.code {
        KeyCode::Right => Some(Input::Right(held)),
        KeyCode::Left => Some(Input::Left(held)),
        // One-shot keys fire on the press only
        _ if key.kind != KeyEventKind::Press => None,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Input::Quit),
        KeyCode::Char(' ') => Some(Input::Action),
        _ => None,
    }
}

/// Synthesises releases for terminals that only ever report presses.
///
/// Holding a key there shows up as a stream of repeated presses; once the
/// stream stops for longer than the hold window the key counts as released.
#[derive(Debug)]
pub struct ReleaseInference {
    window: u64,
    left: Option<u64>,
    right: Option<u64>,
}

impl ReleaseInference {
    pub fn new(window: u64) -> Self {
        Self {
            window,
            left: None,
            right: None,
        }
    }

    /// Record an input seen on `frame`.
    pub fn observe(&mut self, input: Input, frame: u64) {
        match input {
            Input::Left(true) => self.left = Some(frame),
            Input::Left(false) => self.left = None,
            Input::Right(true) => self.right = Some(frame),
            Input::Right(false) => self.right = None,
            _ => {}
        }
    }

    /// Releases for every movement key gone quiet by `frame`.
    pub fn expire(&mut self, frame: u64) -> Vec<Input> {
        let window = self.window;
        let stale = |seen: &mut Option<u64>| match *seen {
            Some(at) if frame.saturating_sub(at) > window => {
                *seen = None;
                true
            }
            _ => false,
        };

        let mut released = Vec::new();
        if stale(&mut self.left) {
            released.push(Input::Left(false));
        }
        if stale(&mut self.right) {
            released.push(Input::Right(false));
        }
        released
    }
}
