use crossterm::event::KeyEvent;
use tracing::info;

use crate::input::{self, Input, ReleaseInference};
use crate::session::Session;
use crate::settings::Settings;

/// Top-level state the frame loop drives: the session plus the bits of
/// input bookkeeping that are not game rules.
pub struct App {
    pub should_quit: bool,
    pub session: Session,
    /// Present when the terminal cannot report key releases.
    releases: Option<ReleaseInference>,
}

impl App {
    pub fn new(settings: Settings, reports_releases: bool) -> Self {
        let releases = if reports_releases {
            None
        } else {
            Some(ReleaseInference::new(settings.hold_window))
        };
        Self {
            should_quit: false,
            session: Session::new(settings),
            releases,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, frame: u64) {
        if let Some(input) = input::translate(&key) {
            self.on_input(input, frame);
        }
    }

    pub fn on_input(&mut self, input: Input, frame: u64) {
        if input == Input::Quit {
            info!("quit requested");
            self.should_quit = true;
            return;
        }
        if let Some(releases) = &mut self.releases {
            releases.observe(input, frame);
        }
        self.session.handle_input(input);
    }

    /// Runs once per frame after input, before rendering.
    pub fn on_tick(&mut self, frame: u64) {
        if let Some(releases) = &mut self.releases {
            for input in releases.expire(frame) {
                self.session.handle_input(input);
            }
        }
        self.session.update();
    }
}
