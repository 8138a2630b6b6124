//! One game attempt: phase, level, ship, bullets and fleet.

use tracing::{debug, info};

use crate::entities::{Bullet, Ship};
use crate::fleet::Fleet;
use crate::input::Input;
use crate::settings::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Start screen, nothing moving.
    Idle,
    Active,
    GameOver,
    Won,
}

/// What the session did with a frame's worth of simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Skipped,
    Continued,
    LevelCleared { next: u32 },
    Won,
    ShipHit,
}

pub struct Session {
    settings: Settings,
    phase: Phase,
    level: u32,
    ship: Ship,
    bullets: Vec<Bullet>,
    fleet: Fleet,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let ship = Ship::new(&settings);
        let fleet = Fleet::new(&settings);
        Self {
            settings,
            phase: Phase::Idle,
            level: 1,
            ship,
            bullets: Vec::new(),
            fleet,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    /// Apply one input. `Quit` is left to the caller.
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::Right(held) => self.ship.moving_right = held,
            Input::Left(held) => self.ship.moving_left = held,
            Input::Action => self.action(),
            Input::Quit => {}
        }
    }

    /// The space bar: fire while playing, otherwise start or restart.
    pub fn action(&mut self) {
        match self.phase {
            Phase::Active => {
                self.fire_bullet();
            }
            Phase::Idle => self.start(),
            Phase::GameOver | Phase::Won => self.reset(),
        }
    }

    fn start(&mut self) {
        self.phase = Phase::Active;
        self.fleet.muster(self.level, &self.settings);
        info!(level = self.level, "game started");
    }

    /// Back to the start screen at level 1.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.level = 1;
        self.bullets.clear();
        self.fleet.clear();
        self.ship.reset_position();
        info!("session reset");
    }

    /// Returns whether a bullet was actually fired.
    pub fn fire_bullet(&mut self) -> bool {
        if self.phase != Phase::Active || self.bullets.len() >= self.settings.max_bullets {
            debug!(live = self.bullets.len(), "fire ignored");
            return false;
        }
        self.bullets.push(Bullet::from_ship(&self.ship, &self.settings));
        true
    }

    /// Advance one frame. Nothing moves outside `Active`.
    pub fn update(&mut self) -> FrameOutcome {
        if self.phase != Phase::Active {
            return FrameOutcome::Skipped;
        }

        self.ship.update();

        for bullet in &mut self.bullets {
            bullet.update();
        }
        self.bullets.retain(|b| !b.is_off_screen());

        self.fleet.update();

        let outcome = self.resolve_bullet_hits();
        // A freshly mustered fleet is checked too, on the same frame.
        if self.phase == Phase::Active && self.fleet_reached_ship() {
            self.ship_hit();
            return FrameOutcome::ShipHit;
        }
        outcome
    }

    /// Each bullet takes out at most the first alien it overlaps, in fleet
    /// order. Hits are marked during the scan and removed afterwards.
    fn resolve_bullet_hits(&mut self) -> FrameOutcome {
        let aliens = self.fleet.aliens();
        let mut alien_alive = vec![true; aliens.len()];
        let mut bullet_alive = vec![true; self.bullets.len()];

        for (bi, bullet) in self.bullets.iter().enumerate() {
            let bullet_box = bullet.bounds();
            let hit = aliens
                .iter()
                .enumerate()
                .find(|(ai, alien)| alien_alive[*ai] && bullet_box.intersects(&alien.bounds()));
            if let Some((ai, _)) = hit {
                alien_alive[ai] = false;
                bullet_alive[bi] = false;
            }
        }

        let mut flags = bullet_alive.iter();
        self.bullets.retain(|_| flags.next().copied().unwrap_or(true));
        self.fleet.retain_marked(&alien_alive);

        if self.fleet.is_empty() {
            self.level_cleared()
        } else {
            FrameOutcome::Continued
        }
    }

    fn level_cleared(&mut self) -> FrameOutcome {
        self.bullets.clear();
        self.level += 1;
        if self.level > self.settings.max_level {
            self.phase = Phase::Won;
            info!(levels = self.settings.max_level, "all levels cleared");
            FrameOutcome::Won
        } else {
            self.fleet.muster(self.level, &self.settings);
            info!(level = self.level, "level up");
            FrameOutcome::LevelCleared { next: self.level }
        }
    }

    /// An alien touching the bottom or the ship ends the game.
    fn fleet_reached_ship(&self) -> bool {
        let ship_box = self.ship.bounds();
        let bottom = self.settings.screen_height;
        self.fleet.aliens().iter().any(|alien| {
            let b = alien.bounds();
            b.bottom() >= bottom || b.intersects(&ship_box)
        })
    }

    fn ship_hit(&mut self) {
        self.phase = Phase::GameOver;
        info!(level = self.level, "ship destroyed");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
