use tracing::debug;

use crate::entities::Alien;
use crate::settings::Settings;

/// Every live alien of the current level, moving as one.
///
/// Aliens are kept in creation order (row-major), which is the order all
/// first-match scans use.
#[derive(Clone, Debug)]
pub struct Fleet {
    aliens: Vec<Alien>,
    direction: f32, // 1.0 = right, -1.0 = left
    speed: f32,
    drop_distance: f32,
    screen_width: f32,
}

impl Fleet {
    pub fn new(settings: &Settings) -> Self {
        Self {
            aliens: Vec::new(),
            direction: 1.0,
            speed: settings.fleet_speed(1),
            drop_distance: settings.fleet_drop_distance,
            screen_width: settings.screen_width,
        }
    }

    /// Replace the fleet with the grid for `level`. Direction carries over
    /// from whatever the previous fleet was doing.
    pub fn muster(&mut self, level: u32, settings: &Settings) {
        self.aliens.clear();
        self.speed = settings.fleet_speed(level);
        let rows = settings.fleet_rows(level);
        for row in 0..rows {
            for col in 0..settings.fleet_columns {
                let x = settings.fleet_origin_x + col as f32 * settings.fleet_spacing_x;
                let y = settings.fleet_origin_y + row as f32 * settings.fleet_spacing_y;
                self.aliens.push(Alien::new(x, y, settings));
            }
        }
        debug!(level, rows, aliens = self.aliens.len(), speed = self.speed, "fleet mustered");
    }

    /// Drop and reverse if the fleet touches a side, then step sideways.
    pub fn update(&mut self) {
        self.check_edges();
        for alien in &mut self.aliens {
            alien.update(self.direction, self.speed);
        }
    }

    /// The first alien on or past either side edge drops the whole fleet
    /// once and flips its direction. Returns whether that happened.
    pub fn check_edges(&mut self) -> bool {
        let at_edge = self.aliens.iter().any(|alien| {
            let b = alien.bounds();
            b.right() >= self.screen_width || b.left() <= 0.0
        });
        if at_edge {
            self.change_direction();
        }
        at_edge
    }

    fn change_direction(&mut self) {
        for alien in &mut self.aliens {
            alien.drop_down(self.drop_distance);
        }
        self.direction = -self.direction;
        debug!(direction = self.direction, "fleet reversed");
    }

    /// Drop every alien whose `keep` entry is false. `keep` is indexed in
    /// creation order and must cover the whole fleet.
    pub fn retain_marked(&mut self, keep: &[bool]) {
        let mut flags = keep.iter();
        self.aliens.retain(|_| flags.next().copied().unwrap_or(true));
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn aliens_mut(&mut self) -> &mut [Alien] {
        &mut self.aliens
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}
