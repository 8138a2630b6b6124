//! Every tunable of the game in one place.
//!
//! `Settings::default()` is the classic 1200×800 game. Tests build smaller
//! or faster variants by overriding individual fields.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,

    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_speed: f32,

    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,
    /// Bullets allowed on screen at once.
    pub max_bullets: usize,

    pub alien_width: f32,
    pub alien_height: f32,
    pub fleet_columns: usize,
    pub fleet_max_rows: usize,
    pub fleet_origin_x: f32,
    pub fleet_origin_y: f32,
    pub fleet_spacing_x: f32,
    pub fleet_spacing_y: f32,
    pub fleet_drop_distance: f32,

    pub max_level: u32,

    pub frames_per_second: u32,
    /// Frames a movement key stays held without a repeat, on terminals
    /// that never send release events.
    pub hold_window: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,
            ship_width: 50.0,
            ship_height: 60.0,
            ship_speed: 15.0,
            bullet_width: 5.0,
            bullet_height: 15.0,
            bullet_speed: 15.0,
            max_bullets: 3,
            alien_width: 40.0,
            alien_height: 30.0,
            fleet_columns: 10,
            fleet_max_rows: 6,
            fleet_origin_x: 75.0,
            fleet_origin_y: 50.0,
            fleet_spacing_x: 60.0,
            fleet_spacing_y: 50.0,
            fleet_drop_distance: 30.0,
            max_level: 5,
            frames_per_second: 60,
            // Must outlast the keyboard's initial auto-repeat delay
            // (commonly 250-660 ms), not just the repeat interval.
            hold_window: 45,
        }
    }
}

impl Settings {
    /// Alien rows for `level`: two more than the level, capped.
    pub fn fleet_rows(&self, level: u32) -> usize {
        (level as usize + 2).min(self.fleet_max_rows)
    }

    /// Horizontal fleet speed for `level`. Derived fresh each level.
    pub fn fleet_speed(&self, level: u32) -> f32 {
        0.5 + level as f32 * 0.5
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second.max(1)
    }
}
