//! Ship, bullets and aliens. Plain data plus their own per-frame motion;
//! collisions are resolved by the session, not here.

use crate::geometry::Bounds;
use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    screen_width: f32,
    screen_height: f32,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            x: 0.0,
            y: 0.0,
            width: settings.ship_width,
            height: settings.ship_height,
            speed: settings.ship_speed,
            moving_left: false,
            moving_right: false,
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
        };
        ship.reset_position();
        ship
    }

    /// Bottom-centre of the screen.
    pub fn reset_position(&mut self) {
        self.x = (self.screen_width - self.width) / 2.0;
        self.y = self.screen_height - self.height;
    }

    /// Each flag moves the ship one step, but only if the step keeps it
    /// fully on screen.
    pub fn update(&mut self) {
        if self.moving_right && self.x + self.speed + self.width <= self.screen_width {
            self.x += self.speed;
        }
        if self.moving_left && self.x - self.speed >= 0.0 {
            self.x -= self.speed;
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Bullet {
    /// Spawns centred on the ship, resting on its nose.
    pub fn from_ship(ship: &Ship, settings: &Settings) -> Self {
        let ship_box = ship.bounds();
        Self {
            x: ship_box.center_x() - settings.bullet_width / 2.0,
            y: ship_box.top() - settings.bullet_height,
            width: settings.bullet_width,
            height: settings.bullet_height,
            speed: settings.bullet_speed,
        }
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
    }

    /// Gone once the whole bullet has left the top of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.bounds().bottom() <= 0.0
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Alien {
    pub fn new(x: f32, y: f32, settings: &Settings) -> Self {
        Self {
            x,
            y,
            width: settings.alien_width,
            height: settings.alien_height,
        }
    }

    /// Horizontal step; direction and speed belong to the fleet.
    pub fn update(&mut self, direction: f32, speed: f32) {
        self.x += direction * speed;
    }

    pub fn drop_down(&mut self, distance: f32) {
        self.y += distance;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}
