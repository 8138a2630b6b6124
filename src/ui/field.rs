//! The playfield, drawn in braille dots so a 1200×800 world still has some
//! resolution in an 80-column terminal.

use std::collections::HashMap;

use ratatui::prelude::*;

use crate::geometry::Bounds;
use crate::session::Session;

pub const BACKGROUND: Color = Color::Rgb(0, 0, 0);
const SHIP: Color = Color::Rgb(100, 100, 255);
const BULLET: Color = Color::Rgb(255, 255, 0);
const ALIEN: Color = Color::Rgb(255, 0, 0);

type DotMap = HashMap<(usize, usize), u8>;

/// Maps world units onto the braille dot grid of a `w`×`h` cell area.
struct Raster {
    w: usize,
    h: usize,
    dots_w: i32,
    dots_h: i32,
    scale_x: f32,
    scale_y: f32,
}

impl Raster {
    fn new(w: usize, h: usize, world_w: f32, world_h: f32) -> Self {
        let dots_w = (w * 2) as i32;
        let dots_h = (h * 4) as i32;
        Self {
            w,
            h,
            dots_w,
            dots_h,
            scale_x: dots_w as f32 / world_w,
            scale_y: dots_h as f32 / world_h,
        }
    }

    fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
        match (sub_x, sub_y) {
            (0, 0) => 0x01,
            (0, 1) => 0x02,
            (0, 2) => 0x04,
            (0, 3) => 0x40,
            (1, 0) => 0x08,
            (1, 1) => 0x10,
            (1, 2) => 0x20,
            (1, 3) => 0x80,
            _ => 0,
        }
    }

    fn set_dot(&self, map: &mut DotMap, bx: i32, by: i32) {
        if bx < 0 || by < 0 || bx >= self.dots_w || by >= self.dots_h {
            return;
        }
        let cell = (bx as usize / 2, by as usize / 4);
        *map.entry(cell).or_insert(0) |= Self::braille_bit(bx as usize % 2, by as usize % 4);
    }

    /// Solid box. Anything on screen gets at least one dot.
    fn fill(&self, map: &mut DotMap, bounds: &Bounds) {
        let x0 = (bounds.left() * self.scale_x).floor() as i32;
        let y0 = (bounds.top() * self.scale_y).floor() as i32;
        let x1 = ((bounds.right() * self.scale_x).ceil() as i32).max(x0 + 1);
        let y1 = ((bounds.bottom() * self.scale_y).ceil() as i32).max(y0 + 1);
        for by in y0..y1 {
            for bx in x0..x1 {
                self.set_dot(map, bx, by);
            }
        }
    }

    fn write_layer(&self, grid: &mut [Vec<(char, Style)>], map: &DotMap, color: Color) {
        for (&(cx, cy), &bits) in map {
            if cx < self.w && cy < self.h && bits != 0 {
                let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
                grid[cy][cx] = (ch, Style::default().fg(color).bg(BACKGROUND));
            }
        }
    }
}

/// Ship, bullets and aliens as coloured boxes.
pub fn render_field(session: &Session, width: usize, height: usize) -> Vec<Line<'static>> {
    let settings = session.settings();
    let raster = Raster::new(width, height, settings.screen_width, settings.screen_height);
    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(BACKGROUND)); width]; height];

    let mut ship = DotMap::new();
    raster.fill(&mut ship, &session.ship().bounds());
    raster.write_layer(&mut grid, &ship, SHIP);

    let mut bullets = DotMap::new();
    for bullet in session.bullets() {
        raster.fill(&mut bullets, &bullet.bounds());
    }
    raster.write_layer(&mut grid, &bullets, BULLET);

    let mut aliens = DotMap::new();
    for alien in session.fleet().aliens() {
        raster.fill(&mut aliens, &alien.bounds());
    }
    raster.write_layer(&mut grid, &aliens, ALIEN);

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
