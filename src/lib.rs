//! Alien Invasion: shoot down five levels of descending alien fleets.
//!
//! The library holds the whole game; the binary only owns the terminal.

pub mod app;
pub mod entities;
pub mod event;
pub mod fleet;
pub mod geometry;
pub mod input;
pub mod session;
pub mod settings;
pub mod ui;
