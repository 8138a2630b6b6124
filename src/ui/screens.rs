//! Static screens shown whenever play is not running.

use ratatui::prelude::*;

use super::{draw_text, TextStyle};
use crate::session::Session;

const WHITE: Color = Color::Rgb(255, 255, 255);
const RED: Color = Color::Rgb(255, 0, 0);
const GREEN: Color = Color::Rgb(0, 255, 0);

pub fn render_start(frame: &mut Frame, area: Rect, session: &Session) {
    let levels = session.settings().max_level;
    draw_text(frame, area, session, "ALIEN INVASION", WHITE, 300.0, TextStyle::Headline);
    draw_text(frame, area, session, "Press SPACE to start", WHITE, 400.0, TextStyle::Caption);
    draw_text(
        frame,
        area,
        session,
        "Arrow keys to move, SPACE to shoot",
        WHITE,
        450.0,
        TextStyle::Caption,
    );
    draw_text(
        frame,
        area,
        session,
        &format!("Survive {levels} levels to win!"),
        WHITE,
        500.0,
        TextStyle::Caption,
    );
}

pub fn render_game_over(frame: &mut Frame, area: Rect, session: &Session) {
    draw_text(frame, area, session, "GAME OVER", RED, 300.0, TextStyle::Headline);
    draw_text(
        frame,
        area,
        session,
        &format!("Died on Level {}", session.level()),
        WHITE,
        350.0,
        TextStyle::Caption,
    );
    draw_text(frame, area, session, "Press SPACE to try again", WHITE, 400.0, TextStyle::Caption);
    draw_text(frame, area, session, "Press Q to quit", WHITE, 450.0, TextStyle::Caption);
}

pub fn render_win(frame: &mut Frame, area: Rect, session: &Session) {
    draw_text(frame, area, session, "YOU WIN!", GREEN, 300.0, TextStyle::Headline);
    draw_text(frame, area, session, "Press SPACE to play again", WHITE, 400.0, TextStyle::Caption);
    draw_text(frame, area, session, "Press Q to quit", WHITE, 450.0, TextStyle::Caption);
}
