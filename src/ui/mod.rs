pub mod field;
pub mod screens;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::session::{Phase, Session};

/// How a line of text is set. Headlines stand in for the big font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Headline,
    Caption,
}

impl TextStyle {
    fn apply(self, text: &str) -> String {
        match self {
            // Letter-spaced so it reads larger than the captions
            TextStyle::Headline => text
                .chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            TextStyle::Caption => text.to_string(),
        }
    }

    fn style(self, color: Color) -> Style {
        match self {
            TextStyle::Headline => Style::default().fg(color).add_modifier(Modifier::BOLD),
            TextStyle::Caption => Style::default().fg(color),
        }
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(100, 100, 255)))
        .title(" Alien Invasion - 5 Levels ")
        .title_style(Style::default().fg(Color::Rgb(150, 150, 255)).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(field::BACKGROUND));

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let session = &app.session;
    match session.phase() {
        Phase::Active => render_play(frame, inner, session),
        Phase::Idle => screens::render_start(frame, inner, session),
        Phase::GameOver => screens::render_game_over(frame, inner, session),
        Phase::Won => screens::render_win(frame, inner, session),
    }
}

fn render_play(frame: &mut Frame, area: Rect, session: &Session) {
    let lines = field::render_field(session, area.width as usize, area.height as usize);
    frame.render_widget(Paragraph::new(lines), area);

    draw_text(
        frame,
        area,
        session,
        &format!("Level {}", session.level()),
        Color::Rgb(255, 255, 255),
        30.0,
        TextStyle::Caption,
    );
}

/// Centre one line of text horizontally at world height `world_y`.
pub fn draw_text(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    text: &str,
    color: Color,
    world_y: f32,
    text_style: TextStyle,
) {
    let row = text_row(area, session.settings().screen_height, world_y);
    let line_area = Rect::new(area.x, row, area.width, 1);
    let line = Line::from(Span::styled(text_style.apply(text), text_style.style(color)));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), line_area);
}

fn text_row(area: Rect, world_height: f32, world_y: f32) -> u16 {
    let offset = (world_y / world_height * area.height as f32) as u16;
    area.y + offset.min(area.height.saturating_sub(1))
}
