use std::fs::File;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use alien_invasion::app::App;
use alien_invasion::event::{Event, EventHandler, FrameClock};
use alien_invasion::settings::Settings;
use alien_invasion::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Logs go to a file; the terminal belongs to the game.
fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join("alien-invasion.log");
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    enable_raw_mode().context("enabling raw mode")?;

    // Everything after raw mode goes through `start` so the terminal is
    // restored however setup or the game loop ends.
    let mut reports_releases = false;
    let result = start(&mut reports_releases);

    let _ = disable_raw_mode();
    let _ = restore_screen(&mut io::stdout(), reports_releases);

    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}

fn start(reports_releases: &mut bool) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;

    // Without release events a held arrow key would never let go; fall back
    // to inferring releases when the terminal cannot report them.
    *reports_releases = supports_keyboard_enhancement().unwrap_or(false)
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();
    info!(reports_releases = *reports_releases, "terminal ready");

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;
    terminal.clear().context("clearing terminal")?;

    run(&mut terminal, *reports_releases)
}

/// Undo what `start` did to the screen. Safe to call after a partial setup.
fn restore_screen<W: Write>(out: &mut W, reports_releases: bool) -> io::Result<()> {
    if reports_releases {
        execute!(out, PopKeyboardEnhancementFlags)?;
    }
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

fn run(terminal: &mut Tui, reports_releases: bool) -> Result<()> {
    let settings = Settings::default();
    let mut clock = FrameClock::new(settings.frame_duration());
    let mut app = App::new(settings, reports_releases);
    let events = EventHandler::new();

    // Main loop
    loop {
        let frame = clock.frame();
        for event in events.drain()? {
            match event {
                Event::Key(key) => app.on_key(key, frame),
            }
        }
        if app.should_quit {
            break;
        }

        app.on_tick(frame);
        terminal
            .draw(|f| ui::render(f, &app))
            .context("drawing frame")?;

        clock.tick();
    }

    info!("exiting");
    Ok(())
}
