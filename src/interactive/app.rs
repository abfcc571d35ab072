//! TUI application state and logic

use crate::core::{Game, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the "not a valid word" notice stays on screen
const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Event poll interval for the draw loop
const TICK_INTERVAL: Duration = Duration::from_millis(150);

/// Application state
///
/// A thin shell around the game engine: it owns the transient notice timing
/// and the quit flag, nothing more. Everything worth rendering comes from
/// the game state itself.
pub struct App {
    pub game: Game,
    invalid_since: Option<Instant>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            invalid_since: None,
            should_quit: false,
        }
    }

    pub fn append_letter(&mut self, letter: char) {
        if self.game.append_letter(letter) {
            // Typing resumes editing; drop the stale rejection notice
            self.invalid_since = None;
        }
    }

    pub fn delete_letter(&mut self) {
        self.game.delete_letter();
    }

    pub async fn submit(&mut self) {
        match self.game.submit_guess().await {
            SubmitOutcome::InvalidWord => self.invalid_since = Some(Instant::now()),
            SubmitOutcome::Accepted | SubmitOutcome::Ignored => {}
        }
    }

    pub async fn new_game(&mut self) {
        self.invalid_since = None;
        self.game.reset().await;
    }

    /// Clear expired transient notices
    pub fn tick(&mut self) {
        if let Some(since) = self.invalid_since
            && since.elapsed() >= NOTICE_DURATION
        {
            self.invalid_since = None;
        }
    }

    /// Whether the "not a valid word" notice is currently visible
    #[must_use]
    pub fn invalid_notice_visible(&self) -> bool {
        self.invalid_since.is_some()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub async fn run_tui(game: Game) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, App::new(game)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code, key.modifiers).await;
                }
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

async fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.new_game().await;
        }
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char(c) => {
            app.append_letter(c);
        }
        KeyCode::Backspace => {
            app.delete_letter();
        }
        KeyCode::Enter => {
            app.submit().await;
        }
        _ => {}
    }
}
