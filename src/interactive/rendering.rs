//! TUI rendering with ratatui
//!
//! The board, the on-screen keyboard, and the status banners. Everything is
//! derived from the game state on each draw.

use super::app::App;
use crate::core::{GameStatus, LetterStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Letter grid
            Constraint::Length(3), // Status banner
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_banner(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let config = app.game.state().config();
    let header = Paragraph::new(format!(
        "🎯 WORDLE · {} letters · {} tries",
        config.word_length, config.max_attempts
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let config = state.config();

    let mut lines = Vec::with_capacity(config.max_attempts);
    for row in 0..config.max_attempts {
        let mut spans = Vec::with_capacity(config.word_length * 2);

        if let Some(statuses) = state.letter_statuses(row) {
            let guess = &state.guesses()[row];
            for (i, &status) in statuses.iter().enumerate() {
                spans.push(Span::styled(
                    format!(" {} ", guess.char_at(i) as char),
                    status_style(status),
                ));
                spans.push(Span::raw(" "));
            }
        } else if row == state.guesses().len() && state.status() == GameStatus::Playing {
            // The row currently being typed
            let input = state.current_input().as_bytes();
            for i in 0..config.word_length {
                let cell = input
                    .get(i)
                    .map_or_else(|| " _ ".to_string(), |&b| format!(" {} ", b as char));
                spans.push(Span::styled(
                    cell,
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..config.word_length {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();

    let (text, color) = if app.invalid_notice_visible() {
        ("Not a valid word!".to_string(), Color::Red)
    } else {
        match state.status() {
            GameStatus::Won => (
                "🎉 Congratulations! You guessed the word!".to_string(),
                Color::Green,
            ),
            GameStatus::Lost => (
                format!("Game over! The word was: {}", state.target().text()),
                Color::Red,
            ),
            GameStatus::Playing => (
                format!(
                    "Attempt {} of {}",
                    state.guesses().len() + 1,
                    state.config().max_attempts
                ),
                Color::DarkGray,
            ),
        }
    };

    let banner = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(banner, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for letter in row.chars() {
                let style = app
                    .game
                    .key_status(letter)
                    .map_or_else(|| Style::default().fg(Color::White), status_style);
                spans.push(Span::styled(format!(" {letter} "), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.game.state().is_over() {
        "Ctrl+R: New Game | Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Ctrl+R: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
