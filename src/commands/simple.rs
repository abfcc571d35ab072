//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI.

use crate::core::{Game, GameStatus, SubmitOutcome};
use crate::output::{colorize_guess, statuses_to_emoji};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the line-based game loop
///
/// # Errors
///
/// Returns an error if reading user input or writing to stdout fails.
pub async fn run_simple(mut game: Game) -> Result<()> {
    let config = game.state().config();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     W O R D L E                              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries!\n",
        config.word_length, config.max_attempts
    );
    println!("  🟩 correct position   🟨 wrong position   ⬜ not in word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    loop {
        print_board(&game);

        match game.state().status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                print_win(&game);
                if !play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                game.reset().await;
                println!("\n🔄 New game started!\n");
                continue;
            }
            GameStatus::Lost => {
                println!(
                    "\n{}",
                    format!(
                        "❌ Game over! The word was: {}",
                        game.state().target().text()
                    )
                    .red()
                    .bold()
                );
                if !play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                game.reset().await;
                println!("\n🔄 New game started!\n");
                continue;
            }
        }

        let attempt = game.state().guesses().len() + 1;
        let input = get_user_input(&format!("Guess {attempt}/{}", config.max_attempts))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.reset().await;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        // Rebuild the input buffer from the typed line
        clear_input(&mut game);
        for letter in input.chars() {
            game.append_letter(letter);
        }

        if game.state().current_input().len() != config.word_length {
            println!(
                "❌ Enter exactly {} letters (A-Z), or a command.\n",
                config.word_length
            );
            clear_input(&mut game);
            continue;
        }

        match game.submit_guess().await {
            SubmitOutcome::Accepted | SubmitOutcome::Ignored => {}
            SubmitOutcome::InvalidWord => {
                println!("❌ Not a valid word!\n");
                clear_input(&mut game);
            }
        }
    }
}

fn clear_input(game: &mut Game) {
    while game.delete_letter() {}
}

fn print_board(game: &Game) {
    if game.state().guesses().is_empty() {
        return;
    }

    println!();
    for (row, guess) in game.state().guesses().iter().enumerate() {
        // Every enumerated row is a completed guess
        if let Some(statuses) = game.letter_statuses(row) {
            println!(
                "  {}  {}",
                colorize_guess(guess, &statuses),
                statuses_to_emoji(&statuses)
            );
        }
    }
    println!();
}

fn print_win(game: &Game) {
    let attempts = game.state().guesses().len();

    println!("\n{}", "═".repeat(64).bright_cyan());
    println!(
        "{}",
        "       🎉 🎊  Y O U   G U E S S E D   I T !  🎊 🎉       "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(64).bright_cyan());

    let performance = match attempts {
        1 => "🏆 Unbelievable first try!",
        2 => "⭐ Outstanding!",
        3 => "💫 Great work!",
        4 => "✨ Nicely done!",
        5 => "👍 Got there!",
        _ => "😅 Phew, that was close!",
    };

    println!(
        "\n  {} Solved in {} {}.\n",
        performance.bright_yellow().bold(),
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );
}

fn play_again() -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
