//! Simple interactive CLI mode
//!
//! Text-based interactive game without TUI. Same semantics as the TUI:
//! pick a length on the menu, then spell the spoken words.

use crate::commands::lengths::print_lengths;
use crate::core::{GameState, Outcome};
use crate::speech::Narrator;
use crate::wordbank::WordBank;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(
    bank: &WordBank,
    narrator: &mut dyn Narrator,
    initial_length: usize,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Spellquest - Listen and Spell                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Pick a word length, then spell the words read out to you.\n");
    println!("Menu commands: '+' longer, '-' shorter, 'start', 'lengths', 'quit'\n");

    let mut game = GameState::new(initial_length);
    let mut rng = rand::rng();

    loop {
        let length = game.selected_length();
        let count = bank.count_of(length);
        println!(
            "Word length: {}  ({} words available)",
            length.to_string().bold(),
            count
        );

        match get_user_input("Command")?.to_lowercase().as_str() {
            "+" | "up" => game.increase_length(),
            "-" | "down" => game.decrease_length(),
            "lengths" | "l" => print_lengths(bank),
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "start" | "s" => {
                if !play_rounds(bank, narrator, &mut game, &mut rng)? {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
            other => {
                if !other.is_empty() {
                    println!("{}", "Unknown command.".red());
                }
            }
        }
        println!();
    }
}

/// Round loop; returns `Ok(false)` when the user quit outright
fn play_rounds(
    bank: &WordBank,
    narrator: &mut dyn Narrator,
    game: &mut GameState,
    rng: &mut impl rand::Rng,
) -> Result<bool, String> {
    let word = match game.begin_round(bank, rng) {
        Ok(word) => word.clone(),
        Err(err) => {
            println!("{}", err.to_string().red());
            narrate(narrator, &err.to_string());
            return Ok(true);
        }
    };

    println!("\n{}", "Listen carefully...".cyan());
    narrate(
        narrator,
        &format!("The game is starting! Spell the word: {word}"),
    );

    loop {
        let input = get_user_input("Spell the word ('!say' repeat, '!skip', '!menu', '!quit')")?;

        match input.to_lowercase().as_str() {
            "!quit" => return Ok(false),
            "!menu" => return Ok(true),
            "!say" => {
                if let Some(word) = game.current_word() {
                    let word = word.clone();
                    narrate(narrator, &format!("Please spell the word {word}"));
                }
                continue;
            }
            "!skip" => {
                // Same length still has words, so this cannot fail mid-round
                if let Ok(word) = game.begin_round(bank, rng) {
                    let word = word.clone();
                    println!("{}", "Skipped. Listen carefully...".cyan());
                    narrate(narrator, &format!("Spell the new word: {word}"));
                }
                continue;
            }
            _ => {}
        }

        match game.evaluate_guess(&input, bank, rng) {
            Ok(Outcome::Correct { next }) => {
                println!("{}", "Correct!".green().bold());
                narrate(narrator, &format!("Correct! Spell the new word: {next}"));
            }
            Ok(Outcome::Incorrect { answer }) => {
                println!(
                    "{} The correct word was: {}",
                    "Incorrect.".red().bold(),
                    answer.text().to_uppercase().bold()
                );
                narrate(narrator, "Incorrect, try again.");
            }
            Err(err) => return Err(err.to_string()),
        }
    }
}

/// Narrate, reporting failures on stderr without stopping the game
fn narrate(narrator: &mut dyn Narrator, text: &str) {
    if let Err(err) = narrator.say(text) {
        eprintln!("{}", err.to_string().yellow());
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
