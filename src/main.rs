//! Spellquest - CLI
//!
//! Terminal spelling trainer with TUI and CLI modes. Words are read aloud by
//! the system voice; the player types what they heard.

use anyhow::Result;
use clap::{Parser, Subcommand};
use spellquest::{
    commands::{print_lengths, run_simple},
    core::DEFAULT_LENGTH,
    interactive::{App, run_tui},
    speech::{Narrator, SilentVoice, SystemVoice},
    wordbank::{WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "spellquest",
    about = "Terminal spelling trainer: listen to a word, type its spelling",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Starting word length (floor of 1)
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Disable speech output
    #[arg(long, global = true)]
    mute: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Show the word lengths the dictionary can serve
    Lengths,
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": load a custom wordlist from file
fn load_bank(wordlist_mode: &str) -> Result<WordBank> {
    match wordlist_mode {
        "embedded" => Ok(WordBank::from_embedded()),
        path => {
            let words = load_from_file(path)?;
            Ok(WordBank::new(words))
        }
    }
}

/// Build the narrator, falling back to silence when the engine is missing
fn make_narrator(mute: bool) -> Box<dyn Narrator> {
    if mute {
        return Box::new(SilentVoice);
    }

    match SystemVoice::new() {
        Ok(voice) => Box::new(voice),
        Err(err) => {
            eprintln!("Warning: {err}; continuing without speech");
            Box::new(SilentVoice)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bank = load_bank(&cli.wordlist)?;
    if bank.is_empty() {
        anyhow::bail!("wordlist '{}' contains no usable words", cli.wordlist);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(&bank, make_narrator(cli.mute), cli.length);
            run_tui(app)
        }
        Commands::Simple => {
            let mut narrator = make_narrator(cli.mute);
            run_simple(&bank, narrator.as_mut(), cli.length).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Lengths => {
            print_lengths(&bank);
            Ok(())
        }
    }
}
