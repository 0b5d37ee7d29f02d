//! TUI application state and logic
//!
//! The screen controller: a two-state machine (menu, playing) that owns the
//! game state, the guess input buffer, and the narrator. Key handling lives
//! here; painting lives in `rendering`.

use crate::core::{GameState, Outcome};
use crate::speech::Narrator;
use crate::wordbank::WordBank;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which screen is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
}

/// Actions reachable from the menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Increase,
    Decrease,
    Start,
    Exit,
}

/// Menu rows, top to bottom
pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::Increase,
    MenuItem::Decrease,
    MenuItem::Start,
    MenuItem::Exit,
];

impl MenuItem {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Increase => "Increase length",
            Self::Decrease => "Decrease length",
            Self::Start => "Start",
            Self::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session counters shown on the game screen
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub correct: usize,
    pub incorrect: usize,
    pub streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    fn record_correct(&mut self) {
        self.correct += 1;
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
    }

    fn record_incorrect(&mut self) {
        self.incorrect += 1;
        self.streak = 0;
    }
}

/// Application state
pub struct App<'a> {
    pub bank: &'a WordBank,
    pub game: GameState,
    pub screen: Screen,
    pub menu_cursor: usize,
    pub input_buffer: String,
    pub reveal: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    narrator: Box<dyn Narrator>,
    rng: StdRng,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank, narrator: Box<dyn Narrator>, initial_length: usize) -> Self {
        Self::with_rng(bank, narrator, initial_length, StdRng::from_os_rng())
    }

    /// Like [`App::new`] with a caller-supplied RNG, so tests can seed it
    #[must_use]
    pub fn with_rng(
        bank: &'a WordBank,
        narrator: Box<dyn Narrator>,
        initial_length: usize,
        rng: StdRng,
    ) -> Self {
        Self {
            bank,
            game: GameState::new(initial_length),
            screen: Screen::Menu,
            menu_cursor: 0,
            input_buffer: String::new(),
            reveal: None,
            messages: vec![Message {
                text: "Welcome to Spellquest! Pick a word length and press Start.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            narrator,
            rng,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Narrate, surfacing failures in the message feed without stopping play
    fn narrate(&mut self, text: &str) {
        if let Err(err) = self.narrator.say(text) {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = self
            .menu_cursor
            .checked_sub(1)
            .unwrap_or(MENU_ITEMS.len() - 1);
    }

    pub fn menu_down(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1) % MENU_ITEMS.len();
    }

    pub fn activate_selected(&mut self) {
        match MENU_ITEMS[self.menu_cursor] {
            MenuItem::Increase => self.game.increase_length(),
            MenuItem::Decrease => self.game.decrease_length(),
            MenuItem::Start => self.start_game(),
            MenuItem::Exit => self.should_quit = true,
        }
    }

    /// Menu → Playing: draw a word and announce it
    pub fn start_game(&mut self) {
        self.begin("The game is starting! Spell the word");
    }

    /// Skip the current word and announce its replacement
    pub fn next_word(&mut self) {
        self.begin("Spell the new word");
    }

    fn begin(&mut self, prompt: &str) {
        match self.game.begin_round(self.bank, &mut self.rng) {
            Ok(word) => {
                let word = word.clone();
                self.screen = Screen::Playing;
                self.reveal = None;
                self.input_buffer.clear();
                self.narrate(&format!("{prompt}: {word}"));
            }
            Err(err) => {
                let text = err.to_string();
                self.add_message(&text, MessageStyle::Error);
                self.narrate(&text);
            }
        }
    }

    /// Re-announce the active word without redrawing
    pub fn speak_word(&mut self) {
        if let Some(word) = self.game.current_word() {
            let word = word.clone();
            self.narrate(&format!("Please spell the word {word}"));
        }
    }

    /// Evaluate whatever is in the input buffer; the buffer is cleared
    /// regardless of the outcome
    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.game.evaluate_guess(&guess, self.bank, &mut self.rng) {
            Ok(Outcome::Correct { next }) => {
                self.stats.record_correct();
                self.reveal = None;
                self.add_message("Correct! A new word has been drawn.", MessageStyle::Success);
                self.narrate(&format!("Correct! Spell the new word: {next}"));
            }
            Ok(Outcome::Incorrect { answer }) => {
                self.stats.record_incorrect();
                self.reveal = Some(format!("The correct word was: {answer}"));
                self.add_message("Incorrect, try again.", MessageStyle::Error);
                self.narrate("Incorrect, try again.");
            }
            Err(err) => {
                // Unreachable through the UI: the guess field only exists on
                // the game screen, which is only entered after a draw.
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Playing → Menu, so the length can be changed between rounds
    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.input_buffer.clear();
        self.reveal = None;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.screen {
                Screen::Menu => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q' | 'Q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Up => app.menu_up(),
                    KeyCode::Down => app.menu_down(),
                    KeyCode::Left | KeyCode::Char('-') => app.game.decrease_length(),
                    KeyCode::Right | KeyCode::Char('+' | '=') => app.game.increase_length(),
                    KeyCode::Char('s') => app.start_game(),
                    KeyCode::Enter => app.activate_selected(),
                    _ => {}
                },
                Screen::Playing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.next_word();
                    }
                    KeyCode::Tab => app.speak_word(),
                    KeyCode::Esc => app.back_to_menu(),
                    KeyCode::Enter => app.submit_guess(),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Char(c) => {
                        // The guess field consumes printable keys, so typing
                        // words containing 'q' never quits mid-game.
                        if c.is_alphabetic() {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::speech::{SilentVoice, SpeechError};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Narrator double that records every utterance
    struct RecordingVoice {
        spoken: Rc<RefCell<Vec<String>>>,
    }

    impl Narrator for RecordingVoice {
        fn say(&mut self, text: &str) -> Result<(), SpeechError> {
            self.spoken.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    /// Narrator double that always fails
    struct BrokenVoice;

    impl Narrator for BrokenVoice {
        fn say(&mut self, _text: &str) -> Result<(), SpeechError> {
            Err(SpeechError::Failed("no audio device".to_string()))
        }
    }

    fn bank(words: &[&str]) -> WordBank {
        WordBank::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    fn recording_app(bank: &WordBank) -> (App<'_>, Rc<RefCell<Vec<String>>>) {
        let spoken = Rc::new(RefCell::new(Vec::new()));
        let voice = RecordingVoice {
            spoken: Rc::clone(&spoken),
        };
        let app = App::with_rng(bank, Box::new(voice), 5, StdRng::seed_from_u64(42));
        (app, spoken)
    }

    #[test]
    fn starts_on_menu_with_no_word() {
        let bank = bank(&["apple"]);
        let app = App::with_rng(&bank, Box::new(SilentVoice), 5, StdRng::seed_from_u64(0));

        assert_eq!(app.screen, Screen::Menu);
        assert!(app.game.current_word().is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn start_transitions_to_playing_and_announces_word() {
        let bank = bank(&["apple", "fig"]);
        let (mut app, spoken) = recording_app(&bank);

        app.start_game();

        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.game.current_word().map(Word::text), Some("apple"));
        assert_eq!(
            spoken.borrow().as_slice(),
            ["The game is starting! Spell the word: apple"]
        );
    }

    #[test]
    fn start_with_no_matching_words_stays_on_menu() {
        let bank = bank(&["fig", "ox"]);
        let (mut app, spoken) = recording_app(&bank);

        app.start_game();

        assert_eq!(app.screen, Screen::Menu);
        assert!(app.game.current_word().is_none());
        let announced = spoken.borrow();
        assert!(announced[0].contains("No 5-letter words"));
        assert!(announced[0].contains("3"));
    }

    #[test]
    fn correct_guess_clears_input_and_draws_new_word() {
        let bank = bank(&["apple", "fig"]);
        let (mut app, spoken) = recording_app(&bank);

        app.start_game();
        app.input_buffer = "APPLE".to_string();
        app.submit_guess();

        assert!(app.input_buffer.is_empty());
        assert!(app.reveal.is_none());
        assert_eq!(app.stats.correct, 1);
        assert_eq!(app.stats.streak, 1);
        // Only 5-letter word in the bank, so the redraw is deterministic
        assert_eq!(app.game.current_word().map(Word::text), Some("apple"));
        assert_eq!(
            spoken.borrow().last().map(String::as_str),
            Some("Correct! Spell the new word: apple")
        );
    }

    #[test]
    fn incorrect_guess_reveals_answer_and_keeps_word() {
        let bank = bank(&["apple", "fig"]);
        let (mut app, spoken) = recording_app(&bank);

        app.start_game();
        app.input_buffer = "mango".to_string();
        app.submit_guess();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.reveal.as_deref(), Some("The correct word was: apple"));
        assert_eq!(app.stats.incorrect, 1);
        assert_eq!(app.stats.streak, 0);
        assert_eq!(app.game.current_word().map(Word::text), Some("apple"));
        assert_eq!(
            spoken.borrow().last().map(String::as_str),
            Some("Incorrect, try again.")
        );
    }

    #[test]
    fn streak_resets_on_miss_and_keeps_best() {
        let bank = bank(&["apple"]);
        let (mut app, _spoken) = recording_app(&bank);

        app.start_game();
        for _ in 0..3 {
            app.input_buffer = "apple".to_string();
            app.submit_guess();
        }
        app.input_buffer = "wrong".to_string();
        app.submit_guess();

        assert_eq!(app.stats.correct, 3);
        assert_eq!(app.stats.incorrect, 1);
        assert_eq!(app.stats.streak, 0);
        assert_eq!(app.stats.best_streak, 3);
    }

    #[test]
    fn next_word_clears_reveal() {
        let bank = bank(&["apple"]);
        let (mut app, _spoken) = recording_app(&bank);

        app.start_game();
        app.input_buffer = "wrong".to_string();
        app.submit_guess();
        assert!(app.reveal.is_some());

        app.next_word();
        assert!(app.reveal.is_none());
        assert_eq!(app.screen, Screen::Playing);
    }

    #[test]
    fn speak_word_repeats_current_word() {
        let bank = bank(&["apple"]);
        let (mut app, spoken) = recording_app(&bank);

        app.start_game();
        app.speak_word();

        assert_eq!(
            spoken.borrow().last().map(String::as_str),
            Some("Please spell the word apple")
        );
    }

    #[test]
    fn speak_word_without_round_is_silent() {
        let bank = bank(&["apple"]);
        let (mut app, spoken) = recording_app(&bank);

        app.speak_word();
        assert!(spoken.borrow().is_empty());
    }

    #[test]
    fn esc_returns_to_menu_and_clears_transient_state() {
        let bank = bank(&["apple"]);
        let (mut app, _spoken) = recording_app(&bank);

        app.start_game();
        app.input_buffer = "app".to_string();
        app.back_to_menu();

        assert_eq!(app.screen, Screen::Menu);
        assert!(app.input_buffer.is_empty());
        assert!(app.reveal.is_none());
    }

    #[test]
    fn menu_cursor_wraps_both_ways() {
        let bank = bank(&["apple"]);
        let (mut app, _spoken) = recording_app(&bank);

        assert_eq!(app.menu_cursor, 0);
        app.menu_up();
        assert_eq!(app.menu_cursor, MENU_ITEMS.len() - 1);
        app.menu_down();
        assert_eq!(app.menu_cursor, 0);
    }

    #[test]
    fn menu_exit_item_quits() {
        let bank = bank(&["apple"]);
        let (mut app, _spoken) = recording_app(&bank);

        // Move the cursor to Exit
        while MENU_ITEMS[app.menu_cursor] != MenuItem::Exit {
            app.menu_down();
        }
        app.activate_selected();
        assert!(app.should_quit);
    }

    #[test]
    fn menu_length_items_adjust_length() {
        let bank = bank(&["apple"]);
        let (mut app, _spoken) = recording_app(&bank);

        // Cursor starts on Increase
        app.activate_selected();
        assert_eq!(app.game.selected_length(), 6);

        app.menu_down(); // Decrease
        app.activate_selected();
        app.activate_selected();
        assert_eq!(app.game.selected_length(), 4);
    }

    #[test]
    fn narration_failure_is_surfaced_but_not_fatal() {
        let bank = bank(&["apple"]);
        let mut app = App::with_rng(
            &bank,
            Box::new(BrokenVoice),
            5,
            StdRng::seed_from_u64(42),
        );

        app.start_game();

        // The round still started even though narration failed
        assert_eq!(app.screen, Screen::Playing);
        assert!(app.game.current_word().is_some());
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("Speech playback failed"))
        );

        // And guessing still works
        app.input_buffer = "apple".to_string();
        app.submit_guess();
        assert_eq!(app.stats.correct, 1);
    }

    #[test]
    fn message_feed_keeps_last_five() {
        let bank = bank(&["apple"]);
        let (mut app, _spoken) = recording_app(&bank);

        for i in 0..8 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 7");
    }
}
