//! TUI rendering with ratatui
//!
//! Paints the menu and game screens from the `App` state.

use super::app::{App, MENU_ITEMS, MessageStyle, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Menu => render_menu(f, app, chunks[1]),
        Screen::Playing => render_game(f, app, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Menu => "SPELLQUEST - Listen and Spell",
        Screen::Playing => "Spell the word!",
    };

    let header = Paragraph::new(title)
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

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Length summary
            Constraint::Min(6),    // Menu items
        ])
        .split(area);

    render_length_summary(f, app, chunks[0]);
    render_menu_items(f, app, chunks[1]);
}

fn render_length_summary(f: &mut Frame, app: &App, area: Rect) {
    let length = app.game.selected_length();
    let count = app.bank.count_of(length);

    let count_line = if count == 0 {
        let hint = app
            .bank
            .nearest_length(length)
            .map_or_else(String::new, |n| format!(" (closest available: {n})"));
        Line::from(Span::styled(
            format!("No words of this length!{hint}"),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from(format!("{count} words available"))
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Word length: "),
            Span::styled(
                length.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        count_line,
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Dictionary ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_menu_items(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == app.menu_cursor;
            let (marker, style) = if selected {
                (
                    "> ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{}", item.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guess input
            Constraint::Length(3), // Reveal line
            Constraint::Min(3),    // Session stats
        ])
        .split(area);

    render_input(f, app, chunks[0]);
    render_reveal(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Type your spelling, Enter to submit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_reveal(f: &mut Frame, app: &App, area: Rect) {
    let content = app.reveal.as_deref().unwrap_or("");

    let reveal = Paragraph::new(content)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(reveal, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let content = vec![
        Line::from(vec![
            Span::raw("Correct: "),
            Span::styled(
                stats.correct.to_string(),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   Incorrect: "),
            Span::styled(stats.incorrect.to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::raw("Streak: "),
            Span::styled(
                stats.streak.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   Best: {}", stats.best_streak)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Session ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen {
        Screen::Menu => "↑/↓ select | Enter activate | +/- length | s start | q quit",
        Screen::Playing => "Enter submit | Tab repeat word | Ctrl-n skip | Esc menu | Ctrl-c quit",
    };

    let status = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}
