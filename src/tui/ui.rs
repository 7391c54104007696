//! UI rendering using ratatui
//!
//! Supports the application screens:
//! - Menu: main menu with game modes
//! - Playing: board, bank and score header
//! - Ended: final score and the end-of-game sweep results
//! - Stats: lifetime aggregates

use crate::app::{AppCoordinator, MenuOption, Screen};
use crate::app::screen::TurnFlash;
use crate::game::board::BOARD_CAPACITY;
use crate::game::{EndSummary, Game};
use crate::stats::LifetimeStats;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Menu { selected } => render_menu(frame, *selected),
        Screen::Playing {
            selected_slot,
            flash,
        } => render_playing(frame, coordinator.game(), *selected_slot, flash.as_ref()),
        Screen::Ended { summary } => render_ended(frame, summary),
        Screen::Stats => render_stats(frame, coordinator.stats().lifetime()),
    }
}

/// Render the main menu
fn render_menu(frame: &mut Frame, selected: usize) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),  // Logo
            Constraint::Length(1),  // Tagline
            Constraint::Length(1),  // Spacer
            Constraint::Min(6),     // Menu options
            Constraint::Length(2),  // Footer
        ])
        .margin(2)
        .split(area);

    // Logo
    let logo = r#"
  ____ _   _    _    ___ _   _
 / ___| | | |  / \  |_ _| \ | |
| |   | |_| | / _ \  | ||  \| |
| |___|  _  |/ ___ \ | || |\  |
 \____|_| |_/_/   \_\___|_| \_|
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let tagline = Paragraph::new("Chain letters into words. Keep the combo alive.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, layout[1]);

    // Menu options
    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, opt.label())).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default());
    frame.render_widget(menu, layout[3]);

    // Footer
    let footer = Paragraph::new("↑↓ Navigate  Enter Select  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Render the in-game screen
fn render_playing(frame: &mut Frame, game: &Game, selected_slot: usize, flash: Option<&TurnFlash>) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header: score / turns / combo
            Constraint::Length(2),  // Turn score flash
            Constraint::Length(3),  // Board
            Constraint::Length(2),  // Spacer
            Constraint::Length(3),  // Bank
            Constraint::Min(1),     // Flex
            Constraint::Length(2),  // Footer
        ])
        .margin(1)
        .split(area);

    // Header
    let combo_label = if game.combo() > 0 {
        format!("  Combo x{}", game.combo())
    } else {
        String::new()
    };
    let header = Paragraph::new(format!(
        "Score: {}   Turns: {}{}",
        game.score(),
        game.turns_remaining(),
        combo_label
    ))
    .style(Style::default().fg(Color::Cyan).bold())
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    // Turn score flash
    if let Some(flash) = flash {
        let combo_label = if flash.combo_before > 0 {
            format!("  Combo! x {}", flash.combo_before)
        } else {
            String::new()
        };
        let flash_widget = Paragraph::new(format!(
            "{} +{}{}",
            flash.word.to_uppercase(),
            flash.points,
            combo_label
        ))
        .style(Style::default().fg(Color::Green).bold())
        .alignment(Alignment::Center);
        frame.render_widget(flash_widget, layout[1]);
    }

    // Board: seven slots, filled from the left as tiles arrive
    let mut board_spans: Vec<Span> = Vec::new();
    let tiles: Vec<char> = game.board().tiles().map(|t| t.letter).collect();
    for i in 0..BOARD_CAPACITY {
        let slot = match tiles.get(i) {
            Some(c) => format!("[{}]", c.to_ascii_uppercase()),
            None => "[ ]".to_string(),
        };
        let style = if tiles.get(i).is_some() {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        board_spans.push(Span::styled(slot, style));
        board_spans.push(Span::raw(" "));
    }
    let board = Paragraph::new(Line::from(board_spans)).alignment(Alignment::Center);
    frame.render_widget(board, layout[2]);

    // Bank: five tiles with the current selection highlighted
    let mut bank_spans: Vec<Span> = Vec::new();
    for (i, slot) in game.bank().iter().enumerate() {
        let (text, mut style) = match slot {
            Some(tile) => (
                format!(" {} ", tile.letter.to_ascii_uppercase()),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
            None => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
        };
        if i == selected_slot {
            style = style.bold();
            bank_spans.push(Span::styled(">", Style::default().fg(Color::Yellow)));
        } else {
            bank_spans.push(Span::raw(" "));
        }
        bank_spans.push(Span::styled(text, style));
        if i == selected_slot {
            bank_spans.push(Span::styled("<", Style::default().fg(Color::Yellow)));
        } else {
            bank_spans.push(Span::raw(" "));
        }
        bank_spans.push(Span::raw(" "));
    }
    let bank = Paragraph::new(Line::from(bank_spans)).alignment(Alignment::Center);
    frame.render_widget(bank, layout[4]);

    // Footer
    let footer = Paragraph::new("←→ Select  Enter/1-5 Play  Esc Menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[6]);
}

/// Render the end-of-game screen
fn render_ended(frame: &mut Frame, summary: &EndSummary) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(3),  // Final score
            Constraint::Min(6),     // Words found
            Constraint::Length(2),  // Footer
        ])
        .margin(1)
        .split(area);

    let header = Paragraph::new("Game Over")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let score = Paragraph::new(format!("Final Score: {}", summary.final_score))
        .style(Style::default().fg(Color::Green).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, layout[1]);

    if summary.words_found.is_empty() {
        let empty = Paragraph::new("No words left on the board")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, layout[2]);
    } else {
        let items: Vec<ListItem> = summary
            .words_found
            .iter()
            .map(|w| {
                ListItem::new(format!("  {}  +{}", w.word.to_uppercase(), w.points))
                    .style(Style::default().fg(Color::White))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Board Sweep"));
        frame.render_widget(list, layout[2]);
    }

    let footer = Paragraph::new("Enter Play Again  Esc Menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Render the lifetime stats screen
fn render_stats(frame: &mut Frame, stats: &LifetimeStats) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(8),     // Stats rows
            Constraint::Length(2),  // Footer
        ])
        .margin(1)
        .split(area);

    let header = Paragraph::new("All Stats")
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let rows = [
        ("Games played", format!("{}", stats.games_played)),
        ("High score", format!("{}", stats.high_score)),
        ("Average score", format!("{:.2}", stats.avg_score)),
        ("Highest word score", format!("{}", stats.highest_turn_score)),
        (
            "Longest combo streak",
            format!("{}", stats.highest_combo_streak),
        ),
        ("Words made", format!("{}", stats.words_made)),
        (
            "Average word length",
            format!("{:.2}", stats.avg_word_length),
        ),
        (
            "Average words per game",
            format!("{:.2}", stats.avg_words_per_game),
        ),
    ];

    let items: Vec<ListItem> = rows
        .iter()
        .map(|(label, value)| {
            ListItem::new(format!("  {:<24} {}", label, value))
                .style(Style::default().fg(Color::White))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, layout[1]);

    let footer = Paragraph::new("Esc Back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}
