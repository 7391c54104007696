//! Chain - a word-chain tile game for the terminal
//!
//! Play letters from the bank onto the scrolling board. Chain words
//! together to keep the combo alive.

mod app;
mod game;
mod stats;
mod storage;
mod tui;

use app::{AppCoordinator, Screen};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};
use tui::Tui;

fn main() -> io::Result<()> {
    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let mut app = AppCoordinator::new();

    // Main event loop
    let tick_rate = Duration::from_millis(400);
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| tui::render(frame, &app))?;

        // Calculate timeout for next tick
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        // Poll for events with timeout
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code);
                }
            }
        }

        // Advance presentation timers (score flash)
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        // Check for quit
        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

fn handle_key(app: &mut AppCoordinator, code: KeyCode) {
    match &app.screen {
        Screen::Menu { .. } => match code {
            KeyCode::Up => app.menu_up(),
            KeyCode::Down => app.menu_down(),
            KeyCode::Enter => app.menu_select(),
            KeyCode::Esc => app.quit(),
            _ => {}
        },
        Screen::Playing { .. } => match code {
            KeyCode::Left => app.select_left(),
            KeyCode::Right => app.select_right(),
            KeyCode::Enter => app.play_selected(),
            KeyCode::Char(c @ '1'..='5') => app.play_slot(c as usize - '1' as usize),
            KeyCode::Esc => app.go_to_menu(),
            _ => {}
        },
        Screen::Ended { .. } => match code {
            KeyCode::Enter => app.play_again(),
            KeyCode::Esc => app.go_to_menu(),
            _ => {}
        },
        Screen::Stats => {
            if matches!(code, KeyCode::Esc | KeyCode::Enter) {
                app.go_to_menu();
            }
        }
    }
}
