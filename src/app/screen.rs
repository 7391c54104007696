//! Application screen state management
//!
//! Handles transitions between the application screens:
//! - Main menu
//! - Playing (daily chain or free play)
//! - End of game results
//! - Lifetime stats

use crate::game::dictionary::Dictionary;
use crate::game::letters::daily_seed;
use crate::game::{EndSummary, Game};
use crate::stats::StatsTracker;
use crate::storage::{GameRecord, Storage};

/// Ticks a turn-score flash stays visible; plays are dropped while
/// one is showing so the board is never mutated mid-reveal.
pub const SCORE_FLASH_TICKS: u32 = 2;

/// Menu option on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    DailyChain,
    FreePlay,
    Stats,
    Quit,
}

impl MenuOption {
    /// Get all menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[
            MenuOption::DailyChain,
            MenuOption::FreePlay,
            MenuOption::Stats,
            MenuOption::Quit,
        ]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::DailyChain => "Daily Chain",
            MenuOption::FreePlay => "Free Play",
            MenuOption::Stats => "Stats",
            MenuOption::Quit => "Quit",
        }
    }
}

/// A just-scored word being flashed above the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnFlash {
    pub word: String,
    pub points: u32,
    /// Combo count in effect when the word scored (0 = no combo)
    pub combo_before: u32,
    pub ticks_left: u32,
}

/// The current application screen
pub enum Screen {
    /// Main menu
    Menu { selected: usize },
    /// Playing a game
    Playing {
        selected_slot: usize,
        flash: Option<TurnFlash>,
    },
    /// Game over, showing the sweep results
    Ended { summary: EndSummary },
    /// Lifetime stats
    Stats,
}

/// Main application coordinator. Owns the game core, the stat
/// tracker and the (optional) storage handle; screens hold only
/// presentation state.
pub struct AppCoordinator {
    pub screen: Screen,
    pub should_quit: bool,
    game: Game,
    stats: StatsTracker,
    storage: Option<Storage>,
    /// Whether the current game was started with the daily seed
    daily: bool,
}

impl AppCoordinator {
    /// Start at the menu with the embedded dictionary and persisted
    /// lifetime stats. A broken stats database is not fatal; the app
    /// simply runs without persistence.
    pub fn new() -> Self {
        let storage = Storage::open().ok();
        Self::with_parts(Dictionary::embedded().clone(), storage)
    }

    fn with_parts(dict: Dictionary, storage: Option<Storage>) -> Self {
        let lifetime = storage
            .as_ref()
            .and_then(|s| s.load_lifetime().ok())
            .unwrap_or_default();

        Self {
            screen: Screen::Menu { selected: 0 },
            should_quit: false,
            game: Game::new(dict, None),
            stats: StatsTracker::with_lifetime(lifetime),
            storage,
            daily: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Go back to the main menu
    pub fn go_to_menu(&mut self) {
        self.screen = Screen::Menu { selected: 0 };
    }

    /// Handle menu navigation (up)
    pub fn menu_up(&mut self) {
        if let Screen::Menu { selected } = &mut self.screen {
            if *selected > 0 {
                *selected -= 1;
            }
        }
    }

    /// Handle menu navigation (down)
    pub fn menu_down(&mut self) {
        if let Screen::Menu { selected } = &mut self.screen {
            if *selected < MenuOption::all().len() - 1 {
                *selected += 1;
            }
        }
    }

    /// Handle menu selection (Enter)
    pub fn menu_select(&mut self) {
        let selected = match &self.screen {
            Screen::Menu { selected } => *selected,
            _ => return,
        };

        match MenuOption::all()[selected] {
            MenuOption::DailyChain => self.start_game(Some(daily_seed())),
            MenuOption::FreePlay => self.start_game(None),
            MenuOption::Stats => self.screen = Screen::Stats,
            MenuOption::Quit => self.should_quit = true,
        }
    }

    /// Begin a fresh game; a seed selects a deterministic letter
    /// stream (the daily challenge).
    pub fn start_game(&mut self, seed: Option<u64>) {
        self.daily = seed.is_some();
        self.game.new_game(seed);
        self.stats.start_game();
        self.screen = Screen::Playing {
            selected_slot: 0,
            flash: None,
        };
    }

    /// Play again from the end screen. A daily game replays the same
    /// daily sequence; free play gets a new random one.
    pub fn play_again(&mut self) {
        let seed = self.daily.then(daily_seed);
        self.start_game(seed);
    }

    /// Move bank selection left, wrapping
    pub fn select_left(&mut self) {
        if let Screen::Playing { selected_slot, .. } = &mut self.screen {
            let slots = self.game.bank().len();
            *selected_slot = (*selected_slot + slots - 1) % slots;
        }
    }

    /// Move bank selection right, wrapping
    pub fn select_right(&mut self) {
        if let Screen::Playing { selected_slot, .. } = &mut self.screen {
            *selected_slot = (*selected_slot + 1) % self.game.bank().len();
        }
    }

    /// Play the currently selected bank slot
    pub fn play_selected(&mut self) {
        let slot = match &self.screen {
            Screen::Playing { selected_slot, .. } => *selected_slot,
            _ => return,
        };
        self.play_slot(slot);
    }

    /// Play a specific bank slot (number-key shortcut)
    pub fn play_slot(&mut self, slot: usize) {
        if !matches!(self.screen, Screen::Playing { .. }) {
            return;
        }

        let outcome = self.game.play_tile(slot);
        if !outcome.accepted {
            return;
        }

        for event in self.game.take_events() {
            self.stats.apply(event);
        }

        if let Some(scored) = outcome.matched {
            // Hold further plays until the flash has been seen
            self.game.begin_transition();
            if let Screen::Playing { flash, .. } = &mut self.screen {
                *flash = Some(TurnFlash {
                    word: scored.word,
                    points: scored.points,
                    combo_before: outcome.combo.saturating_sub(1),
                    ticks_left: SCORE_FLASH_TICKS,
                });
            }
        }

        if self.game.is_over() {
            self.finish_game();
        }
    }

    /// Run the end-of-game sweep, persist stats and show the results.
    fn finish_game(&mut self) {
        let summary = self.game.end_game();
        for event in self.game.take_events() {
            self.stats.apply(event);
        }

        if let Some(storage) = &self.storage {
            // Best-effort: a failed write costs this game's history row
            let _ = storage.record_game(&GameRecord::from_stats(self.stats.game()));
            let _ = storage.save_lifetime(self.stats.lifetime());
        }

        self.screen = Screen::Ended { summary };
    }

    /// Advance tick-driven presentation state (the score flash).
    pub fn tick(&mut self) {
        if let Screen::Playing { flash, .. } = &mut self.screen {
            if let Some(active) = flash {
                active.ticks_left = active.ticks_left.saturating_sub(1);
                if active.ticks_left == 0 {
                    *flash = None;
                    self.game.end_transition();
                }
            }
        }
    }
}

impl Default for AppCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
