#![allow(dead_code)]
//! Persistent storage using SQLite (rusqlite)
//!
//! This module provides:
//! - OS-standard data directory location (via `directories` crate)
//! - SQLite database with schema versioning
//! - Lifetime stat aggregates and a per-game history table
//!
//! Storage is best-effort: if the database cannot be opened the app
//! keeps running with in-memory stats only.

use crate::stats::{GameStats, LifetimeStats};
use directories::ProjectDirs;
use rusqlite::{params, Connection};
use std::path::PathBuf;

/// Current schema version. Bump this when making schema changes.
/// Version history:
/// - v1: Initial schema with meta, lifetime_stats and games tables
const SCHEMA_VERSION: u32 = 1;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// Database error from SQLite
    Database(rusqlite::Error),
    /// Could not determine data directory
    NoDataDirectory,
    /// Schema version mismatch (future version)
    FutureSchemaVersion { found: u32, supported: u32 },
    /// Failed to create data directory
    CreateDirFailed(std::io::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Database(e) => write!(f, "database error: {}", e),
            StorageError::NoDataDirectory => write!(f, "could not determine data directory"),
            StorageError::FutureSchemaVersion { found, supported } => {
                write!(
                    f,
                    "database schema version {} is newer than supported version {}",
                    found, supported
                )
            }
            StorageError::CreateDirFailed(e) => write!(f, "failed to create data directory: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Database(e)
    }
}

/// One finished game as persisted in the history table.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    /// Unix timestamp (milliseconds) when the game finished
    pub created_at: i64,
    pub score: u32,
    pub words_made: u32,
    pub highest_turn_score: u32,
    pub highest_combo_streak: u32,
    pub avg_word_length: f64,
}

impl GameRecord {
    /// Snapshot the per-game aggregates at game over.
    pub fn from_stats(stats: &GameStats) -> Self {
        let created_at = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Self {
            created_at,
            score: stats.score,
            words_made: stats.words_made,
            highest_turn_score: stats.highest_turn_score,
            highest_combo_streak: stats.highest_combo_streak,
            avg_word_length: stats.avg_word_length,
        }
    }
}

/// The storage handle for chain data.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open or create the storage database.
    ///
    /// Uses OS-standard directories:
    /// - Linux: `$XDG_DATA_HOME/chain/` or `~/.local/share/chain/`
    /// - macOS: `~/Library/Application Support/chain/`
    pub fn open() -> Result<Self, StorageError> {
        let data_dir = Self::data_dir()?;

        // Ensure directory exists
        std::fs::create_dir_all(&data_dir).map_err(StorageError::CreateDirFailed)?;

        let db_path = data_dir.join("chain.db");
        let conn = Connection::open(&db_path)?;

        let storage = Storage { conn };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Open an in-memory database (for testing).
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let storage = Storage { conn };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Get the OS-standard data directory for chain.
    pub fn data_dir() -> Result<PathBuf, StorageError> {
        ProjectDirs::from("", "", "chain")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StorageError::NoDataDirectory)
    }

    /// Load the persisted lifetime aggregates, or defaults when no
    /// game has been recorded yet.
    pub fn load_lifetime(&self) -> Result<LifetimeStats, StorageError> {
        let row = self
            .conn
            .query_row(
                "SELECT games_played, high_score, avg_score, words_made,
                        avg_words_per_game, avg_word_length,
                        highest_turn_score, highest_combo_streak
                 FROM lifetime_stats WHERE id = 1",
                [],
                |row| {
                    Ok(LifetimeStats {
                        games_played: row.get(0)?,
                        high_score: row.get(1)?,
                        avg_score: row.get(2)?,
                        words_made: row.get(3)?,
                        avg_words_per_game: row.get(4)?,
                        avg_word_length: row.get(5)?,
                        highest_turn_score: row.get(6)?,
                        highest_combo_streak: row.get(7)?,
                    })
                },
            );

        match row {
            Ok(stats) => Ok(stats),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(LifetimeStats::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the lifetime aggregates (single-row upsert).
    pub fn save_lifetime(&self, stats: &LifetimeStats) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO lifetime_stats
                (id, games_played, high_score, avg_score, words_made,
                 avg_words_per_game, avg_word_length,
                 highest_turn_score, highest_combo_streak)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                stats.games_played,
                stats.high_score,
                stats.avg_score,
                stats.words_made,
                stats.avg_words_per_game,
                stats.avg_word_length,
                stats.highest_turn_score,
                stats.highest_combo_streak,
            ],
        )?;
        Ok(())
    }

    /// Append one finished game to the history table.
    pub fn record_game(&self, record: &GameRecord) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO games
                (created_at, score, words_made, highest_turn_score,
                 highest_combo_streak, avg_word_length)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.created_at,
                record.score,
                record.words_made,
                record.highest_turn_score,
                record.highest_combo_streak,
                record.avg_word_length,
            ],
        )?;
        Ok(())
    }

    /// Most recent games, newest first.
    pub fn recent_games(&self, limit: usize) -> Result<Vec<GameRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT created_at, score, words_made, highest_turn_score,
                    highest_combo_streak, avg_word_length
             FROM games ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(GameRecord {
                created_at: row.get(0)?,
                score: row.get(1)?,
                words_made: row.get(2)?,
                highest_turn_score: row.get(3)?,
                highest_combo_streak: row.get(4)?,
                avg_word_length: row.get(5)?,
            })
        })?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// Total games in the history table.
    pub fn game_count(&self) -> Result<i64, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))?;
        Ok(count)
    }

    // Private helper methods

    fn initialize_schema(&self) -> Result<(), StorageError> {
        let current_version = self.get_schema_version()?;

        if current_version == 0 {
            // Fresh database, create schema
            self.create_schema_v1()?;
        } else if current_version > SCHEMA_VERSION {
            // Database is from a newer version of chain
            return Err(StorageError::FutureSchemaVersion {
                found: current_version,
                supported: SCHEMA_VERSION,
            });
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Result<u32, StorageError> {
        // Check if meta table exists
        let table_exists: bool = self.conn.query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='meta'",
            [],
            |row| row.get(0),
        )?;

        if !table_exists {
            return Ok(0);
        }

        let version: u32 = self
            .conn
            .query_row("SELECT schema_version FROM meta LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        Ok(version)
    }

    fn create_schema_v1(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            r#"
            -- Meta table: stores the schema version
            CREATE TABLE meta (
                schema_version INTEGER NOT NULL
            );

            -- Lifetime aggregates, a single row
            CREATE TABLE lifetime_stats (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                games_played INTEGER NOT NULL,
                high_score INTEGER NOT NULL,
                avg_score REAL NOT NULL,
                words_made INTEGER NOT NULL,
                avg_words_per_game REAL NOT NULL,
                avg_word_length REAL NOT NULL,
                highest_turn_score INTEGER NOT NULL,
                highest_combo_streak INTEGER NOT NULL
            );

            -- One row per finished game
            CREATE TABLE games (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at INTEGER NOT NULL,
                score INTEGER NOT NULL,
                words_made INTEGER NOT NULL,
                highest_turn_score INTEGER NOT NULL,
                highest_combo_streak INTEGER NOT NULL,
                avg_word_length REAL NOT NULL
            );
            "#,
        )?;

        self.conn.execute(
            "INSERT INTO meta (schema_version) VALUES (?1)",
            params![SCHEMA_VERSION],
        )?;

        Ok(())
    }
}
