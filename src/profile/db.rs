//! SQLite database connection and schema management for the player profile
//!
//! Manages the `~/.batyrbol/profile.db` database with automatic schema
//! migration.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::warn;

use crate::config::Config;

/// Database wrapper shared by the ledger and the CLI views.
#[derive(Clone)]
pub struct ProfileDb {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

impl ProfileDb {
    /// Open or create the profile database at the default location
    /// (~/.batyrbol/profile.db).
    pub fn open_default() -> Result<Self> {
        let db_path = Config::data_dir().join("profile.db");
        Self::open(&db_path)
    }

    /// Open or create the profile database at a specific path.
    ///
    /// An existing file that SQLite can no longer read is moved aside and
    /// replaced with a fresh database rather than making every command fail.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create profile dir: {}", parent.display()))?;
        }

        let existed = path.exists();
        match Self::try_open(path) {
            Ok(db) => Ok(db),
            Err(err) if existed => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "Profile db unreadable, starting over with a fresh profile"
                );
                let aside = path.with_extension("db.corrupt");
                if std::fs::rename(path, &aside).is_err() {
                    std::fs::remove_file(path).with_context(|| {
                        format!("Failed to remove corrupt profile db: {}", path.display())
                    })?;
                }
                // Stale WAL side files would carry the corruption over.
                let _ = std::fs::remove_file(path.with_extension("db-wal"));
                let _ = std::fs::remove_file(path.with_extension("db-shm"));
                Self::try_open(path)
            }
            Err(err) => Err(err),
        }
    }

    fn try_open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open profile db: {}", path.display()))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get a reference to the connection (for queries).
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("Profile DB lock poisoned")
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;
        drop(conn);
        self.run_migrations()?;
        Ok(())
    }

    /// Run any pending migrations.
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn();

        let version: i32 = conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_version",
                [],
                |r| r.get(0),
            )
            .unwrap_or(0);

        // Migration 2: pending mission marker for abandonment tracking
        if version < 2 {
            conn.execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS pending_mission (
                    id INTEGER PRIMARY KEY CHECK (id = 1),
                    character TEXT NOT NULL,
                    started_at INTEGER NOT NULL
                );
                "#,
            )?;
            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (2)", [])?;
        }

        Ok(())
    }

    /// Delete all profile data (reset to a fresh player).
    pub fn reset_all(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(
            r#"
            DELETE FROM mission_log;
            DELETE FROM character_stats;
            DELETE FROM achievements;
            DELETE FROM pending_mission;
            UPDATE player SET level = 1, xp = 0, total_xp = 0,
                missions_completed = 0, missions_won = 0, perfect_missions = 0,
                current_streak = 0, best_streak = 0, fastest_win_secs = NULL
            WHERE id = 1;
            "#,
        )?;
        Ok(())
    }
}

/// SQL schema for the profile database
const SCHEMA_SQL: &str = r#"
-- Player progress (singleton row)
CREATE TABLE IF NOT EXISTS player (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    level INTEGER DEFAULT 1,
    -- XP accumulated inside the current level
    xp INTEGER DEFAULT 0,
    -- Lifetime XP, never spent
    total_xp INTEGER DEFAULT 0,
    missions_completed INTEGER DEFAULT 0,
    missions_won INTEGER DEFAULT 0,
    perfect_missions INTEGER DEFAULT 0,
    current_streak INTEGER DEFAULT 0,
    best_streak INTEGER DEFAULT 0,
    fastest_win_secs INTEGER
);
INSERT OR IGNORE INTO player (id) VALUES (1);

-- Per-character aggregates
CREATE TABLE IF NOT EXISTS character_stats (
    character TEXT PRIMARY KEY,
    missions INTEGER DEFAULT 0,
    wins INTEGER DEFAULT 0,
    correct_answers INTEGER DEFAULT 0,
    scenarios_answered INTEGER DEFAULT 0
);

-- Unlocked achievements
CREATE TABLE IF NOT EXISTS achievements (
    id TEXT PRIMARY KEY,
    unlocked_at INTEGER NOT NULL
);

-- Mission history (one row per finished mission)
CREATE TABLE IF NOT EXISTS mission_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    mission_id TEXT NOT NULL UNIQUE,
    character TEXT NOT NULL,
    difficulty INTEGER NOT NULL,
    success INTEGER NOT NULL,
    correct_answers INTEGER DEFAULT 0,
    scenarios_completed INTEGER DEFAULT 0,
    total_scenarios INTEGER DEFAULT 0,
    success_rate REAL DEFAULT 0.0,
    time_spent_secs INTEGER DEFAULT 0,
    xp_earned INTEGER DEFAULT 0,
    finished_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_mission_character ON mission_log(character);
CREATE INDEX IF NOT EXISTS idx_mission_finished ON mission_log(finished_at);

-- Schema version
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
INSERT OR IGNORE INTO schema_version VALUES (1);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_and_init() {
        let dir = tempdir().unwrap();
        let db = ProfileDb::open(&dir.path().join("test_profile.db")).unwrap();

        let conn = db.conn();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"player".to_string()));
        assert!(tables.contains(&"mission_log".to_string()));
        assert!(tables.contains(&"pending_mission".to_string()));

        // Singleton player row is seeded at level 1.
        let level: u32 = conn
            .query_row("SELECT level FROM player WHERE id = 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(level, 1);
    }

    #[test]
    fn test_reopen_keeps_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_profile.db");
        {
            let db = ProfileDb::open(&path).unwrap();
            db.conn()
                .execute("UPDATE player SET total_xp = 42 WHERE id = 1", [])
                .unwrap();
        }
        let db = ProfileDb::open(&path).unwrap();
        let xp: u32 = db
            .conn()
            .query_row("SELECT total_xp FROM player WHERE id = 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(xp, 42);
    }

    #[test]
    fn test_corrupt_db_is_replaced_with_fresh_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_profile.db");
        std::fs::write(&path, b"this is not a sqlite database").unwrap();

        let db = ProfileDb::open(&path).unwrap();
        let level: u32 = db
            .conn()
            .query_row("SELECT level FROM player WHERE id = 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(level, 1);

        // The unreadable file is kept aside, not silently lost.
        assert!(dir.path().join("test_profile.db.corrupt").exists());
    }

    #[test]
    fn test_open_fails_when_dir_cannot_be_created() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();

        // Parent is a regular file, so this cannot become a database path.
        assert!(ProfileDb::open(&blocker.join("profile.db")).is_err());
    }
}
