//! Profile ledger - records finished missions and everything they trigger.
//!
//! Each finished mission is applied in a single transaction: the history row,
//! the player counters, XP and level-ups, per-character aggregates and any
//! newly unlocked achievements land together or not at all.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::domain::{Character, MissionReport};

use super::achievements::checker::{
    check_answer_achievements, check_level_achievements, check_mastery_achievements,
    check_milestone_achievements, check_skill_achievements, check_streak_achievements,
};
use super::achievements::{Achievement, AchievementId};
use super::db::ProfileDb;
use super::levels::{apply_xp, Level, LevelUp};

/// XP deducted when a stored mission is found abandoned.
pub const ABANDON_PENALTY_XP: u32 = 10;

/// A stored mission older than this counts as abandoned.
pub const ABANDON_AFTER_SECS: i64 = 3600;

/// Win rate below this marks a character as a weak area (percent).
pub const WEAK_AREA_BELOW: f64 = 70.0;

/// Win rate at or above this marks a character as a strong area (percent).
pub const STRONG_AREA_FROM: f64 = 80.0;

/// Per-character aggregates.
#[derive(Debug, Clone)]
pub struct CharacterRecord {
    pub character: Character,
    pub missions: u32,
    pub wins: u32,
    pub correct_answers: u32,
    pub scenarios_answered: u32,
}

impl CharacterRecord {
    /// Win percentage over played missions, one decimal.
    pub fn win_rate(&self) -> f64 {
        if self.missions == 0 {
            return 0.0;
        }
        (self.wins as f64 / self.missions as f64 * 1000.0).round() / 10.0
    }
}

/// Everything the profile views need, loaded in one read.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub level: u32,
    /// XP accumulated inside the current level.
    pub xp: u32,
    pub total_xp: u32,
    pub missions_completed: u32,
    pub missions_won: u32,
    pub perfect_missions: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub fastest_win_secs: Option<u64>,
    pub characters: Vec<CharacterRecord>,
    pub unlocked: Vec<String>,
}

impl ProfileSnapshot {
    pub fn level_info(&self) -> &'static Level {
        Level::get(self.level)
    }

    /// XP still needed for the next level (None at max level).
    pub fn next_level_cost(&self) -> Option<u32> {
        Level::next_cost(self.level).map(|cost| cost.saturating_sub(self.xp))
    }

    /// Characters the player struggles with.
    pub fn weak_areas(&self) -> Vec<Character> {
        self.characters
            .iter()
            .filter(|c| c.missions > 0 && c.win_rate() < WEAK_AREA_BELOW)
            .map(|c| c.character)
            .collect()
    }

    /// Characters the player has mastered.
    pub fn strong_areas(&self) -> Vec<Character> {
        self.characters
            .iter()
            .filter(|c| c.missions > 0 && c.win_rate() >= STRONG_AREA_FROM)
            .map(|c| c.character)
            .collect()
    }
}

/// One row of mission history, newest first.
#[derive(Debug, Clone)]
pub struct MissionLogEntry {
    pub character: Character,
    pub difficulty: u8,
    pub success: bool,
    pub correct_answers: u32,
    pub total_scenarios: u32,
    pub success_rate: f64,
    pub time_spent_secs: u64,
    pub xp_earned: u32,
    pub finished_at: DateTime<Utc>,
}

/// Everything one recorded mission triggered.
#[derive(Debug, Clone)]
pub struct MissionRecordOutcome {
    /// Mission XP plus achievement rewards.
    pub xp_awarded: u32,
    pub level_up: Option<LevelUp>,
    pub unlocked: Vec<&'static Achievement>,
}

/// A penalty applied for an abandoned mission.
#[derive(Debug, Clone)]
pub struct AbandonPenalty {
    pub character: Character,
    pub penalty_xp: u32,
}

/// Writes and reads the player profile.
#[derive(Clone)]
pub struct ProfileLedger {
    db: ProfileDb,
}

impl ProfileLedger {
    pub fn new(db: ProfileDb) -> Self {
        Self { db }
    }

    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Load the full profile.
    pub fn snapshot(&self) -> Result<ProfileSnapshot> {
        let conn = self.db.conn();
        read_snapshot(&conn)
    }

    /// Award XP outside of a mission (admin/tests).
    pub fn add_xp(&self, amount: u32) -> Result<Option<LevelUp>> {
        let mut conn = self.db.conn();
        let tx = conn.transaction()?;
        let (level, xp, total_xp) = read_progress(&tx)?;
        let (new_level, new_xp, level_up) = apply_xp(level, xp, amount);
        write_progress(&tx, new_level, new_xp, total_xp + amount)?;
        tx.commit()?;
        Ok(level_up)
    }

    /// Apply one finished mission: history, counters, XP and achievements.
    pub fn record_mission(&self, report: &MissionReport) -> Result<MissionRecordOutcome> {
        let mut conn = self.db.conn();
        let tx = conn.transaction()?;
        let now = Self::now_ms();

        tx.execute(
            r#"
            INSERT INTO mission_log
                (mission_id, character, difficulty, success, correct_answers,
                 scenarios_completed, total_scenarios, success_rate,
                 time_spent_secs, xp_earned, finished_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            (
                uuid::Uuid::new_v4().to_string(),
                report.character.as_str(),
                report.difficulty,
                report.success,
                report.correct_answers,
                report.scenarios_completed,
                report.total_scenarios,
                report.success_rate,
                report.time_spent_secs,
                report.xp_earned,
                report.finished_at.timestamp_millis(),
            ),
        )?;

        // Player counters.
        let mut snapshot = read_snapshot(&tx)?;
        snapshot.missions_completed += 1;
        let perfect = report.success && report.correct_answers >= report.total_scenarios;
        if report.success {
            snapshot.missions_won += 1;
            snapshot.current_streak += 1;
            snapshot.best_streak = snapshot.best_streak.max(snapshot.current_streak);
            if perfect {
                snapshot.perfect_missions += 1;
            }
            snapshot.fastest_win_secs = Some(match snapshot.fastest_win_secs {
                Some(best) => best.min(report.time_spent_secs),
                None => report.time_spent_secs,
            });
        } else {
            snapshot.current_streak = 0;
        }

        // Character aggregates.
        tx.execute(
            r#"
            INSERT INTO character_stats
                (character, missions, wins, correct_answers, scenarios_answered)
            VALUES (?1, 1, ?2, ?3, ?4)
            ON CONFLICT(character) DO UPDATE SET
                missions = missions + 1,
                wins = wins + ?2,
                correct_answers = correct_answers + ?3,
                scenarios_answered = scenarios_answered + ?4
            "#,
            (
                report.character.as_str(),
                report.success as u32,
                report.correct_answers,
                report.scenarios_completed,
            ),
        )?;

        // Mission XP first, then achievement rewards on top.
        let (level, xp, level_up) = apply_xp(snapshot.level, snapshot.xp, report.xp_earned);
        snapshot.level = level;
        snapshot.xp = xp;

        let wins_per_character = read_character_wins(&tx)?;
        let total_correct = read_total_correct(&tx)?;

        let mut newly_unlocked: Vec<AchievementId> = Vec::new();
        newly_unlocked.extend(check_milestone_achievements(
            snapshot.missions_completed,
            &snapshot.unlocked,
        ));
        newly_unlocked.extend(check_skill_achievements(report, &snapshot.unlocked));
        newly_unlocked.extend(check_answer_achievements(total_correct, &snapshot.unlocked));
        newly_unlocked.extend(check_streak_achievements(
            snapshot.current_streak,
            &snapshot.unlocked,
        ));
        newly_unlocked.extend(check_mastery_achievements(
            &wins_per_character,
            &snapshot.unlocked,
        ));
        newly_unlocked.extend(check_level_achievements(snapshot.level, &snapshot.unlocked));

        let mut unlocked_defs = Vec::with_capacity(newly_unlocked.len());
        let mut reward_xp = 0u32;
        for id in newly_unlocked {
            tx.execute(
                "INSERT OR IGNORE INTO achievements (id, unlocked_at) VALUES (?1, ?2)",
                (id.as_str(), now),
            )?;
            let def = Achievement::get(id);
            reward_xp += def.xp_reward;
            unlocked_defs.push(def);
            info!(achievement = id.as_str(), "achievement unlocked");
        }

        let (level, xp, reward_level_up) = apply_xp(snapshot.level, snapshot.xp, reward_xp);
        snapshot.level = level;
        snapshot.xp = xp;
        let level_up = merge_level_ups(level_up, reward_level_up);

        let xp_awarded = report.xp_earned + reward_xp;
        tx.execute(
            r#"
            UPDATE player SET level = ?1, xp = ?2, total_xp = ?3,
                missions_completed = ?4, missions_won = ?5, perfect_missions = ?6,
                current_streak = ?7, best_streak = ?8, fastest_win_secs = ?9
            WHERE id = 1
            "#,
            (
                snapshot.level,
                snapshot.xp,
                snapshot.total_xp + xp_awarded,
                snapshot.missions_completed,
                snapshot.missions_won,
                snapshot.perfect_missions,
                snapshot.current_streak,
                snapshot.best_streak,
                snapshot.fastest_win_secs,
            ),
        )?;

        // The recorded mission is no longer pending.
        tx.execute("DELETE FROM pending_mission", [])?;
        tx.commit()?;

        debug!(
            character = report.character.as_str(),
            success = report.success,
            xp_awarded,
            "mission recorded"
        );
        Ok(MissionRecordOutcome {
            xp_awarded,
            level_up,
            unlocked: unlocked_defs,
        })
    }

    /// Remember that a mission has started, for abandonment detection.
    pub fn mark_mission_started(&self, character: Character) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT OR REPLACE INTO pending_mission (id, character, started_at) VALUES (1, ?1, ?2)",
            (character.as_str(), Self::now_ms()),
        )?;
        Ok(())
    }

    /// Penalize a stored mission that was never finished.
    ///
    /// A marker older than one hour costs [`ABANDON_PENALTY_XP`] and is
    /// cleared; a fresher marker is left alone.
    pub fn check_abandoned(&self) -> Result<Option<AbandonPenalty>> {
        let mut conn = self.db.conn();
        let tx = conn.transaction()?;

        let pending: Option<(String, i64)> = tx
            .query_row(
                "SELECT character, started_at FROM pending_mission WHERE id = 1",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .optional()?;

        let Some((character, started_at)) = pending else {
            return Ok(None);
        };

        // A marker we cannot attribute is discarded without a penalty.
        let Some(character) = Character::from_str(&character) else {
            warn!(stored = %character, "pending mission has unknown character, discarding");
            tx.execute("DELETE FROM pending_mission", [])?;
            tx.commit()?;
            return Ok(None);
        };

        let age_secs = (Self::now_ms() - started_at) / 1000;
        if age_secs <= ABANDON_AFTER_SECS {
            return Ok(None);
        }

        // In-level XP only; a penalty never takes a level away.
        let (level, xp, total_xp) = read_progress(&tx)?;
        write_progress(&tx, level, xp.saturating_sub(ABANDON_PENALTY_XP), total_xp)?;
        tx.execute("DELETE FROM pending_mission", [])?;
        tx.commit()?;

        info!(
            character = character.as_str(),
            penalty = ABANDON_PENALTY_XP,
            "abandoned mission penalized"
        );
        Ok(Some(AbandonPenalty {
            character,
            penalty_xp: ABANDON_PENALTY_XP,
        }))
    }

    /// Most recent mission history, newest first.
    pub fn recent_missions(&self, limit: u32) -> Result<Vec<MissionLogEntry>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            r#"
            SELECT character, difficulty, success, correct_answers, total_scenarios,
                   success_rate, time_spent_secs, xp_earned, finished_at
            FROM mission_log ORDER BY finished_at DESC, id DESC LIMIT ?1
            "#,
        )?;
        let rows = stmt.query_map([limit], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, u8>(1)?,
                r.get::<_, bool>(2)?,
                r.get::<_, u32>(3)?,
                r.get::<_, u32>(4)?,
                r.get::<_, f64>(5)?,
                r.get::<_, u64>(6)?,
                r.get::<_, u32>(7)?,
                r.get::<_, i64>(8)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (character, difficulty, success, correct, total, rate, secs, xp, finished) = row?;
            let Some(character) = Character::from_str(&character) else {
                continue;
            };
            entries.push(MissionLogEntry {
                character,
                difficulty,
                success,
                correct_answers: correct,
                total_scenarios: total,
                success_rate: rate,
                time_spent_secs: secs,
                xp_earned: xp,
                finished_at: Utc
                    .timestamp_millis_opt(finished)
                    .single()
                    .unwrap_or_else(Utc::now),
            });
        }
        Ok(entries)
    }

    /// Wipe the profile back to a fresh player.
    pub fn reset(&self) -> Result<()> {
        self.db.reset_all()?;
        info!("profile reset");
        Ok(())
    }
}

fn merge_level_ups(first: Option<LevelUp>, second: Option<LevelUp>) -> Option<LevelUp> {
    match (first, second) {
        (Some(a), Some(b)) => Some(LevelUp {
            old_level: a.old_level,
            new_level: b.new_level,
            title_kk: b.title_kk,
            title_ru: b.title_ru,
        }),
        (a, b) => a.or(b),
    }
}

fn read_progress(conn: &Connection) -> Result<(u32, u32, u32)> {
    let row = conn.query_row(
        "SELECT level, xp, total_xp FROM player WHERE id = 1",
        [],
        |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
    )?;
    Ok(row)
}

fn write_progress(conn: &Connection, level: u32, xp: u32, total_xp: u32) -> Result<()> {
    conn.execute(
        "UPDATE player SET level = ?1, xp = ?2, total_xp = ?3 WHERE id = 1",
        (level, xp, total_xp),
    )?;
    Ok(())
}

fn read_snapshot(conn: &Connection) -> Result<ProfileSnapshot> {
    let (
        level,
        xp,
        total_xp,
        missions_completed,
        missions_won,
        perfect_missions,
        current_streak,
        best_streak,
        fastest_win_secs,
    ) = conn.query_row(
        r#"
        SELECT level, xp, total_xp, missions_completed, missions_won,
               perfect_missions, current_streak, best_streak, fastest_win_secs
        FROM player WHERE id = 1
        "#,
        [],
        |r| {
            Ok((
                r.get(0)?,
                r.get(1)?,
                r.get(2)?,
                r.get(3)?,
                r.get(4)?,
                r.get(5)?,
                r.get(6)?,
                r.get(7)?,
                r.get::<_, Option<u64>>(8)?,
            ))
        },
    )?;

    let mut stmt = conn.prepare(
        "SELECT character, missions, wins, correct_answers, scenarios_answered FROM character_stats",
    )?;
    let mut characters = Vec::new();
    for row in stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, u32>(1)?,
            r.get::<_, u32>(2)?,
            r.get::<_, u32>(3)?,
            r.get::<_, u32>(4)?,
        ))
    })? {
        let (character, missions, wins, correct_answers, scenarios_answered) = row?;
        let Some(character) = Character::from_str(&character) else {
            continue;
        };
        characters.push(CharacterRecord {
            character,
            missions,
            wins,
            correct_answers,
            scenarios_answered,
        });
    }

    let mut stmt = conn.prepare("SELECT id FROM achievements")?;
    let unlocked: Vec<String> = stmt
        .query_map([], |row| row.get(0))?
        .filter_map(|r| r.ok())
        .collect();

    Ok(ProfileSnapshot {
        level,
        xp,
        total_xp,
        missions_completed,
        missions_won,
        perfect_missions,
        current_streak,
        best_streak,
        fastest_win_secs,
        characters,
        unlocked,
    })
}

/// Per-character win counts with the in-flight mission already applied.
fn read_character_wins(conn: &Connection) -> Result<Vec<(Character, u32)>> {
    let mut stmt = conn.prepare("SELECT character, wins FROM character_stats")?;
    let mut wins = Vec::new();
    for row in stmt.query_map([], |r| {
        Ok((r.get::<_, String>(0)?, r.get::<_, u32>(1)?))
    })? {
        let (character, count) = row?;
        if let Some(character) = Character::from_str(&character) {
            wins.push((character, count));
        }
    }
    Ok(wins)
}

/// Lifetime correct answers across all characters, including the in-flight
/// mission.
fn read_total_correct(conn: &Connection) -> Result<u32> {
    let total = conn.query_row(
        "SELECT COALESCE(SUM(correct_answers), 0) FROM character_stats",
        [],
        |r| r.get(0),
    )?;
    Ok(total)
}
