//! Mission run bookkeeping: lives, counters and the phase machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Character;

/// Lifecycle of a mission.
///
/// `NotStarted → InProgress → {Succeeded, Failed}`; the terminal phases are
/// never left. A run reaches `Failed` when the lives budget is exhausted and
/// `Succeeded` when every scenario has been answered with lives remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    NotStarted,
    InProgress,
    Succeeded,
    Failed,
}

impl MissionPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Mutable state of one mission run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionRun {
    pub character: Character,
    /// Difficulty level 1-4 the run was started with.
    pub difficulty: u8,
    /// Number of scenarios issued so far (1-based once the first one is out).
    pub scenario_index: u32,
    pub total_scenarios: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub correct_count: u32,
    pub started_at: DateTime<Utc>,
}

impl MissionRun {
    /// Seconds elapsed since the run started.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        (now - self.started_at).num_seconds().max(0) as u64
    }
}

/// Result of answering one scenario, handed back to the rendering layer.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub lives: u32,
    pub correct_option: String,
    /// Consequence text matching the choice made.
    pub consequence: String,
    pub historical_context: String,
    /// Set when this answer ended the mission.
    pub mission_ended: bool,
    pub mission_success: bool,
}

/// Summary of a finished run, consumed by the profile ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionReport {
    pub character: Character,
    pub difficulty: u8,
    pub success: bool,
    pub scenarios_completed: u32,
    pub total_scenarios: u32,
    pub correct_answers: u32,
    /// Percentage of correct answers over answered scenarios, one decimal.
    pub success_rate: f64,
    pub time_spent_secs: u64,
    pub xp_earned: u32,
    pub finished_at: DateTime<Utc>,
}
