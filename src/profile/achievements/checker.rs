//! Achievement checking logic
//!
//! Pure functions deciding which achievements a finished mission unlocks.
//! Unlocks are permanent; already-unlocked ids are always skipped.

use crate::domain::{Character, MissionReport};

use super::definitions::AchievementId;

/// Winning faster than this unlocks [`AchievementId::SpeedRunner`].
pub const SPEED_RUN_SECS: u64 = 180;

/// Wins needed with every character for [`AchievementId::Historian`].
pub const MASTERY_WINS: u32 = 3;

fn not_yet(unlocked: &[String], id: AchievementId) -> bool {
    !unlocked.iter().any(|u| u == id.as_str())
}

/// Check milestone achievements based on completed mission counts.
pub fn check_milestone_achievements(
    missions_completed: u32,
    unlocked: &[String],
) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    let milestones = [
        (1, AchievementId::FirstMission),
        (5, AchievementId::FiveMissions),
        (10, AchievementId::TenMissions),
        (25, AchievementId::TwentyFiveMissions),
    ];

    for (threshold, id) in milestones {
        if missions_completed >= threshold && not_yet(unlocked, id) {
            newly_unlocked.push(id);
        }
    }

    newly_unlocked
}

/// Check skill achievements for one finished mission.
pub fn check_skill_achievements(
    report: &MissionReport,
    unlocked: &[String],
) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    if !report.success {
        return newly_unlocked;
    }

    if report.correct_answers >= report.total_scenarios
        && not_yet(unlocked, AchievementId::PerfectMission)
    {
        newly_unlocked.push(AchievementId::PerfectMission);
    }

    if report.time_spent_secs < SPEED_RUN_SECS && not_yet(unlocked, AchievementId::SpeedRunner) {
        newly_unlocked.push(AchievementId::SpeedRunner);
    }

    newly_unlocked
}

/// Check cumulative correct answer achievements across all missions.
pub fn check_answer_achievements(total_correct: u32, unlocked: &[String]) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    let milestones = [
        (10, AchievementId::CorrectTen),
        (50, AchievementId::CorrectFifty),
        (100, AchievementId::CorrectHundred),
    ];

    for (threshold, id) in milestones {
        if total_correct >= threshold && not_yet(unlocked, id) {
            newly_unlocked.push(id);
        }
    }

    newly_unlocked
}

/// Check win streak achievements.
pub fn check_streak_achievements(current_streak: u32, unlocked: &[String]) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    if current_streak >= 5 && not_yet(unlocked, AchievementId::Streak5) {
        newly_unlocked.push(AchievementId::Streak5);
    }

    newly_unlocked
}

/// Check character mastery: wins with every playable character.
pub fn check_mastery_achievements(
    wins_per_character: &[(Character, u32)],
    unlocked: &[String],
) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    let all_mastered = Character::all().iter().all(|c| {
        wins_per_character
            .iter()
            .any(|(character, wins)| character == c && *wins >= MASTERY_WINS)
    });

    if all_mastered && not_yet(unlocked, AchievementId::Historian) {
        newly_unlocked.push(AchievementId::Historian);
    }

    newly_unlocked
}

/// Check level achievements.
pub fn check_level_achievements(level: u32, unlocked: &[String]) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    if level >= 5 && not_yet(unlocked, AchievementId::Level5) {
        newly_unlocked.push(AchievementId::Level5);
    }

    newly_unlocked
}
