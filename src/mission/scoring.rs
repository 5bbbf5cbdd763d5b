//! XP reward calculation for finished missions.
//!
//! The original client shipped two divergent reward formulas; both are kept
//! here behind [`RewardPolicy`] and the policy in use is chosen once in the
//! config. `Stars` is the default.

use serde::{Deserialize, Serialize};

use crate::domain::MissionRun;

/// Runs finished faster than this earn the tempo bonus under
/// [`RewardPolicy::Tempo`].
const FAST_FINISH_SECS: u64 = 300;

/// How a finished run is converted into XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardPolicy {
    /// `correct * 10 + stars * 15`, stars from the accuracy thresholds.
    #[default]
    Stars,
    /// `correct * 100`, plus 50 for finishing under five minutes, plus up to
    /// 50 scaled by the fraction of lives kept.
    Tempo,
}

/// Star rating from answer accuracy: 100% earns 3, >=70% earns 2,
/// >=50% earns 1, anything below earns 0.
pub fn star_rating(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    if correct >= total {
        3
    } else if correct as f64 >= total as f64 * 0.7 {
        2
    } else if correct as f64 >= total as f64 * 0.5 {
        1
    } else {
        0
    }
}

impl RewardPolicy {
    /// Compute the XP earned by a run, before any difficulty bonus.
    pub fn score(&self, run: &MissionRun, time_spent_secs: u64) -> u32 {
        match self {
            Self::Stars => {
                let stars = star_rating(run.correct_count, run.total_scenarios);
                run.correct_count * 10 + stars * 15
            }
            Self::Tempo => {
                let tempo = if time_spent_secs < FAST_FINISH_SECS { 50 } else { 0 };
                let lives = if run.max_lives == 0 {
                    0
                } else {
                    (run.lives as f64 / run.max_lives as f64 * 50.0).round() as u32
                };
                run.correct_count * 100 + tempo + lives
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Character;
    use chrono::Utc;

    fn run(correct: u32, total: u32, lives: u32) -> MissionRun {
        MissionRun {
            character: Character::AbylaiKhan,
            difficulty: 1,
            scenario_index: total,
            total_scenarios: total,
            lives,
            max_lives: 3,
            correct_count: correct,
            started_at: Utc::now(),
        }
    }

    #[test]
    fn test_star_thresholds() {
        assert_eq!(star_rating(6, 6), 3);
        assert_eq!(star_rating(5, 6), 2); // 83%
        assert_eq!(star_rating(3, 6), 1); // 50%
        assert_eq!(star_rating(2, 6), 0);
        assert_eq!(star_rating(0, 0), 0);
    }

    #[test]
    fn test_stars_policy() {
        // 6/6 correct: 60 + 3 stars * 15.
        assert_eq!(RewardPolicy::Stars.score(&run(6, 6, 3), 120), 105);
        // 3/6 correct: 30 + 1 star * 15.
        assert_eq!(RewardPolicy::Stars.score(&run(3, 6, 1), 120), 45);
    }

    #[test]
    fn test_tempo_policy() {
        // 4 correct, fast, all lives kept: 400 + 50 + 50.
        assert_eq!(RewardPolicy::Tempo.score(&run(4, 6, 3), 120), 500);
        // Slow run with 1 of 3 lives: 400 + 0 + 17.
        assert_eq!(RewardPolicy::Tempo.score(&run(4, 6, 1), 600), 417);
    }
}
