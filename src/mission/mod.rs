//! Mission gameplay: difficulty table, run state machine, reward scoring and
//! spoken-answer matching.

pub mod difficulty;
pub mod engine;
pub mod scoring;
pub mod voice;

pub use difficulty::{DifficultyProfile, DIFFICULTY_LEVELS};
pub use engine::{MissionEngine, MissionError, MAX_LIVES};
pub use scoring::{star_rating, RewardPolicy};
pub use voice::{match_spoken, FuzzyMatch};
