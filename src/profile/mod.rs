//! Player profile: persistence, XP and levels, achievements.

pub mod achievements;
pub mod db;
pub mod ledger;
pub mod levels;

pub use achievements::{Achievement, AchievementId, ACHIEVEMENTS};
pub use db::ProfileDb;
pub use ledger::{
    AbandonPenalty, CharacterRecord, MissionLogEntry, MissionRecordOutcome, ProfileLedger,
    ProfileSnapshot, ABANDON_PENALTY_XP,
};
pub use levels::{apply_xp, Level, LevelUp, LEVELS};
