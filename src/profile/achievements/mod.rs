//! Achievement catalog and unlock checks.

pub mod checker;
pub mod definitions;

pub use checker::{MASTERY_WINS, SPEED_RUN_SECS};
pub use definitions::{Achievement, AchievementId, ACHIEVEMENTS};
