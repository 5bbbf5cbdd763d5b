//! Batyr Bol - a gamified quiz about Kazakh history.
//!
//! The player walks one of three historical figures through a mission of
//! branching scenarios. Scenarios come from a generation backend when one is
//! configured and from a built-in table otherwise. Finished missions feed a
//! persistent profile with XP, levels and achievements.

pub mod config;
pub mod domain;
pub mod generator;
pub mod mission;
pub mod profile;

pub use config::Config;
pub use domain::{Character, Language, MissionPhase, MissionReport};
pub use mission::{DifficultyProfile, MissionEngine, RewardPolicy};
pub use profile::{ProfileDb, ProfileLedger};
