//! Core domain types shared by the mission engine, the scenario generator
//! and the profile ledger.

pub mod character;
pub mod mission;
pub mod scenario;

pub use character::{Character, Language};
pub use mission::{AnswerOutcome, MissionPhase, MissionReport, MissionRun};
pub use scenario::{Scenario, ScenarioOption};
