//! Scenario sources
//!
//! A [`ScenarioSource`] supplies one scenario per mission step. The remote
//! implementation asks the generation backend and silently degrades to the
//! static per-character table on any failure, so callers always get a
//! scenario and never see a hard error (the player is at most shown a soft
//! "offline content" notice via the `fallback` flag on the scenario).

mod client;
mod fallback;
mod prompt;

pub use client::{GenerationError, RemoteGenerator};
pub use fallback::{FallbackSource, fallback_scenario, fallback_table_len};
pub use prompt::build_scenario_prompt;

use crate::domain::{Character, Language, Scenario};

/// Parameters identifying one scenario to produce.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRequest {
    pub character: Character,
    /// Player level, passed through to the generator for difficulty shaping.
    pub level: u32,
    /// 1-based scenario number within the mission.
    pub index: u32,
    /// Options the scenario should offer (from the difficulty profile).
    pub option_count: u32,
    pub language: Language,
}

/// Supplies scenarios for mission steps.
///
/// Implementations are infallible: recoverable generation failures must be
/// absorbed internally (see [`RemoteGenerator`]).
pub trait ScenarioSource {
    fn scenario(&self, request: &ScenarioRequest) -> Scenario;
}
