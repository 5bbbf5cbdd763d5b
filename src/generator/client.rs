//! HTTP client for the scenario generation backend.
//!
//! One attempt per scenario with a generous timeout; any failure (transport,
//! non-2xx, malformed body, `success: false`) drops to the static fallback
//! table. Backends in the wild answer with both camelCase and snake_case
//! field names, so the wire shape accepts either and is normalized into the
//! canonical [`Scenario`].

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{Scenario, ScenarioOption};

use super::{ScenarioRequest, ScenarioSource, build_scenario_prompt, fallback_scenario};

/// Path of the generation endpoint, relative to the configured base URL.
const GENERATE_PATH: &str = "/api/mission/generate-scenario";

/// Why a generation attempt was abandoned. Never surfaced to the player;
/// recovery is always the fallback table.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned HTTP {0}")]
    Status(u16),
    #[error("backend rejected the request: {0}")]
    Rejected(String),
    #[error("malformed scenario payload: {0}")]
    Malformed(String),
}

/// Scenario source backed by the remote generation endpoint.
pub struct RemoteGenerator {
    base_url: String,
    agent: ureq::Agent,
}

impl RemoteGenerator {
    /// `base_url` is the backend root, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    /// Single generation attempt. No retry: callers fall back on any error.
    pub fn request_scenario(&self, request: &ScenarioRequest) -> Result<Scenario, GenerationError> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        let body = serde_json::json!({
            "character": request.character.display_name(),
            "level": request.level,
            "scenarioNumber": request.index,
            "prompt": build_scenario_prompt(request),
            "language": request.language.code(),
        });

        let response = self.agent.post(&url).send_json(body).map_err(|e| match e {
            ureq::Error::Status(code, _) => GenerationError::Status(code),
            ureq::Error::Transport(t) => GenerationError::Transport(t.to_string()),
        })?;

        let wire: WireResponse = response
            .into_json()
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        if !wire.success {
            return Err(GenerationError::Rejected(
                wire.message.unwrap_or_else(|| "no message".to_string()),
            ));
        }
        let scenario = wire
            .scenario
            .ok_or_else(|| GenerationError::Malformed("success without scenario".to_string()))?;

        let mut scenario = normalize(scenario, request.index)?;
        scenario.fallback = wire.fallback;
        Ok(scenario)
    }
}

impl ScenarioSource for RemoteGenerator {
    fn scenario(&self, request: &ScenarioRequest) -> Scenario {
        match self.request_scenario(request) {
            Ok(scenario) => {
                debug!(
                    character = request.character.as_str(),
                    index = request.index,
                    fallback = scenario.fallback,
                    "scenario generated"
                );
                scenario
            }
            Err(err) => {
                warn!(
                    character = request.character.as_str(),
                    index = request.index,
                    error = %err,
                    "scenario generation failed, using offline content"
                );
                fallback_scenario(request.character, request.index, request.language)
            }
        }
    }
}

// ---- wire shapes -----------------------------------------------------------

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    success: bool,
    scenario: Option<WireScenario>,
    #[serde(default)]
    fallback: bool,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireScenario {
    text: String,
    #[serde(default)]
    options: Vec<WireOption>,
    #[serde(rename = "correctAnswer", alias = "correct_answer")]
    correct_answer: Option<String>,
    #[serde(rename = "wrongConsequence", alias = "wrong_consequence", default)]
    wrong_consequence: String,
    #[serde(rename = "correctConsequence", alias = "correct_consequence", default)]
    correct_consequence: String,
    #[serde(rename = "historicalContext", alias = "historical_context", default)]
    historical_context: String,
}

#[derive(Debug, Deserialize)]
struct WireOption {
    id: Option<String>,
    text: String,
    #[serde(rename = "isCorrect", alias = "is_correct", default)]
    is_correct: bool,
}

/// Turn a wire scenario into the canonical shape.
///
/// Options with no id get letters assigned in order. The correct option is
/// taken from `correctAnswer` when it names an existing option, otherwise
/// from the per-option flags; flags are rewritten to agree with it.
fn normalize(wire: WireScenario, index: u32) -> Result<Scenario, GenerationError> {
    if wire.options.len() < 2 {
        return Err(GenerationError::Malformed(format!(
            "expected at least 2 options, got {}",
            wire.options.len()
        )));
    }

    let mut options: Vec<ScenarioOption> = wire
        .options
        .into_iter()
        .enumerate()
        .map(|(i, o)| ScenarioOption {
            id: o
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| char::from(b'A' + i as u8).to_string()),
            text: o.text,
            is_correct: o.is_correct,
        })
        .collect();

    let correct_option = wire
        .correct_answer
        .map(|c| c.trim().to_string())
        .filter(|c| options.iter().any(|o| o.id.eq_ignore_ascii_case(c)))
        .or_else(|| options.iter().find(|o| o.is_correct).map(|o| o.id.clone()))
        .ok_or_else(|| GenerationError::Malformed("no correct option identified".to_string()))?;

    for option in &mut options {
        option.is_correct = option.id.eq_ignore_ascii_case(&correct_option);
    }

    Ok(Scenario {
        index,
        prompt: wire.text,
        options,
        correct_option,
        correct_consequence: wire.correct_consequence,
        wrong_consequence: wire.wrong_consequence,
        historical_context: wire.historical_context,
        fallback: false,
    })
}
