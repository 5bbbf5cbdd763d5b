//! A single decision-point question issued during a mission.

use serde::{Deserialize, Serialize};

/// One answer option of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOption {
    /// Option letter ("A".."D").
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

/// One decision-point question with options.
///
/// Immutable once issued by a [`ScenarioSource`](crate::generator::ScenarioSource);
/// the engine discards it after it has been answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// 1-based position within the mission.
    pub index: u32,
    /// Situation text presented to the player.
    pub prompt: String,
    pub options: Vec<ScenarioOption>,
    /// Id of the correct option.
    pub correct_option: String,
    /// Shown after a correct choice.
    pub correct_consequence: String,
    /// Shown after a wrong choice.
    pub wrong_consequence: String,
    pub historical_context: String,
    /// True when the scenario came from the static offline table rather
    /// than the generation backend.
    pub fallback: bool,
}

impl Scenario {
    /// Look up an option by id (case-insensitive on the option letter).
    pub fn option(&self, id: &str) -> Option<&ScenarioOption> {
        let id = id.trim();
        self.options.iter().find(|o| o.id.eq_ignore_ascii_case(id))
    }

    /// Whether the given option id is the correct answer.
    pub fn is_correct_choice(&self, id: &str) -> bool {
        self.correct_option.eq_ignore_ascii_case(id.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Scenario {
        Scenario {
            index: 1,
            prompt: "prompt".into(),
            options: vec![
                ScenarioOption { id: "A".into(), text: "a".into(), is_correct: false },
                ScenarioOption { id: "B".into(), text: "b".into(), is_correct: true },
            ],
            correct_option: "B".into(),
            correct_consequence: String::new(),
            wrong_consequence: String::new(),
            historical_context: String::new(),
            fallback: false,
        }
    }

    #[test]
    fn test_option_lookup_is_case_insensitive() {
        let s = sample();
        assert!(s.option(" b ").is_some());
        assert!(s.is_correct_choice("b"));
        assert!(!s.is_correct_choice("A"));
        assert!(s.option("C").is_none());
    }
}
