//! Mission engine - the state machine driving one mission run.
//!
//! Tracks lives, scenario position and correct answers, asks the configured
//! [`ScenarioSource`] for one scenario at a time, and computes the final
//! reward. Scenario fetches are caller-driven through [`MissionEngine::advance`];
//! the engine never chains fetches on its own.

use chrono::Utc;
use tracing::debug;

use crate::domain::{
    AnswerOutcome, Character, Language, MissionPhase, MissionReport, MissionRun, Scenario,
};
use crate::generator::{ScenarioRequest, ScenarioSource};

use super::difficulty::DifficultyProfile;
use super::scoring::RewardPolicy;

/// Lives budget for every mission.
pub const MAX_LIVES: u32 = 3;

/// Attempted operations that are invalid in the current phase.
///
/// These are caller mistakes (duplicate UI events, advancing before
/// answering); none of them damage the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MissionError {
    #[error("mission is not in progress")]
    NotInProgress,
    #[error("current scenario has not been answered yet")]
    ScenarioPending,
}

/// Drives one mission run at a time.
///
/// Constructed once per session with its collaborators injected; there is no
/// global engine instance.
pub struct MissionEngine {
    source: Box<dyn ScenarioSource>,
    policy: RewardPolicy,
    language: Language,
    phase: MissionPhase,
    run: Option<MissionRun>,
    current: Option<Scenario>,
    /// Guards [`submit_answer`](Self::submit_answer) idempotence and blocks
    /// [`advance`](Self::advance) until the current scenario is answered.
    answered: bool,
    energy_bonus: u32,
}

impl MissionEngine {
    pub fn new(source: Box<dyn ScenarioSource>, policy: RewardPolicy, language: Language) -> Self {
        Self {
            source,
            policy,
            language,
            phase: MissionPhase::NotStarted,
            run: None,
            current: None,
            answered: false,
            energy_bonus: 0,
        }
    }

    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn run(&self) -> Option<&MissionRun> {
        self.run.as_ref()
    }

    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.current.as_ref()
    }

    /// Start a new run, discarding any previous one, and fetch the first
    /// scenario.
    pub fn start(
        &mut self,
        character: Character,
        difficulty: &'static DifficultyProfile,
        player_level: u32,
    ) -> &Scenario {
        let run = MissionRun {
            character,
            difficulty: difficulty.level,
            scenario_index: 0,
            total_scenarios: difficulty.question_count,
            lives: MAX_LIVES,
            max_lives: MAX_LIVES,
            correct_count: 0,
            started_at: Utc::now(),
        };
        self.phase = MissionPhase::InProgress;
        self.energy_bonus = difficulty.energy_bonus;
        self.fetch_next(run, player_level)
    }

    fn fetch_next(&mut self, mut run: MissionRun, player_level: u32) -> &Scenario {
        run.scenario_index += 1;
        let request = ScenarioRequest {
            character: run.character,
            level: player_level,
            index: run.scenario_index,
            option_count: DifficultyProfile::get(run.difficulty).option_count,
            language: self.language,
        };
        self.run = Some(run);
        self.answered = false;
        self.current.insert(self.source.scenario(&request))
    }

    /// Record the player's choice for the current scenario.
    ///
    /// Returns `None` when there is nothing to answer: the mission is not in
    /// progress, the scenario was already answered (duplicate UI event), or
    /// the option id does not exist. None of those mutate the run.
    pub fn submit_answer(&mut self, option_id: &str) -> Option<AnswerOutcome> {
        if self.phase != MissionPhase::InProgress {
            debug!(phase = ?self.phase, "answer ignored: mission not in progress");
            return None;
        }
        if self.answered {
            debug!("answer ignored: scenario already answered");
            return None;
        }
        let scenario = self.current.as_ref()?;
        if scenario.option(option_id).is_none() {
            debug!(option = option_id, "answer ignored: unknown option id");
            return None;
        }

        let is_correct = scenario.is_correct_choice(option_id);
        let consequence = if is_correct {
            scenario.correct_consequence.clone()
        } else {
            scenario.wrong_consequence.clone()
        };
        let correct_option = scenario.correct_option.clone();
        let historical_context = scenario.historical_context.clone();

        let run = self.run.as_mut()?;
        if is_correct {
            run.correct_count += 1;
            // Bounded recovery: a correct answer restores one lost life.
            if run.lives < run.max_lives {
                run.lives += 1;
            }
        } else {
            run.lives = run.lives.saturating_sub(1);
        }
        self.answered = true;

        if run.lives == 0 {
            self.phase = MissionPhase::Failed;
        } else if run.scenario_index >= run.total_scenarios {
            self.phase = MissionPhase::Succeeded;
        }

        Some(AnswerOutcome {
            is_correct,
            lives: run.lives,
            correct_option,
            consequence,
            historical_context,
            mission_ended: self.phase.is_terminal(),
            mission_success: self.phase == MissionPhase::Succeeded,
        })
    }

    /// Fetch the next scenario after the current one has been answered.
    ///
    /// Rejects the call while an answer is still pending, which also shields
    /// against duplicate advance events racing a single step.
    pub fn advance(&mut self, player_level: u32) -> Result<&Scenario, MissionError> {
        if self.phase != MissionPhase::InProgress {
            return Err(MissionError::NotInProgress);
        }
        if !self.answered {
            return Err(MissionError::ScenarioPending);
        }
        let run = self.run.take().ok_or(MissionError::NotInProgress)?;
        Ok(self.fetch_next(run, player_level))
    }

    /// Final report for a terminal run; `None` while still in progress.
    pub fn finish(&self) -> Option<MissionReport> {
        if !self.phase.is_terminal() {
            return None;
        }
        let run = self.run.as_ref()?;
        let time_spent_secs = run.elapsed_secs(Utc::now());
        let success = self.phase == MissionPhase::Succeeded;
        let answered = run.scenario_index.max(1);
        let success_rate =
            (run.correct_count as f64 / answered as f64 * 1000.0).round() / 10.0;

        let mut xp_earned = self.policy.score(run, time_spent_secs);
        if success {
            xp_earned += self.energy_bonus;
        }

        Some(MissionReport {
            character: run.character,
            difficulty: run.difficulty,
            success,
            scenarios_completed: run.scenario_index,
            total_scenarios: run.total_scenarios,
            correct_answers: run.correct_count,
            success_rate,
            time_spent_secs,
            xp_earned,
            finished_at: Utc::now(),
        })
    }
}
