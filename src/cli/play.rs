//! Play command implementation
//!
//! Runs one mission interactively: picks a character, walks the scenarios,
//! then records the finished run in the profile.

use anyhow::{bail, Context, Result};

use batyrbol::domain::{Character, Language, Scenario};
use batyrbol::generator::{FallbackSource, RemoteGenerator, ScenarioSource};
use batyrbol::mission::{match_spoken, star_rating, DifficultyProfile, MissionEngine, RewardPolicy};
use batyrbol::Config;

use super::{open_ledger, prompt};

/// Run one mission from start to finish.
pub fn play_command(
    config: &Config,
    character: Option<String>,
    difficulty: Option<u8>,
) -> Result<()> {
    let ledger = open_ledger(config)?;

    if let Some(penalty) = ledger.check_abandoned()? {
        println!(
            "An unfinished mission with {} was abandoned: -{} XP\n",
            penalty.character.display_name(),
            penalty.penalty_xp
        );
    }

    let character = match character {
        Some(id) => match Character::from_str(&id) {
            Some(c) => c,
            None => bail!(
                "Unknown character '{}'. Expected one of: {}",
                id,
                Character::all()
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
        None => choose_character()?,
    };

    let snapshot = ledger.snapshot()?;
    let player_level = snapshot.level;
    let difficulty = DifficultyProfile::get(difficulty.unwrap_or(config.difficulty));
    let kazakh = config.language == Language::Kazakh;

    let source: Box<dyn ScenarioSource> = match &config.endpoint {
        Some(url) => Box::new(RemoteGenerator::new(url.as_str(), config.request_timeout())),
        None => Box::new(FallbackSource),
    };

    println!(
        "\n{} {} | {} | {} scenarios",
        difficulty.icon,
        character.display_name(),
        if kazakh { difficulty.name_kk } else { difficulty.name_ru },
        difficulty.question_count
    );
    println!("Goal: {}\n", character.mission_rule());

    let mut engine = MissionEngine::new(source, config.reward_policy, config.language);
    ledger.mark_mission_started(character)?;
    engine.start(character, difficulty, player_level);

    loop {
        let scenario = engine
            .current_scenario()
            .context("No active scenario")?
            .clone();
        let run = engine.run().context("No active mission")?;

        println!(
            "--- Scenario {}/{} | Lives: {} ---",
            run.scenario_index,
            run.total_scenarios,
            "♥".repeat(run.lives as usize)
        );
        if scenario.fallback {
            println!("(offline content)");
        }
        println!("{}\n", scenario.prompt);
        for option in &scenario.options {
            println!("  {}. {}", option.id, option.text);
        }
        if difficulty.hints_enabled {
            println!("\n  (answer with a letter, or type the answer in your own words)");
        }

        let input = prompt("\n> ")?;
        let Some(choice) = resolve_choice(&scenario, &input) else {
            println!("Pick one of the listed options.\n");
            continue;
        };
        let Some(outcome) = engine.submit_answer(&choice) else {
            continue;
        };

        if outcome.is_correct {
            println!("\n✓ Correct! {}", outcome.consequence);
        } else {
            println!(
                "\n✗ Wrong. The answer was {}. {}",
                outcome.correct_option, outcome.consequence
            );
        }
        if !outcome.historical_context.is_empty() {
            println!("  {}", outcome.historical_context);
        }
        println!();

        if outcome.mission_ended {
            break;
        }
        engine
            .advance(player_level)
            .context("Failed to advance the mission")?;
    }

    let report = engine.finish().context("Mission did not finish")?;
    let recorded = ledger.record_mission(&report)?;

    if report.success {
        println!("=== Mission complete! ===");
    } else {
        println!("=== Mission failed ===");
    }
    println!(
        "Correct answers: {}/{} ({:.1}%)",
        report.correct_answers, report.scenarios_completed, report.success_rate
    );
    if config.reward_policy == RewardPolicy::Stars {
        let stars = star_rating(report.correct_answers, report.total_scenarios);
        println!("Stars: {}{}", "★".repeat(stars as usize), "☆".repeat((3 - stars) as usize));
    }
    println!("Time: {}s", report.time_spent_secs);
    println!("XP earned: {}", recorded.xp_awarded);

    if let Some(up) = recorded.level_up {
        println!(
            "\n🎉 Level up! {} → {} ({})",
            up.old_level,
            up.new_level,
            if kazakh { up.title_kk } else { up.title_ru }
        );
    }
    for achievement in recorded.unlocked {
        println!(
            "🏆 {} {} - {}",
            achievement.icon,
            achievement.name(kazakh),
            achievement.description(kazakh)
        );
    }

    Ok(())
}

fn choose_character() -> Result<Character> {
    println!("Choose your character:");
    for (i, character) in Character::all().iter().enumerate() {
        println!("  {}. {}", i + 1, character.display_name());
    }
    loop {
        let input = prompt("> ")?;
        if let Ok(n) = input.parse::<usize>() {
            if let Some(character) = Character::all().get(n.wrapping_sub(1)) {
                return Ok(*character);
            }
        }
        if let Some(character) = Character::from_str(&input) {
            return Ok(character);
        }
        println!("Enter a number between 1 and {}.", Character::all().len());
    }
}

/// Map player input to an option id.
///
/// A letter is taken as-is; anything longer is treated as a spoken answer and
/// fuzzy-matched against the option texts.
fn resolve_choice(scenario: &Scenario, input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    if scenario.option(input).is_some() {
        return Some(input.to_string());
    }

    let mut best: Option<(f64, &str)> = None;
    for option in &scenario.options {
        let matched = match_spoken(input, &option.text);
        if matched.is_correct && best.is_none_or(|(s, _)| matched.similarity > s) {
            best = Some((matched.similarity, option.id.as_str()));
        }
    }
    best.map(|(_, id)| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use batyrbol::domain::ScenarioOption;

    fn scenario() -> Scenario {
        Scenario {
            index: 1,
            prompt: "Джунгары приближаются".to_string(),
            options: vec![
                ScenarioOption {
                    id: "A".to_string(),
                    text: "Собрать войско".to_string(),
                    is_correct: true,
                },
                ScenarioOption {
                    id: "B".to_string(),
                    text: "Отступить".to_string(),
                    is_correct: false,
                },
            ],
            correct_option: "A".to_string(),
            correct_consequence: String::new(),
            wrong_consequence: String::new(),
            historical_context: String::new(),
            fallback: true,
        }
    }

    #[test]
    fn test_resolve_by_letter() {
        let s = scenario();
        assert_eq!(resolve_choice(&s, "a"), Some("a".to_string()));
        assert_eq!(resolve_choice(&s, "B"), Some("B".to_string()));
        assert_eq!(resolve_choice(&s, "Z"), None);
    }

    #[test]
    fn test_resolve_spoken_answer() {
        let s = scenario();
        assert_eq!(
            resolve_choice(&s, "собрать войско"),
            Some("A".to_string())
        );
        assert_eq!(resolve_choice(&s, "отступить"), Some("B".to_string()));
        assert_eq!(resolve_choice(&s, "сдаться"), None);
    }
}
