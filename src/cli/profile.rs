//! Profile command implementation

use anyhow::Result;

use batyrbol::domain::Language;
use batyrbol::profile::{Level, LEVELS};
use batyrbol::Config;

use super::open_ledger;

/// Show the player profile: level, XP, streaks and per-character stats.
pub fn profile_command(config: &Config) -> Result<()> {
    let ledger = open_ledger(config)?;
    let snapshot = ledger.snapshot()?;
    let kazakh = config.language == Language::Kazakh;

    let info = snapshot.level_info();
    println!(
        "Level {} - {} | {} XP total",
        snapshot.level,
        info.title(kazakh),
        snapshot.total_xp
    );
    match snapshot.next_level_cost() {
        Some(needed) => println!("Next level in {} XP", needed),
        None => println!("Max level reached"),
    }

    println!(
        "\nMissions: {} played, {} won, {} perfect",
        snapshot.missions_completed, snapshot.missions_won, snapshot.perfect_missions
    );
    println!(
        "Win streak: {} (best {})",
        snapshot.current_streak, snapshot.best_streak
    );
    if let Some(secs) = snapshot.fastest_win_secs {
        println!("Fastest win: {}s", secs);
    }
    println!("Achievements: {}", snapshot.unlocked.len());

    if !snapshot.characters.is_empty() {
        println!("\nCharacters:");
        for record in &snapshot.characters {
            println!(
                "  {:<16} {} missions, {} wins ({:.1}%)",
                record.character.display_name(),
                record.missions,
                record.wins,
                record.win_rate()
            );
        }
        let strong = snapshot.strong_areas();
        if !strong.is_empty() {
            println!(
                "  Strong with: {}",
                strong
                    .iter()
                    .map(|c| c.display_name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        let weak = snapshot.weak_areas();
        if !weak.is_empty() {
            println!(
                "  Needs practice: {}",
                weak.iter()
                    .map(|c| c.display_name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    let recent = ledger.recent_missions(5)?;
    if !recent.is_empty() {
        println!("\nRecent missions:");
        for entry in recent {
            println!(
                "  {} {} | {}/{} correct | {}s | +{} XP",
                if entry.success { "✓" } else { "✗" },
                entry.character.display_name(),
                entry.correct_answers,
                entry.total_scenarios,
                entry.time_spent_secs,
                entry.xp_earned
            );
        }
    }

    Ok(())
}

/// Show the full level ladder with the player's position.
pub fn levels_command(config: &Config) -> Result<()> {
    let ledger = open_ledger(config)?;
    let snapshot = ledger.snapshot()?;
    let kazakh = config.language == Language::Kazakh;

    let mut cumulative = 0u32;
    for level in LEVELS {
        cumulative += level.xp_cost;
        let marker = if level.level == snapshot.level { ">" } else { " " };
        println!(
            "{} Level {:>2} {:<16} {:>5} XP",
            marker,
            level.level,
            level.title(kazakh),
            cumulative
        );
    }
    println!(
        "\nCurrent: level {} with {} XP banked (max level {})",
        snapshot.level,
        snapshot.xp,
        Level::max_level()
    );

    Ok(())
}
