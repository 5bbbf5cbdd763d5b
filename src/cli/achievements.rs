//! Achievements command implementation

use anyhow::Result;

use batyrbol::domain::Language;
use batyrbol::profile::ACHIEVEMENTS;
use batyrbol::Config;

use super::open_ledger;

/// List all achievements, marking the unlocked ones.
pub fn achievements_command(config: &Config) -> Result<()> {
    let ledger = open_ledger(config)?;
    let snapshot = ledger.snapshot()?;
    let kazakh = config.language == Language::Kazakh;

    println!(
        "Achievements ({}/{}):\n",
        snapshot.unlocked.len(),
        ACHIEVEMENTS.len()
    );
    for achievement in ACHIEVEMENTS {
        let unlocked = snapshot
            .unlocked
            .iter()
            .any(|id| id == achievement.id.as_str());
        println!(
            "  {} {} {:<24} {} (+{} XP)",
            if unlocked { "✓" } else { " " },
            achievement.icon,
            achievement.name(kazakh),
            achievement.description(kazakh),
            achievement.xp_reward
        );
    }

    Ok(())
}
