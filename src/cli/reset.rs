//! Reset command implementation

use anyhow::Result;

use batyrbol::Config;

use super::{open_ledger, prompt};

/// Wipe the player profile after confirmation.
pub fn reset_command(config: &Config, yes: bool) -> Result<()> {
    if !yes {
        let answer = prompt("This deletes all progress, XP and achievements. Continue? [y/N] ")?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let ledger = open_ledger(config)?;
    ledger.reset()?;
    println!("Profile reset.");
    Ok(())
}
