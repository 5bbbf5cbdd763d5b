//! CLI command implementations

pub mod achievements;
pub mod init;
pub mod play;
pub mod profile;
pub mod reset;

use std::io::{self, Write};

use anyhow::{Context, Result};

use batyrbol::profile::{ProfileDb, ProfileLedger};
use batyrbol::Config;

/// Open the profile ledger at the configured location.
pub fn open_ledger(config: &Config) -> Result<ProfileLedger> {
    let db = ProfileDb::open(&config.profile_db_path())?;
    Ok(ProfileLedger::new(db))
}

/// Print a prompt and read one trimmed line from stdin.
pub fn prompt(text: &str) -> Result<String> {
    print!("{text}");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}
