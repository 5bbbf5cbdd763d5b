//! Init command implementation

use anyhow::Result;

use batyrbol::Config;

/// Write a default config file at ~/.batyrbol/config.toml.
pub fn init_command(force: bool) -> Result<()> {
    let path = Config::config_path();

    if path.exists() && !force {
        println!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    Config::default().save_to_file(&path)?;
    println!("Created {}", path.display());
    Ok(())
}
