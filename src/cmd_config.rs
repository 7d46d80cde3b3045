//! `config-check` command.

use std::path::Path;

use cinebot_config::{ConfigLoader, ConfigValidator};

pub(crate) fn handle_config_check(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load(path)?;
    let result = ConfigValidator::validate(&config);

    println!("Config: {}", path.display());
    for (key, room) in &config.rooms {
        println!(
            "  room {:<4} {:<16} {}",
            key,
            room.label,
            room.console_url.as_deref().unwrap_or("-")
        );
    }

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    if result.is_valid() {
        println!("Configuration is valid.");
        Ok(())
    } else {
        Err(format!("{} configuration error(s)", result.errors.len()).into())
    }
}
