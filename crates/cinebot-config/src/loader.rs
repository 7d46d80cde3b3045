//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Expand environment variables in the format `${VAR}`.
    ///
    /// Comment lines are copied through untouched.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        let mut result = String::with_capacity(content.len());

        for line in content.split_inclusive('\n') {
            if line.trim_start().starts_with('#') {
                result.push_str(line);
                continue;
            }
            let mut expanded = line.to_string();
            for cap in re.captures_iter(line) {
                let var_name = &cap[1];
                let var_value = std::env::var(var_name)
                    .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
                expanded = expanded.replace(&cap[0], &var_value);
            }
            result.push_str(&expanded);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.cinebot`).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Base directory for Cinebot state (`~/.cinebot`).
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".cinebot"))
            .unwrap_or_else(|| PathBuf::from(".cinebot"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinebot_core::TimePattern;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.rooms.len(), 2);
        assert_eq!(config.schedule.volume, 51);
    }

    #[test]
    fn test_load_schedule_section() {
        let content = r#"
            [schedule]
            default_pattern = "15"
            volume = 60
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.schedule.pattern(), TimePattern::Quarter);
        assert_eq!(config.schedule.volume, 60);
        assert!(config.schedule.set_volume);
    }

    #[test]
    fn test_load_rooms_replace_defaults() {
        let content = r#"
            [rooms.1]
            label = "Paradiso"
            console_url = "https://10.0.0.5:43744"
            end_marker_index = 0
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.rooms.len(), 1);
        let room = config.room("1").unwrap();
        assert_eq!(room.label, "Paradiso");
        assert_eq!(room.console_url.as_deref(), Some("https://10.0.0.5:43744"));
    }

    #[test]
    fn test_load_unknown_pattern_falls_back() {
        let content = r#"
            [schedule]
            default_pattern = "45"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.schedule.pattern(), TimePattern::OnTheHour);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[selection]").unwrap();
        writeln!(file, "max_blocks = 4").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.selection.max_blocks, 4);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/cinebot.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            ConfigLoader::load_or_default(Path::new("/nonexistent/path/cinebot.toml")).unwrap();
        assert_eq!(config.rooms.len(), 2);
    }

    #[test]
    fn test_load_or_default_surfaces_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "rooms = [unclosed").unwrap();
        assert!(ConfigLoader::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("CINEBOT_TEST_CONSOLE_URL", "https://10.1.1.1:43744");
        }
        let content = r#"
            [rooms.2]
            label = "Selectotel"
            console_url = "${CINEBOT_TEST_CONSOLE_URL}"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(
            config.room("2").unwrap().console_url.as_deref(),
            Some("https://10.1.1.1:43744")
        );
        unsafe {
            std::env::remove_var("CINEBOT_TEST_CONSOLE_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${CINEBOT_NONEXISTENT_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_skips_comments() {
        let content = "# set ${CINEBOT_NONEXISTENT_VAR_12345} to override\n  # ${ALSO_UNSET}\nvolume = 1\n";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/logs");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("logs"));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = ConfigLoader::load_str(include_str!("../../../config/default.toml")).unwrap();
        let builtin = Config::default();
        assert_eq!(config.rooms, builtin.rooms);
        assert_eq!(config.schedule.volume, builtin.schedule.volume);
        assert_eq!(config.selection.max_blocks, builtin.selection.max_blocks);
    }

    #[test]
    fn test_home_dir() {
        assert!(ConfigLoader::home_dir().ends_with(".cinebot"));
    }
}
