//! Configuration validation.

use cinebot_core::TimePattern;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// First error as a [`ConfigError`], if any.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(e) => Err(ConfigError::InvalidValue {
                field: e.path,
                message: e.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_rooms(config, &mut result);
        Self::validate_schedule(config, &mut result);
        Self::validate_selection(config, &mut result);
        Self::validate_retry(config, &mut result);

        result
    }

    fn validate_rooms(config: &Config, result: &mut ValidationResult) {
        if config.rooms.is_empty() {
            result.add_error(ValidationError::new("rooms", "At least one room is required"));
        }

        for (key, room) in &config.rooms {
            let path = format!("rooms.{}", key);

            if room.label.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("{}.label", path),
                    "Room label cannot be empty",
                ));
            }

            // The label is the first field of block names.
            if room.label.contains(" - ") {
                result.add_error(ValidationError::new(
                    format!("{}.label", path),
                    "Room label cannot contain ' - '",
                ));
            }

            match &room.console_url {
                Some(url) if !url.starts_with("http://") && !url.starts_with("https://") => {
                    result.add_error(ValidationError::new(
                        format!("{}.console_url", path),
                        "console_url must start with http:// or https://",
                    ));
                }
                None => {
                    result.add_warning(ValidationWarning::new(
                        format!("{}.console_url", path),
                        "No console_url configured",
                    ));
                }
                _ => {}
            }

            if room.end_marker_index > 10 {
                result.add_warning(ValidationWarning::new(
                    format!("{}.end_marker_index", path),
                    "end_marker_index is unusually high",
                ));
            }
        }
    }

    fn validate_schedule(config: &Config, result: &mut ValidationResult) {
        if TimePattern::parse(&config.schedule.default_pattern).is_none() {
            result.add_warning(ValidationWarning::new(
                "schedule.default_pattern",
                format!(
                    "Unknown time pattern '{}', using 00",
                    config.schedule.default_pattern
                ),
            ));
        }

        if config.schedule.volume > 100 {
            result.add_error(ValidationError::new(
                "schedule.volume",
                "volume must be between 0 and 100",
            ));
        }

        if config.schedule.set_volume && config.schedule.volume == 0 {
            result.add_warning(ValidationWarning::new(
                "schedule.volume",
                "volume is 0, screenings will be silent",
            ));
        }
    }

    fn validate_selection(config: &Config, result: &mut ValidationResult) {
        if config.selection.max_blocks == 0 {
            result.add_error(ValidationError::new(
                "selection.max_blocks",
                "max_blocks must be greater than 0",
            ));
        }

        if let Some(title) = &config.selection.target_title {
            if title.trim().is_empty() {
                result.add_error(ValidationError::new(
                    "selection.target_title",
                    "target_title cannot be empty",
                ));
            }
        }
    }

    fn validate_retry(config: &Config, result: &mut ValidationResult) {
        if config.retry.max_delay_ms < config.retry.base_delay_ms {
            result.add_error(ValidationError::new(
                "retry.max_delay_ms",
                "max_delay_ms must not be lower than base_delay_ms",
            ));
        }

        if config.retry.max_retries > 10 {
            result.add_warning(ValidationWarning::new(
                "retry.max_retries",
                "max_retries is very high (>10), failed console actions will stall the run",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
