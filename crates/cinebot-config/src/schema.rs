//! Configuration schema definitions.

use std::collections::BTreeMap;

use cinebot_core::TimePattern;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Screening rooms keyed by the identifier operators type (`2`, `3`).
    #[serde(default = "default_rooms")]
    pub rooms: BTreeMap<String, RoomConfig>,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub retry: RetrySettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rooms: default_rooms(),
            schedule: ScheduleConfig::default(),
            selection: SelectionConfig::default(),
            retry: RetrySettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Look up a room by key.
    pub fn room(&self, key: &str) -> Result<&RoomConfig, ConfigError> {
        self.rooms
            .get(key.trim())
            .ok_or_else(|| ConfigError::UnknownRoom(key.to_string()))
    }
}

/// One screening room and its console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Room name used as the first part of block labels.
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_url: Option<String>,

    /// Position of the closing entry in the console's show list.
    #[serde(default = "default_end_marker_index")]
    pub end_marker_index: usize,
}

impl RoomConfig {
    pub fn new(label: impl Into<String>, end_marker_index: usize) -> Self {
        Self {
            label: label.into(),
            console_url: None,
            end_marker_index,
        }
    }
}

fn default_end_marker_index() -> usize {
    1
}

fn default_rooms() -> BTreeMap<String, RoomConfig> {
    let mut rooms = BTreeMap::new();
    rooms.insert(
        "2".to_string(),
        RoomConfig {
            label: "Selectotel".to_string(),
            console_url: Some("https://10.66.80.192:43744".to_string()),
            end_marker_index: 0,
        },
    );
    rooms.insert(
        "3".to_string(),
        RoomConfig {
            label: "Brunet".to_string(),
            console_url: Some("https://10.66.80.193:43744".to_string()),
            end_marker_index: 1,
        },
    );
    rooms
}

/// Scheduling defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Pattern code (`00`, `15` or `30`). Unknown codes plan as `00`.
    #[serde(default = "default_pattern")]
    pub default_pattern: String,

    /// Whether the run sets the playback volume.
    #[serde(default = "default_true")]
    pub set_volume: bool,

    #[serde(default = "default_volume")]
    pub volume: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            default_pattern: default_pattern(),
            set_volume: default_true(),
            volume: default_volume(),
        }
    }
}

impl ScheduleConfig {
    /// Pattern used when none is given on the command line.
    pub fn pattern(&self) -> TimePattern {
        TimePattern::from_code(&self.default_pattern)
    }
}

fn default_pattern() -> String {
    TimePattern::default().code().to_string()
}

fn default_true() -> bool {
    true
}

fn default_volume() -> u8 {
    51
}

/// Content and block selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// How many blocks, from the top of the editor list, are searched.
    #[serde(default = "default_max_blocks")]
    pub max_blocks: usize,

    /// Fixed title to ingest instead of the tiered choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_title: Option<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_blocks: default_max_blocks(),
            target_title: None,
        }
    }
}

fn default_max_blocks() -> usize {
    10
}

/// Retry policy for single console actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

fn default_max_retries() -> u32 {
    2
}

fn default_base_delay_ms() -> u64 {
    500
}

fn default_max_delay_ms() -> u64 {
    5000
}

/// Log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log directory; `~/.cinebot/logs` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_prefix: default_file_prefix(),
            level: default_level(),
        }
    }
}

fn default_file_prefix() -> String {
    "cinebot".to_string()
}

fn default_level() -> String {
    "info".to_string()
}
