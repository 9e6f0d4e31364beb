//! Run configuration (JSON file with defaults).

use serde::{Deserialize, Serialize};
use std::fs;

/// Static, pre-run configuration for one generation run.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RunConfig {
    /// Target word length, in position units.
    #[serde(default = "default_word_length")]
    pub word_length: usize,
    /// Number of unique words to generate.
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    /// Required romaji prefix of the first unit (lowercase), empty for none.
    #[serde(default)]
    pub starts_with: String,
    /// Required romaji suffix of the final unit (lowercase), empty for none.
    #[serde(default)]
    pub ends_with: String,
    /// Romaji prefixes no word may start with (lowercase).
    #[serde(default = "default_prohibited_starts")]
    pub prohibited_starts: Vec<String>,
    /// Directory containing the kana mapping files (.txt).
    #[serde(default = "default_unit_dir")]
    pub unit_dir: String,
    /// Output file stem; the actual path auto-increments.
    #[serde(default = "default_output_stem")]
    pub output_stem: String,
    /// Attempt ceiling, as a multiple of `word_count`.
    #[serde(default = "default_attempt_factor")]
    pub attempt_factor: usize,
}

fn default_word_length() -> usize {
    4
}

fn default_word_count() -> usize {
    10_000
}

fn default_prohibited_starts() -> Vec<String> {
    ["dy", "z", "t", "di", "du", "-", "wo"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn default_unit_dir() -> String {
    "hira".to_owned()
}

fn default_output_stem() -> String {
    "word_output".to_owned()
}

fn default_attempt_factor() -> usize {
    10
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            word_length: default_word_length(),
            word_count: default_word_count(),
            starts_with: String::new(),
            ends_with: String::new(),
            prohibited_starts: default_prohibited_starts(),
            unit_dir: default_unit_dir(),
            output_stem: default_output_stem(),
            attempt_factor: default_attempt_factor(),
        }
    }
}

/// Loads the configuration from an optional JSON file path.
///
/// Missing file or parse failure falls back to the defaults with a
/// logged warning.
pub fn load_config(path: Option<&str>) -> RunConfig {
    let path = match path {
        Some(p) => p,
        None => return RunConfig::default(),
    };

    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Invalid config file {}: {}. Using defaults.", path, e);
            RunConfig::default()
        }),
        Err(e) => {
            log::warn!("Can't read config file {}: {}. Using defaults.", path, e);
            RunConfig::default()
        }
    }
}
