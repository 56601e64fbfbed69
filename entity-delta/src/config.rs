//! Project configuration store and tool settings.
//!
//! Project-wide generator settings live in `.yo-rc.json` under the
//! `generator-jhipster` key and are read through [`ConfigStore`] by string
//! key. The differ's own settings live in an optional `entity-delta.toml`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::errors::{GenerationError, GenerationResult};

/// Key of the generator section in `.yo-rc.json`.
pub const GENERATOR_KEY: &str = "generator-jhipster";

/// Read-only key lookup over the persisted project configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    values: Map<String, Value>,
}

impl ConfigStore {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Load the generator section of a `.yo-rc.json` file.
    ///
    /// A missing file yields an empty store, every key then takes its default.
    pub fn load(path: &Path) -> GenerationResult<Self> {
        if !path.exists() {
            log::debug!("no project configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config_error = |reason: String| GenerationError::ConfigRead {
            path: path.to_path_buf(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|err| config_error(err.to_string()))?;
        let mut document: Map<String, Value> =
            serde_json::from_str(&content).map_err(|err| config_error(err.to_string()))?;

        match document.remove(GENERATOR_KEY) {
            Some(Value::Object(values)) => Ok(Self::new(values)),
            Some(_) => Err(config_error(format!("'{GENERATOR_KEY}' is not an object"))),
            None => Ok(Self::default()),
        }
    }

    /// Raw value for a key. `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|value| !value.is_null())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// String list, ignoring non-string entries.
    pub fn get_str_list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
    }

    /// `"no"` and `false` both mean the feature is disabled.
    pub fn get_feature(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(value) if value != "no" => Some(value.clone()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Settings stored in `entity-delta.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub entity_delta: DifferSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferSettings {
    /// Directory holding the entity descriptors, relative to the project root
    #[serde(default = "default_config_dir")]
    pub config_dir: String,
    /// Suffix of the previous-state descriptor file name
    #[serde(default = "default_previous_suffix")]
    pub previous_suffix: String,
}

impl Default for DifferSettings {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            previous_suffix: default_previous_suffix(),
        }
    }
}

fn default_config_dir() -> String {
    ".jhipster".to_string()
}

fn default_previous_suffix() -> String {
    "-previous".to_string()
}

impl ToolConfig {
    /// Load `entity-delta.toml`, or defaults when the file does not exist.
    pub fn load(path: &Path) -> GenerationResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let config_error = |reason: String| GenerationError::ConfigRead {
            path: path.to_path_buf(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|err| config_error(err.to_string()))?;
        toml::from_str(&content).map_err(|err| config_error(err.to_string()))
    }
}
