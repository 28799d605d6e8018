//! Validated purge settings.

use serde::{Deserialize, Deserializer, Serialize};

use super::{ConfigError, ConfigSource, value_type};

/// Validated settings for a purge run.
///
/// `models` is always a sequence: a scalar string in the raw configuration
/// is normalized here, at the boundary, so the engine only ever deals with
/// an ordered list of model descriptors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PurgeConfig {
    /// Ordered model descriptors to purge, processed front to back.
    #[serde(deserialize_with = "one_or_many")]
    pub models: Vec<String>,

    /// Retention window in days. Soft-deleted records strictly older than
    /// `now - days` are permanently removed.
    pub days: u32,

    /// Emit one info message per model when records were removed.
    /// Default: false
    #[serde(default)]
    pub log: bool,
}

impl PurgeConfig {
    /// Load and validate settings from a [`ConfigSource`].
    ///
    /// `models` and `days` are required; `log` defaults to `false` when
    /// absent. A missing or unparsable retention threshold is an error,
    /// never a silent default.
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let models = match source.get("models") {
            Some(toml::Value::String(name)) => vec![name],
            Some(toml::Value::Array(entries)) => entries
                .into_iter()
                .map(|entry| match entry {
                    toml::Value::String(name) => Ok(name),
                    other => Err(ConfigError::InvalidValue {
                        key: "models",
                        expected: "string or array of strings",
                        found: value_type(&other),
                    }),
                })
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "models",
                    expected: "string or array of strings",
                    found: value_type(&other),
                });
            }
            None => return Err(ConfigError::MissingKey("models")),
        };

        let days = match source.get("days") {
            Some(toml::Value::Integer(days)) => {
                u32::try_from(days).map_err(|_| ConfigError::InvalidThreshold(days))?
            }
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "days",
                    expected: "non-negative integer",
                    found: value_type(&other),
                });
            }
            None => return Err(ConfigError::MissingKey("days")),
        };

        let log = match source.get("log") {
            Some(toml::Value::Boolean(log)) => log,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "log",
                    expected: "boolean",
                    found: value_type(&other),
                });
            }
            None => false,
        };

        Ok(Self { models, days, log })
    }
}

/// Accept either a single model name or a sequence of names.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}
