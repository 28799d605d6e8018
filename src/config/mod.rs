//! Configuration boundary for the purge engine.
//!
//! The engine never reads ambient or global configuration. It is handed a
//! [`ConfigSource`], a read-only key-addressed view that the embedding
//! application implements over whatever configuration system it uses, and
//! loads a validated [`PurgeConfig`] from it at the start of every run.
//!
//! # Example
//!
//! ```toml
//! models = ["documents", "attachments"]
//! days = 30
//! log = true
//! ```

mod purge;

pub use purge::PurgeConfig;

/// Read-only, key-addressed configuration lookup.
///
/// Implementations adapt the application's configuration system (a TOML
/// file section, an environment layer, a remote config service) to the
/// engine. Values are surfaced as [`toml::Value`]s;
/// [`PurgeConfig::from_source`] interprets and validates them.
pub trait ConfigSource: Send + Sync {
    /// Look up the raw value for `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Option<toml::Value>;
}

/// [`ConfigSource`] over a parsed TOML table.
///
/// Typically built from the purge section of an application's
/// configuration file.
#[derive(Debug, Clone, Default)]
pub struct TomlTableSource {
    table: toml::Table,
}

impl TomlTableSource {
    /// Wrap an already-parsed table.
    pub fn new(table: toml::Table) -> Self {
        Self { table }
    }

    /// Parse a TOML string into a source.
    pub fn from_str(contents: &str) -> Result<Self, ConfigError> {
        let table = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(Self::new(table))
    }
}

impl ConfigSource for TomlTableSource {
    fn get(&self, key: &str) -> Option<toml::Value> {
        self.table.get(key).cloned()
    }
}

/// Configuration errors.
///
/// Every variant is fatal misconfiguration: the engine aborts the run
/// before touching the store and surfaces the error to the caller so an
/// operator can fix the deployment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required config key: {0}")]
    MissingKey(&'static str),

    #[error("Invalid value for config key {key}: expected {expected}, found {found}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Retention threshold must be a non-negative number of days, got {0}")]
    InvalidThreshold(i64),

    #[error("Model {0} is not registered in the store registry")]
    UnknownModel(String),

    #[error("Model {0} does not support soft deletion")]
    NotSoftDeletable(String),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Human-readable name of a TOML value's type, for error messages.
pub(crate) fn value_type(value: &toml::Value) -> &'static str {
    match value {
        toml::Value::String(_) => "string",
        toml::Value::Integer(_) => "integer",
        toml::Value::Float(_) => "float",
        toml::Value::Boolean(_) => "boolean",
        toml::Value::Datetime(_) => "datetime",
        toml::Value::Array(_) => "array",
        toml::Value::Table(_) => "table",
    }
}
