use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Fatal conditions that abort an entity generation run.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The current entity descriptor is missing, unreadable or not valid JSON.
    #[error("the entity configuration file {path} could not be read: {reason}")]
    DescriptorRead { path: PathBuf, reason: String },

    /// A previous-state descriptor exists but could not be read or parsed.
    #[error("the entity configuration file for previous entity state {path} could not be read: {reason}")]
    PreviousDescriptorRead { path: PathBuf, reason: String },

    /// Entity or table name failed a shape, suffix or reserved-word rule.
    #[error("{message}")]
    InvalidName { name: String, message: String },

    /// Table name exceeds the hard identifier limit of the target database.
    #[error("the table name '{name}' is too long for {database} ({length} > {limit}), try a shorter name")]
    IdentifierTooLong {
        name: String,
        database: String,
        length: usize,
        limit: usize,
    },

    /// No database type can be resolved for an application that needs one.
    #[error("{message}")]
    MissingDatabaseConfiguration { message: String },

    /// Entity and DTO suffixes would produce clashing class names.
    #[error("the entity cannot be generated as the entity suffix and DTO suffix are equal ('{suffix}')")]
    SuffixCollision { suffix: String },

    /// Reactive applications have no entity generation support.
    #[error("the entity generator doesn't support reactive apps at the moment")]
    ReactiveNotSupported,

    /// A gateway consumes a microservice descriptor that does not name its service.
    #[error("microservice name for the entity '{entity}' is not found, entity cannot be generated")]
    MissingMicroserviceName { entity: String },

    /// The project configuration store or tool settings could not be read.
    #[error("failed to read project configuration {path}: {reason}")]
    ConfigRead { path: PathBuf, reason: String },
}

impl GenerationError {
    pub(crate) fn invalid_name(name: &str, message: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Kind of a non-fatal diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    /// No `entityTableName` in the descriptor, derived from the entity name.
    TableNameFallback,
    /// Reserved table name rewritten with the table prefix.
    ReservedTableNamePrefixed,
    /// Reserved table name kept because the prefix is empty.
    ReservedTableNameUnprefixed,
    /// Table name is legal but long enough to break derived identifiers.
    LongIdentifier,
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningCode::TableNameFallback => write!(f, "table_name_fallback"),
            WarningCode::ReservedTableNamePrefixed => write!(f, "reserved_table_name_prefixed"),
            WarningCode::ReservedTableNameUnprefixed => write!(f, "reserved_table_name_unprefixed"),
            WarningCode::LongIdentifier => write!(f, "long_identifier"),
        }
    }
}

/// Diagnostic reported to the invoking context without stopping the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub code: WarningCode,
    pub message: String,
}

impl Warning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        let warning = Self {
            code,
            message: message.into(),
        };
        log::warn!("{warning}");
        warning
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
