//! Entity and table naming rules.
//!
//! This module provides:
//! - Hibernate-style table identifiers and generic case transforms
//! - A rule table of reserved words and identifier limits per database
//! - Table name resolution with reserved-word prefixing
//! - Entity name validation

pub mod case;
mod entity;
mod reserved;
mod rules;
mod table;

use once_cell::sync::Lazy;
use regex::Regex;

pub use entity::validate_entity_name;
pub use rules::{
    is_reserved_class_name, is_reserved_table_name, rules_for, DatabaseRules, DatabaseType,
    IdentifierLimit,
};
pub use table::{resolve_table_name, ResolvedTableName};

/// Letters, digits and underscores only. The empty string matches.
static IDENTIFIER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]*$").expect("identifier pattern should compile"));
