use serde::Serialize;

use super::{case, rules, DatabaseType, IDENTIFIER_PATTERN};
use crate::errors::{GenerationError, GenerationResult, Warning, WarningCode};

/// Table name after fallback, validation and reserved-word prefixing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTableName {
    pub name: String,
    pub warnings: Vec<Warning>,
}

/// Resolve and validate the table name of an entity.
///
/// * no configured name: derived from the entity name, with a warning
/// * characters outside `[a-zA-Z0-9_]` or an empty name: fatal
/// * reserved for `prod_database_type`: prefixed with the snake-cased
///   `jhi_prefix` and warned about, or only warned about when the prefix is
///   empty
/// * otherwise checked against the database identifier limit unless
///   `skip_length_check` is set
pub fn resolve_table_name(
    entity_name: &str,
    configured: Option<&str>,
    prod_database_type: Option<DatabaseType>,
    jhi_prefix: &str,
    skip_length_check: bool,
) -> GenerationResult<ResolvedTableName> {
    let mut warnings = Vec::new();

    let name = match configured {
        Some(name) => name.to_string(),
        None => {
            let derived = case::table_name(entity_name);
            warnings.push(Warning::new(
                WarningCode::TableNameFallback,
                format!("entityTableName is missing for {entity_name}, using '{derived}' derived from the entity name"),
            ));
            derived
        }
    };

    let instructions = format!(
        "You can specify a different table name in the descriptor of {entity_name} and run the generator again."
    );

    if !IDENTIFIER_PATTERN.is_match(&name) {
        return Err(GenerationError::invalid_name(
            &name,
            format!("The table name cannot contain special characters.\n{instructions}"),
        ));
    }

    if name.is_empty() {
        return Err(GenerationError::invalid_name(&name, "The table name cannot be empty"));
    }

    let database_rules = rules::rules_for(prod_database_type);

    if database_rules.is_reserved(&name) {
        let table_prefix = case::table_name(jhi_prefix);
        if table_prefix.is_empty() {
            warnings.push(Warning::new(
                WarningCode::ReservedTableNameUnprefixed,
                format!(
                    "The table name contains the '{}' reserved keyword but you have defined an empty jhiPrefix so it won't be prefixed and thus the generated application might not work.\n{instructions}",
                    name.to_uppercase()
                ),
            ));
            return Ok(ResolvedTableName { name, warnings });
        }

        warnings.push(Warning::new(
            WarningCode::ReservedTableNamePrefixed,
            format!(
                "The table name cannot contain the '{}' reserved keyword, so it will be prefixed with '{table_prefix}_'.\n{instructions}",
                name.to_uppercase()
            ),
        ));
        return Ok(ResolvedTableName {
            name: format!("{table_prefix}_{name}"),
            warnings,
        });
    }

    if let Some(limit) = database_rules.identifier_limit
        && !skip_length_check
    {
        let database = prod_database_type.map(|db| db.to_string()).unwrap_or_default();
        let length = name.chars().count();

        if length > limit.max {
            return Err(GenerationError::IdentifierTooLong {
                name,
                database,
                length,
                limit: limit.max,
            });
        }

        if length > limit.advisory {
            warnings.push(Warning::new(
                WarningCode::LongIdentifier,
                format!(
                    "The table name is long for {database}, long table names can cause issues when used to create constraint names and join table names.\n{instructions}"
                ),
            ));
        }
    }

    Ok(ResolvedTableName { name, warnings })
}
