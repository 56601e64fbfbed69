use super::{rules, IDENTIFIER_PATTERN};
use crate::errors::{GenerationError, GenerationResult};

/// Suffix reserved for generated detail views.
const DETAIL_SUFFIX: &str = "Detail";

/// Reject entity names the generator cannot turn into classes and routes.
///
/// The reserved class name check only applies when server code is generated.
pub fn validate_entity_name(name: &str, skip_server: bool) -> GenerationResult<()> {
    if !IDENTIFIER_PATTERN.is_match(name) {
        return Err(GenerationError::invalid_name(
            name,
            "The entity name cannot contain special characters",
        ));
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(GenerationError::invalid_name(
            name,
            "The entity name cannot start with a number",
        ));
    }

    if name.is_empty() {
        return Err(GenerationError::invalid_name(name, "The entity name cannot be empty"));
    }

    if name.ends_with(DETAIL_SUFFIX) {
        return Err(GenerationError::invalid_name(
            name,
            format!("The entity name cannot end with '{DETAIL_SUFFIX}'"),
        ));
    }

    if !skip_server && rules::is_reserved_class_name(name) {
        return Err(GenerationError::invalid_name(
            name,
            "The entity name cannot contain a Java or JHipster reserved keyword",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str) -> String {
        validate_entity_name(name, false).unwrap_err().to_string()
    }

    #[test]
    fn test_valid_names() {
        assert!(validate_entity_name("Foo", false).is_ok());
        assert!(validate_entity_name("Blog_Post2", false).is_ok());
    }

    #[test]
    fn test_leading_digit() {
        assert!(message("1Foo").contains("start with a number"));
    }

    #[test]
    fn test_detail_suffix() {
        assert!(message("FooDetail").contains("'Detail'"));
        assert!(validate_entity_name("Details", false).is_ok());
    }

    #[test]
    fn test_special_characters() {
        assert!(message("Foo Bar").contains("special characters"));
        assert!(message("Foo-Bar").contains("special characters"));
    }

    #[test]
    fn test_empty() {
        assert!(message("").contains("empty"));
    }

    #[test]
    fn test_reserved_class_name_only_with_server() {
        assert!(message("User").contains("reserved keyword"));
        assert!(message("class").contains("reserved keyword"));
        assert!(validate_entity_name("User", true).is_ok());
    }
}
