//! Typed view over the `.jhipster/<Entity>.json` entity descriptor.
//!
//! Only the keys the differ and the naming rules read are typed. Everything
//! else is kept as pass-through JSON so that two descriptors compare equal
//! exactly when their documents carry the same data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Declarative description of one entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDescriptor {
    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default)]
    pub relationships: Vec<Relationship>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dto: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluent_methods: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_root_folder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<String>,

    /// Either an engine name or `false`, so it stays untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_engine: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_table_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jhi_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_check_length_of_identifier: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_client: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<bool>,

    #[serde(default, rename = "angularJSSuffix", skip_serializing_if = "Option::is_none")]
    pub angular_js_suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microservice_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jpa_metamodel_filtering: Option<bool>,

    /// Top-level keys not listed above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EntityDescriptor {
    /// Whether any field carries a non-empty javadoc comment.
    pub fn has_field_with_javadoc(&self) -> bool {
        self.fields
            .iter()
            .any(|field| field.javadoc.as_deref().is_some_and(|doc| !doc.is_empty()))
    }
}

/// One entity field. Type and validation attributes are opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub field_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<String>,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Field {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            javadoc: None,
            attributes: Map::new(),
        }
    }

    /// Builder-style helper for attaching an opaque attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// One relationship to another entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub relationship_name: String,

    pub relationship_type: RelationshipType,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Relationship {
    pub fn new(relationship_name: impl Into<String>, relationship_type: RelationshipType) -> Self {
        Self {
            relationship_name: relationship_name.into(),
            relationship_type,
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// `name:type` label used to pre-populate relationship prompts.
    pub fn choice_label(&self) -> String {
        format!("{}:{}", self.relationship_name, self.relationship_type)
    }
}

/// Relationship cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipType::OneToOne => write!(f, "one-to-one"),
            RelationshipType::OneToMany => write!(f, "one-to-many"),
            RelationshipType::ManyToOne => write!(f, "many-to-one"),
            RelationshipType::ManyToMany => write!(f, "many-to-many"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_parses_known_and_unknown_keys() {
        let descriptor: EntityDescriptor = serde_json::from_value(json!({
            "fields": [
                {"fieldName": "title", "fieldType": "String", "fieldValidateRules": ["required"]}
            ],
            "relationships": [
                {"relationshipName": "author", "relationshipType": "many-to-one", "otherEntityName": "user"}
            ],
            "entityTableName": "post",
            "angularJSSuffix": "mySuffix",
            "skipCheckLengthOfIdentifier": true,
            "searchEngine": false,
            "applications": "*"
        }))
        .unwrap();

        assert_eq!(descriptor.fields.len(), 1);
        assert_eq!(descriptor.fields[0].field_name, "title");
        assert_eq!(descriptor.fields[0].attributes["fieldType"], json!("String"));
        assert_eq!(descriptor.relationships[0].relationship_type, RelationshipType::ManyToOne);
        assert_eq!(descriptor.entity_table_name.as_deref(), Some("post"));
        assert_eq!(descriptor.angular_js_suffix.as_deref(), Some("mySuffix"));
        assert_eq!(descriptor.skip_check_length_of_identifier, Some(true));
        assert_eq!(descriptor.search_engine, Some(json!(false)));
        assert_eq!(descriptor.extra["applications"], json!("*"));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let descriptor: EntityDescriptor = serde_json::from_str("{}").unwrap();
        assert!(descriptor.fields.is_empty());
        assert!(descriptor.relationships.is_empty());
    }

    #[test]
    fn test_field_equality_ignores_key_order() {
        let a: Field = serde_json::from_str(r#"{"fieldName":"a","fieldType":"String","javadoc":"doc"}"#).unwrap();
        let b: Field = serde_json::from_str(r#"{"javadoc":"doc","fieldType":"String","fieldName":"a"}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_field_round_trips_attributes() {
        let field = Field::new("age").with_attribute("fieldType", json!("Integer"));
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value, json!({"fieldName": "age", "fieldType": "Integer"}));
    }

    #[test]
    fn test_has_field_with_javadoc() {
        let mut descriptor = EntityDescriptor {
            fields: vec![Field::new("a")],
            ..Default::default()
        };
        assert!(!descriptor.has_field_with_javadoc());

        descriptor.fields[0].javadoc = Some("The a field".to_string());
        assert!(descriptor.has_field_with_javadoc());
    }

    #[test]
    fn test_relationship_choice_label() {
        let rel = Relationship::new("owner", RelationshipType::OneToOne);
        assert_eq!(rel.choice_label(), "owner:one-to-one");
    }
}
