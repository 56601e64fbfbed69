//! Entity load phase.
//!
//! Turns the current descriptor (or its absence) plus the resolved project
//! settings into the effective per-entity values: descriptor overrides,
//! defaults for a brand new entity, prompt choice lists and microservice
//! routing for gateways.

use serde::Serialize;
use serde_json::Value;

use crate::descriptor::{EntityDescriptor, Field, Relationship};
use crate::errors::{GenerationError, GenerationResult};
use crate::naming::{case, DatabaseType};
use crate::settings::ProjectSettings;

/// Effective values for one entity after the load phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityState {
    pub fields: Vec<Field>,
    pub relationships: Vec<Relationship>,
    pub database_type: Option<DatabaseType>,
    pub search_engine: Option<Value>,
    pub dto: Option<String>,
    pub service: Option<String>,
    pub pagination: Option<String>,
    pub fluent_methods: Option<bool>,
    pub client_root_folder: Option<String>,
    pub javadoc: Option<String>,
    pub jhi_prefix: String,
    pub jhi_table_prefix: String,
    pub skip_check_length_of_identifier: bool,
    pub skip_client: bool,
    pub skip_server: bool,
    pub read_only: bool,
    pub embedded: bool,
    pub validation: bool,
    pub jpa_metamodel_filtering: bool,
    #[serde(rename = "entityAngularJSSuffix")]
    pub entity_angular_js_suffix: Option<String>,
    pub microservice_name: Option<String>,
    pub microservice_app_name: Option<String>,
    pub changelog_date: Option<String>,
    pub have_field_with_javadoc: bool,
    pub field_names_underscored: Vec<String>,
    pub field_name_choices: Vec<String>,
    pub rel_name_choices: Vec<String>,

    /// Table name as written in the descriptor, before resolution.
    #[serde(skip)]
    pub configured_table_name: Option<String>,
}

impl EntityState {
    /// State of an entity with no descriptor on disk yet.
    ///
    /// The table name is derived from the entity name without a fallback
    /// warning, since there is no descriptor that could have carried one.
    pub fn new_entity(entity_name: &str, settings: &ProjectSettings) -> Self {
        Self {
            fields: Vec::new(),
            relationships: Vec::new(),
            database_type: settings.database_type,
            search_engine: settings.search_engine.clone(),
            dto: Some("no".to_string()),
            service: Some("no".to_string()),
            pagination: Some("no".to_string()),
            fluent_methods: None,
            client_root_folder: settings.microservice_name.clone(),
            javadoc: None,
            jhi_prefix: settings.jhi_prefix.clone(),
            jhi_table_prefix: settings.jhi_table_prefix.clone(),
            skip_check_length_of_identifier: settings.skip_check_length_of_identifier,
            skip_client: settings.skip_client,
            skip_server: settings.skip_server,
            read_only: false,
            embedded: false,
            validation: false,
            jpa_metamodel_filtering: false,
            entity_angular_js_suffix: None,
            microservice_name: settings.microservice_name.clone(),
            microservice_app_name: None,
            changelog_date: None,
            have_field_with_javadoc: false,
            field_names_underscored: Vec::new(),
            field_name_choices: Vec::new(),
            rel_name_choices: Vec::new(),
            configured_table_name: Some(case::table_name(entity_name)),
        }
    }

    /// State of an entity loaded from its current descriptor.
    pub fn from_descriptor(
        entity_name: &str,
        descriptor: &EntityDescriptor,
        settings: &ProjectSettings,
    ) -> GenerationResult<Self> {
        let database_type = match descriptor.database_type.as_deref() {
            Some(value) => match value.parse::<DatabaseType>() {
                Ok(db) => Some(db),
                Err(err) => {
                    log::warn!("{entity_name}: {err}, keeping the project database type");
                    settings.database_type
                }
            },
            None => settings.database_type,
        };

        let jhi_prefix = descriptor
            .jhi_prefix
            .as_deref()
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or(settings.jhi_prefix.as_str())
            .to_string();

        let has_service = descriptor.service.as_deref() != Some("no");
        let jpa_metamodel_filtering = database_type.is_some_and(|db| db.is_sql())
            && has_service
            && descriptor.jpa_metamodel_filtering.unwrap_or(false);

        let mut state = Self {
            fields: descriptor.fields.clone(),
            relationships: descriptor.relationships.clone(),
            database_type,
            search_engine: descriptor
                .search_engine
                .clone()
                .or_else(|| settings.search_engine.clone()),
            dto: descriptor.dto.clone(),
            service: descriptor.service.clone(),
            pagination: descriptor.pagination.clone(),
            fluent_methods: descriptor.fluent_methods,
            client_root_folder: descriptor
                .client_root_folder
                .clone()
                .or_else(|| settings.microservice_name.clone()),
            javadoc: descriptor.javadoc.clone(),
            jhi_table_prefix: case::table_name(&jhi_prefix),
            jhi_prefix,
            skip_check_length_of_identifier: descriptor
                .skip_check_length_of_identifier
                .unwrap_or(false)
                || settings.skip_check_length_of_identifier,
            skip_client: descriptor.skip_client.unwrap_or(false) || settings.skip_client,
            skip_server: settings.skip_server,
            read_only: descriptor.read_only.unwrap_or(false),
            embedded: descriptor.embedded.unwrap_or(false),
            validation: false,
            jpa_metamodel_filtering,
            entity_angular_js_suffix: descriptor.angular_js_suffix.clone(),
            microservice_name: settings.microservice_name.clone(),
            microservice_app_name: None,
            changelog_date: descriptor.changelog_date.clone(),
            have_field_with_javadoc: descriptor.has_field_with_javadoc(),
            field_names_underscored: descriptor
                .fields
                .iter()
                .map(|field| case::snake_case(&field.field_name))
                .collect(),
            field_name_choices: descriptor
                .fields
                .iter()
                .map(|field| field.field_name.clone())
                .collect(),
            rel_name_choices: descriptor
                .relationships
                .iter()
                .map(Relationship::choice_label)
                .collect(),
            configured_table_name: descriptor.entity_table_name.clone(),
        };

        if settings.is_gateway()
            && let Some(microservice_name) = descriptor.microservice_name.as_deref()
        {
            if microservice_name.is_empty() {
                return Err(GenerationError::MissingMicroserviceName {
                    entity: entity_name.to_string(),
                });
            }

            log::info!("{entity_name} is served by microservice {microservice_name}, skipping server side");
            state.microservice_app_name = Some(microservice_app_name(microservice_name));
            state.microservice_name = Some(microservice_name.to_string());
            state.skip_server = true;
        }

        Ok(state)
    }
}

/// Application name a gateway routes to: camel cased, ending in `App`.
pub fn microservice_app_name(microservice_name: &str) -> String {
    let name = case::camel_case(microservice_name);
    if microservice_name.ends_with("App") {
        name
    } else {
        format!("{name}App")
    }
}
