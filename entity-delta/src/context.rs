//! The frozen result of a run, handed to prompting and templating.

use serde::Serialize;
use serde_json::Value;

use crate::descriptor::{Field, Relationship};
use crate::differ::DiffResult;
use crate::errors::Warning;
use crate::naming::ResolvedTableName;
use crate::settings::ProjectSettings;
use crate::state::EntityState;

/// Everything downstream phases need to know about one entity.
///
/// Built once by [`GenerationContext::assemble`] and read-only afterwards.
/// Serializes to the camelCase document templates expect: entity values and
/// delta sets at the top level, project settings under `project`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    name: String,
    entity_name_capitalized: String,
    is_update: bool,
    project: ProjectSettings,
    #[serde(flatten)]
    entity: EntityState,
    #[serde(flatten)]
    delta: DiffResult,
    entity_table_name: String,
    new_changelog_date: String,
    warnings: Vec<Warning>,
}

impl GenerationContext {
    pub fn assemble(
        name: &str,
        is_update: bool,
        project: ProjectSettings,
        entity: EntityState,
        delta: DiffResult,
        table: ResolvedTableName,
        new_changelog_date: String,
    ) -> Self {
        Self {
            name: name.to_string(),
            entity_name_capitalized: crate::naming::case::upper_first(name),
            is_update,
            project,
            entity,
            delta,
            entity_table_name: table.name,
            new_changelog_date,
            warnings: table.warnings,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entity_name_capitalized(&self) -> &str {
        &self.entity_name_capitalized
    }

    /// Whether a descriptor for the entity already existed.
    pub fn is_update(&self) -> bool {
        self.is_update
    }

    pub fn project(&self) -> &ProjectSettings {
        &self.project
    }

    pub fn entity(&self) -> &EntityState {
        &self.entity
    }

    pub fn delta(&self) -> &DiffResult {
        &self.delta
    }

    pub fn fields(&self) -> &[Field] {
        &self.entity.fields
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.entity.relationships
    }

    pub fn changelog_required(&self) -> bool {
        self.delta.changelog_required
    }

    /// Final table name, after fallback and reserved-word prefixing.
    pub fn entity_table_name(&self) -> &str {
        &self.entity_table_name
    }

    /// Date of the entity's first changelog, when it has one.
    pub fn changelog_date(&self) -> Option<&str> {
        self.entity.changelog_date.as_deref()
    }

    /// Timestamp for a changelog emitted by this run.
    pub fn new_changelog_date(&self) -> &str {
        &self.new_changelog_date
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// The context as a JSON document for template rendering.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
