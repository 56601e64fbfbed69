//! Structural delta between two versions of an entity descriptor.
//!
//! Elements are compared by deep value equality, never by name. A field whose
//! attributes change is reported twice: its old shape as removed and its new
//! shape as added. A renamed field is likewise a remove/add pair, there is no
//! rename tracking.

use serde::Serialize;

use crate::descriptor::{EntityDescriptor, Field, Relationship};

/// Added and removed elements plus the resulting changelog decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub new_fields: Vec<Field>,
    pub removed_fields: Vec<Field>,
    pub new_relationships: Vec<Relationship>,
    pub removed_relationships: Vec<Relationship>,
    pub changelog_required: bool,
}

impl DiffResult {
    /// Check if any element was added or removed
    pub fn has_changes(&self) -> bool {
        !self.new_fields.is_empty()
            || !self.removed_fields.is_empty()
            || !self.new_relationships.is_empty()
            || !self.removed_relationships.is_empty()
    }

    /// Total number of added and removed elements
    pub fn change_count(&self) -> usize {
        self.new_fields.len()
            + self.removed_fields.len()
            + self.new_relationships.len()
            + self.removed_relationships.len()
    }
}

/// Compute the delta of `current` against an optional previous state.
///
/// A missing previous state, or one with no fields (resp. relationships), is a
/// baseline: nothing is attributed as added or removed for that collection.
pub fn compute_delta(current: &EntityDescriptor, previous: Option<&EntityDescriptor>) -> DiffResult {
    let Some(previous) = previous else {
        return DiffResult::default();
    };

    let mut result = DiffResult::default();

    if !previous.fields.is_empty() {
        result.new_fields = new_elements(&current.fields, &previous.fields);
        result.removed_fields = removed_elements(&current.fields, &previous.fields);
    }

    if !previous.relationships.is_empty() {
        result.new_relationships = new_elements(&current.relationships, &previous.relationships);
        result.removed_relationships = removed_elements(&current.relationships, &previous.relationships);
    }

    result.changelog_required = result.has_changes();

    log::debug!(
        "entity delta: +{} -{} fields, +{} -{} relationships",
        result.new_fields.len(),
        result.removed_fields.len(),
        result.new_relationships.len(),
        result.removed_relationships.len()
    );

    result
}

/// Elements of `current` with no equal element in `previous`.
pub fn new_elements<T: PartialEq + Clone>(current: &[T], previous: &[T]) -> Vec<T> {
    current
        .iter()
        .filter(|element| !previous.contains(element))
        .cloned()
        .collect()
}

/// Elements of `previous` with no equal element in `current`.
pub fn removed_elements<T: PartialEq + Clone>(current: &[T], previous: &[T]) -> Vec<T> {
    new_elements(previous, current)
}
