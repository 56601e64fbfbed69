//! Ordered execution of one entity generation run.
//!
//! configuration → current descriptor → previous descriptor → delta →
//! entity name → table name → frozen context. The first failure aborts the
//! run and nothing is written anywhere.

use chrono::{DateTime, Utc};

use crate::config::ConfigStore;
use crate::context::GenerationContext;
use crate::differ::{compute_delta, DiffResult};
use crate::errors::GenerationResult;
use crate::loader::{load_current, load_previous, DescriptorPaths};
use crate::naming::{case, resolve_table_name, validate_entity_name};
use crate::project::ProjectContext;
use crate::settings::{GeneratorOptions, ProjectSettings};
use crate::state::EntityState;
use crate::utils::changelog_timestamp;

/// One request to generate or update an entity.
#[derive(Debug, Clone)]
pub struct EntityRequest {
    /// Entity name as given by the user
    pub name: String,
    /// Invocation options
    pub options: GeneratorOptions,
    /// Instant used for the new changelog timestamp
    pub generated_at: DateTime<Utc>,
}

impl EntityRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: GeneratorOptions::default(),
            generated_at: Utc::now(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Pin the generation instant.
    pub fn at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

/// Run the pipeline for an entity of a discovered project.
pub fn run(project: &ProjectContext, request: &EntityRequest) -> GenerationResult<GenerationContext> {
    let store = ConfigStore::load(&project.config_path)?;
    let paths = project.descriptor_paths(&case::upper_first(&request.name));
    run_with(&store, &paths, request)
}

/// Run the pipeline against an already loaded configuration store.
pub fn run_with(
    store: &ConfigStore,
    paths: &DescriptorPaths,
    request: &EntityRequest,
) -> GenerationResult<GenerationContext> {
    let name = request.name.as_str();
    let settings = ProjectSettings::resolve(store, &request.options)?;

    let is_update = paths.is_update();
    let (entity, delta) = if is_update {
        log::info!("The entity {name} is being updated");
        let current = load_current(&paths.current)?;
        let previous = load_previous(Some(paths.previous.as_path()))?;
        let delta = compute_delta(&current, previous.as_ref());
        let entity = EntityState::from_descriptor(name, &current, &settings)?;
        (entity, delta)
    } else {
        log::info!("The entity {name} is being created");
        (EntityState::new_entity(name, &settings), DiffResult::default())
    };

    validate_entity_name(name, entity.skip_server)?;

    let table = resolve_table_name(
        name,
        entity.configured_table_name.as_deref(),
        settings.prod_database_type,
        &entity.jhi_prefix,
        entity.skip_check_length_of_identifier,
    )?;

    if delta.changelog_required {
        log::info!(
            "{name}: {} change(s) since the previous state, a new changelog is required",
            delta.change_count()
        );
    }

    let new_changelog_date = changelog_timestamp(request.generated_at);

    Ok(GenerationContext::assemble(
        name,
        is_update,
        settings,
        entity,
        delta,
        table,
        new_changelog_date,
    ))
}
