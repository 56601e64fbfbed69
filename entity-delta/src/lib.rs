//! entity-delta core library.
//!
//! Decides whether an entity is being created or updated, computes the
//! structural delta between its current and previous descriptors, validates
//! entity and table names against per-database rules, and freezes the result
//! into a [`GenerationContext`] for the prompting and templating phases.
//!
//! ```no_run
//! use entity_delta::{pipeline, EntityRequest, ProjectContext};
//!
//! # fn main() -> Result<(), entity_delta::GenerationError> {
//! let project = ProjectContext::find()?;
//! let ctx = pipeline::run(&project, &EntityRequest::new("BankAccount"))?;
//! if ctx.changelog_required() {
//!     println!("new changelog {}", ctx.new_changelog_date());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod descriptor;
pub mod differ;
pub mod errors;
pub mod loader;
pub mod naming;
pub mod pipeline;
pub mod project;
pub mod settings;
pub mod state;
pub mod utils;

pub use config::{ConfigStore, DifferSettings, ToolConfig};
pub use context::GenerationContext;
pub use descriptor::{EntityDescriptor, Field, Relationship, RelationshipType};
pub use differ::{compute_delta, DiffResult};
pub use errors::*;
pub use naming::{resolve_table_name, validate_entity_name, DatabaseType, ResolvedTableName};
pub use pipeline::EntityRequest;
pub use project::ProjectContext;
pub use settings::{GeneratorOptions, ProjectSettings};
pub use state::EntityState;
