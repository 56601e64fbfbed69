use std::path::{Path, PathBuf};

use crate::config::{DifferSettings, ToolConfig};
use crate::errors::{GenerationError, GenerationResult};
use crate::loader::DescriptorPaths;

/// File marking the root of a generated project
pub const PROJECT_MARKER: &str = ".yo-rc.json";

/// Optional tool settings file at the project root
pub const TOOL_CONFIG_FILE: &str = "entity-delta.toml";

/// Paths and settings of the project an entity belongs to
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Directory holding `.yo-rc.json`
    pub project_root: PathBuf,
    /// Path to `.yo-rc.json`
    pub config_path: PathBuf,
    /// Directory holding the entity descriptors
    pub descriptors_dir: PathBuf,
    /// Loaded tool settings
    pub settings: DifferSettings,
}

impl ProjectContext {
    /// Find the project from the current directory or its ancestors
    pub fn find() -> GenerationResult<Self> {
        let current_dir = std::env::current_dir().map_err(|err| GenerationError::ConfigRead {
            path: PathBuf::from("."),
            reason: format!("failed to get current directory: {err}"),
        })?;
        Self::find_from(&current_dir)
    }

    /// Find the project starting from the given directory
    pub fn find_from(start: &Path) -> GenerationResult<Self> {
        let project_root = Self::find_project_root(start)?;
        Self::from_root(project_root)
    }

    /// Create context from a known project root
    pub fn from_root(project_root: PathBuf) -> GenerationResult<Self> {
        let tool_config = ToolConfig::load(&project_root.join(TOOL_CONFIG_FILE))?;
        let settings = tool_config.entity_delta;

        Ok(Self {
            config_path: project_root.join(PROJECT_MARKER),
            descriptors_dir: project_root.join(&settings.config_dir),
            project_root,
            settings,
        })
    }

    fn find_project_root(start: &Path) -> GenerationResult<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_MARKER).exists() {
                return Ok(current);
            }

            if !current.pop() {
                return Err(GenerationError::ConfigRead {
                    path: start.join(PROJECT_MARKER),
                    reason: format!("could not find {PROJECT_MARKER} in {start:?} or any parent directory"),
                });
            }
        }
    }

    /// Descriptor locations for an entity, by its capitalized name
    pub fn descriptor_paths(&self, entity_name_capitalized: &str) -> DescriptorPaths {
        DescriptorPaths::new(
            &self.descriptors_dir,
            entity_name_capitalized,
            &self.settings.previous_suffix,
        )
    }
}
