//! Descriptor loading utilities.

use std::path::{Path, PathBuf};

use crate::descriptor::EntityDescriptor;
use crate::errors::{GenerationError, GenerationResult};

/// Location of an entity's current and previous-state descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorPaths {
    pub current: PathBuf,
    pub previous: PathBuf,
}

impl DescriptorPaths {
    /// `<config_dir>/<Entity>.json` and `<config_dir>/<Entity><suffix>.json`.
    pub fn new(config_dir: &Path, entity_name: &str, previous_suffix: &str) -> Self {
        Self {
            current: config_dir.join(format!("{entity_name}.json")),
            previous: config_dir.join(format!("{entity_name}{previous_suffix}.json")),
        }
    }

    /// An entity is updated in place when either document already exists.
    pub fn is_update(&self) -> bool {
        self.current.is_file() || self.previous.is_file()
    }
}

/// Load the current descriptor. Any failure is fatal for the run.
pub fn load_current(path: &Path) -> GenerationResult<EntityDescriptor> {
    read_descriptor(path).map_err(|reason| GenerationError::DescriptorRead {
        path: path.to_path_buf(),
        reason,
    })
}

/// Load the previous-state descriptor.
///
/// An unset path or a missing file means there is no prior state. A file that
/// exists but cannot be read or parsed is fatal.
pub fn load_previous(path: Option<&Path>) -> GenerationResult<Option<EntityDescriptor>> {
    let Some(path) = path else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let descriptor = read_descriptor(path).map_err(|reason| GenerationError::PreviousDescriptorRead {
        path: path.to_path_buf(),
        reason,
    })?;

    log::info!("Found {} for previous entity state", path.display());
    Ok(Some(descriptor))
}

fn read_descriptor(path: &Path) -> Result<EntityDescriptor, String> {
    let content = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
    serde_json::from_str(&content).map_err(|err| err.to_string())
}
