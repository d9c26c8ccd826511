use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// A supported module. Only the name is used to build a step; any other keys
/// in a module listing are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("read module list failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("module list parse failed `{path}`: {reason}")]
    Parse { path: String, reason: String },
    #[error("module list `{path}` has an entry without a name at index {index}")]
    MissingName { path: String, index: usize },
    #[error("no module source configured: pass `--modules <file>` or list `modules` in the config")]
    NoSource,
}

/// Supplies the ordered list of modules to schedule.
pub trait ModuleSource {
    fn list_supported_modules(&self) -> Result<Vec<Module>, DiscoveryError>;
}

/// Modules read from a YAML or JSON list, e.g. `[{name: puppetlabs-stdlib}]`.
#[derive(Debug, Clone)]
pub struct ModuleListFile {
    path: PathBuf,
}

impl ModuleListFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ModuleSource for ModuleListFile {
    fn list_supported_modules(&self) -> Result<Vec<Module>, DiscoveryError> {
        let path = self.path.display().to_string();
        let raw = fs::read_to_string(&self.path).map_err(|source| DiscoveryError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let modules: Vec<Module> = match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(raw.as_str()).map_err(|error| DiscoveryError::Parse {
                path: path.clone(),
                reason: format!("json decode error: {error}"),
            })?,
            _ => serde_yaml::from_str(raw.as_str()).map_err(|error| DiscoveryError::Parse {
                path: path.clone(),
                reason: format!("yaml decode error: {error}"),
            })?,
        };

        if let Some(index) = modules.iter().position(|module| module.name.is_empty()) {
            return Err(DiscoveryError::MissingName { path, index });
        }
        debug!(path = %path, modules = modules.len(), "module list loaded");
        Ok(modules)
    }
}

/// Modules listed inline, typically from the generator config.
#[derive(Debug, Clone, Default)]
pub struct StaticModules {
    modules: Vec<Module>,
}

impl StaticModules {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }
}

impl ModuleSource for StaticModules {
    fn list_supported_modules(&self) -> Result<Vec<Module>, DiscoveryError> {
        Ok(self.modules.clone())
    }
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
