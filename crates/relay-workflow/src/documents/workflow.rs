use super::{Step, Trigger};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const WORKFLOW_API_VERSION: &str = "v1";
pub const WORKFLOW_KIND: &str = "Workflow";

/// Root of a Relay workflow document.
///
/// Field order is the rendered key order. Optional fields are left out of the
/// output when unset or empty, `triggers` and `steps` are always written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDocument {
    pub api_version: String,
    pub kind: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "crate::documents::is_unset")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "crate::documents::is_unset")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "crate::documents::is_unset")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locals: Vec<BTreeMap<String, String>>,
    /// Each entry holds exactly one parameter keyed by its name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<BTreeMap<String, Parameter>>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl WorkflowDocument {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            api_version: WORKFLOW_API_VERSION.to_string(),
            kind: WORKFLOW_KIND.to_string(),
            summary: summary.into(),
            description: None,
            homepage: None,
            source: None,
            tags: Vec::new(),
            locals: Vec::new(),
            parameters: Vec::new(),
            triggers: Vec::new(),
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "crate::documents::is_unset")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "crate::documents::is_unset")]
    pub description: Option<String>,
}

impl Parameter {
    pub fn new(default: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            default: super::non_empty(default),
            description: super::non_empty(description),
        }
    }
}
