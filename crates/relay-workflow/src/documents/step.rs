use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One unit of work, run in `image` with `spec` as its arguments.
///
/// Spec values may hold `${...}` reference expressions; they are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub spec: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "crate::documents::is_unset")]
    pub when: Option<String>,
}

impl Step {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            ..Self::default()
        }
    }

    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.spec.insert(key.into(), value.into());
        self
    }

    pub fn depends_on(mut self, step_name: impl Into<String>) -> Self {
        self.depends_on.push(step_name.into());
        self
    }

    pub fn with_when(mut self, when: impl Into<String>) -> Self {
        self.when = super::non_empty(when);
        self
    }
}
