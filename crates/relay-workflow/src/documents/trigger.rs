use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Starts a workflow run.
///
/// `source` is an open map (`type: schedule`, `schedule: "0 0 * * *"`, or the
/// push/webhook equivalents) so engine features unknown here still round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub name: String,
    #[serde(default)]
    pub source: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "binding_is_unset")]
    pub binding: Option<TriggerBinding>,
    #[serde(default, skip_serializing_if = "crate::documents::is_unset")]
    pub when: Option<String>,
}

impl Trigger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Schedule trigger firing on the given cron expression.
    pub fn schedule(name: impl Into<String>, cron: impl Into<String>) -> Self {
        Self::new(name)
            .with_source("type", "schedule")
            .with_source("schedule", cron)
    }

    pub fn with_source(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.source.insert(key.into(), value.into());
        self
    }

    pub fn with_binding(mut self, binding: TriggerBinding) -> Self {
        self.binding = Some(binding);
        self
    }

    pub fn with_when(mut self, when: impl Into<String>) -> Self {
        self.when = super::non_empty(when);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerBinding {
    #[serde(default, skip_serializing_if = "crate::documents::is_unset")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
}

impl TriggerBinding {
    pub fn is_empty(&self) -> bool {
        super::is_unset(&self.key) && self.parameters.is_empty()
    }

    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: super::non_empty(key),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

fn binding_is_unset(binding: &Option<TriggerBinding>) -> bool {
    binding.as_ref().map_or(true, TriggerBinding::is_empty)
}
