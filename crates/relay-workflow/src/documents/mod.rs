mod step;
mod trigger;
mod workflow;

pub use step::Step;
pub use trigger::{Trigger, TriggerBinding};
pub use workflow::{Parameter, WorkflowDocument, WORKFLOW_API_VERSION, WORKFLOW_KIND};

/// `skip_serializing_if` predicate: `None` and `Some("")` are both left out.
pub(crate) fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

pub(crate) fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
