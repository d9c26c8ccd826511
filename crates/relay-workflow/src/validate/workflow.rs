use crate::documents::WorkflowDocument;
use relay_core::{FieldIssue, FieldPath, REASON_NON_EMPTY};
use std::fmt::{Display, Formatter};

const TYPE_STRING: &str = "String";
const TYPE_STRING_MAP: &str = "BTreeMap<String, String>";

/// Whether empty `triggers` or `steps` sequences are rejected.
///
/// Both default to `false`: a document with no triggers or no steps is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub require_triggers: bool,
    pub require_steps: bool,
}

/// Every violation found in one pass over a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Could not generate workflow because of the following validation errors:"
        )?;
        for issue in &self.issues {
            writeln!(f, " -> {issue}")?;
        }
        Ok(())
    }
}

pub fn validate_workflow_document(
    document: &WorkflowDocument,
    policy: &ValidationPolicy,
) -> Result<(), ValidationReport> {
    let root = FieldPath::root();
    let mut issues = Vec::new();

    require_string(&mut issues, &document.api_version, "APIVersion", root.key("apiVersion"));
    require_string(&mut issues, &document.kind, "Kind", root.key("kind"));
    require_string(&mut issues, &document.summary, "Summary", root.key("summary"));

    let triggers_path = root.key("triggers");
    if policy.require_triggers && document.triggers.is_empty() {
        issues.push(FieldIssue::new(
            "Triggers",
            "Vec<Trigger>",
            REASON_NON_EMPTY,
            triggers_path.clone(),
        ));
    }
    for (index, trigger) in document.triggers.iter().enumerate() {
        let base = triggers_path.index(index);
        require_string(&mut issues, &trigger.name, "Name", base.key("name"));
        if trigger.source.is_empty() {
            issues.push(FieldIssue::required("Source", TYPE_STRING_MAP, base.key("source")));
        }
    }

    let steps_path = root.key("steps");
    if policy.require_steps && document.steps.is_empty() {
        issues.push(FieldIssue::new(
            "Steps",
            "Vec<Step>",
            REASON_NON_EMPTY,
            steps_path.clone(),
        ));
    }
    for (index, step) in document.steps.iter().enumerate() {
        let base = steps_path.index(index);
        require_string(&mut issues, &step.name, "Name", base.key("name"));
        require_string(&mut issues, &step.image, "Image", base.key("image"));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationReport { issues })
    }
}

fn require_string(issues: &mut Vec<FieldIssue>, value: &str, field: &str, path: FieldPath) {
    if value.is_empty() {
        issues.push(FieldIssue::required(field, TYPE_STRING, path));
    }
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
