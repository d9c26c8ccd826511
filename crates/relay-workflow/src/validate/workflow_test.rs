use super::{validate_workflow_document, ValidationPolicy};
use crate::documents::{Step, Trigger, WorkflowDocument};

fn valid_document() -> WorkflowDocument {
    let mut document = WorkflowDocument::new("A workflow for collecting GitHub metrics.");
    document.triggers.push(Trigger::schedule("schedule", "0 0 * * *"));
    document.steps.push(Step::new("collect", "alpine:latest"));
    document
}

fn issue_paths(document: &WorkflowDocument, policy: &ValidationPolicy) -> Vec<String> {
    match validate_workflow_document(document, policy) {
        Ok(()) => Vec::new(),
        Err(report) => report
            .issues()
            .iter()
            .map(|issue| issue.field_path.to_string())
            .collect(),
    }
}

#[test]
fn complete_document_passes() {
    assert!(validate_workflow_document(&valid_document(), &ValidationPolicy::default()).is_ok());
}

#[test]
fn collects_every_missing_field_in_document_order() {
    let mut document = valid_document();
    document.api_version.clear();
    document.summary.clear();
    document.triggers.push(Trigger::new(""));
    document.steps.push(Step::new("", ""));

    let paths = issue_paths(&document, &ValidationPolicy::default());
    assert_eq!(
        paths,
        vec![
            "$.apiVersion",
            "$.summary",
            "$.triggers[1].name",
            "$.triggers[1].source",
            "$.steps[1].name",
            "$.steps[1].image",
        ]
    );
}

#[test]
fn missing_kind_is_reported() {
    let mut document = valid_document();
    document.kind.clear();

    let report = validate_workflow_document(&document, &ValidationPolicy::default())
        .expect_err("must fail");
    assert!(!report.is_empty());
    assert_eq!(report.len(), 1);
    assert_eq!(report.issues()[0].field, "Kind");
}

#[test]
fn missing_step_image_names_the_image_field() {
    let mut document = valid_document();
    document.steps.push(Step::new("build", ""));

    let report = validate_workflow_document(&document, &ValidationPolicy::default())
        .expect_err("must fail");
    let text = report.to_string();
    assert!(text.starts_with("Could not generate workflow because of the following validation errors:\n"));
    assert!(text.contains(" -> field Image [String] was missing from the payload ($.steps[1].image)\n"));
}

#[test]
fn empty_trigger_source_uses_map_type_name() {
    let mut document = valid_document();
    document.triggers[0].source.clear();

    let report = validate_workflow_document(&document, &ValidationPolicy::default())
        .expect_err("must fail");
    assert_eq!(report.issues()[0].field, "Source");
    assert_eq!(report.issues()[0].field_type, "BTreeMap<String, String>");
}

#[test]
fn empty_sequences_pass_under_default_policy() {
    let document = WorkflowDocument::new("nothing scheduled");
    assert!(validate_workflow_document(&document, &ValidationPolicy::default()).is_ok());
}

#[test]
fn strict_policy_rejects_empty_sequences() {
    let document = WorkflowDocument::new("nothing scheduled");
    let policy = ValidationPolicy {
        require_triggers: true,
        require_steps: true,
    };

    let report = validate_workflow_document(&document, &policy).expect_err("must fail");
    let lines = report
        .issues()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "field Triggers [Vec<Trigger>] must contain at least one entry ($.triggers)",
            "field Steps [Vec<Step>] must contain at least one entry ($.steps)",
        ]
    );
}

#[test]
fn dangling_depends_on_is_not_checked() {
    let mut document = valid_document();
    document.steps.push(Step::new("report", "alpine:latest").depends_on("missing"));

    assert!(validate_workflow_document(&document, &ValidationPolicy::default()).is_ok());
}
