use super::{execute_generate, generate_workflow, GeneratorError};
use crate::cli::Cli;
use crate::config::{GeneratorConfig, ParameterConfig};
use crate::discovery::{DiscoveryError, Module, ModuleSource, StaticModules};
use relay_workflow::{parse_workflow_yaml, WorkflowBuilder};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

struct FailingSource;

impl ModuleSource for FailingSource {
    fn list_supported_modules(&self) -> Result<Vec<Module>, DiscoveryError> {
        Err(DiscoveryError::NoSource)
    }
}

#[test]
fn one_step_per_module_with_injected_spec() {
    let config = GeneratorConfig::default();
    let source = StaticModules::new(vec![
        Module::new("puppetlabs-stdlib"),
        Module::new("puppetlabs-apache"),
    ]);

    let workflow = generate_workflow(&config, &source).expect("must generate");
    let steps = workflow.steps();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].name, "Metric collection: puppetlabs-stdlib");
    assert_eq!(steps[1].name, "Metric collection: puppetlabs-apache");
    assert_eq!(steps[0].image, "ghcr.io/chelnak/cat-github-metric-collector");

    let spec = &steps[1].spec;
    assert_eq!(spec.get("module_owner").map(String::as_str), Some("puppetlabs"));
    assert_eq!(spec.get("module_name").map(String::as_str), Some("puppetlabs-apache"));
    assert_eq!(
        spec.get("connection").map(String::as_str),
        Some("${connections.gcp.'content-and-tooling-lab'}")
    );
    assert_eq!(
        spec.get("bigquery_project_id").map(String::as_str),
        Some("${secrets.BIGQUERY_PROJECT}")
    );

    let document = workflow.document();
    assert_eq!(document.triggers.len(), 1);
    assert_eq!(document.triggers[0].name, "schedule");
    assert_eq!(
        document.triggers[0].source.get("schedule").map(String::as_str),
        Some("0 0 * * *")
    );
}

#[test]
fn config_metadata_and_parameters_reach_the_document() {
    let config = GeneratorConfig {
        description: Some("nightly".to_string()),
        tags: vec!["metrics".to_string()],
        parameters: vec![ParameterConfig {
            name: "dry_run".to_string(),
            default: "false".to_string(),
            description: String::new(),
        }],
        ..GeneratorConfig::default()
    };

    let workflow = generate_workflow(&config, &StaticModules::default()).expect("must generate");
    let document = workflow.document();
    assert_eq!(document.description.as_deref(), Some("nightly"));
    assert_eq!(document.tags, vec!["metrics"]);
    let parameter = &document.parameters[0]["dry_run"];
    assert_eq!(parameter.default.as_deref(), Some("false"));
    assert_eq!(parameter.description, None);
    assert!(document.steps.is_empty());
}

#[test]
fn discovery_failure_propagates() {
    let error = generate_workflow(&GeneratorConfig::default(), &FailingSource)
        .err()
        .expect("must fail");
    assert!(matches!(error, GeneratorError::Discovery(DiscoveryError::NoSource)));
    assert!(!error.is_validation());
}

#[test]
fn execute_writes_workflow_to_output_file() {
    let modules = write_temp_file("modules", "yaml", "- name: foo\n- name: bar\n");
    let output = temp_path("workflow", "yaml");

    let scheduled = execute_generate(&Cli {
        config: None,
        modules: Some(modules),
        output: Some(output.clone()),
        summary: None,
    })
    .expect("must generate");
    assert_eq!(
        scheduled,
        vec!["Metric collection: foo", "Metric collection: bar"]
    );

    let rendered = fs::read_to_string(&output).expect("output must exist");
    let parsed = parse_workflow_yaml(&rendered).expect("must parse");
    assert_eq!(parsed.summary, "A workflow for collecting GitHub metrics.");
    assert_eq!(parsed.steps.len(), 2);
    assert_eq!(parsed.steps[0].spec.get("module_name").map(String::as_str), Some("foo"));
}

#[test]
fn execute_uses_config_modules_when_no_list_is_given() {
    let config = write_temp_file("config", "yaml", "modules:\n  - name: inline\n");
    let output = temp_path("workflow-inline", "yaml");

    let scheduled = execute_generate(&Cli {
        config: Some(config),
        modules: None,
        output: Some(output),
        summary: Some("inline modules".to_string()),
    })
    .expect("must generate");
    assert_eq!(scheduled, vec!["Metric collection: inline"]);
}

#[test]
fn execute_without_module_source_fails() {
    let error = execute_generate(&Cli {
        config: None,
        modules: None,
        output: None,
        summary: None,
    })
    .expect_err("must fail");
    assert!(matches!(error, GeneratorError::Discovery(DiscoveryError::NoSource)));
}

#[test]
fn empty_summary_surfaces_validation_sentinel() {
    let modules = write_temp_file("modules-sentinel", "yaml", "- name: foo\n");
    let output = temp_path("workflow-sentinel", "yaml");

    let error = execute_generate(&Cli {
        config: None,
        modules: Some(modules),
        output: Some(output),
        summary: Some(String::new()),
    })
    .expect_err("must fail");
    assert!(error.is_validation());
}

#[test]
fn validation_failure_leaves_existing_output_untouched() {
    let modules = write_temp_file("modules-keep", "yaml", "- name: foo\n");
    let output = write_temp_file("workflow-keep", "yaml", "PREVIOUS WORKFLOW\n");

    let error = execute_generate(&Cli {
        config: None,
        modules: Some(modules),
        output: Some(output.clone()),
        summary: Some(String::new()),
    })
    .expect_err("must fail");
    assert!(error.is_validation());
    assert_eq!(
        fs::read_to_string(&output).expect("output must still exist"),
        "PREVIOUS WORKFLOW\n"
    );
}

#[test]
fn unwritable_output_path_is_reported() {
    let modules = write_temp_file("modules-unwritable", "yaml", "- name: foo\n");

    let error = execute_generate(&Cli {
        config: None,
        modules: Some(modules),
        output: Some(PathBuf::from("/nonexistent/dir/workflow.yaml")),
        summary: None,
    })
    .expect_err("must fail");
    assert!(matches!(error, GeneratorError::WriteOutput { .. }));
    assert!(!error.is_validation());
}

fn temp_path(prefix: &str, extension: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time must be monotonic")
        .as_nanos();
    path.push(format!(
        "relay-workflow-gen-{prefix}-{}-{nanos}.{extension}",
        std::process::id()
    ));
    path
}

fn write_temp_file(prefix: &str, extension: &str, content: &str) -> PathBuf {
    let path = temp_path(prefix, extension);
    fs::write(&path, content).expect("must write temp file");
    path
}
