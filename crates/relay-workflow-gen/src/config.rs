use crate::discovery::Module;
use relay_core::{FieldIssue, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const ENV_PLACEHOLDER_PREFIX: &str = "${env.";
const STEP_NAME_PLACEHOLDER: &str = "{name}";

/// Values injected into the generated workflow. Every field has a default, so
/// an empty config file (or none at all) reproduces the stock metric workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_generator_schema")]
    pub schema: String,
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_module_owner")]
    pub module_owner: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Step name template; `{name}` is replaced by the module name.
    #[serde(default = "default_step_name")]
    pub step_name: String,
    /// Static spec entries copied into every step before `module_owner` and
    /// `module_name` are added.
    #[serde(default = "default_step_spec")]
    pub spec: BTreeMap<String, String>,
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema: default_generator_schema(),
            summary: default_summary(),
            description: None,
            tags: Vec::new(),
            module_owner: default_module_owner(),
            image: default_image(),
            schedule: ScheduleConfig::default(),
            step_name: default_step_name(),
            spec: default_step_spec(),
            parameters: Vec::new(),
            modules: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn step_name_for(&self, module_name: &str) -> String {
        self.step_name.replace(STEP_NAME_PLACEHOLDER, module_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_trigger_name")]
    pub name: String,
    #[serde(rename = "type", default = "default_trigger_type")]
    pub trigger_type: String,
    #[serde(default = "default_cron")]
    pub cron: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            name: default_trigger_name(),
            trigger_type: default_trigger_type(),
            cron: default_cron(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterConfig {
    pub name: String,
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read generator config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("generator config parse failed: {0}")]
    Parse(String),
    #[error("generator config validation failed:{}", render_issues(.0))]
    Validation(Vec<FieldIssue>),
}

pub fn load_generator_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let expanded = expand_env_placeholders(raw.as_str()).map_err(ConfigError::Parse)?;
    let config: GeneratorConfig = if expanded.trim().is_empty() {
        GeneratorConfig::default()
    } else {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(expanded.as_str())
                .map_err(|error| ConfigError::Parse(format!("json decode error: {error}")))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(expanded.as_str())
                .map_err(|error| ConfigError::Parse(format!("yaml decode error: {error}")))?,
            _ => serde_yaml::from_str(expanded.as_str())
                .or_else(|_| serde_json::from_str(expanded.as_str()))
                .map_err(|error| ConfigError::Parse(error.to_string()))?,
        }
    };

    let issues = validate_generator_config(&config);
    if !issues.is_empty() {
        return Err(ConfigError::Validation(issues));
    }
    Ok(config)
}

/// Checks the values the generator cannot work without. The workflow summary
/// is left to the workflow validator.
pub fn validate_generator_config(config: &GeneratorConfig) -> Vec<FieldIssue> {
    let root = FieldPath::root();
    let mut issues = Vec::new();

    if config.schema != default_generator_schema() {
        issues.push(FieldIssue::new(
            "schema",
            "String",
            format!("must be `{}`", default_generator_schema()),
            root.key("schema"),
        ));
    }
    require(&mut issues, &config.module_owner, "module_owner", root.key("module_owner"));
    require(&mut issues, &config.image, "image", root.key("image"));

    let schedule = root.key("schedule");
    require(&mut issues, &config.schedule.name, "name", schedule.key("name"));
    require(&mut issues, &config.schedule.trigger_type, "type", schedule.key("type"));
    require(&mut issues, &config.schedule.cron, "cron", schedule.key("cron"));

    if !config.step_name.contains(STEP_NAME_PLACEHOLDER) {
        issues.push(FieldIssue::new(
            "step_name",
            "String",
            format!("must contain the `{STEP_NAME_PLACEHOLDER}` placeholder"),
            root.key("step_name"),
        ));
    }

    for (index, parameter) in config.parameters.iter().enumerate() {
        let path = root.key("parameters").index(index).key("name");
        require(&mut issues, &parameter.name, "name", path);
    }
    for (index, module) in config.modules.iter().enumerate() {
        let path = root.key("modules").index(index).key("name");
        require(&mut issues, &module.name, "name", path);
    }

    issues
}

fn require(issues: &mut Vec<FieldIssue>, value: &str, field: &str, path: FieldPath) {
    if value.is_empty() {
        issues.push(FieldIssue::required(field, "String", path));
    }
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("\n -> {issue}"))
        .collect::<String>()
}

/// Replaces `${env.NAME}` with the value of `NAME`. Any other `${...}` token is
/// an engine reference expression and is left alone.
fn expand_env_placeholders(input: &str) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    while let Some(start_offset) = input[cursor..].find(ENV_PLACEHOLDER_PREFIX) {
        let start = cursor + start_offset;
        out.push_str(&input[cursor..start]);
        let var_start = start + ENV_PLACEHOLDER_PREFIX.len();
        let Some(end_offset) = input[var_start..].find('}') else {
            return Err("unterminated env placeholder `${env.`".to_string());
        };
        let end = var_start + end_offset;
        let key = &input[var_start..end];
        if key.is_empty() {
            return Err("empty env placeholder `${env.}`".to_string());
        }
        let value = std::env::var(key)
            .map_err(|_| format!("missing env var for placeholder `${{env.{key}}}`"))?;
        out.push_str(value.as_str());
        cursor = end + 1;
    }
    out.push_str(&input[cursor..]);
    Ok(out)
}

fn default_generator_schema() -> String {
    "relay-workflow-gen/0.0.1".to_string()
}

fn default_summary() -> String {
    "A workflow for collecting GitHub metrics.".to_string()
}

fn default_module_owner() -> String {
    "puppetlabs".to_string()
}

fn default_image() -> String {
    "ghcr.io/chelnak/cat-github-metric-collector".to_string()
}

fn default_trigger_name() -> String {
    "schedule".to_string()
}

fn default_trigger_type() -> String {
    "schedule".to_string()
}

fn default_cron() -> String {
    "0 0 * * *".to_string()
}

fn default_step_name() -> String {
    "Metric collection: {name}".to_string()
}

fn default_step_spec() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "connection".to_string(),
            "${connections.gcp.'content-and-tooling-lab'}".to_string(),
        ),
        ("github_token".to_string(), "${secrets.GITHUB_TOKEN}".to_string()),
        (
            "bigquery_project_id".to_string(),
            "${secrets.BIGQUERY_PROJECT}".to_string(),
        ),
    ])
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
