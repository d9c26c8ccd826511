use crate::cli::Cli;
use crate::config::{load_generator_config, ConfigError, GeneratorConfig};
use crate::discovery::{DiscoveryError, ModuleListFile, ModuleSource, StaticModules};
use relay_workflow::{new_workflow, Step, Trigger, Workflow, WorkflowBuilder, WorkflowError};
use std::fs;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
    #[error("write output file failed `{path}`: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    /// True when the workflow validator already printed its report.
    pub fn is_validation(&self) -> bool {
        matches!(self, GeneratorError::Workflow(error) if error.is_validation())
    }
}

/// Builds the workflow: one schedule trigger and one step per discovered module.
pub fn generate_workflow(
    config: &GeneratorConfig,
    source: &dyn ModuleSource,
) -> Result<Workflow, GeneratorError> {
    let modules = source.list_supported_modules()?;
    info!(modules = modules.len(), "discovered supported modules");

    let mut workflow = new_workflow(config.summary.as_str());
    if let Some(description) = &config.description {
        workflow.set_description(description.as_str());
    }
    for tag in &config.tags {
        workflow.add_tag(tag.as_str());
    }
    for parameter in &config.parameters {
        workflow.add_parameter(&parameter.name, &parameter.default, &parameter.description);
    }

    workflow.add_trigger(
        Trigger::new(config.schedule.name.as_str())
            .with_source("type", config.schedule.trigger_type.as_str())
            .with_source("schedule", config.schedule.cron.as_str()),
    );

    for module in &modules {
        let mut step = Step::new(config.step_name_for(&module.name), config.image.as_str());
        step.spec = config.spec.clone();
        step.spec
            .insert("module_owner".to_string(), config.module_owner.clone());
        step.spec.insert("module_name".to_string(), module.name.clone());
        debug!(module = %module.name, step = %step.name, "scheduling module");
        workflow.add_step(step);
    }

    Ok(workflow)
}

/// Runs one generation and returns the names of the scheduled steps.
pub fn execute_generate(command: &Cli) -> Result<Vec<String>, GeneratorError> {
    let mut config = match &command.config {
        Some(path) => load_generator_config(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(summary) = &command.summary {
        config.summary = summary.clone();
    }

    let source: Box<dyn ModuleSource> = match &command.modules {
        Some(path) => Box::new(ModuleListFile::new(path)),
        None if !config.modules.is_empty() => Box::new(StaticModules::new(config.modules.clone())),
        None => return Err(DiscoveryError::NoSource.into()),
    };

    let workflow = generate_workflow(&config, source.as_ref())?;
    let scheduled = workflow
        .steps()
        .iter()
        .map(|step| step.name.clone())
        .collect::<Vec<_>>();

    match &command.output {
        Some(path) => {
            // The output file is only opened once validation and rendering succeed.
            let mut rendered = Vec::new();
            workflow.write(Some(&mut rendered))?;
            fs::write(path, &rendered).map_err(|source| GeneratorError::WriteOutput {
                path: path.display().to_string(),
                source,
            })?;
        }
        None => workflow.write(None)?,
    }
    Ok(scheduled)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
