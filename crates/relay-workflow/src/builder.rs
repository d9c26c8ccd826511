use crate::documents::{non_empty, Parameter, Step, Trigger, WorkflowDocument};
use crate::error::WorkflowError;
use crate::render::{emit, render_workflow};
use crate::validate::{validate_workflow_document, ValidationPolicy};
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing::{debug, error, info, warn};

/// Accumulates a workflow and writes it once.
///
/// `add_*` calls only append; nothing is checked until [`WorkflowBuilder::write`],
/// which consumes the builder so no further additions are possible.
pub trait WorkflowBuilder {
    /// Appends a single-entry `{key: {default, description}}` mapping.
    /// Adding the same key twice keeps both entries.
    fn add_parameter(&mut self, key: &str, default_value: &str, description: &str);

    fn add_trigger(&mut self, trigger: Trigger);

    fn add_step(&mut self, step: Step);

    /// Steps added so far, in insertion order.
    fn steps(&self) -> &[Step];

    /// Validates, then renders to `sink`, or to stdout when `sink` is `None`.
    ///
    /// On validation failure the report goes to stderr and
    /// [`WorkflowError::Validation`] is returned.
    fn write(self, sink: Option<&mut dyn Write>) -> Result<(), WorkflowError>
    where
        Self: Sized;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    document: WorkflowDocument,
    policy: ValidationPolicy,
}

pub fn new_workflow(summary: impl Into<String>) -> Workflow {
    Workflow::new(summary)
}

impl Workflow {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            document: WorkflowDocument::new(summary),
            policy: ValidationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.document.description = non_empty(description);
    }

    pub fn set_homepage(&mut self, homepage: impl Into<String>) {
        self.document.homepage = non_empty(homepage);
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.document.source = non_empty(source);
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.document.tags.push(tag.into());
    }

    pub fn add_local(&mut self, local: BTreeMap<String, String>) {
        self.document.locals.push(local);
    }

    pub fn document(&self) -> &WorkflowDocument {
        &self.document
    }

    /// Validates and renders without writing. On validation failure the
    /// report goes to `report` before [`WorkflowError::Validation`] is returned.
    pub fn render(&self, report: &mut dyn Write) -> Result<String, WorkflowError> {
        if let Err(validation) = validate_workflow_document(&self.document, &self.policy) {
            warn!(violations = validation.len(), "workflow failed validation");
            if let Err(io_error) = write!(report, "{validation}").and_then(|()| report.flush()) {
                error!(error = %io_error, "could not write validation report");
            }
            return Err(WorkflowError::Validation);
        }
        render_workflow(&self.document)
    }

    /// Like [`WorkflowBuilder::write`], with the validation report sent to `report`.
    pub fn write_with_report(
        self,
        sink: Option<&mut dyn Write>,
        report: &mut dyn Write,
    ) -> Result<(), WorkflowError> {
        let rendered = self.render(report)?;
        match sink {
            Some(sink) => emit(sink, &rendered)?,
            None => emit(&mut io::stdout().lock(), &rendered)?,
        }
        info!(
            triggers = self.document.triggers.len(),
            steps = self.document.steps.len(),
            bytes = rendered.len(),
            "workflow written"
        );
        Ok(())
    }
}

impl WorkflowBuilder for Workflow {
    fn add_parameter(&mut self, key: &str, default_value: &str, description: &str) {
        debug!(parameter = key, "add parameter");
        let entry = BTreeMap::from([(key.to_string(), Parameter::new(default_value, description))]);
        self.document.parameters.push(entry);
    }

    fn add_trigger(&mut self, trigger: Trigger) {
        debug!(trigger = %trigger.name, "add trigger");
        self.document.triggers.push(trigger);
    }

    fn add_step(&mut self, step: Step) {
        debug!(step = %step.name, image = %step.image, "add step");
        self.document.steps.push(step);
    }

    fn steps(&self) -> &[Step] {
        &self.document.steps
    }

    fn write(self, sink: Option<&mut dyn Write>) -> Result<(), WorkflowError> {
        self.write_with_report(sink, &mut io::stderr().lock())
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
