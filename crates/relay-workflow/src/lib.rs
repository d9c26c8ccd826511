//! Builds Relay workflow documents and renders them as YAML.
//!
//! A [`Workflow`] starts from a summary, accumulates triggers, steps and
//! parameters, and is consumed by [`WorkflowBuilder::write`], which validates
//! the document before rendering it to the given sink.

pub mod builder;
pub mod documents;
pub mod error;
pub mod render;
pub mod validate;

pub use builder::{new_workflow, Workflow, WorkflowBuilder};
pub use documents::{
    Parameter, Step, Trigger, TriggerBinding, WorkflowDocument, WORKFLOW_API_VERSION,
    WORKFLOW_KIND,
};
pub use error::WorkflowError;
pub use render::{parse_workflow_yaml, render_workflow};
pub use validate::{validate_workflow_document, ValidationPolicy, ValidationReport};
