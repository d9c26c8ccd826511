mod workflow;

pub use workflow::{validate_workflow_document, ValidationPolicy, ValidationReport};
