use crate::documents::WorkflowDocument;
use crate::error::WorkflowError;
use std::io::Write;

/// Serializes a document into its YAML wire form.
///
/// Does not validate; [`crate::WorkflowBuilder::write`] runs the validator first.
pub fn render_workflow(document: &WorkflowDocument) -> Result<String, WorkflowError> {
    serde_yaml::to_string(document).map_err(WorkflowError::Serialize)
}

pub fn parse_workflow_yaml(input: &str) -> Result<WorkflowDocument, WorkflowError> {
    serde_yaml::from_str(input).map_err(WorkflowError::Parse)
}

/// Writes the rendered document followed by a newline and flushes the sink.
pub(crate) fn emit(sink: &mut dyn Write, rendered: &str) -> Result<(), WorkflowError> {
    sink.write_all(rendered.as_bytes())
        .and_then(|()| sink.write_all(b"\n"))
        .and_then(|()| sink.flush())
        .map_err(WorkflowError::Io)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
