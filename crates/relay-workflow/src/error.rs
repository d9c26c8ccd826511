#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// Required fields were missing. The full report has already been written
    /// to the report sink, so callers should not print this value again.
    #[error("validation error")]
    Validation,
    #[error("workflow serialization failed: {0}")]
    Serialize(#[source] serde_yaml::Error),
    #[error("workflow parse failed: {0}")]
    Parse(#[source] serde_yaml::Error),
    #[error("write workflow failed: {0}")]
    Io(#[source] std::io::Error),
}

impl WorkflowError {
    pub fn is_validation(&self) -> bool {
        matches!(self, WorkflowError::Validation)
    }
}
