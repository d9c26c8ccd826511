use crate::field_path::FieldPath;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const REASON_REQUIRED: &str = "required";
pub const REASON_NON_EMPTY: &str = "non_empty";

/// One field-level violation found while checking a document.
///
/// `field` and `field_type` name the offending struct field and its Rust type,
/// `reason` is a short code translated by [`describe_reason`] when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub field_type: String,
    pub reason: String,
    pub field_path: FieldPath,
}

impl FieldIssue {
    pub fn new(
        field: impl Into<String>,
        field_type: impl Into<String>,
        reason: impl Into<String>,
        field_path: FieldPath,
    ) -> Self {
        Self {
            field: field.into(),
            field_type: field_type.into(),
            reason: reason.into(),
            field_path,
        }
    }

    pub fn required(field: impl Into<String>, field_type: impl Into<String>, field_path: FieldPath) -> Self {
        Self::new(field, field_type, REASON_REQUIRED, field_path)
    }

    pub fn reason_text(&self) -> &str {
        describe_reason(self.reason.as_str())
    }
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field {} [{}] {} ({})",
            self.field,
            self.field_type,
            self.reason_text(),
            self.field_path
        )
    }
}

/// Maps a reason code to readable text. Unknown codes are returned as given.
pub fn describe_reason(code: &str) -> &str {
    match code {
        REASON_REQUIRED => "was missing from the payload",
        REASON_NON_EMPTY => "must contain at least one entry",
        other => other,
    }
}

#[cfg(test)]
#[path = "issues_test.rs"]
mod tests;
