pub mod field_path;
pub mod issues;

pub use field_path::{FieldPath, FieldPathSegment};
pub use issues::{describe_reason, FieldIssue, REASON_NON_EMPTY, REASON_REQUIRED};
