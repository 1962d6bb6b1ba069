use thiserror::Error;

use crate::SchemaError;

/// Unified error covering schema JSON (de)serialization, authoring-time
/// validation, and file I/O.
///
/// Returned by convenience methods like
/// [`FormSchema::from_json()`](crate::FormSchema::from_json) and
/// [`FormSchema::from_file()`](crate::FormSchema::from_file).
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
