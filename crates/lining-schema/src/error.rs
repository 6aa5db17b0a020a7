//! Error types for schema decoding.

use thiserror::Error;

/// Result alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while decoding project text into the schema model.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The input text was not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value that must be a JSON object was something else.
    #[error("`{entity}` must be a JSON object")]
    NotAnObject {
        /// Entity type being decoded.
        entity: &'static str,
    },

    /// A required field was absent from the input.
    #[error("`{entity}`: missing required field `{field}`")]
    MissingField {
        /// Entity type being decoded.
        entity: &'static str,
        /// Wire name of the missing field.
        field: &'static str,
    },

    /// A field was present but explicitly null.
    ///
    /// Null is never a valid value in this schema: optional fields are
    /// simply absent, and required fields carry a real value.
    #[error("`{entity}`: field `{field}` must not be null")]
    NullField {
        /// Entity type being decoded.
        entity: &'static str,
        /// Wire name of the null field.
        field: &'static str,
    },

    /// A field held a value of the wrong JSON type.
    #[error("`{entity}`: field `{field}` expected {expected}")]
    WrongType {
        /// Entity type being decoded.
        entity: &'static str,
        /// Wire name of the field.
        field: &'static str,
        /// Description of the expected type.
        expected: &'static str,
    },
}
