//! Codec-level errors for schema object processing
//!
//! Each variant carries enough context for diagnosis (type id, field name,
//! byte offset) and none is ever swallowed: decode either fully succeeds or
//! fails atomically with one of these.

use thiserror::Error;

/// Decode/encode errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    /// Buffer is shorter than a field declares. Always fatal to the current
    /// decode; never retried at this layer.
    #[error("truncated input: need {need} bytes, got {got} at offset {offset} (context: {context})")]
    TruncatedInput {
        need: usize,
        got: usize,
        offset: usize,
        context: String,
    },

    /// Leading type id is not registered. Recoverable: the caller decides
    /// whether to skip the object or abort the stream.
    #[error("unknown type id {type_id:#010x} at offset {offset}")]
    UnknownType { type_id: u32, offset: usize },

    /// A nested object's actual type id disagrees with the manifest-declared
    /// expected type. Indicates schema or version drift; fatal to the decode.
    #[error("type mismatch for field `{field}`: expected {expected:#010x}, got {actual:#010x} at offset {offset}")]
    TypeMismatch {
        field: String,
        expected: u32,
        actual: u32,
        offset: usize,
    },

    /// Malformed manifest or out-of-range presence bit: a configuration
    /// defect, surfaced at registration time wherever detectable.
    #[error("schema error in `{context}`: {detail}")]
    Schema { context: String, detail: String },

    /// Self-referential nesting exceeded the configured bound. Protects
    /// against malicious or corrupt depth-unbounded input.
    #[error("recursion limit exceeded: type {type_id:#010x} nested deeper than {limit} at offset {offset}")]
    RecursionLimitExceeded {
        type_id: u32,
        limit: usize,
        offset: usize,
    },

    /// A string field is not valid UTF-8
    #[error("malformed string in field `{field}` at offset {offset}: not valid UTF-8")]
    MalformedString { field: String, offset: usize },
}

impl CodecError {
    /// Create a TruncatedInput error with reader context
    pub fn truncated(need: usize, got: usize, offset: usize, context: impl Into<String>) -> Self {
        Self::TruncatedInput {
            need,
            got,
            offset,
            context: context.into(),
        }
    }

    /// Create a TypeMismatch error for a nested field
    pub fn type_mismatch(field: impl Into<String>, expected: u32, actual: u32, offset: usize) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
            offset,
        }
    }

    /// Create a Schema error with configuration context
    pub fn schema(context: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Schema {
            context: context.into(),
            detail: detail.into(),
        }
    }

    /// Create a RecursionLimitExceeded error
    pub fn recursion_limit(type_id: u32, limit: usize, offset: usize) -> Self {
        Self::RecursionLimitExceeded {
            type_id,
            limit,
            offset,
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;
