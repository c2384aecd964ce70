//! Error types for typed-object construction and access
//!
//! Covers failures in the object model layer: wrapping a generic object in
//! the wrong typed view, and building objects that violate their manifest.
//! Wire-level failures (truncation, unknown ids) live in the codec crate.

use thiserror::Error;

/// Errors that can occur when constructing or viewing typed objects
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A typed view was applied to an object of a different schema type
    #[error("wrong object type: expected `{expected}`, got `{actual}`")]
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },

    /// A builder referenced a field name the manifest does not declare
    #[error("unknown field `{field}` on type `{type_name}`")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    /// A field value does not match the wire kind declared in the manifest
    #[error("kind mismatch for field `{field}` on type `{type_name}`")]
    KindMismatch {
        type_name: &'static str,
        field: &'static str,
    },

    /// An always-present field was left unset
    #[error("missing required field `{field}` on type `{type_name}`")]
    MissingRequired {
        type_name: &'static str,
        field: &'static str,
    },

    /// A nested object carries a type id other than the one the manifest declares
    #[error("nested type mismatch for field `{field}` on type `{type_name}`: expected {expected:#010x}, got {actual:#010x}")]
    NestedTypeMismatch {
        type_name: &'static str,
        field: &'static str,
        expected: u32,
        actual: u32,
    },

    /// Field storage length disagrees with the manifest entry count
    #[error("field storage for type `{type_name}` has {got} slots, manifest declares {expected}")]
    ArityMismatch {
        type_name: &'static str,
        expected: usize,
        got: usize,
    },
}
