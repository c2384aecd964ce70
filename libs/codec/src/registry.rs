//! # Schema Object Registry
//!
//! ## Purpose
//!
//! Maps 32-bit type ids to their static field manifests, enabling
//! polymorphic decoding of a value whose concrete type is only known by
//! reading its leading identifier. Registration is append-only, happens at
//! startup, and validates each manifest eagerly: a malformed schema table
//! fails fast with `SchemaError` here rather than corrupting a decode later.
//!
//! ## Concurrency
//!
//! After construction the registry is read-only; `&SchemaRegistry` is freely
//! shared across worker threads with no locking, provided registration
//! happens-before the first decode. The process-wide [`global`] registry is
//! initialized once through `once_cell`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tl_types::{all_manifests, FieldKind, TypeManifest};

use crate::constants::MAX_PRESENCE_BITS;
use crate::error::{CodecError, CodecResult};

/// Immutable-after-startup mapping from type id to manifest
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    by_id: HashMap<u32, &'static TypeManifest>,
}

impl SchemaRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with every built-in schema type
    pub fn standard() -> CodecResult<Self> {
        let mut registry = Self::new();
        for manifest in all_manifests() {
            registry.register(manifest)?;
        }
        Ok(registry)
    }

    /// Register a type's manifest, validating it first
    pub fn register(&mut self, manifest: &'static TypeManifest) -> CodecResult<()> {
        validate_manifest(manifest)?;
        if self.by_id.contains_key(&manifest.type_id) {
            return Err(CodecError::schema(
                manifest.name,
                format!("duplicate registration for type id {:#010x}", manifest.type_id),
            ));
        }
        self.by_id.insert(manifest.type_id, manifest);
        Ok(())
    }

    /// Resolve a type id read off the wire
    pub fn resolve(&self, type_id: u32) -> Option<&'static TypeManifest> {
        self.by_id.get(&type_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Process-wide registry of the built-in schema types
///
/// The built-in tables are generated from checked declarations; a validation
/// failure here is a defect in those tables, not a runtime condition.
pub fn global() -> &'static SchemaRegistry {
    static GLOBAL: Lazy<SchemaRegistry> =
        Lazy::new(|| SchemaRegistry::standard().expect("built-in schema tables are valid"));
    &GLOBAL
}

/// Statically check one manifest
///
/// Rejects duplicate field names, duplicate or out-of-range presence bits,
/// zero-width kinds without a bit, zero-width sequence elements, and
/// always-present fields declared after optional ones (the wire order the
/// codec relies on).
fn validate_manifest(manifest: &TypeManifest) -> CodecResult<()> {
    let mut seen_bits: u64 = 0;
    let mut seen_optional = false;

    for (i, field) in manifest.fields.iter().enumerate() {
        if manifest.fields[..i].iter().any(|f| f.name == field.name) {
            return Err(CodecError::schema(
                manifest.name,
                format!("duplicate field name `{}`", field.name),
            ));
        }

        match field.bit {
            Some(bit) => {
                if bit >= MAX_PRESENCE_BITS {
                    return Err(CodecError::schema(
                        manifest.name,
                        format!("field `{}` uses presence bit {bit}, maximum is {}", field.name, MAX_PRESENCE_BITS - 1),
                    ));
                }
                if seen_bits & (1 << bit) != 0 {
                    return Err(CodecError::schema(
                        manifest.name,
                        format!("presence bit {bit} bound to more than one field"),
                    ));
                }
                seen_bits |= 1 << bit;
                seen_optional = true;
            }
            None => {
                if seen_optional {
                    return Err(CodecError::schema(
                        manifest.name,
                        format!("always-present field `{}` declared after optional fields", field.name),
                    ));
                }
                if field.kind == FieldKind::Flag {
                    return Err(CodecError::schema(
                        manifest.name,
                        format!("zero-width field `{}` must be bound to a presence bit", field.name),
                    ));
                }
            }
        }

        check_kind_shape(manifest.name, field.name, &field.kind)?;
    }

    Ok(())
}

fn check_kind_shape(type_name: &str, field: &str, kind: &FieldKind) -> CodecResult<()> {
    if let FieldKind::Seq(elem) = kind {
        if **elem == FieldKind::Flag {
            return Err(CodecError::schema(
                type_name,
                format!("sequence field `{field}` cannot have zero-width elements"),
            ));
        }
        check_kind_shape(type_name, field, elem)?;
    }
    Ok(())
}
