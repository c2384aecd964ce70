//! # Generic Decoded-Object Storage
//!
//! ## Purpose
//!
//! In-memory representation of one decoded schema object: a manifest pointer
//! plus one `Option<Value>` slot per manifest entry, aligned by position.
//! Every `Object` in existence has passed `Object::from_parts` validation,
//! so typed views may rely on required fields being present with the right
//! kinds. Objects are immutable value objects; changing a field means
//! building a new instance.
//!
//! Typed views and builders (see `schema`) are thin layers over this storage;
//! the codec crate reads and writes it through the same manifests.

use crate::common::errors::TypeError;
use crate::schema::{FieldKind, TypeManifest};

/// One decoded field value
///
/// `True` is the zero-width boolean kind: such fields are never stored with a
/// `false` payload, absence *is* false.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Double(f64),
    Str(String),
    Bytes(Vec<u8>),
    Object(Object),
    Seq(Vec<Value>),
    True,
}

impl Value {
    /// Name of the variant, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Double(_) => "double",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Object(_) => "object",
            Value::Seq(_) => "seq",
            Value::True => "flag",
        }
    }
}

/// One concrete schema object instance
///
/// Field storage is positional: slot *i* holds the value for manifest entry
/// *i*, or `None` when the field is absent. The manifest itself is static
/// shared data, never copied per instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    manifest: &'static TypeManifest,
    fields: Box<[Option<Value>]>,
}

impl Object {
    /// Assemble an object from positional field storage, validating it
    /// against the manifest
    ///
    /// This is the single construction path: the codec and every typed
    /// builder funnel through it, so no reachable `Object` violates its
    /// manifest. Checks slot count, required-field presence, value kinds
    /// (recursively through sequences), nested type ids, and the zero-width
    /// boolean policy.
    pub fn from_parts(
        manifest: &'static TypeManifest,
        fields: Vec<Option<Value>>,
    ) -> Result<Self, TypeError> {
        if fields.len() != manifest.fields.len() {
            return Err(TypeError::ArityMismatch {
                type_name: manifest.name,
                expected: manifest.fields.len(),
                got: fields.len(),
            });
        }

        for (def, slot) in manifest.fields.iter().zip(&fields) {
            match slot {
                Some(value) => check_kind(manifest.name, def.name, value, &def.kind)?,
                None if def.bit.is_none() => {
                    return Err(TypeError::MissingRequired {
                        type_name: manifest.name,
                        field: def.name,
                    });
                }
                None => {}
            }
        }

        Ok(Self {
            manifest,
            fields: fields.into_boxed_slice(),
        })
    }

    /// Static manifest this object was decoded or built against
    pub fn manifest(&self) -> &'static TypeManifest {
        self.manifest
    }

    /// 32-bit type id (the wire discriminant)
    pub fn type_id(&self) -> u32 {
        self.manifest.type_id
    }

    /// Schema name of the type
    pub fn type_name(&self) -> &'static str {
        self.manifest.name
    }

    /// Value at a manifest position, if present
    pub fn field(&self, index: usize) -> Option<&Value> {
        self.fields.get(index).and_then(|slot| slot.as_ref())
    }

    /// Value by field name, if the manifest declares it and it is present
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.manifest.index_of(name).and_then(|i| self.field(i))
    }

    /// Present `i32` field by name
    pub fn int_field(&self, name: &str) -> Option<i32> {
        match self.get(name) {
            Some(Value::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Present `i64` field by name
    pub fn long_field(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Long(v)) => Some(*v),
            _ => None,
        }
    }

    /// Present `f64` field by name
    pub fn double_field(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Double(v)) => Some(*v),
            _ => None,
        }
    }

    /// Present string field by name
    pub fn str_field(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Str(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Present byte-buffer field by name
    pub fn bytes_field(&self, name: &str) -> Option<&[u8]> {
        match self.get(name) {
            Some(Value::Bytes(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Present nested-object field by name
    pub fn object_field(&self, name: &str) -> Option<&Object> {
        match self.get(name) {
            Some(Value::Object(v)) => Some(v),
            _ => None,
        }
    }

    /// Present sequence field by name
    pub fn seq_field(&self, name: &str) -> Option<&[Value]> {
        match self.get(name) {
            Some(Value::Seq(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Zero-width boolean field by name: absence is `false`
    pub fn flag_field(&self, name: &str) -> bool {
        matches!(self.get(name), Some(Value::True))
    }

    // Required-field access for generated views. `from_parts` guarantees
    // required fields are present with matching kinds, so a miss here is a
    // defect in the schema tables, not a runtime condition.

    #[doc(hidden)]
    pub fn required_int(&self, name: &str) -> i32 {
        match self.get(name) {
            Some(Value::Int(v)) => *v,
            _ => panic!("required int field `{name}` missing on validated `{}`", self.manifest.name),
        }
    }

    #[doc(hidden)]
    pub fn required_long(&self, name: &str) -> i64 {
        match self.get(name) {
            Some(Value::Long(v)) => *v,
            _ => panic!("required long field `{name}` missing on validated `{}`", self.manifest.name),
        }
    }

    #[doc(hidden)]
    pub fn required_double(&self, name: &str) -> f64 {
        match self.get(name) {
            Some(Value::Double(v)) => *v,
            _ => panic!("required double field `{name}` missing on validated `{}`", self.manifest.name),
        }
    }

    #[doc(hidden)]
    pub fn required_str(&self, name: &str) -> &str {
        match self.get(name) {
            Some(Value::Str(v)) => v.as_str(),
            _ => panic!("required string field `{name}` missing on validated `{}`", self.manifest.name),
        }
    }

    #[doc(hidden)]
    pub fn required_bytes(&self, name: &str) -> &[u8] {
        match self.get(name) {
            Some(Value::Bytes(v)) => v.as_slice(),
            _ => panic!("required bytes field `{name}` missing on validated `{}`", self.manifest.name),
        }
    }

    #[doc(hidden)]
    pub fn required_object(&self, name: &str) -> &Object {
        match self.get(name) {
            Some(Value::Object(v)) => v,
            _ => panic!("required object field `{name}` missing on validated `{}`", self.manifest.name),
        }
    }

    #[doc(hidden)]
    pub fn required_seq(&self, name: &str) -> &[Value] {
        match self.get(name) {
            Some(Value::Seq(v)) => v.as_slice(),
            _ => panic!("required seq field `{name}` missing on validated `{}`", self.manifest.name),
        }
    }
}

/// Validate a single value against its declared wire kind
fn check_kind(
    type_name: &'static str,
    field: &'static str,
    value: &Value,
    kind: &FieldKind,
) -> Result<(), TypeError> {
    let ok = match (value, kind) {
        (Value::Int(_), FieldKind::Int) => true,
        (Value::Long(_), FieldKind::Long) => true,
        (Value::Double(_), FieldKind::Double) => true,
        (Value::Str(_), FieldKind::Str) => true,
        (Value::Bytes(_), FieldKind::Bytes) => true,
        (Value::True, FieldKind::Flag) => true,
        (Value::Object(obj), FieldKind::Object { expected }) => {
            if obj.type_id() != *expected {
                return Err(TypeError::NestedTypeMismatch {
                    type_name,
                    field,
                    expected: *expected,
                    actual: obj.type_id(),
                });
            }
            true
        }
        (Value::Seq(items), FieldKind::Seq(elem)) => {
            for item in items {
                check_kind(type_name, field, item, elem)?;
            }
            true
        }
        _ => false,
    };

    if ok {
        Ok(())
    } else {
        Err(TypeError::KindMismatch { type_name, field })
    }
}

/// Generic positional builder over a manifest
///
/// Typed builders wrap this; it records the first problem it encounters and
/// surfaces it from `build`, so setter chains stay infallible. Every built
/// object passes `Object::from_parts`, which is what makes the builder unable
/// to produce an object the codec could not have decoded.
#[derive(Debug)]
pub struct ObjectBuilder {
    manifest: &'static TypeManifest,
    fields: Vec<Option<Value>>,
    error: Option<TypeError>,
}

impl ObjectBuilder {
    /// Start building an instance of the given type
    pub fn new(manifest: &'static TypeManifest) -> Self {
        Self {
            manifest,
            fields: vec![None; manifest.fields.len()],
            error: None,
        }
    }

    /// Set a field by manifest name, replacing any previous value
    pub fn set(mut self, name: &str, value: Value) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.manifest.index_of(name) {
            Some(index) => self.fields[index] = Some(value),
            None => {
                self.error = Some(TypeError::UnknownField {
                    type_name: self.manifest.name,
                    field: name.to_owned(),
                });
            }
        }
        self
    }

    /// Validate and produce the immutable object
    pub fn build(self) -> Result<Object, TypeError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Object::from_parts(self.manifest, self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::chat::USER_MANIFEST;
    use crate::schema::media::LOCATION_MANIFEST;

    fn user_fields(first_name: &str) -> Vec<Option<Value>> {
        let mut fields = vec![None; USER_MANIFEST.fields.len()];
        fields[0] = Some(Value::Int(7));
        fields[1] = Some(Value::Str(first_name.to_owned()));
        fields
    }

    #[test]
    fn from_parts_accepts_minimal_user() {
        let user = Object::from_parts(&USER_MANIFEST, user_fields("Dan")).unwrap();
        assert_eq!(user.type_id(), USER_MANIFEST.type_id);
        assert_eq!(user.int_field("id"), Some(7));
        assert_eq!(user.str_field("first_name"), Some("Dan"));
        assert_eq!(user.str_field("last_name"), None);
        assert!(!user.flag_field("is_bot"));
    }

    #[test]
    fn from_parts_rejects_missing_required() {
        let mut fields = user_fields("Dan");
        fields[1] = None;
        let err = Object::from_parts(&USER_MANIFEST, fields).unwrap_err();
        assert!(matches!(err, TypeError::MissingRequired { field: "first_name", .. }));
    }

    #[test]
    fn from_parts_rejects_kind_mismatch() {
        let mut fields = user_fields("Dan");
        fields[0] = Some(Value::Str("7".to_owned()));
        let err = Object::from_parts(&USER_MANIFEST, fields).unwrap_err();
        assert!(matches!(err, TypeError::KindMismatch { field: "id", .. }));
    }

    #[test]
    fn from_parts_rejects_arity_mismatch() {
        let err = Object::from_parts(&USER_MANIFEST, vec![None; 2]).unwrap_err();
        assert!(matches!(err, TypeError::ArityMismatch { .. }));
    }

    #[test]
    fn from_parts_rejects_false_flag_payload() {
        let mut fields = user_fields("Dan");
        let is_bot = USER_MANIFEST.index_of("is_bot").unwrap();
        fields[is_bot] = Some(Value::Int(0));
        let err = Object::from_parts(&USER_MANIFEST, fields).unwrap_err();
        assert!(matches!(err, TypeError::KindMismatch { field: "is_bot", .. }));
    }

    #[test]
    fn builder_rejects_unknown_field() {
        let err = ObjectBuilder::new(&USER_MANIFEST)
            .set("id", Value::Int(1))
            .set("first_name", Value::Str("Dan".into()))
            .set("nickname", Value::Str("d".into()))
            .build()
            .unwrap_err();
        assert!(matches!(err, TypeError::UnknownField { .. }));
    }

    #[test]
    fn mask_free_type_builds_from_required_only() {
        let location = ObjectBuilder::new(&LOCATION_MANIFEST)
            .set("longitude", Value::Double(4.9))
            .set("latitude", Value::Double(52.3))
            .build()
            .unwrap();
        assert_eq!(location.double_field("latitude"), Some(52.3));
    }
}
