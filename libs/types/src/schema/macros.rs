//! Schema Object Generation Macro
//!
//! Provides the `schema_object!` macro for declaratively defining schema
//! objects: one invocation yields the static field manifest, a zero-cost
//! typed view over the generic storage, and a builder that enforces the wire
//! optionality contract.
//!
//! ## Purpose
//!
//! Field names, wire kinds and presence-mask bit indices live in a single
//! declarative table per type, expanded once into `static` data and checked
//! by the codec registry, so a typo in a bit index fails registration
//! instead of silently dropping a field.
//!
//! ## Usage Example
//!
//! ```ignore
//! schema_object! {
//!     /// A geographic point.
//!     object Location("location", type_ids::LOCATION) as LOCATION_MANIFEST;
//!     builder LocationBuilder;
//!     required {
//!         longitude: double,
//!         latitude: double,
//!     }
//!     optional {}
//! }
//! ```
//!
//! Field kinds: `int`, `long`, `double`, `string`, `bytes`, `flag`
//! (zero-width boolean, only valid under `optional`),
//! `object(View, type_ids::ID)` and `seq(View, type_ids::ID)`.

/// Generate manifest, typed view and builder for one schema object
///
/// Required fields become constructor arguments of the builder; optional
/// fields become setters. Unknown field names are unrepresentable: there is
/// no stringly-typed surface on the generated builder.
#[macro_export]
macro_rules! schema_object {
    (
        $(#[$meta:meta])*
        object $view:ident($tyname:literal, $tyid:expr) as $manifest:ident;
        builder $builder:ident;
        required { $( $rname:ident : $rkind:tt $(( $($rargs:tt)* ))? ),* $(,)? }
        optional { $( $bit:literal => $oname:ident : $okind:tt $(( $($oargs:tt)* ))? ),* $(,)? }
    ) => {
        #[doc = concat!("Field manifest for `", $tyname, "`, in exact wire order.")]
        pub static $manifest: $crate::schema::TypeManifest = $crate::schema::TypeManifest {
            type_id: $tyid,
            name: $tyname,
            fields: &[
                $(
                    $crate::schema::FieldDef {
                        name: stringify!($rname),
                        kind: $crate::schema_kind!($rkind $(( $($rargs)* ))?),
                        bit: None,
                    },
                )*
                $(
                    $crate::schema::FieldDef {
                        name: stringify!($oname),
                        kind: $crate::schema_kind!($okind $(( $($oargs)* ))?),
                        bit: Some($bit),
                    },
                )*
            ],
        };

        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $view<'a> {
            pub(crate) obj: &'a $crate::value::Object,
        }

        impl<'a> $view<'a> {
            /// Wire discriminant of this type
            pub const TYPE_ID: u32 = $tyid;

            /// Wrap a decoded object, verifying its type id
            pub fn new(obj: &'a $crate::value::Object) -> Result<Self, $crate::common::errors::TypeError> {
                if obj.type_id() != Self::TYPE_ID {
                    return Err($crate::common::errors::TypeError::WrongType {
                        expected: $tyname,
                        actual: obj.type_name(),
                    });
                }
                Ok(Self { obj })
            }

            /// Underlying generic storage
            pub fn object(&self) -> &'a $crate::value::Object {
                self.obj
            }

            $( $crate::schema_required_accessor! { $rname : $rkind $(( $($rargs)* ))? } )*
            $( $crate::schema_optional_accessor! { $oname : $okind $(( $($oargs)* ))? } )*
        }

        #[doc = concat!("Builder for `", $tyname, "` objects; always-present fields are constructor arguments.")]
        #[derive(Debug)]
        pub struct $builder {
            inner: $crate::value::ObjectBuilder,
        }

        impl $builder {
            #[allow(clippy::too_many_arguments)]
            pub fn new( $( $rname: $crate::schema_rust_ty!($rkind $(( $($rargs)* ))?) ),* ) -> Self {
                let inner = $crate::value::ObjectBuilder::new(&$manifest)
                    $( .set(stringify!($rname), $crate::schema_value!($rname : $rkind $(( $($rargs)* ))?)) )*;
                Self { inner }
            }

            $( $crate::schema_setter! { $oname : $okind $(( $($oargs)* ))? } )*

            /// Validate against the manifest and produce the immutable object
            pub fn build(self) -> Result<$crate::value::Object, $crate::common::errors::TypeError> {
                self.inner.build()
            }
        }
    };
}

/// Map a kind token to its `FieldKind` value
#[doc(hidden)]
#[macro_export]
macro_rules! schema_kind {
    (int) => { $crate::schema::FieldKind::Int };
    (long) => { $crate::schema::FieldKind::Long };
    (double) => { $crate::schema::FieldKind::Double };
    (string) => { $crate::schema::FieldKind::Str };
    (bytes) => { $crate::schema::FieldKind::Bytes };
    (flag) => { $crate::schema::FieldKind::Flag };
    (object($view:ident, $id:expr)) => { $crate::schema::FieldKind::Object { expected: $id } };
    (seq($view:ident, $id:expr)) => {
        $crate::schema::FieldKind::Seq(&$crate::schema::FieldKind::Object { expected: $id })
    };
}

/// Map a kind token to the Rust type a builder takes for it
#[doc(hidden)]
#[macro_export]
macro_rules! schema_rust_ty {
    (int) => { i32 };
    (long) => { i64 };
    (double) => { f64 };
    (string) => { &str };
    (bytes) => { Vec<u8> };
    (object($view:ident, $id:expr)) => { $crate::value::Object };
    (seq($view:ident, $id:expr)) => { Vec<$crate::value::Object> };
}

/// Wrap a builder argument into its `Value`
#[doc(hidden)]
#[macro_export]
macro_rules! schema_value {
    ($name:ident : int) => { $crate::value::Value::Int($name) };
    ($name:ident : long) => { $crate::value::Value::Long($name) };
    ($name:ident : double) => { $crate::value::Value::Double($name) };
    ($name:ident : string) => { $crate::value::Value::Str($name.to_owned()) };
    ($name:ident : bytes) => { $crate::value::Value::Bytes($name) };
    ($name:ident : object($view:ident, $id:expr)) => { $crate::value::Value::Object($name) };
    ($name:ident : seq($view:ident, $id:expr)) => {
        $crate::value::Value::Seq($name.into_iter().map($crate::value::Value::Object).collect())
    };
}

/// Accessor for an always-present field
#[doc(hidden)]
#[macro_export]
macro_rules! schema_required_accessor {
    ($name:ident : int) => {
        pub fn $name(&self) -> i32 {
            self.obj.required_int(stringify!($name))
        }
    };
    ($name:ident : long) => {
        pub fn $name(&self) -> i64 {
            self.obj.required_long(stringify!($name))
        }
    };
    ($name:ident : double) => {
        pub fn $name(&self) -> f64 {
            self.obj.required_double(stringify!($name))
        }
    };
    ($name:ident : string) => {
        pub fn $name(&self) -> &str {
            self.obj.required_str(stringify!($name))
        }
    };
    ($name:ident : bytes) => {
        pub fn $name(&self) -> &[u8] {
            self.obj.required_bytes(stringify!($name))
        }
    };
    ($name:ident : object($view:ident, $id:expr)) => {
        pub fn $name(&self) -> $view<'_> {
            $view { obj: self.obj.required_object(stringify!($name)) }
        }
    };
    ($name:ident : seq($view:ident, $id:expr)) => {
        pub fn $name(&self) -> Vec<$view<'_>> {
            self.obj
                .required_seq(stringify!($name))
                .iter()
                .filter_map(|item| match item {
                    $crate::value::Value::Object(o) => Some($view { obj: o }),
                    _ => None,
                })
                .collect()
        }
    };
}

/// Accessor for a mask-governed field
#[doc(hidden)]
#[macro_export]
macro_rules! schema_optional_accessor {
    ($name:ident : int) => {
        pub fn $name(&self) -> Option<i32> {
            self.obj.int_field(stringify!($name))
        }
    };
    ($name:ident : long) => {
        pub fn $name(&self) -> Option<i64> {
            self.obj.long_field(stringify!($name))
        }
    };
    ($name:ident : double) => {
        pub fn $name(&self) -> Option<f64> {
            self.obj.double_field(stringify!($name))
        }
    };
    ($name:ident : string) => {
        pub fn $name(&self) -> Option<&str> {
            self.obj.str_field(stringify!($name))
        }
    };
    ($name:ident : bytes) => {
        pub fn $name(&self) -> Option<&[u8]> {
            self.obj.bytes_field(stringify!($name))
        }
    };
    ($name:ident : flag) => {
        pub fn $name(&self) -> bool {
            self.obj.flag_field(stringify!($name))
        }
    };
    ($name:ident : object($view:ident, $id:expr)) => {
        pub fn $name(&self) -> Option<$view<'_>> {
            self.obj
                .object_field(stringify!($name))
                .map(|o| $view { obj: o })
        }
    };
    ($name:ident : seq($view:ident, $id:expr)) => {
        pub fn $name(&self) -> Option<Vec<$view<'_>>> {
            self.obj.seq_field(stringify!($name)).map(|items| {
                items
                    .iter()
                    .filter_map(|item| match item {
                        $crate::value::Value::Object(o) => Some($view { obj: o }),
                        _ => None,
                    })
                    .collect()
            })
        }
    };
}

/// Setter for a mask-governed field
#[doc(hidden)]
#[macro_export]
macro_rules! schema_setter {
    ($name:ident : int) => {
        pub fn $name(mut self, value: i32) -> Self {
            self.inner = self.inner.set(stringify!($name), $crate::value::Value::Int(value));
            self
        }
    };
    ($name:ident : long) => {
        pub fn $name(mut self, value: i64) -> Self {
            self.inner = self.inner.set(stringify!($name), $crate::value::Value::Long(value));
            self
        }
    };
    ($name:ident : double) => {
        pub fn $name(mut self, value: f64) -> Self {
            self.inner = self.inner.set(stringify!($name), $crate::value::Value::Double(value));
            self
        }
    };
    ($name:ident : string) => {
        pub fn $name(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.set(stringify!($name), $crate::value::Value::Str(value.into()));
            self
        }
    };
    ($name:ident : bytes) => {
        pub fn $name(mut self, value: Vec<u8>) -> Self {
            self.inner = self.inner.set(stringify!($name), $crate::value::Value::Bytes(value));
            self
        }
    };
    ($name:ident : flag) => {
        // Zero-width boolean: calling the setter asserts the flag; absence is
        // `false` and a false payload is unrepresentable.
        pub fn $name(mut self) -> Self {
            self.inner = self.inner.set(stringify!($name), $crate::value::Value::True);
            self
        }
    };
    ($name:ident : object($view:ident, $id:expr)) => {
        pub fn $name(mut self, value: $crate::value::Object) -> Self {
            self.inner = self.inner.set(stringify!($name), $crate::value::Value::Object(value));
            self
        }
    };
    ($name:ident : seq($view:ident, $id:expr)) => {
        pub fn $name(mut self, value: Vec<$crate::value::Object>) -> Self {
            self.inner = self.inner.set(
                stringify!($name),
                $crate::value::Value::Seq(value.into_iter().map($crate::value::Value::Object).collect()),
            );
            self
        }
    };
}
