//! # tlwire Type System
//!
//! Typed object model for the tlwire binary protocol: generic decoded-object
//! storage, static field manifests, and strongly-typed views and builders for
//! every concrete schema object.
//!
//! ## Design Philosophy
//!
//! - **One validated storage shape**: every decoded or built object is an
//!   [`Object`](value::Object), a static manifest pointer plus positional
//!   `Option<Value>` slots, validated on construction and immutable after.
//! - **Declared, not documented**: field names, wire kinds and presence-mask
//!   bit indices live in `static` [`TypeManifest`](schema::TypeManifest)
//!   tables generated by `schema_object!`, replacing per-instance convention
//!   with data the codec registry can check once at startup.
//! - **Typed access without copies**: views like
//!   [`Message`](schema::message::Message) borrow the generic storage and
//!   expose `Option`-typed accessors; always-present fields are non-optional.
//! - **Builders mirror the wire**: required fields are constructor arguments,
//!   optional fields are setters, zero-width booleans are assert-only. A
//!   builder cannot produce an object the codec could not have decoded.
//!
//! ## Quick Start
//!
//! ```rust
//! use tl_types::schema::chat::ChatBuilder;
//! use tl_types::schema::message::{Message, MessageBuilder};
//!
//! let chat = ChatBuilder::new(42, "private").build().unwrap();
//! let obj = MessageBuilder::new(1, 1_530_000_000, chat)
//!     .text("hi")
//!     .build()
//!     .unwrap();
//!
//! let msg = Message::new(&obj).unwrap();
//! assert_eq!(msg.text(), Some("hi"));
//! assert!(msg.entities().is_none());
//! ```
//!
//! ## What This Crate Does NOT Contain
//!
//! - Wire encoding/decoding rules (they live in `tl-codec`)
//! - Transport, session or framing logic (an external collaborator's job)

pub mod common;
pub mod schema;
pub mod value;

// Re-export the core storage types for convenience
pub use common::errors::TypeError;
pub use value::{Object, ObjectBuilder, Value};

// Re-export schema metadata commonly needed by codec callers
pub use schema::{all_manifests, builtin_manifest, FieldDef, FieldKind, TypeManifest};
