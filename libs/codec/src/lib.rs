//! # TL Object Codec
//!
//! ## Purpose
//!
//! Protocol rules for the schema-driven binary object format: wire
//! primitives, presence masks, the type-id registry, and the generic
//! manifest-driven encoder/decoder pair. Data structures live in
//! `tl-types`; this crate owns how they travel.
//!
//! ## Integration Points
//!
//! - **Wire layer** ([`wire`]): little-endian primitives, length-prefixed
//!   padded strings and byte buffers
//! - **Presence masks** ([`flags`]): per-type 0/32/64-bit optional-field
//!   bitmasks derived from the manifest
//! - **Registry** ([`registry`]): type id → manifest dispatch with eager
//!   manifest validation
//! - **Engine** ([`decoder`], [`encoder`]): symmetric, recursion-bounded
//!   transforms between wire buffers and validated [`tl_types::Object`]s
//!
//! ```
//! use tl_codec::{decode_object, encode_object, global_registry};
//! use tl_types::schema::chat::ChatBuilder;
//! use tl_types::schema::message::{Message, MessageBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let chat = ChatBuilder::new(42, "private").build()?;
//! let msg = MessageBuilder::new(1, 1_530_000_000, chat)
//!     .text("hi")
//!     .build()?;
//!
//! let bytes = encode_object(&msg)?;
//! let decoded = decode_object(global_registry(), &bytes)?;
//! assert_eq!(decoded.trailing, 0);
//!
//! let view = Message::new(&decoded.object)?;
//! assert_eq!(view.text(), Some("hi"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture Role
//!
//! Transport framing (who hands this crate exactly one object's bytes) and
//! schema evolution policy sit above; `tl-types` sits below. Decode never
//! panics on foreign input and either fully succeeds or fails atomically.

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod flags;
pub mod registry;
pub mod wire;

pub use constants::{DEFAULT_MAX_SELF_RECURSION, MAX_PRESENCE_BITS, WIRE_ALIGN};
pub use decoder::{decode_object, decode_object_with_config, CodecConfig, Decoded};
pub use encoder::{encode_object, encode_object_with_config};
pub use error::{CodecError, CodecResult};
pub use flags::{mask_bits, PresenceMask};
pub use registry::{global as global_registry, SchemaRegistry};
pub use wire::{WireReader, WireWriter};
