//! # Structured Object Decoder
//!
//! ## Purpose
//!
//! The generic engine that turns one wire buffer into a validated in-memory
//! object, driven entirely by the static field manifests: leading type id →
//! registry dispatch → always-present fields → presence mask → optional
//! fields in manifest order, recursing through the registry for nested
//! objects.
//!
//! Unknown trailing bytes after the last manifest field are a
//! protocol-version-skew condition, not an error: the count is returned to
//! the caller as a forward-compatibility signal.
//!
//! ## Concurrency
//!
//! Decoding is a pure, synchronous computation over the caller's buffer and
//! an immutable registry; concurrent decodes share no mutable state.

use tl_types::{FieldKind, Object, TypeManifest, Value};
use tracing::{debug, warn};

use crate::constants::DEFAULT_MAX_SELF_RECURSION;
use crate::error::{CodecError, CodecResult};
use crate::flags::{mask_bits, PresenceMask};
use crate::registry::SchemaRegistry;
use crate::wire::WireReader;

/// Tunable decode/encode limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// How many same-typed ancestors a nested object may have.
    ///
    /// The default of 1 matches the observed protocol: a message may carry a
    /// reply message, but that reply carries no further reply.
    pub max_self_recursion: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_self_recursion: DEFAULT_MAX_SELF_RECURSION,
        }
    }
}

/// A fully decoded object plus the forward-compatibility signal
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub object: Object,
    /// Bytes left unconsumed after the last manifest field; non-zero when
    /// the peer speaks a newer schema revision
    pub trailing: usize,
}

/// Decode one schema object from a buffer with default limits
pub fn decode_object(registry: &SchemaRegistry, buf: &[u8]) -> CodecResult<Decoded> {
    decode_object_with_config(registry, buf, &CodecConfig::default())
}

/// Decode one schema object from a buffer
///
/// The buffer must hold exactly one object (framing is the transport's
/// responsibility); any excess is reported through [`Decoded::trailing`].
pub fn decode_object_with_config(
    registry: &SchemaRegistry,
    buf: &[u8],
    config: &CodecConfig,
) -> CodecResult<Decoded> {
    let mut reader = WireReader::new(buf);
    let mut stack = Vec::new();
    let object = decode_nested(registry, &mut reader, None, config, &mut stack)?;

    let trailing = reader.remaining();
    if trailing > 0 {
        debug!(
            type_id = object.type_id(),
            trailing, "decoded object with unconsumed trailing bytes"
        );
    }

    Ok(Decoded { object, trailing })
}

/// Decode an object at the cursor, optionally enforcing an expected type id
fn decode_nested(
    registry: &SchemaRegistry,
    reader: &mut WireReader<'_>,
    expected: Option<(&str, u32)>,
    config: &CodecConfig,
    stack: &mut Vec<u32>,
) -> CodecResult<Object> {
    let id_offset = reader.offset();
    let type_id = reader.read_u32("type id")?;

    if let Some((field, expected_id)) = expected {
        if type_id != expected_id {
            return Err(CodecError::type_mismatch(field, expected_id, type_id, id_offset));
        }
    }

    let manifest = registry
        .resolve(type_id)
        .ok_or(CodecError::UnknownType { type_id, offset: id_offset })?;

    let self_depth = stack.iter().filter(|id| **id == type_id).count();
    if self_depth > config.max_self_recursion {
        return Err(CodecError::recursion_limit(
            type_id,
            config.max_self_recursion,
            id_offset,
        ));
    }

    stack.push(type_id);
    let fields = decode_fields(registry, reader, manifest, config, stack);
    stack.pop();

    Object::from_parts(manifest, fields?)
        .map_err(|e| CodecError::schema(manifest.name, e.to_string()))
}

fn decode_fields(
    registry: &SchemaRegistry,
    reader: &mut WireReader<'_>,
    manifest: &'static TypeManifest,
    config: &CodecConfig,
    stack: &mut Vec<u32>,
) -> CodecResult<Vec<Option<Value>>> {
    let mut fields: Vec<Option<Value>> = vec![None; manifest.fields.len()];

    for (index, def) in manifest.required_fields() {
        fields[index] = Some(decode_kind(registry, reader, def.name, &def.kind, config, stack)?);
    }

    let mask = match mask_bits(manifest) {
        0 => PresenceMask::new(0),
        32 => PresenceMask::from_bits(reader.read_u32("presence mask")? as u64, 32),
        _ => PresenceMask::from_bits(reader.read_u64("presence mask")?, 64),
    };

    let bound: u64 = manifest
        .optional_fields()
        .filter_map(|(_, def)| def.bit)
        .fold(0, |acc, bit| acc | 1 << bit);
    let unbound = mask.bits() & !bound;
    if unbound != 0 {
        // Bits no field binds are ignored; a newer schema revision may have
        // added fields this build does not know.
        warn!(
            type_name = manifest.name,
            unbound_bits = format_args!("{unbound:#x}"),
            "presence mask carries bits not bound by the schema table"
        );
    }

    for (index, def) in manifest.optional_fields() {
        let Some(bit) = def.bit else { continue };
        if !mask.get(bit)? {
            continue;
        }
        fields[index] = Some(decode_kind(registry, reader, def.name, &def.kind, config, stack)?);
    }

    Ok(fields)
}

fn decode_kind(
    registry: &SchemaRegistry,
    reader: &mut WireReader<'_>,
    field: &str,
    kind: &FieldKind,
    config: &CodecConfig,
    stack: &mut Vec<u32>,
) -> CodecResult<Value> {
    Ok(match kind {
        FieldKind::Int => Value::Int(reader.read_i32(field)?),
        FieldKind::Long => Value::Long(reader.read_i64(field)?),
        FieldKind::Double => Value::Double(reader.read_f64(field)?),
        FieldKind::Str => Value::Str(reader.read_string(field)?),
        FieldKind::Bytes => Value::Bytes(reader.read_bytes(field)?),
        FieldKind::Object { expected } => Value::Object(decode_nested(
            registry,
            reader,
            Some((field, *expected)),
            config,
            stack,
        )?),
        FieldKind::Seq(elem) => {
            let count = reader.read_u32(field)? as usize;
            // Grow as elements actually decode: a corrupt count fails on the
            // first missing element instead of reserving absurd capacity.
            let mut items = Vec::new();
            for _ in 0..count {
                items.push(decode_kind(registry, reader, field, elem, config, stack)?);
            }
            Value::Seq(items)
        }
        // Zero-width boolean: only reached when the bit is set, and the bit
        // itself is the value.
        FieldKind::Flag => Value::True,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_object;
    use crate::registry::global;
    use tl_types::schema::chat::{ChatBuilder, UserBuilder};
    use tl_types::schema::message::{Message, MessageBuilder};

    fn sample_message() -> Object {
        let chat = ChatBuilder::new(42, "private").build().unwrap();
        let from = UserBuilder::new(7, "Dan").build().unwrap();
        MessageBuilder::new(1, 1_530_000_000, chat)
            .from_user(from)
            .text("hello")
            .build()
            .unwrap()
    }

    #[test]
    fn decode_reverses_encode() {
        let original = sample_message();
        let bytes = encode_object(&original).unwrap();
        let decoded = decode_object(global(), &bytes).unwrap();
        assert_eq!(decoded.trailing, 0);
        assert_eq!(decoded.object, original);

        let msg = Message::new(&decoded.object).unwrap();
        assert_eq!(msg.text(), Some("hello"));
        assert_eq!(msg.from_user().unwrap().first_name(), "Dan");
    }

    #[test]
    fn unknown_type_id_is_recoverable_context() {
        let mut bytes = encode_object(&sample_message()).unwrap();
        bytes[..4].copy_from_slice(&0xdead_beefu32.to_le_bytes());
        let err = decode_object(global(), &bytes).unwrap_err();
        assert_eq!(err, CodecError::UnknownType { type_id: 0xdead_beef, offset: 0 });
    }

    #[test]
    fn truncated_buffer_fails_atomically() {
        let bytes = encode_object(&sample_message()).unwrap();
        for cut in [bytes.len() - 1, bytes.len() / 2, 5] {
            assert!(matches!(
                decode_object(global(), &bytes[..cut]).unwrap_err(),
                CodecError::TruncatedInput { .. }
            ));
        }
    }
}
