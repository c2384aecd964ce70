//! # Structured Object Encoder
//!
//! ## Purpose
//!
//! The exact inverse of the decoder: walks a validated object's manifest in
//! declaration order, writing the leading type id, the always-present fields,
//! the presence mask computed from which optional slots are populated, then
//! the populated optional fields. Zero-width flags contribute only their
//! mask bit.
//!
//! The same self-recursion bound the decoder enforces applies here, so an
//! object this crate encodes is always one its peers can decode under the
//! same limits.

use tl_types::{Object, Value};

use crate::decoder::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::flags::{mask_bits, PresenceMask};
use crate::wire::WireWriter;

/// Encode one schema object with default limits
pub fn encode_object(object: &Object) -> CodecResult<Vec<u8>> {
    encode_object_with_config(object, &CodecConfig::default())
}

/// Encode one schema object
pub fn encode_object_with_config(object: &Object, config: &CodecConfig) -> CodecResult<Vec<u8>> {
    let mut writer = WireWriter::new();
    let mut stack = Vec::new();
    encode_nested(&mut writer, object, config, &mut stack)?;
    Ok(writer.into_inner())
}

fn encode_nested(
    writer: &mut WireWriter,
    object: &Object,
    config: &CodecConfig,
    stack: &mut Vec<u32>,
) -> CodecResult<()> {
    let manifest = object.manifest();
    let type_id = manifest.type_id;
    let id_offset = writer.len();

    let self_depth = stack.iter().filter(|id| **id == type_id).count();
    if self_depth > config.max_self_recursion {
        return Err(CodecError::recursion_limit(
            type_id,
            config.max_self_recursion,
            id_offset,
        ));
    }

    writer.write_u32(type_id);

    for (index, def) in manifest.required_fields() {
        // from_parts guarantees required slots are populated
        let value = object
            .field(index)
            .ok_or_else(|| CodecError::schema(manifest.name, format!("required field `{}` absent", def.name)))?;
        stack.push(type_id);
        let result = encode_value(writer, value, config, stack);
        stack.pop();
        result?;
    }

    let width = mask_bits(manifest);
    if width > 0 {
        let mut mask = PresenceMask::new(width);
        for (index, def) in manifest.optional_fields() {
            let Some(bit) = def.bit else { continue };
            if object.field(index).is_some() {
                mask.set(bit)?;
            }
        }
        match width {
            32 => writer.write_u32(mask.bits() as u32),
            _ => writer.write_u64(mask.bits()),
        }
    }

    for (index, _) in manifest.optional_fields() {
        let Some(value) = object.field(index) else { continue };
        if matches!(value, Value::True) {
            continue;
        }
        stack.push(type_id);
        let result = encode_value(writer, value, config, stack);
        stack.pop();
        result?;
    }

    Ok(())
}

fn encode_value(
    writer: &mut WireWriter,
    value: &Value,
    config: &CodecConfig,
    stack: &mut Vec<u32>,
) -> CodecResult<()> {
    match value {
        Value::Int(v) => writer.write_i32(*v),
        Value::Long(v) => writer.write_i64(*v),
        Value::Double(v) => writer.write_f64(*v),
        Value::Str(v) => writer.write_string(v),
        Value::Bytes(v) => writer.write_bytes(v),
        Value::Object(obj) => encode_nested(writer, obj, config, stack)?,
        Value::Seq(items) => {
            writer.write_u32(items.len() as u32);
            for item in items {
                encode_value(writer, item, config, stack)?;
            }
        }
        Value::True => {}
    }
    Ok(())
}
