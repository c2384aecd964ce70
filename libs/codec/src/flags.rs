//! # Presence Masks
//!
//! ## Purpose
//!
//! The bitmask that marks which optional fields of an object are actually on
//! the wire. Mask width is a per-type property derived from the manifest:
//! types with no optional fields carry no mask at all, types whose highest
//! bit index fits below 32 carry a `u32`, wider types carry a `u64`.
//!
//! Testing or setting a bit at or beyond the declared width is a schema
//! misconfiguration and fails fast with `SchemaError`, so a type growing
//! past 32 optional fields cannot silently drop fields.

use tl_types::TypeManifest;

use crate::error::{CodecError, CodecResult};

/// Mask width in bits for a type: 0, 32 or 64
pub fn mask_bits(manifest: &TypeManifest) -> u8 {
    match manifest.max_bit() {
        None => 0,
        Some(bit) if bit < 32 => 32,
        Some(_) => 64,
    }
}

/// A presence mask with its declared width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceMask {
    bits: u64,
    width: u8,
}

impl PresenceMask {
    /// Empty mask of the given width
    pub fn new(width: u8) -> Self {
        Self { bits: 0, width }
    }

    /// Wrap a raw mask value read off the wire
    pub fn from_bits(bits: u64, width: u8) -> Self {
        Self { bits, width }
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Whether bit `i` is set
    pub fn get(&self, bit: u8) -> CodecResult<bool> {
        self.check(bit)?;
        Ok((self.bits >> bit) & 1 == 1)
    }

    /// Set bit `i`
    pub fn set(&mut self, bit: u8) -> CodecResult<()> {
        self.check(bit)?;
        self.bits |= 1 << bit;
        Ok(())
    }

    fn check(&self, bit: u8) -> CodecResult<()> {
        if bit >= self.width {
            return Err(CodecError::schema(
                "presence mask",
                format!("bit index {bit} out of range for {}-bit mask", self.width),
            ));
        }
        Ok(())
    }
}
