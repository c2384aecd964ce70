//! # Schema Tables - Static Field Manifests
//!
//! ## Purpose
//!
//! Central source of truth for every concrete schema object: its 32-bit type
//! id, its field list in exact wire order, and the presence-mask bit bound to
//! each optional field. Manifests are constructed once as `static` data,
//! shared read-only across every decode/encode call, and never copied per
//! instance. The codec crate validates each manifest at registration time,
//! so layout mistakes fail at startup rather than mid-decode.
//!
//! ## Architecture Role
//!
//! ```text
//! schema_object! declarations → [TypeManifest tables] → codec registry
//!          ↓                            ↓                      ↓
//!    Typed Views                  Wire Order              Decode Dispatch
//!    Typed Builders               Bit Indices             Mask Width
//! ```

pub mod chat;
pub mod macros;
pub mod media;
pub mod message;
pub mod payments;
pub mod type_ids;

/// Wire kind of a single field
///
/// Determines how many bytes the field occupies and how they are interpreted.
/// `Flag` is the zero-width boolean kind: the presence bit itself carries the
/// value and no bytes appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 64-bit IEEE 754 float
    Double,
    /// UTF-8 string, length-prefixed and padded to the alignment unit
    Str,
    /// Raw byte buffer, length-prefixed and padded to the alignment unit
    Bytes,
    /// Nested schema object with its own leading type id
    Object {
        /// Type id the nested object must carry
        expected: u32,
    },
    /// Homogeneous sequence with a count prefix
    Seq(&'static FieldKind),
    /// Zero-width boolean: bit set ⇔ `true`, absent field ⇔ `false`
    Flag,
}

/// One entry of a type's field manifest
///
/// `bit` is `None` for always-present fields and `Some(i)` for fields
/// governed by presence-mask bit `i`. Entries appear in exact wire order:
/// all always-present fields first, then optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub bit: Option<u8>,
}

impl FieldDef {
    /// Whether this field is governed by a presence-mask bit
    pub fn is_optional(&self) -> bool {
        self.bit.is_some()
    }
}

/// Static per-type metadata: type id, name, and field list in wire order
#[derive(Debug, PartialEq, Eq)]
pub struct TypeManifest {
    pub type_id: u32,
    pub name: &'static str,
    pub fields: &'static [FieldDef],
}

impl TypeManifest {
    /// Position of a field in the manifest (and in instance storage)
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Highest presence-mask bit any field uses, if the type has optional fields
    pub fn max_bit(&self) -> Option<u8> {
        self.fields.iter().filter_map(|f| f.bit).max()
    }

    /// Always-present entries, in wire order
    pub fn required_fields(&self) -> impl Iterator<Item = (usize, &FieldDef)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.bit.is_none())
    }

    /// Mask-governed entries, in wire order
    pub fn optional_fields(&self) -> impl Iterator<Item = (usize, &FieldDef)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.bit.is_some())
    }
}

/// Every built-in manifest, for bulk registration
pub fn all_manifests() -> &'static [&'static TypeManifest] {
    static ALL: [&TypeManifest; 17] = [
        &chat::USER_MANIFEST,
        &chat::CHAT_MANIFEST,
        &message::MESSAGE_MANIFEST,
        &media::MESSAGE_ENTITY_MANIFEST,
        &media::PHOTO_SIZE_MANIFEST,
        &media::AUDIO_MANIFEST,
        &media::DOCUMENT_MANIFEST,
        &media::VIDEO_MANIFEST,
        &media::VOICE_MANIFEST,
        &media::VIDEO_NOTE_MANIFEST,
        &media::STICKER_MANIFEST,
        &media::CONTACT_MANIFEST,
        &media::LOCATION_MANIFEST,
        &media::VENUE_MANIFEST,
        &media::GAME_MANIFEST,
        &payments::INVOICE_MANIFEST,
        &payments::SUCCESSFUL_PAYMENT_MANIFEST,
    ];
    &ALL
}

/// Look up a built-in manifest by type id
pub fn builtin_manifest(type_id: u32) -> Option<&'static TypeManifest> {
    all_manifests().iter().copied().find(|m| m.type_id == type_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_manifest_wire_order() {
        let m = &message::MESSAGE_MANIFEST;
        assert_eq!(m.type_id, 0xb070_0003);
        // Always-present fields precede every optional field.
        assert_eq!(m.fields[0].name, "message_id");
        assert_eq!(m.fields[1].name, "date");
        assert_eq!(m.fields[2].name, "chat");
        assert!(m.fields[..3].iter().all(|f| f.bit.is_none()));
        assert!(m.fields[3..].iter().all(|f| f.bit.is_some()));
        assert_eq!(m.max_bit(), Some(38));
    }

    #[test]
    fn manifests_have_unique_type_ids() {
        let manifests = all_manifests();
        for (i, a) in manifests.iter().enumerate() {
            for b in &manifests[i + 1..] {
                assert_ne!(a.type_id, b.type_id, "{} vs {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn index_of_matches_declaration_order() {
        let m = &message::MESSAGE_MANIFEST;
        assert_eq!(m.index_of("message_id"), Some(0));
        assert_eq!(m.index_of("text"), m.fields.iter().position(|f| f.name == "text"));
        assert_eq!(m.index_of("no_such_field"), None);
    }
}
