//! Protocol constants shared across the codec

/// Alignment unit for length-prefixed strings and byte buffers.
///
/// Payloads are zero-padded to the next multiple of this after the raw bytes.
pub const WIRE_ALIGN: usize = 4;

/// Widest presence mask the wire format supports (one `u64`).
pub const MAX_PRESENCE_BITS: u8 = 64;

/// Default bound on self-referential nesting.
///
/// The observed protocol truncates self-typed fields at one level: a nested
/// message does not itself carry a nested message.
pub const DEFAULT_MAX_SELF_RECURSION: usize = 1;
