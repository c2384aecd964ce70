//! 32-bit type ids for every concrete schema object
//!
//! Ids are wire discriminants: unique per type and stable across protocol
//! versions, never recomputed. The `0xb07000xx` block is fixed by the
//! published schema.

pub const USER: u32 = 0xb070_0001;
pub const CHAT: u32 = 0xb070_0002;
pub const MESSAGE: u32 = 0xb070_0003;
pub const MESSAGE_ENTITY: u32 = 0xb070_0004;
pub const PHOTO_SIZE: u32 = 0xb070_0005;
pub const AUDIO: u32 = 0xb070_0006;
pub const DOCUMENT: u32 = 0xb070_0007;
pub const VIDEO: u32 = 0xb070_0008;
pub const VOICE: u32 = 0xb070_0009;
pub const VIDEO_NOTE: u32 = 0xb070_000a;
pub const STICKER: u32 = 0xb070_000b;
pub const CONTACT: u32 = 0xb070_000c;
pub const LOCATION: u32 = 0xb070_000d;
pub const VENUE: u32 = 0xb070_000e;
pub const GAME: u32 = 0xb070_000f;
pub const INVOICE: u32 = 0xb070_0010;
pub const SUCCESSFUL_PAYMENT: u32 = 0xb070_0011;
