//! The message object and its builder
//!
//! The largest type in the catalogue: three always-present fields and 39
//! independently optional ones, so its presence mask is 64 bits wide on the
//! wire. `reply_to_message` and `pinned_message` are self-referential; the
//! codec bounds that recursion at decode and encode time (the wire contract
//! is that a nested message does not itself carry a nested message).

use crate::schema::chat::{Chat, User};
use crate::schema::media::{
    Audio, Contact, Document, Game, Location, MessageEntity, PhotoSize, Sticker, Venue, Video,
    VideoNote, Voice,
};
use crate::schema::payments::{Invoice, SuccessfulPayment};
use crate::schema::type_ids;
use crate::schema_object;

schema_object! {
    /// This object represents a message.
    object Message("message", type_ids::MESSAGE) as MESSAGE_MANIFEST;
    builder MessageBuilder;
    required {
        message_id: int,
        date: int,
        chat: object(Chat, type_ids::CHAT),
    }
    optional {
        0 => from_user: object(User, type_ids::USER),
        1 => forward_from: object(User, type_ids::USER),
        2 => forward_from_chat: object(Chat, type_ids::CHAT),
        3 => forward_from_message_id: int,
        4 => forward_signature: string,
        5 => forward_date: int,
        6 => reply_to_message: object(Message, type_ids::MESSAGE),
        7 => edit_date: int,
        8 => media_group_id: string,
        9 => author_signature: string,
        10 => text: string,
        11 => entities: seq(MessageEntity, type_ids::MESSAGE_ENTITY),
        12 => caption_entities: seq(MessageEntity, type_ids::MESSAGE_ENTITY),
        13 => audio: object(Audio, type_ids::AUDIO),
        14 => document: object(Document, type_ids::DOCUMENT),
        15 => game: object(Game, type_ids::GAME),
        16 => photo: seq(PhotoSize, type_ids::PHOTO_SIZE),
        17 => sticker: object(Sticker, type_ids::STICKER),
        18 => video: object(Video, type_ids::VIDEO),
        19 => voice: object(Voice, type_ids::VOICE),
        20 => video_note: object(VideoNote, type_ids::VIDEO_NOTE),
        21 => caption: string,
        22 => contact: object(Contact, type_ids::CONTACT),
        23 => location: object(Location, type_ids::LOCATION),
        24 => venue: object(Venue, type_ids::VENUE),
        25 => new_chat_members: seq(User, type_ids::USER),
        26 => left_chat_member: object(User, type_ids::USER),
        27 => new_chat_title: string,
        28 => new_chat_photo: seq(PhotoSize, type_ids::PHOTO_SIZE),
        29 => delete_chat_photo: flag,
        30 => group_chat_created: flag,
        31 => supergroup_chat_created: flag,
        32 => channel_chat_created: flag,
        33 => migrate_to_chat_id: long,
        34 => migrate_from_chat_id: long,
        35 => pinned_message: object(Message, type_ids::MESSAGE),
        36 => invoice: object(Invoice, type_ids::INVOICE),
        37 => successful_payment: object(SuccessfulPayment, type_ids::SUCCESSFUL_PAYMENT),
        38 => connected_website: string,
    }
}
