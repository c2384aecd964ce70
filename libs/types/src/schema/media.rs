//! Media and auxiliary objects referenced by messages

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::schema::chat::User;
use crate::schema::type_ids;
use crate::schema_object;

/// Entity kind discriminant carried in `MessageEntity.kind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum EntityType {
    Mention = 1,
    Hashtag = 2,
    BotCommand = 3,
    Url = 4,
    Email = 5,
    Bold = 6,
    Italic = 7,
    Code = 8,
    Pre = 9,
    TextLink = 10,
    TextMention = 11,
}

schema_object! {
    /// One special entity in a text or caption: username, URL, bot command
    /// and the like, addressed by codepoint offset and length.
    object MessageEntity("message_entity", type_ids::MESSAGE_ENTITY) as MESSAGE_ENTITY_MANIFEST;
    builder MessageEntityBuilder;
    required {
        kind: int,
        offset: int,
        length: int,
    }
    optional {
        0 => url: string,
        1 => user: object(User, type_ids::USER),
    }
}

impl<'a> MessageEntity<'a> {
    /// Entity kind, if the discriminant is one this build recognizes
    pub fn entity_type(&self) -> Option<EntityType> {
        EntityType::try_from(self.kind()).ok()
    }
}

impl MessageEntityBuilder {
    /// Start a builder from a known entity kind
    pub fn typed(kind: EntityType, offset: i32, length: i32) -> Self {
        Self::new(kind.into(), offset, length)
    }
}

schema_object! {
    /// One available size of a photo or thumbnail.
    object PhotoSize("photo_size", type_ids::PHOTO_SIZE) as PHOTO_SIZE_MANIFEST;
    builder PhotoSizeBuilder;
    required {
        file_id: string,
        width: int,
        height: int,
    }
    optional {
        0 => file_size: int,
    }
}

schema_object! {
    /// An audio file treated as music.
    object Audio("audio", type_ids::AUDIO) as AUDIO_MANIFEST;
    builder AudioBuilder;
    required {
        file_id: string,
        duration: int,
    }
    optional {
        0 => performer: string,
        1 => title: string,
        2 => mime_type: string,
        3 => file_size: int,
    }
}

schema_object! {
    /// A general file.
    object Document("document", type_ids::DOCUMENT) as DOCUMENT_MANIFEST;
    builder DocumentBuilder;
    required {
        file_id: string,
    }
    optional {
        0 => thumb: object(PhotoSize, type_ids::PHOTO_SIZE),
        1 => file_name: string,
        2 => mime_type: string,
        3 => file_size: int,
    }
}

schema_object! {
    /// A video file.
    object Video("video", type_ids::VIDEO) as VIDEO_MANIFEST;
    builder VideoBuilder;
    required {
        file_id: string,
        width: int,
        height: int,
        duration: int,
    }
    optional {
        0 => thumb: object(PhotoSize, type_ids::PHOTO_SIZE),
        1 => mime_type: string,
        2 => file_size: int,
    }
}

schema_object! {
    /// A voice note. The waveform is the raw 5-bit sample buffer the
    /// recording client produced.
    object Voice("voice", type_ids::VOICE) as VOICE_MANIFEST;
    builder VoiceBuilder;
    required {
        file_id: string,
        duration: int,
    }
    optional {
        0 => mime_type: string,
        1 => file_size: int,
        2 => waveform: bytes,
    }
}

schema_object! {
    /// A video note (round video message).
    object VideoNote("video_note", type_ids::VIDEO_NOTE) as VIDEO_NOTE_MANIFEST;
    builder VideoNoteBuilder;
    required {
        file_id: string,
        length: int,
        duration: int,
    }
    optional {
        0 => thumb: object(PhotoSize, type_ids::PHOTO_SIZE),
        1 => file_size: int,
    }
}

schema_object! {
    /// A sticker.
    object Sticker("sticker", type_ids::STICKER) as STICKER_MANIFEST;
    builder StickerBuilder;
    required {
        file_id: string,
        width: int,
        height: int,
    }
    optional {
        0 => thumb: object(PhotoSize, type_ids::PHOTO_SIZE),
        1 => emoji: string,
        2 => set_name: string,
        3 => mask: flag,
        4 => file_size: int,
    }
}

schema_object! {
    /// A shared contact.
    object Contact("contact", type_ids::CONTACT) as CONTACT_MANIFEST;
    builder ContactBuilder;
    required {
        phone_number: string,
        first_name: string,
    }
    optional {
        0 => last_name: string,
        1 => user_id: int,
    }
}

schema_object! {
    /// A point on the map. No optional fields, so instances carry no
    /// presence mask at all.
    object Location("location", type_ids::LOCATION) as LOCATION_MANIFEST;
    builder LocationBuilder;
    required {
        longitude: double,
        latitude: double,
    }
    optional {}
}

schema_object! {
    /// A venue: a location with a name and address.
    object Venue("venue", type_ids::VENUE) as VENUE_MANIFEST;
    builder VenueBuilder;
    required {
        location: object(Location, type_ids::LOCATION),
        title: string,
        address: string,
    }
    optional {
        0 => foursquare_id: string,
    }
}

schema_object! {
    /// A game with title, description and optional media attachments.
    object Game("game", type_ids::GAME) as GAME_MANIFEST;
    builder GameBuilder;
    required {
        title: string,
        description: string,
    }
    optional {
        0 => photo: seq(PhotoSize, type_ids::PHOTO_SIZE),
        1 => text: string,
        2 => text_entities: seq(MessageEntity, type_ids::MESSAGE_ENTITY),
    }
}
