//! Conversation participants: users and chats

use crate::schema::type_ids;
use crate::schema_object;

schema_object! {
    /// This object represents a user or bot.
    object User("user", type_ids::USER) as USER_MANIFEST;
    builder UserBuilder;
    required {
        id: int,
        first_name: string,
    }
    optional {
        0 => is_bot: flag,
        1 => last_name: string,
        2 => username: string,
        3 => language_code: string,
        4 => phone_number: string,
    }
}

schema_object! {
    /// This object represents a conversation: a private chat, group,
    /// supergroup or channel.
    ///
    /// Chat ids can exceed 32 bits, hence the 64-bit `id`.
    object Chat("chat", type_ids::CHAT) as CHAT_MANIFEST;
    builder ChatBuilder;
    required {
        id: long,
        kind: string,
    }
    optional {
        0 => title: string,
        1 => username: string,
        2 => first_name: string,
        3 => last_name: string,
        4 => all_members_are_administrators: flag,
        5 => description: string,
        6 => invite_link: string,
        7 => sticker_set_name: string,
        8 => can_set_sticker_set: flag,
    }
}
