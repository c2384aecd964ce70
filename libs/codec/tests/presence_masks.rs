//! Presence-mask fidelity: every subset of optional fields must survive the
//! wire exactly, including the bits past 31 that force the 64-bit mask.

use proptest::prelude::*;
use tl_codec::{decode_object, encode_object, global_registry};
use tl_types::schema::chat::{ChatBuilder, UserBuilder};
use tl_types::schema::message::{Message, MessageBuilder};
use tl_types::Object;

#[test]
fn every_user_optional_subset_round_trips() {
    // The user type has five optional fields; sweep all 32 combinations.
    for subset in 0u8..32 {
        let mut builder = UserBuilder::new(1, "Ada");
        if subset & 1 != 0 {
            builder = builder.is_bot();
        }
        if subset & 2 != 0 {
            builder = builder.last_name("Lovelace");
        }
        if subset & 4 != 0 {
            builder = builder.username("ada");
        }
        if subset & 8 != 0 {
            builder = builder.language_code("en");
        }
        if subset & 16 != 0 {
            builder = builder.phone_number("+44");
        }
        let obj = builder.build().unwrap();

        let bytes = encode_object(&obj).unwrap();
        let decoded = decode_object(global_registry(), &bytes).unwrap();
        assert_eq!(decoded.object, obj, "subset {subset:#07b}");
        assert_eq!(decoded.trailing, 0);
    }
}

fn chat() -> Object {
    ChatBuilder::new(42, "private").build().unwrap()
}

proptest! {
    #[test]
    fn sampled_message_subsets_round_trip(
        text in proptest::option::of(".{0,40}"),
        caption in proptest::option::of("[a-z ]{0,20}"),
        edit_date in proptest::option::of(any::<i32>()),
        migrate_to in proptest::option::of(any::<i64>()),
        connected_website in proptest::option::of("[a-z.]{1,30}"),
        delete_chat_photo in any::<bool>(),
        channel_chat_created in any::<bool>(),
    ) {
        let mut builder = MessageBuilder::new(7, 1_600_000_000, chat());
        if let Some(ref v) = text {
            builder = builder.text(v.clone());
        }
        if let Some(ref v) = caption {
            builder = builder.caption(v.clone());
        }
        if let Some(v) = edit_date {
            builder = builder.edit_date(v);
        }
        if let Some(v) = migrate_to {
            builder = builder.migrate_to_chat_id(v);
        }
        if let Some(ref v) = connected_website {
            builder = builder.connected_website(v.clone());
        }
        if delete_chat_photo {
            builder = builder.delete_chat_photo();
        }
        if channel_chat_created {
            builder = builder.channel_chat_created();
        }
        let obj = builder.build().unwrap();

        let bytes = encode_object(&obj).unwrap();
        let decoded = decode_object(global_registry(), &bytes).unwrap();
        prop_assert_eq!(decoded.trailing, 0);
        prop_assert_eq!(&decoded.object, &obj);

        let msg = Message::new(&decoded.object).unwrap();
        prop_assert_eq!(msg.text(), text.as_deref());
        prop_assert_eq!(msg.edit_date(), edit_date);
        // Bits 33 and 38 exercise the upper half of the 64-bit mask.
        prop_assert_eq!(msg.migrate_to_chat_id(), migrate_to);
        prop_assert_eq!(msg.connected_website(), connected_website.as_deref());
        prop_assert_eq!(msg.delete_chat_photo(), delete_chat_photo);
        prop_assert_eq!(msg.channel_chat_created(), channel_chat_created);
    }
}
