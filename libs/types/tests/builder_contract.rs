//! The builder optionality contract across the public surface: required
//! fields are constructor arguments, optional fields are setters, and
//! validation happens exactly once at `build()`.

use tl_types::schema::chat::{Chat, ChatBuilder, User, UserBuilder};
use tl_types::schema::media::{
    EntityType, Location, LocationBuilder, MessageEntityBuilder, Venue, VenueBuilder,
};
use tl_types::schema::message::{Message, MessageBuilder};
use tl_types::schema::payments::{Invoice, InvoiceBuilder};
use tl_types::TypeError;

#[test]
fn view_rejects_foreign_object() {
    let user = UserBuilder::new(1, "Ada").build().unwrap();
    let err = Chat::new(&user).unwrap_err();
    assert_eq!(err, TypeError::WrongType { expected: "chat", actual: "user" });
}

#[test]
fn unset_optionals_read_back_as_absent() {
    let user = UserBuilder::new(1, "Ada").build().unwrap();
    let view = User::new(&user).unwrap();
    assert_eq!(view.id(), 1);
    assert_eq!(view.first_name(), "Ada");
    assert_eq!(view.last_name(), None);
    assert_eq!(view.username(), None);
    assert!(!view.is_bot());
}

#[test]
fn maskless_type_builds_without_setters() {
    let loc = LocationBuilder::new(13.4, 52.5).build().unwrap();
    let view = Location::new(&loc).unwrap();
    assert_eq!(view.longitude(), 13.4);
    assert_eq!(view.latitude(), 52.5);
}

#[test]
fn required_nested_object_is_type_checked() {
    let loc = LocationBuilder::new(13.4, 52.5).build().unwrap();
    let venue = VenueBuilder::new(loc, "Cafe", "Street 1").build().unwrap();
    let view = Venue::new(&venue).unwrap();
    assert_eq!(view.location().latitude(), 52.5);

    let chat = ChatBuilder::new(1, "private").build().unwrap();
    let err = VenueBuilder::new(chat, "Cafe", "Street 1").build().unwrap_err();
    assert!(matches!(err, TypeError::NestedTypeMismatch { field: "location", .. }));
}

#[test]
fn invoice_has_no_optional_surface() {
    let invoice = InvoiceBuilder::new("Title", "Desc", "start", "EUR", 100)
        .build()
        .unwrap();
    let view = Invoice::new(&invoice).unwrap();
    assert_eq!(view.currency(), "EUR");
    assert_eq!(view.total_amount(), 100);
}

#[test]
fn message_builder_composes_nested_builders() {
    let chat = ChatBuilder::new(42, "supergroup").title("rustaceans").build().unwrap();
    let mention = MessageEntityBuilder::typed(EntityType::Mention, 0, 4)
        .build()
        .unwrap();
    let obj = MessageBuilder::new(100, 1_600_000_000, chat)
        .text("@ada hi")
        .entities(vec![mention])
        .build()
        .unwrap();

    let msg = Message::new(&obj).unwrap();
    assert_eq!(msg.chat().title(), Some("rustaceans"));
    assert_eq!(msg.entities().unwrap()[0].entity_type(), Some(EntityType::Mention));
}
