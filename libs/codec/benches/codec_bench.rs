//! Throughput of the manifest-driven engine on representative objects.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tl_codec::{decode_object, encode_object, global_registry};
use tl_types::schema::chat::{ChatBuilder, UserBuilder};
use tl_types::schema::media::{EntityType, MessageEntityBuilder};
use tl_types::schema::message::MessageBuilder;
use tl_types::Object;

fn minimal_message() -> Object {
    let chat = ChatBuilder::new(42, "private").build().unwrap();
    MessageBuilder::new(1, 1_600_000_000, chat).build().unwrap()
}

fn rich_message() -> Object {
    let chat = ChatBuilder::new(42, "supergroup")
        .title("benchmark")
        .build()
        .unwrap();
    let from = UserBuilder::new(7, "Ada").username("ada").build().unwrap();
    let reply = minimal_message();
    let entities = (0..8)
        .map(|i| {
            MessageEntityBuilder::typed(EntityType::Bold, i * 10, 5)
                .build()
                .unwrap()
        })
        .collect();
    MessageBuilder::new(2, 1_600_000_001, chat)
        .from_user(from)
        .reply_to_message(reply)
        .text("the quick brown fox jumps over the lazy dog".repeat(4))
        .entities(entities)
        .build()
        .unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let minimal = minimal_message();
    let rich = rich_message();

    c.bench_function("encode_minimal_message", |b| {
        b.iter(|| encode_object(black_box(&minimal)).unwrap())
    });
    c.bench_function("encode_rich_message", |b| {
        b.iter(|| encode_object(black_box(&rich)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let minimal = encode_object(&minimal_message()).unwrap();
    let rich = encode_object(&rich_message()).unwrap();
    let registry = global_registry();

    c.bench_function("decode_minimal_message", |b| {
        b.iter(|| decode_object(registry, black_box(&minimal)).unwrap())
    });
    c.bench_function("decode_rich_message", |b| {
        b.iter(|| decode_object(registry, black_box(&rich)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
