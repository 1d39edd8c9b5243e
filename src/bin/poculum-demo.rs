//! Demonstration entry point. Builds a small nested value, encodes it,
//! hex-dumps the bytes, and decodes them back: a thin collaborator that
//! calls the two core operations and has no wire-format contract of its
//! own to preserve.

use poculum::{decode, encode, hex, Value};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber");

    let value = Value::map(vec![
        ("name".to_owned(), Value::string("Bananrama")),
        ("level".to_owned(), Value::UInt(20)),
        (
            "friends".to_owned(),
            Value::List(vec![Value::string("Alice"), Value::string("Steve")]),
        ),
        ("retired".to_owned(), Value::Bool(false)),
    ]);

    info!(?value, "encoding value");
    let bytes = encode(&value).expect("value uses only supported variants");
    info!(hex = %hex::to_hex(&bytes), len = bytes.len(), "encoded");

    let decoded = decode(&bytes).expect("bytes were just produced by encode");
    info!(?decoded, "decoded");

    println!("hex:     {}", hex::to_hex(&bytes));
    println!("decoded: {}", decoded);
    assert_eq!(decoded, value, "round-trip must be lossless");
}
