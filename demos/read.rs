//! Loads a hex-encoded value from disk and decodes it: open the file,
//! read it to a buffer, decode.

use std::fs;

fn main() {
    let path = "demos/sample.hex";
    let text = fs::read_to_string(path).expect("file to exist");
    let bytes = poculum::hex::from_hex(text.trim()).expect("file to contain valid hex");

    let value = poculum::decode(&bytes).expect("file to contain a valid encoded value");

    println!("{}", value);
}
