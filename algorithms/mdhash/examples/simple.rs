//! mdhash Basic Example
//!
//! Minimal usage: `let digest = mdhash::hash(data, Variant::Sha256)?;`

#![allow(clippy::pedantic, clippy::nursery)]

use mdhash::Variant;

fn main() -> Result<(), mdhash::Error> {
    let data = b"Hello, World!";
    println!("Data: {:?}", String::from_utf8_lossy(data));

    for variant in Variant::ALL {
        println!("{variant}: {}", mdhash::hash(data, variant)?);
    }
    Ok(())
}
