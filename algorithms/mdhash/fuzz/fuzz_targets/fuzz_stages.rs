#![no_main]

use libfuzzer_sys::fuzz_target;
use mdhash::Variant;

fuzz_target!(|data: &[u8]| {
    // Variant from the first byte, message from the rest
    let Some((selector, message)) = data.split_first() else {
        return;
    };
    let variant = Variant::ALL[usize::from(*selector) % Variant::ALL.len()];

    let reference = mdhash::hash(message, variant).unwrap();

    let padded = mdhash::pad(message, variant).unwrap();
    let mut state = mdhash::initial_state(variant);
    for block in mdhash::parse_blocks(&padded, variant).unwrap() {
        state = mdhash::compress_block(&block, &state, variant).unwrap();
    }
    let staged = mdhash::format_digest(&state, variant).unwrap();

    assert_eq!(reference, staged, "Staged and one-shot digests differ!");
});
