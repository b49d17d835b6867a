#![no_main]

use libfuzzer_sys::fuzz_target;
use mdhash::Variant;

fuzz_target!(|data: &[u8]| {
    for (variant, block_bits, field_bits) in
        [(Variant::Sha256, 512, 64), (Variant::Sha512, 1024, 128)]
    {
        let Ok(padded) = mdhash::pad(data, variant) else {
            panic!("padding failed for {} bytes", data.len());
        };

        // Block aligned, marker bit set, length field intact
        assert_eq!(padded.bit_len() % block_bits, 0);
        assert_eq!(padded.bit(data.len() * 8), Some(true));
        assert_eq!(
            padded.trailing_length(field_bits),
            Some(data.len() as u128 * 8),
            "Length field does not encode the message length!"
        );
    }
});
