use bolero::check;
use mdhash::Variant;

#[test]
fn fuzz_padding_invariant() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        for (variant, block_bits, field_bits) in
            [(Variant::Sha256, 512, 64), (Variant::Sha512, 1024, 128)]
        {
            let padded = mdhash::pad(data, variant).unwrap();
            let bits = padded.bit_len();
            let message_bits = data.len() * 8;

            // =============================================================================
            // LAYOUT
            // =============================================================================
            assert_eq!(bits % block_bits, 0);
            assert!(bits - (message_bits + 1 + field_bits) < block_bits);
            assert!(padded.as_bytes().starts_with(data));
            assert_eq!(padded.bit(message_bits), Some(true));
            assert_eq!(padded.trailing_length(field_bits), Some(message_bits as u128));

            // =============================================================================
            // BLOCKS
            // =============================================================================
            let blocks = mdhash::parse_blocks(&padded, variant).unwrap();
            assert_eq!(blocks.len(), bits / block_bits);
            assert!(blocks.iter().all(|b| b.bit_len() == block_bits));
        }
    });
}
