//! Consistency & Regression Tests
//!
//! Verifies internal logic consistency, boundary conditions, and structural invariants.
//! - Stage-by-stage vs one-shot consistency
//! - Padding layout & length field
//! - Block chaining
//! - Variant isolation
//! - Batch API consistency

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use mdhash::{Bitstream, Variant};

/// Hash through the public stages, one call each.
fn staged(message: &[u8], variant: Variant) -> String {
    let padded = mdhash::pad(message, variant).unwrap();
    let blocks = mdhash::parse_blocks(&padded, variant).unwrap();
    let mut state = mdhash::initial_state(variant);
    for block in &blocks {
        state = mdhash::compress_block(block, &state, variant).unwrap();
    }
    mdhash::format_digest(&state, variant).unwrap()
}

const fn block_bits(variant: Variant) -> usize {
    match variant {
        Variant::Sha256 => 512,
        Variant::Sha512 => 1024,
    }
}

const fn length_field_bits(variant: Variant) -> usize {
    match variant {
        Variant::Sha256 => 64,
        Variant::Sha512 => 128,
    }
}

// =============================================================================
// STAGED CONSISTENCY
// =============================================================================

#[test]
fn test_staged_matches_oneshot() {
    let sizes = [0, 1, 3, 55, 56, 63, 64, 65, 111, 112, 127, 128, 129, 1000, 4096];

    for variant in Variant::ALL {
        for &size in &sizes {
            let input: Vec<u8> = (0..size).map(|i| (i * 31 % 251) as u8).collect();
            assert_eq!(
                staged(&input, variant),
                mdhash::hash(&input, variant).unwrap(),
                "CONSISTENCY FAILURE for {variant} at size {size}",
            );
        }
    }
}

#[test]
fn test_determinism() {
    let input = b"The quick brown fox jumps over the lazy dog";
    for variant in Variant::ALL {
        let first = mdhash::hash(input, variant).unwrap();
        for _ in 0..10 {
            assert_eq!(mdhash::hash(input, variant).unwrap(), first);
        }
    }
}

#[test]
fn test_digest_lengths() {
    for variant in Variant::ALL {
        for size in [0, 1, 200] {
            let digest = mdhash::hash(&vec![7u8; size], variant).unwrap();
            assert_eq!(digest.len(), variant.digest_hex_len());
            assert!(digest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }
    assert_eq!(Variant::Sha256.digest_hex_len(), 64);
    assert_eq!(Variant::Sha512.digest_hex_len(), 128);
}

// =============================================================================
// PADDING
// =============================================================================

#[test]
fn test_padding_layout() {
    // Every length from 0 to three blocks, both variants.
    for variant in Variant::ALL {
        let block = block_bits(variant);
        let field = length_field_bits(variant);

        for len in 0..=(3 * block / 8) {
            let message = vec![0xA5u8; len];
            let padded = mdhash::pad(&message, variant).unwrap();
            let bits = padded.bit_len();

            assert_eq!(bits % block, 0, "{variant}: len {len} not block aligned");
            assert!(bits >= len * 8 + 1 + field, "{variant}: len {len} too short");
            assert!(bits - (len * 8 + 1 + field) < block, "{variant}: len {len} overpadded");

            assert_eq!(&padded.as_bytes()[..len], &message[..]);
            assert_eq!(padded.bit(len * 8), Some(true), "{variant}: missing 1 bit");
            assert!(padded.as_bytes()[len + 1..padded.as_bytes().len() - field / 8]
                .iter()
                .all(|b| *b == 0));
            assert_eq!(padded.trailing_length(field), Some((len * 8) as u128));
        }
    }
}

#[test]
fn test_padding_block_boundaries() {
    let cases = [
        (Variant::Sha256, 55, 1),
        (Variant::Sha256, 56, 2),
        (Variant::Sha256, 63, 2),
        (Variant::Sha256, 64, 2),
        (Variant::Sha512, 111, 1),
        (Variant::Sha512, 112, 2),
        (Variant::Sha512, 127, 2),
        (Variant::Sha512, 128, 2),
    ];

    for (variant, len, blocks) in cases {
        let padded = mdhash::pad(&vec![0u8; len], variant).unwrap();
        assert_eq!(
            mdhash::parse_blocks(&padded, variant).unwrap().len(),
            blocks,
            "{variant}: {len} bytes"
        );
    }
}

#[test]
fn test_abc_padding_bits() {
    let padded = mdhash::pad(b"abc", Variant::Sha256).unwrap();
    let bits = padded.to_string();

    assert_eq!(bits.len(), 512);
    assert!(bits.starts_with("01100001011000100110001110000000"));
    assert!(bits.ends_with("0000000000011000"));
    assert_eq!(Bitstream::from_bit_str(&bits).unwrap(), padded);
}

// =============================================================================
// CHAINING & ISOLATION
// =============================================================================

#[test]
fn test_chaining_depends_on_every_block() {
    for variant in Variant::ALL {
        let bytes = block_bits(variant) / 8;
        let base = vec![0x11u8; 3 * bytes];
        let reference = mdhash::hash(&base, variant).unwrap();

        for block in 0..3 {
            let mut altered = base.clone();
            altered[block * bytes] ^= 1;
            assert_ne!(
                mdhash::hash(&altered, variant).unwrap(),
                reference,
                "{variant}: block {block} did not affect the digest"
            );
        }
    }
}

#[test]
fn test_initial_state_is_reused_between_calls() {
    for variant in Variant::ALL {
        let before = mdhash::initial_state(variant);
        let _ = mdhash::hash(b"mutate nothing", variant).unwrap();
        assert_eq!(mdhash::initial_state(variant), before);
    }
    assert_eq!(mdhash::initial_state(Variant::Sha256)[0], 0x6a09_e667);
    assert_eq!(mdhash::initial_state(Variant::Sha512)[0], 0x6a09_e667_f3bc_c908);
}

#[test]
fn test_variant_isolation() {
    let input = b"abc";
    let narrow = mdhash::hash(input, Variant::Sha256).unwrap();
    let wide = mdhash::hash(input, Variant::Sha512).unwrap();

    assert_ne!(&wide[..64], narrow);

    // The wide engine still produces its own vector after the narrow one ran.
    assert_eq!(
        mdhash::hash(input, Variant::Sha512).unwrap(),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn test_schedule_widths() {
    for (variant, rounds) in [(Variant::Sha256, 64), (Variant::Sha512, 80)] {
        let padded = mdhash::pad(b"abc", variant).unwrap();
        let blocks = mdhash::parse_blocks(&padded, variant).unwrap();
        let schedule = mdhash::expand_schedule(&blocks[0], variant).unwrap();
        assert_eq!(schedule.len(), rounds);
        if variant == Variant::Sha256 {
            assert!(schedule.iter().all(|w| *w <= u64::from(u32::MAX)));
        }
    }
}

// =============================================================================
// BATCH API CONSISTENCY
// =============================================================================

#[test]
fn test_batch_matches_serial() {
    let inputs: Vec<Vec<u8>> = (0..64usize).map(|n| vec![n as u8; n * 17]).collect();

    for variant in Variant::ALL {
        let batch = mdhash::hash_batch(&inputs, variant).unwrap();
        assert_eq!(batch.len(), inputs.len());
        for (input, digest) in inputs.iter().zip(&batch) {
            assert_eq!(*digest, mdhash::hash(input, variant).unwrap());
        }
    }
}

#[test]
fn test_batch_empty() {
    let inputs: Vec<&[u8]> = Vec::new();
    assert!(mdhash::hash_batch(&inputs, Variant::Sha512).unwrap().is_empty());
}
