use bolero::check;
use mdhash::walkthrough::trace;
use mdhash::{Variant, SHA256, SHA512};

#[test]
fn fuzz_staged_matches_oneshot() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        for variant in Variant::ALL {
            let expected = mdhash::hash(data, variant).unwrap();

            let padded = mdhash::pad(data, variant).unwrap();
            let mut state = mdhash::initial_state(variant);
            for block in mdhash::parse_blocks(&padded, variant).unwrap() {
                state = mdhash::compress_block(&block, &state, variant).unwrap();
            }
            assert_eq!(mdhash::format_digest(&state, variant).unwrap(), expected);
        }
    });
}

#[test]
fn fuzz_trace_matches_oneshot() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        assert_eq!(
            trace(data, &SHA256).unwrap().digest(),
            mdhash::hash(data, Variant::Sha256).unwrap()
        );
        assert_eq!(
            trace(data, &SHA512).unwrap().digest(),
            mdhash::hash(data, Variant::Sha512).unwrap()
        );
    });
}
