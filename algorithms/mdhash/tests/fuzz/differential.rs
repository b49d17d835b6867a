use bolero::check;
use mdhash::Variant;
use sha2::{Digest, Sha256, Sha512};

#[test]
fn fuzz_against_sha2() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        assert_eq!(
            mdhash::hash(data, Variant::Sha256).unwrap(),
            hex::encode(Sha256::digest(data))
        );
        assert_eq!(
            mdhash::hash(data, Variant::Sha512).unwrap(),
            hex::encode(Sha512::digest(data))
        );
    });
}
