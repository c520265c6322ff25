#![allow(dead_code)]

use fleet_hash::registry::{Algorithm, StreamHasher};

/// Feed `data` to `hasher` in `step`-sized slices and return the hex digest.
pub fn hash_hex_chunked(hasher: &mut dyn StreamHasher, data: &[u8], step: usize) -> String {
    hasher.reset();
    if step == 0 {
        hasher.absorb(data).unwrap();
    } else {
        for chunk in data.chunks(step) {
            hasher.absorb(chunk).unwrap();
        }
    }
    hasher.produce_hex().unwrap()
}

/// Every parameterless variant, for table-driven law tests.
pub fn all_variants() -> Vec<Algorithm> {
    vec![
        Algorithm::Md4,
        Algorithm::Md5,
        Algorithm::Ripemd160,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha3_224,
        Algorithm::Sha3_256,
        Algorithm::Sha3_384,
        Algorithm::Sha3_512,
        Algorithm::Keccak224,
        Algorithm::Keccak256,
        Algorithm::Keccak384,
        Algorithm::Keccak512,
        Algorithm::Blake2b { digest_len: 64 },
        Algorithm::Crc32,
        Algorithm::XxHash32 { seed: 0 },
        Algorithm::XxHash64 { seed: 0 },
    ]
}
