//! The legacy Keccak-256 hash function (pre-FIPS submission, domain `0x01`).
//!
//! Still ubiquitous in the Ethereum ecosystem.

use crate::hash::keccak::KeccakEngine;

make_hasher! {
    name: Keccak256,
    engine: KeccakEngine<136, 0x01>,
    bs: 136,
    ds: 32,
    hmac: yes,
    rc: sha3::Keccak256,
}

#[cfg(test)]
mod vector_tests {
    use super::*;

    #[test]
    fn published_vectors() {
        assert_eq!(
            Keccak256::hash_hex(b""),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            Keccak256::hash_hex(b"abc"),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }
}
