//! The legacy Keccak-384 hash function (pre-FIPS submission, domain `0x01`).

use crate::hash::keccak::KeccakEngine;

make_hasher! {
    name: Keccak384,
    engine: KeccakEngine<104, 0x01>,
    bs: 104,
    ds: 48,
    hmac: yes,
    rc: sha3::Keccak384,
}
