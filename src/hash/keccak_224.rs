//! The legacy Keccak-224 hash function (pre-FIPS submission, domain `0x01`).

use crate::hash::keccak::KeccakEngine;

make_hasher! {
    name: Keccak224,
    engine: KeccakEngine<144, 0x01>,
    bs: 144,
    ds: 28,
    hmac: yes,
    rc: sha3::Keccak224,
}
