//! The legacy Keccak-512 hash function (pre-FIPS submission, domain `0x01`).

use crate::hash::keccak::KeccakEngine;

make_hasher! {
    name: Keccak512,
    engine: KeccakEngine<72, 0x01>,
    bs: 72,
    ds: 64,
    hmac: yes,
    rc: sha3::Keccak512,
}
