//! The SHA3-256 hash function (FIPS 202).

use crate::hash::keccak::KeccakEngine;

make_hasher! {
    name: Sha3_256,
    engine: KeccakEngine<136, 0x06>,
    bs: 136,
    ds: 32,
    hmac: yes,
    rc: sha3::Sha3_256,
}
