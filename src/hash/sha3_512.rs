//! The SHA3-512 hash function (FIPS 202).

use crate::hash::keccak::KeccakEngine;

make_hasher! {
    name: Sha3_512,
    engine: KeccakEngine<72, 0x06>,
    bs: 72,
    ds: 64,
    hmac: yes,
    rc: sha3::Sha3_512,
}
