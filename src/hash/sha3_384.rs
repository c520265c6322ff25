//! The SHA3-384 hash function (FIPS 202).

use crate::hash::keccak::KeccakEngine;

make_hasher! {
    name: Sha3_384,
    engine: KeccakEngine<104, 0x06>,
    bs: 104,
    ds: 48,
    hmac: yes,
    rc: sha3::Sha3_384,
}
