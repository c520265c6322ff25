//! The SHA3-224 hash function (FIPS 202).

use crate::hash::keccak::KeccakEngine;

make_hasher! {
    name: Sha3_224,
    engine: KeccakEngine<144, 0x06>,
    bs: 144,
    ds: 28,
    hmac: yes,
    rc: sha3::Sha3_224,
}
