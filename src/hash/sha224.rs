//! The SHA-224 hash function (FIPS 180-4).
//!
//! SHA-256 with a distinct IV, truncated to 28 bytes.

use crate::hash::{sha256, Engine};
use zeroize::Zeroize;

const IV: [u32; 8] = [
    0xc105_9ed8,
    0x367c_d507,
    0x3070_dd17,
    0xf70e_5939,
    0xffc0_0b31,
    0x6858_1511,
    0x64f9_8fa7,
    0xbefa_4fa4,
];

#[derive(Clone)]
pub(crate) struct Sha224Engine {
    state: [u32; 8],
}

impl Default for Sha224Engine {
    fn default() -> Self {
        Self { state: IV }
    }
}

impl Engine for Sha224Engine {
    const BLOCK: usize = 64;
    const OUT: usize = 28;

    fn reset(&mut self) {
        self.state = IV;
    }

    fn compress(&mut self, data: &[u8]) {
        sha256::compress(&mut self.state, data);
    }

    fn finalize(&mut self, tail: &[u8], total: u128, out: &mut [u8]) {
        sha256::finalize(&mut self.state, tail, total, out);
    }

    fn wipe(&mut self) {
        self.state.zeroize();
    }
}

make_hasher! {
    name: Sha224,
    engine: Sha224Engine,
    bs: 64,
    ds: 28,
    hmac: yes,
    rc: sha2::Sha224,
}
