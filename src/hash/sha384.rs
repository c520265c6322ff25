//! The SHA-384 hash function (FIPS 180-4).
//!
//! SHA-512 with a distinct IV, truncated to 48 bytes.

use crate::hash::{sha512, Engine};
use zeroize::Zeroize;

const IV: [u64; 8] = [
    0xcbbb_9d5d_c105_9ed8,
    0x629a_292a_367c_d507,
    0x9159_015a_3070_dd17,
    0x152f_ecd8_f70e_5939,
    0x6733_2667_ffc0_0b31,
    0x8eb4_4a87_6858_1511,
    0xdb0c_2e0d_64f9_8fa7,
    0x47b5_481d_befa_4fa4,
];

#[derive(Clone)]
pub(crate) struct Sha384Engine {
    state: [u64; 8],
}

impl Default for Sha384Engine {
    fn default() -> Self {
        Self { state: IV }
    }
}

impl Engine for Sha384Engine {
    const BLOCK: usize = 128;
    const OUT: usize = 48;

    fn reset(&mut self) {
        self.state = IV;
    }

    fn compress(&mut self, data: &[u8]) {
        sha512::compress(&mut self.state, data);
    }

    fn finalize(&mut self, tail: &[u8], total: u128, out: &mut [u8]) {
        sha512::finalize(&mut self.state, tail, total, out);
    }

    fn wipe(&mut self) {
        self.state.zeroize();
    }
}

make_hasher! {
    name: Sha384,
    engine: Sha384Engine,
    bs: 128,
    ds: 48,
    hmac: yes,
    rc: sha2::Sha384,
}
