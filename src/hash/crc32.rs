//! The CRC32 checksum (IEEE 802.3, reflected polynomial `0xedb88320`).
//!
//! Not a cryptographic hash; it detects accidental corruption only. Carried
//! through the same streaming facade so callers can treat it uniformly.

use crate::hash::Engine;
use zeroize::Zeroize;

const INIT: u32 = 0xffff_ffff;

const TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                0xedb8_8320 ^ (crc >> 1)
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

#[derive(Clone)]
pub(crate) struct Crc32Engine {
    crc: u32,
}

impl Default for Crc32Engine {
    fn default() -> Self {
        Self { crc: INIT }
    }
}

impl Engine for Crc32Engine {
    // pure byte streaming; no block discipline and therefore no HMAC
    const BLOCK: usize = 1;
    const OUT: usize = 4;

    fn reset(&mut self) {
        self.crc = INIT;
    }

    fn compress(&mut self, data: &[u8]) {
        let mut crc = self.crc;
        for &byte in data {
            crc = TABLE[((crc ^ u32::from(byte)) & 0xff) as usize] ^ (crc >> 8);
        }
        self.crc = crc;
    }

    fn finalize(&mut self, tail: &[u8], _total: u128, out: &mut [u8]) {
        debug_assert!(tail.is_empty());
        out.copy_from_slice(&(!self.crc).to_be_bytes());
    }

    fn wipe(&mut self) {
        self.crc.zeroize();
        self.crc = INIT;
    }
}

make_hasher! {
    name: Crc32,
    engine: Crc32Engine,
    bs: 1,
    ds: 4,
}
