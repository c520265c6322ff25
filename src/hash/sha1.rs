//! The SHA-1 hash function (FIPS 180-4).

use crate::hash::{md_pad, Engine};
use zeroize::Zeroize;

const IV: [u32; 5] = [
    0x6745_2301,
    0xefcd_ab89,
    0x98ba_dcfe,
    0x1032_5476,
    0xc3d2_e1f0,
];

fn compress(state: &mut [u32; 5], blocks: &[u8]) {
    for block in blocks.chunks_exact(64) {
        let mut w = [0u32; 80];
        for i in 0..16 {
            w[i] = crate::hash::be32(&block[4 * i..]);
        }
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = *state;

        for i in 0..80 {
            let (f, k) = match i / 20 {
                0 => ((b & c) | (!b & d), 0x5a82_7999),
                1 => (b ^ c ^ d, 0x6ed9_eba1),
                2 => ((b & c) | (b & d) | (c & d), 0x8f1b_bcdc),
                _ => (b ^ c ^ d, 0xca62_c1d6),
            };

            let tmp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(w[i]);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = tmp;
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);
    }
}

#[derive(Clone)]
pub(crate) struct Sha1Engine {
    state: [u32; 5],
}

impl Default for Sha1Engine {
    fn default() -> Self {
        Self { state: IV }
    }
}

impl Engine for Sha1Engine {
    const BLOCK: usize = 64;
    const OUT: usize = 20;

    fn reset(&mut self) {
        self.state = IV;
    }

    fn compress(&mut self, data: &[u8]) {
        compress(&mut self.state, data);
    }

    fn finalize(&mut self, tail: &[u8], total: u128, out: &mut [u8]) {
        md_pad(64, tail, total, false, |b| compress(&mut self.state, b));
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
    }

    fn wipe(&mut self) {
        self.state.zeroize();
    }
}

make_hasher! {
    sec_warning: "SHA-1 is deprecated for all signature use; collisions have been \
                  demonstrated. Prefer the SHA-2 or SHA-3 families.",
    name: Sha1,
    engine: Sha1Engine,
    bs: 64,
    ds: 20,
    hmac: yes,
    rc: sha1::Sha1,
}
