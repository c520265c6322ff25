//! The MD5 hash function (RFC 1321).

use crate::hash::{md_pad, Engine};
use zeroize::Zeroize;

const IV: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

// floor(2^32 * abs(sin(i + 1))), the RFC 1321 sine table.
#[rustfmt::skip]
const T: [u32; 64] = [
    0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee,
    0xf57c_0faf, 0x4787_c62a, 0xa830_4613, 0xfd46_9501,
    0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be,
    0x6b90_1122, 0xfd98_7193, 0xa679_438e, 0x49b4_0821,
    0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa,
    0xd62f_105d, 0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8,
    0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed,
    0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a,
    0xfffa_3942, 0x8771_f681, 0x6d9d_6122, 0xfde5_380c,
    0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70,
    0x289b_7ec6, 0xeaa1_27fa, 0xd4ef_3085, 0x0488_1d05,
    0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665,
    0xf429_2244, 0x432a_ff97, 0xab94_23a7, 0xfc93_a039,
    0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
    0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1,
    0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb, 0xeb86_d391,
];

#[rustfmt::skip]
const S: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5,  9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

fn compress(state: &mut [u32; 4], blocks: &[u8]) {
    for block in blocks.chunks_exact(64) {
        let mut x = [0u32; 16];
        for (i, word) in x.iter_mut().enumerate() {
            *word = crate::hash::le32(&block[4 * i..]);
        }

        let [mut a, mut b, mut c, mut d] = *state;

        for i in 0..64 {
            let round = i / 16;
            let (f, idx) = match round {
                0 => ((b & c) | (!b & d), i),
                1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };

            let tmp = d;
            d = c;
            c = b;
            b = b.wrapping_add(
                a.wrapping_add(f)
                    .wrapping_add(T[i])
                    .wrapping_add(x[idx])
                    .rotate_left(S[round][i % 4]),
            );
            a = tmp;
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
    }
}

#[derive(Clone)]
pub(crate) struct Md5Engine {
    state: [u32; 4],
}

impl Default for Md5Engine {
    fn default() -> Self {
        Self { state: IV }
    }
}

impl Engine for Md5Engine {
    const BLOCK: usize = 64;
    const OUT: usize = 16;

    fn reset(&mut self) {
        self.state = IV;
    }

    fn compress(&mut self, data: &[u8]) {
        compress(&mut self.state, data);
    }

    fn finalize(&mut self, tail: &[u8], total: u128, out: &mut [u8]) {
        md_pad(64, tail, total, true, |b| compress(&mut self.state, b));
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
    }

    fn wipe(&mut self) {
        self.state.zeroize();
    }
}

make_hasher! {
    sec_warning: "MD5 is cryptographically broken; collision attacks are practical. It is \
                  included for legacy interoperability only.",
    name: Md5,
    engine: Md5Engine,
    bs: 64,
    ds: 16,
    hmac: yes,
    rc: md5::Md5,
}
