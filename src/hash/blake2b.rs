//! The BLAKE2b hash function (RFC 7693).
//!
//! Variable digest length up to 64 bytes and an optional key up to 64
//! bytes, both folded into the parameter block at the IV. The compression
//! function must know whether it is consuming the final block (`f0` flag),
//! so the streaming facade holds one full block back until more input
//! arrives or `digest` is called.

use crate::digest::Digest;
use crate::error::{ParameterError, UsageError};
use crate::hash::{Engine, Phase};
use zeroize::Zeroize;

pub(crate) const MAX_DIGEST_LEN: usize = 64;
pub(crate) const MAX_KEY_LEN: usize = 64;

const IV: [u64; 8] = [
    0x6a09_e667_f3bc_c908,
    0xbb67_ae85_84ca_a73b,
    0x3c6e_f372_fe94_f82b,
    0xa54f_f53a_5f1d_36f1,
    0x510e_527f_ade6_82d1,
    0x9b05_688c_2b3e_6c1f,
    0x1f83_d9ab_fb41_bd6b,
    0x5be0_cd19_137e_2179,
];

#[rustfmt::skip]
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

fn compress_block(h: &mut [u64; 8], block: &[u8], t: u128, last: bool) {
    let mut m = [0u64; 16];
    for (i, word) in m.iter_mut().enumerate() {
        *word = crate::hash::le64(&block[8 * i..]);
    }

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&IV);
    v[12] ^= t as u64;
    v[13] ^= (t >> 64) as u64;
    if last {
        v[14] = !v[14];
    }

    for round in 0..12 {
        let s = &SIGMA[round % 10];
        g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
        g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

#[derive(Clone)]
struct Blake2bEngine {
    h: [u64; 8],
    t: u128,
    out_len: u8,
    key_len: u8,
}

impl Engine for Blake2bEngine {
    const BLOCK: usize = 128;
    const OUT: usize = MAX_DIGEST_LEN;
    const DEFER: bool = true;

    fn reset(&mut self) {
        self.h = IV;
        // parameter block: digest length, key length, fanout 1, depth 1
        self.h[0] ^= 0x0101_0000 ^ (u64::from(self.key_len) << 8) ^ u64::from(self.out_len);
        self.t = 0;
    }

    fn compress(&mut self, data: &[u8]) {
        for block in data.chunks_exact(128) {
            self.t += 128;
            compress_block(&mut self.h, block, self.t, false);
        }
    }

    fn finalize(&mut self, tail: &[u8], total: u128, out: &mut [u8]) {
        debug_assert_eq!(self.t + tail.len() as u128, total);

        let mut block = [0u8; 128];
        block[..tail.len()].copy_from_slice(tail);
        compress_block(&mut self.h, &block, total, true);
        block.zeroize();

        let mut offset = 0;
        let mut word = 0;
        while offset < out.len() {
            let bytes = self.h[word].to_le_bytes();
            let take = core::cmp::min(8, out.len() - offset);
            out[offset..offset + take].copy_from_slice(&bytes[..take]);
            offset += take;
            word += 1;
        }
    }

    fn wipe(&mut self) {
        self.h.zeroize();
        self.t.zeroize();
    }
}

/// The shared streaming state; digest length is a runtime parameter here so
/// the dynamic dispatch layer can construct any width. The public facade
/// pins the width back into the type.
#[derive(Clone)]
pub(crate) struct Blake2bState {
    core: Blake2bEngine,
    key_block: [u8; 128],
    buf: [u8; 128],
    buffered: usize,
    total: u128,
    phase: Phase,
}

impl Blake2bState {
    pub(crate) fn create(out_len: usize, key: &[u8]) -> Result<Self, ParameterError> {
        if out_len == 0 || out_len > MAX_DIGEST_LEN || key.len() > MAX_KEY_LEN {
            return Err(ParameterError);
        }

        let mut state = Self {
            core: Blake2bEngine {
                h: [0u64; 8],
                t: 0,
                out_len: out_len as u8,
                key_len: key.len() as u8,
            },
            key_block: [0u8; 128],
            buf: [0u8; 128],
            buffered: 0,
            total: 0,
            phase: Phase::Fresh,
        };
        state.key_block[..key.len()].copy_from_slice(key);
        state.core.reset();
        state.absorb_key();
        state.phase = Phase::Fresh;
        Ok(state)
    }

    // the key, zero-padded to a full block, is the first input block and is
    // counted in the running length
    fn absorb_key(&mut self) {
        if self.core.key_len > 0 {
            let mut key_block = self.key_block;
            self.absorb_bytes(&key_block);
            key_block.zeroize();
        }
    }

    pub(crate) fn out_len(&self) -> usize {
        usize::from(self.core.out_len)
    }

    pub(crate) fn reinit(&mut self) {
        self.core.reset();
        self.buffered = 0;
        self.total = 0;
        self.absorb_key();
        self.phase = Phase::Absorbing;
    }

    fn absorb_bytes(&mut self, data: &[u8]) {
        self.phase = Phase::Absorbing;
        crate::hash::absorb(
            &mut self.core,
            &mut self.buf,
            &mut self.buffered,
            &mut self.total,
            data,
        );
    }

    pub(crate) fn feed(&mut self, data: &[u8]) -> Result<(), UsageError> {
        if matches!(self.phase, Phase::Finalized) {
            return Err(UsageError);
        }
        self.absorb_bytes(data);
        Ok(())
    }

    fn is_finalized(&self) -> bool {
        matches!(self.phase, Phase::Finalized)
    }

    /// `out.len()` must equal `out_len`. Does not check the phase; the
    /// callers below do.
    fn finish_raw(&mut self, out: &mut [u8]) {
        self.core
            .finalize(&self.buf[..self.buffered], self.total, out);
        self.phase = Phase::Finalized;
    }

    /// `out.len()` must equal `out_len`.
    pub(crate) fn finish_into(&mut self, out: &mut [u8]) -> Result<(), UsageError> {
        if self.is_finalized() {
            return Err(UsageError);
        }
        self.finish_raw(out);
        Ok(())
    }
}

impl Drop for Blake2bState {
    fn drop(&mut self) {
        self.core.wipe();
        self.key_block.zeroize();
        self.buf.zeroize();
    }
}

#[cfg(any(test, feature = "alloc"))]
impl crate::registry::StreamHasher for Blake2bState {
    fn reset(&mut self) {
        self.reinit();
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), UsageError> {
        self.feed(data)
    }

    fn produce_vec(&mut self) -> Result<alloc::vec::Vec<u8>, UsageError> {
        let mut out = alloc::vec![0u8; self.out_len()];
        self.finish_into(out.as_mut_slice())?;
        Ok(out)
    }

    fn block_size(&self) -> usize {
        128
    }

    fn digest_size(&self) -> usize {
        self.out_len()
    }
}

/// The `Blake2b` hasher.
///
/// # Const Generic
///
/// * `C` - the digest length in bytes, `1..=64` (default 64). Validated at
///   construction; an instance refused at birth never enters the state
///   machine.
///
/// The optional key (up to 64 bytes) turns BLAKE2b into a MAC; the key
/// block is wiped when the hasher is dropped.
///
/// # Example
///
/// ```
/// use fleet_hash::hash::Blake2b;
///
/// let mut hasher = Blake2b::<64>::new().unwrap();
/// hasher.update(b"hello world").unwrap();
/// let digest = hasher.digest().unwrap();
///
/// assert_eq!(digest.as_bytes().len(), 64);
/// assert!(Blake2b::<65>::new().is_err());
/// ```
#[derive(Clone)]
pub struct Blake2b<const C: usize = 64> {
    state: Blake2bState,
}

impl<const C: usize> Blake2b<C> {
    /// The input block width, in bytes.
    pub const BLOCK_SIZE: usize = 128;
    /// The digest width, in bytes.
    pub const DIGEST_SIZE: usize = C;

    /// Create a new unkeyed `Blake2b` instance.
    ///
    /// # Errors
    ///
    /// `ParameterError` if `C` is `0` or greater than `64`.
    pub fn new() -> Result<Self, ParameterError> {
        Blake2bState::create(C, &[]).map(|state| Self { state })
    }

    /// Create a new keyed `Blake2b` instance (MAC mode).
    ///
    /// # Errors
    ///
    /// `ParameterError` if `C` is `0` or greater than `64`, or if `key` is
    /// empty or longer than `64` bytes.
    pub fn with_key(key: &[u8]) -> Result<Self, ParameterError> {
        if key.is_empty() {
            return Err(ParameterError);
        }
        Blake2bState::create(C, key).map(|state| Self { state })
    }

    /// Reset, discarding any absorbed input. A keyed instance re-absorbs
    /// its key block. Valid from every phase and idempotent.
    #[inline]
    pub fn init(&mut self) {
        self.state.reinit();
    }

    /// Absorb `data`.
    ///
    /// # Errors
    ///
    /// [`UsageError`] if the state is already finalized.
    #[inline]
    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self, UsageError> {
        self.state.feed(data)?;
        Ok(self)
    }

    /// Finalize and emit the digest, transitioning to the finalized phase.
    ///
    /// # Errors
    ///
    /// [`UsageError`] on a second call without an intervening [`init`].
    ///
    /// [`init`]: Self::init
    pub fn digest(&mut self) -> Result<Digest<C>, UsageError> {
        let mut out = Digest::zeroed();
        self.state.finish_into(out.as_mut_bytes())?;
        Ok(out)
    }

    /// Hash `data` in one shot, unkeyed.
    ///
    /// # Errors
    ///
    /// `ParameterError` if `C` is `0` or greater than `64`.
    pub fn hash(data: &[u8]) -> Result<Digest<C>, ParameterError> {
        let mut hasher = Self::new()?;
        hasher.state.absorb_bytes(data);
        let mut out = Digest::zeroed();
        hasher.state.finish_raw(out.as_mut_bytes());
        Ok(out)
    }

    /// Hash `data` in one shot with a key (MAC mode).
    ///
    /// # Errors
    ///
    /// `ParameterError` on an illegal digest length or key.
    pub fn keyed_hash(key: &[u8], data: &[u8]) -> Result<Digest<C>, ParameterError> {
        let mut hasher = Self::with_key(key)?;
        hasher.state.absorb_bytes(data);
        let mut out = Digest::zeroed();
        hasher.state.finish_raw(out.as_mut_bytes());
        Ok(out)
    }

    /// The input block width, in bytes.
    #[must_use]
    pub const fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    /// The digest width, in bytes.
    #[must_use]
    pub const fn digest_size(&self) -> usize {
        Self::DIGEST_SIZE
    }
}

alloc! {
    impl<const C: usize> Blake2b<C> {
        /// Hash `data` in one shot, returning lowercase hex.
        ///
        /// # Errors
        ///
        /// `ParameterError` if `C` is `0` or greater than `64`.
        pub fn hash_hex(data: &[u8]) -> Result<alloc::string::String, ParameterError> {
            Self::hash(data).map(|d| d.hex())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc_7693_vectors() {
        assert_eq!(
            Blake2b::<64>::hash_hex(b"abc").unwrap(),
            "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
             7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
        );
        assert_eq!(
            Blake2b::<64>::hash_hex(b"").unwrap(),
            "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
             d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"
        );
    }

    #[test]
    fn illegal_parameters_are_refused() {
        assert!(Blake2b::<0>::new().is_err());
        assert!(Blake2b::<65>::new().is_err());
        assert!(Blake2b::<64>::with_key(&[0u8; 65]).is_err());
        assert!(Blake2b::<64>::with_key(b"").is_err());
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut hasher = Blake2b::<32>::new().unwrap();
        hasher.update(b"hello ").unwrap();
        hasher.update(b"world").unwrap();
        assert_eq!(
            hasher.digest().unwrap(),
            Blake2b::<32>::hash(b"hello world").unwrap()
        );
    }

    #[test]
    fn single_shot_finalization() {
        let mut hasher = Blake2b::<64>::new().unwrap();
        let _ = hasher.digest().unwrap();
        assert!(hasher.update(b"late").is_err());
        assert!(hasher.digest().is_err());

        hasher.init();
        assert_eq!(hasher.digest().unwrap(), Blake2b::<64>::hash(b"").unwrap());
    }

    #[test]
    fn keyed_init_restores_the_key() {
        let key = [7u8; 32];
        let mut hasher = Blake2b::<64>::with_key(&key).unwrap();
        hasher.update(b"discarded").unwrap();
        hasher.init();
        hasher.update(b"abc").unwrap();

        assert_eq!(
            hasher.digest().unwrap(),
            Blake2b::<64>::keyed_hash(&key, b"abc").unwrap()
        );
    }

    #[test]
    fn matches_blake2_crate_variable_lengths() {
        use blake2::digest::{Update, VariableOutput};

        let data = b"the quick brown fox jumps over the lazy dog";
        for out_len in [1usize, 20, 32, 48, 63, 64] {
            let mut rc = blake2::Blake2bVar::new(out_len).unwrap();
            rc.update(data);
            let mut expected = std::vec![0u8; out_len];
            rc.finalize_variable(&mut expected).unwrap();

            let mut state = Blake2bState::create(out_len, &[]).unwrap();
            state.feed(data).unwrap();
            let mut ours = std::vec![0u8; out_len];
            state.finish_into(ours.as_mut_slice()).unwrap();

            assert_eq!(ours, expected, "digest length {out_len}");
        }
    }

    #[test]
    fn keyed_matches_blake2_crate() {
        use blake2::digest::{FixedOutput, KeyInit, Update};
        use blake2::Blake2bMac512;

        let key = [0x42u8; 48];

        // a keyed hasher over the empty message digests the key block, not
        // the unkeyed hash of the key bytes
        for data in [&b""[..], b"abc", &[0xaa; 1000]] {
            let mut rc = Blake2bMac512::new_from_slice(&key).unwrap();
            Update::update(&mut rc, data);
            let expected = rc.finalize_fixed();

            assert_eq!(
                Blake2b::<64>::keyed_hash(&key, data).unwrap().as_bytes(),
                expected.as_slice()
            );
        }
    }
}
