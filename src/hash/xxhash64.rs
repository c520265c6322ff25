//! The xxHash64 checksum.
//!
//! Four 64-bit accumulators over 32-byte stripes. The seed may be supplied
//! whole or as two 32-bit halves assembled little-endian, matching callers
//! whose integer surface is 32-bit.

use crate::digest::Digest;
use crate::error::UsageError;
use crate::hash::{Engine, Phase};
use zeroize::Zeroize;

const P1: u64 = 0x9e37_79b1_85eb_ca87;
const P2: u64 = 0xc2b2_ae3d_27d4_eb4f;
const P3: u64 = 0x1656_67b1_9e37_79f9;
const P4: u64 = 0x85eb_ca77_c2b2_ae63;
const P5: u64 = 0x27d4_eb2f_1656_67c5;

#[inline(always)]
fn round(acc: u64, input: u64) -> u64 {
    acc.wrapping_add(input.wrapping_mul(P2))
        .rotate_left(31)
        .wrapping_mul(P1)
}

#[inline(always)]
fn merge_round(h: u64, acc: u64) -> u64 {
    (h ^ round(0, acc)).wrapping_mul(P1).wrapping_add(P4)
}

#[derive(Clone)]
pub(crate) struct XxHash64Engine {
    seed: u64,
    v: [u64; 4],
}

impl XxHash64Engine {
    pub(crate) fn with_seed(seed: u64) -> Self {
        let mut engine = Self { seed, v: [0; 4] };
        engine.reset();
        engine
    }
}

impl Engine for XxHash64Engine {
    const BLOCK: usize = 32;
    const OUT: usize = 8;

    fn reset(&mut self) {
        self.v = [
            self.seed.wrapping_add(P1).wrapping_add(P2),
            self.seed.wrapping_add(P2),
            self.seed,
            self.seed.wrapping_sub(P1),
        ];
    }

    fn compress(&mut self, data: &[u8]) {
        for stripe in data.chunks_exact(32) {
            for (acc, lane) in self.v.iter_mut().zip(stripe.chunks_exact(8)) {
                *acc = round(*acc, crate::hash::le64(lane));
            }
        }
    }

    fn finalize(&mut self, tail: &[u8], total: u128, out: &mut [u8]) {
        let mut h = if total >= 32 {
            let mut h = self.v[0]
                .rotate_left(1)
                .wrapping_add(self.v[1].rotate_left(7))
                .wrapping_add(self.v[2].rotate_left(12))
                .wrapping_add(self.v[3].rotate_left(18));
            for acc in self.v {
                h = merge_round(h, acc);
            }
            h
        } else {
            self.seed.wrapping_add(P5)
        };

        h = h.wrapping_add(total as u64);

        let mut rest = tail;
        while rest.len() >= 8 {
            h = (h ^ round(0, crate::hash::le64(rest)))
                .rotate_left(27)
                .wrapping_mul(P1)
                .wrapping_add(P4);
            rest = &rest[8..];
        }
        if rest.len() >= 4 {
            h = (h ^ u64::from(crate::hash::le32(rest)).wrapping_mul(P1))
                .rotate_left(23)
                .wrapping_mul(P2)
                .wrapping_add(P3);
            rest = &rest[4..];
        }
        for &byte in rest {
            h = (h ^ u64::from(byte).wrapping_mul(P5))
                .rotate_left(11)
                .wrapping_mul(P1);
        }

        h ^= h >> 33;
        h = h.wrapping_mul(P2);
        h ^= h >> 29;
        h = h.wrapping_mul(P3);
        h ^= h >> 32;

        out.copy_from_slice(&h.to_be_bytes());
    }

    fn wipe(&mut self) {
        self.v.zeroize();
        self.seed.zeroize();
    }
}

/// The `XxHash64` hasher.
///
/// Seeded and non-cryptographic; the 8-byte digest is the big-endian
/// rendering of the final 64-bit word. `digest` finalizes exactly once;
/// call [`init`] to reuse the state (the seed survives resets).
///
/// # Example
///
/// ```
/// use fleet_hash::hash::XxHash64;
///
/// let mut hasher = XxHash64::with_seed(42);
/// hasher.update(b"hello world").unwrap();
///
/// let streamed = hasher.digest().unwrap();
/// assert_eq!(streamed, XxHash64::hash_with_seed(42, b"hello world"));
/// ```
///
/// [`init`]: Self::init
#[derive(Clone)]
pub struct XxHash64 {
    core: XxHash64Engine,
    buf: [u8; 32],
    buffered: usize,
    total: u128,
    phase: Phase,
}

impl XxHash64 {
    /// The stripe width the accumulators consume, in bytes.
    pub const BLOCK_SIZE: usize = 32;
    /// The digest width, in bytes.
    pub const DIGEST_SIZE: usize = 8;

    /// Create a new `XxHash64` instance with seed `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a new `XxHash64` instance with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            core: XxHash64Engine::with_seed(seed),
            buf: [0u8; 32],
            buffered: 0,
            total: 0,
            phase: Phase::Fresh,
        }
    }

    /// Create a new `XxHash64` instance from two 32-bit seed halves,
    /// assembled little-endian: `seed = low | (high << 32)`.
    #[must_use]
    pub fn with_seed_parts(low: u32, high: u32) -> Self {
        Self::with_seed(u64::from(low) | (u64::from(high) << 32))
    }

    /// Reset to the seeded IV, discarding any absorbed input.
    ///
    /// Valid from every phase and idempotent.
    #[inline]
    pub fn init(&mut self) {
        self.core.reset();
        self.buffered = 0;
        self.total = 0;
        self.phase = Phase::Absorbing;
    }

    #[inline]
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

    /// Absorb `data`.
    ///
    /// # Errors
    ///
    /// [`UsageError`] if the state is already finalized.
    #[inline]
    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self, UsageError> {
        if matches!(self.phase, Phase::Finalized) {
            return Err(UsageError);
        }
        self.absorb_bytes(data);
        Ok(self)
    }

    /// Finalize and emit the digest, transitioning to the finalized phase.
    ///
    /// # Errors
    ///
    /// [`UsageError`] on a second call without an intervening [`init`].
    ///
    /// [`init`]: Self::init
    pub fn digest(&mut self) -> Result<Digest<8>, UsageError> {
        if matches!(self.phase, Phase::Finalized) {
            return Err(UsageError);
        }
        let mut out = Digest::zeroed();
        self.core
            .finalize(&self.buf[..self.buffered], self.total, out.as_mut_bytes());
        self.phase = Phase::Finalized;
        Ok(out)
    }

    /// Hash `data` in one shot with seed `0`.
    pub fn hash(data: &[u8]) -> Digest<8> {
        Self::hash_with_seed(0, data)
    }

    /// Hash `data` in one shot with the given seed.
    pub fn hash_with_seed(seed: u64, data: &[u8]) -> Digest<8> {
        let mut hasher = Self::with_seed(seed);
        hasher.absorb_bytes(data);
        let mut out = Digest::zeroed();
        hasher
            .core
            .finalize(&hasher.buf[..hasher.buffered], hasher.total, out.as_mut_bytes());
        out
    }

    /// The stripe width, in bytes.
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
    impl XxHash64 {
        /// Hash `data` in one shot with seed `0`, returning lowercase hex.
        #[must_use]
        pub fn hash_hex(data: &[u8]) -> alloc::string::String {
            Self::hash(data).hex()
        }
    }
}

#[cfg(any(test, feature = "alloc"))]
impl crate::registry::StreamHasher for XxHash64 {
    fn reset(&mut self) {
        self.init();
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), UsageError> {
        self.update(data).map(|_| ())
    }

    fn produce_vec(&mut self) -> Result<alloc::vec::Vec<u8>, UsageError> {
        self.digest().map(|d| d.as_bytes().to_vec())
    }

    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    fn digest_size(&self) -> usize {
        Self::DIGEST_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_one_shot() {
        for (seed, data) in [
            (0u64, &b""[..]),
            (0, b"abc"),
            (42, b"abc"),
            (u64::MAX, b"the quick brown fox"),
        ] {
            assert_eq!(
                XxHash64::hash_with_seed(seed, data).into_inner(),
                xxhash_rust::xxh64::xxh64(data, seed).to_be_bytes()
            );
        }
    }

    #[test]
    fn seed_parts_assemble_little_endian() {
        // a low half with the sign bit set must not smear into the high half
        let hasher = XxHash64::with_seed_parts(0xffff_ffff, 0x0000_0001);
        let whole = XxHash64::with_seed(0x0000_0001_ffff_ffff);

        let mut a = hasher;
        let mut b = whole;
        a.update(b"abc").unwrap();
        b.update(b"abc").unwrap();
        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    }

    #[test]
    fn seed_parts_vector() {
        assert_eq!(
            XxHash64::with_seed_parts(0x8000_0000, 0)
                .update(b"abc")
                .unwrap()
                .digest()
                .unwrap()
                .into_inner(),
            xxhash_rust::xxh64::xxh64(b"abc", 0x8000_0000).to_be_bytes()
        );
    }

    #[test]
    fn update_after_digest_is_rejected() {
        let mut hasher = XxHash64::new();
        let _ = hasher.digest().unwrap();
        assert!(hasher.update(b"x").is_err());
        assert!(hasher.digest().is_err());
    }
}
