//! The xxHash32 checksum.
//!
//! A seeded, non-cryptographic hash; four accumulators over 16-byte stripes
//! with a short-input path that skips the accumulator mix entirely.

use crate::digest::Digest;
use crate::error::UsageError;
use crate::hash::{Engine, Phase};
use zeroize::Zeroize;

const P1: u32 = 0x9e37_79b1;
const P2: u32 = 0x85eb_ca77;
const P3: u32 = 0xc2b2_ae3d;
const P4: u32 = 0x27d4_eb2f;
const P5: u32 = 0x1656_67b1;

#[inline(always)]
fn round(acc: u32, input: u32) -> u32 {
    acc.wrapping_add(input.wrapping_mul(P2))
        .rotate_left(13)
        .wrapping_mul(P1)
}

#[derive(Clone)]
pub(crate) struct XxHash32Engine {
    seed: u32,
    v: [u32; 4],
}

impl XxHash32Engine {
    pub(crate) fn with_seed(seed: u32) -> Self {
        let mut engine = Self { seed, v: [0; 4] };
        engine.reset();
        engine
    }
}

impl Engine for XxHash32Engine {
    const BLOCK: usize = 16;
    const OUT: usize = 4;

    fn reset(&mut self) {
        self.v = [
            self.seed.wrapping_add(P1).wrapping_add(P2),
            self.seed.wrapping_add(P2),
            self.seed,
            self.seed.wrapping_sub(P1),
        ];
    }

    fn compress(&mut self, data: &[u8]) {
        for stripe in data.chunks_exact(16) {
            for (acc, lane) in self.v.iter_mut().zip(stripe.chunks_exact(4)) {
                *acc = round(*acc, crate::hash::le32(lane));
            }
        }
    }

    fn finalize(&mut self, tail: &[u8], total: u128, out: &mut [u8]) {
        // fewer than one full stripe: the accumulators were never mixed,
        // the seed feeds the result directly
        let mut h = if total >= 16 {
            self.v[0]
                .rotate_left(1)
                .wrapping_add(self.v[1].rotate_left(7))
                .wrapping_add(self.v[2].rotate_left(12))
                .wrapping_add(self.v[3].rotate_left(18))
        } else {
            self.seed.wrapping_add(P5)
        };

        h = h.wrapping_add(total as u32);

        let mut rest = tail;
        while rest.len() >= 4 {
            h = h
                .wrapping_add(crate::hash::le32(rest).wrapping_mul(P3))
                .rotate_left(17)
                .wrapping_mul(P4);
            rest = &rest[4..];
        }
        for &byte in rest {
            h = h
                .wrapping_add(u32::from(byte).wrapping_mul(P5))
                .rotate_left(11)
                .wrapping_mul(P1);
        }

        h ^= h >> 15;
        h = h.wrapping_mul(P2);
        h ^= h >> 13;
        h = h.wrapping_mul(P3);
        h ^= h >> 16;

        out.copy_from_slice(&h.to_be_bytes());
    }

    fn wipe(&mut self) {
        self.v.zeroize();
        self.seed.zeroize();
    }
}

/// The `XxHash32` hasher.
///
/// Seeded and non-cryptographic; the 4-byte digest is the big-endian
/// rendering of the final 32-bit word. `digest` finalizes exactly once;
/// call [`init`] to reuse the state (the seed survives resets).
///
/// # Example
///
/// ```
/// use fleet_hash::hash::XxHash32;
///
/// let mut hasher = XxHash32::with_seed(42);
/// hasher.update(b"hello world").unwrap();
///
/// let streamed = hasher.digest().unwrap();
/// assert_eq!(streamed, XxHash32::hash_with_seed(42, b"hello world"));
/// ```
///
/// [`init`]: Self::init
#[derive(Clone)]
pub struct XxHash32 {
    core: XxHash32Engine,
    buf: [u8; 16],
    buffered: usize,
    total: u128,
    phase: Phase,
}

impl XxHash32 {
    /// The stripe width the accumulators consume, in bytes.
    pub const BLOCK_SIZE: usize = 16;
    /// The digest width, in bytes.
    pub const DIGEST_SIZE: usize = 4;

    /// Create a new `XxHash32` instance with seed `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a new `XxHash32` instance with the given seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            core: XxHash32Engine::with_seed(seed),
            buf: [0u8; 16],
            buffered: 0,
            total: 0,
            phase: Phase::Fresh,
        }
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
    pub fn digest(&mut self) -> Result<Digest<4>, UsageError> {
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
    pub fn hash(data: &[u8]) -> Digest<4> {
        Self::hash_with_seed(0, data)
    }

    /// Hash `data` in one shot with the given seed.
    pub fn hash_with_seed(seed: u32, data: &[u8]) -> Digest<4> {
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
    impl XxHash32 {
        /// Hash `data` in one shot with seed `0`, returning lowercase hex.
        #[must_use]
        pub fn hash_hex(data: &[u8]) -> alloc::string::String {
            Self::hash(data).hex()
        }
    }
}

#[cfg(any(test, feature = "alloc"))]
impl crate::registry::StreamHasher for XxHash32 {
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
