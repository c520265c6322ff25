//! Keyed Hash Message Authentication Codes `HMAC` (RFC 2104).

pub mod algo;

#[doc(inline)]
pub use algo::Hash;

use crate::ct;
use crate::error::UsageError;
use crate::hash::{Phase, MAX_BLOCK, MAX_DIGEST};
use zeroize::Zeroize;

/// Hash-based Message Authentication Code, generic over any [`Hash`].
///
/// The key pads (`0x36` / `0x5c`) are absorbed once at construction into two
/// *template* states; every [`init`] restores the working state from the
/// inner template instead of re-hashing the key, which is what makes the
/// iterated PBKDF2 use of this type cheap. Keys longer than the block width
/// are replaced by their digest first, per RFC 2104.
///
/// Key-derived material is zeroed on drop.
///
/// # Example
///
/// ```
/// use fleet_hash::mac::Hmac;
/// use fleet_hash::hash::Sha256;
///
/// let mut mac = Hmac::<Sha256>::new(b"my secret key");
/// mac.update(b"hello world, ").unwrap();
/// mac.update(b"beautiful weather.").unwrap();
///
/// let parts = mac.digest().unwrap();
///
/// mac.init();
/// mac.update(b"hello world, beautiful weather.").unwrap();
///
/// // Digest equality is constant-time.
/// assert_eq!(mac.digest().unwrap(), parts);
/// ```
///
/// [`init`]: Self::init
#[derive(Clone)]
pub struct Hmac<H: Hash> {
    inner: H,
    inner_tpl: H,
    outer_tpl: H,
    phase: Phase,
}

impl<H: Hash> Hmac<H> {
    /// Create a new `Hmac` instance from key material of any length.
    ///
    /// A key longer than the hash's block width is replaced by its digest;
    /// the (possibly shortened) key is right-padded with zeros to the block
    /// width before the pads are derived.
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        let bs = H::BLOCK_SIZE;
        let mut k_block = [0u8; MAX_BLOCK];

        if key.len() > bs {
            let mut keyed = H::fresh();
            keyed.absorb(key);
            keyed.produce_into(&mut k_block[..H::DIGEST_SIZE]);
            keyed.wipe();
        } else {
            k_block[..key.len()].copy_from_slice(key);
        }

        let mut pad = [0u8; MAX_BLOCK];

        let mut inner_tpl = H::fresh();
        for i in 0..bs {
            pad[i] = k_block[i] ^ 0x36;
        }
        inner_tpl.absorb(&pad[..bs]);

        let mut outer_tpl = H::fresh();
        for i in 0..bs {
            pad[i] = k_block[i] ^ 0x5c;
        }
        outer_tpl.absorb(&pad[..bs]);

        pad.zeroize();
        k_block.zeroize();

        Self {
            inner: inner_tpl.clone(),
            inner_tpl,
            outer_tpl,
            phase: Phase::Absorbing,
        }
    }

    /// Reset to a fresh message, restoring the working state from the inner
    /// template. The key survives; valid from every phase and idempotent.
    #[inline]
    pub fn init(&mut self) {
        self.inner.clone_from(&self.inner_tpl);
        self.phase = Phase::Absorbing;
    }

    /// Append to the message being authenticated.
    ///
    /// # Errors
    ///
    /// [`UsageError`] if the MAC is already finalized.
    #[inline]
    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self, UsageError> {
        if matches!(self.phase, Phase::Finalized) {
            return Err(UsageError);
        }
        self.inner.absorb(data);
        Ok(self)
    }

    fn finish_into(&mut self, out: &mut [u8]) {
        let mut d_inner = [0u8; MAX_DIGEST];
        self.inner.produce_into(&mut d_inner[..H::DIGEST_SIZE]);

        let mut outer = self.outer_tpl.clone();
        outer.absorb(&d_inner[..H::DIGEST_SIZE]);
        outer.produce_into(out);

        d_inner.zeroize();
        outer.wipe();
    }

    /// Finalize the MAC, transitioning to the finalized phase.
    ///
    /// The returned digest type compares in constant-time.
    ///
    /// # Errors
    ///
    /// [`UsageError`] on a second call without an intervening [`init`].
    ///
    /// [`init`]: Self::init
    pub fn digest(&mut self) -> Result<H::Output, UsageError> {
        if matches!(self.phase, Phase::Finalized) {
            return Err(UsageError);
        }

        let mut d_inner = [0u8; MAX_DIGEST];
        self.inner.produce_into(&mut d_inner[..H::DIGEST_SIZE]);

        let mut outer = self.outer_tpl.clone();
        outer.absorb(&d_inner[..H::DIGEST_SIZE]);
        let out = outer.produce();

        d_inner.zeroize();
        outer.wipe();
        self.phase = Phase::Finalized;
        Ok(out)
    }

    /// Finalize the MAC and compare it with `other` in constant-time.
    ///
    /// # Errors
    ///
    /// [`UsageError`] if the MAC is already finalized.
    pub fn compare_digest(&mut self, other: &[u8]) -> Result<bool, UsageError> {
        let out = self.digest()?;
        Ok(ct::ct_eq(out.as_ref(), other))
    }

    /// One full PRF invocation over `parts`, reusing the cached templates.
    /// `out.len()` must equal `DIGEST_SIZE`. Leaves the public phase alone;
    /// this is the PBKDF2 fast path.
    pub(crate) fn stream_once(&mut self, parts: &[&[u8]], out: &mut [u8]) {
        self.inner.clone_from(&self.inner_tpl);
        for part in parts {
            self.inner.absorb(part);
        }
        self.finish_into(out);
    }
}

impl<H: Hash> Drop for Hmac<H> {
    fn drop(&mut self) {
        self.inner.wipe();
        self.inner_tpl.wipe();
        self.outer_tpl.wipe();
    }
}

alloc! {
    /// One-shot `HMAC(key, message)`, hex-encoded.
    #[must_use]
    pub fn hmac_hex<H: Hash>(key: &[u8], message: &[u8]) -> alloc::string::String {
        let mut mac = Hmac::<H>::new(key);
        mac.inner.absorb(message);
        let mut out = [0u8; MAX_DIGEST];
        mac.finish_into(&mut out[..H::DIGEST_SIZE]);
        let hex = crate::hex::encode(&out[..H::DIGEST_SIZE]);
        out.zeroize();
        hex
    }
}
