//! Dynamic dispatch: algorithm descriptors, trait-object streaming, and the
//! pooled one-shot registry.
//!
//! The typed hashers in [`hash`] are the fast path. This module serves
//! callers that pick the algorithm at run time: [`Algorithm`] describes a
//! variant (with its parameters) and constructs independent boxed hashers,
//! and [`Registry`] keeps one cached instance per variant so repeated
//! one-shot calls do not reallocate state. A `Registry` is exclusive-access
//! by construction (`&mut self`); callers that want parallelism hold their
//! own hashers from [`Algorithm::hasher`] instead of sharing a pool.
//!
//! [`hash`]: crate::hash

use crate::error::{Error, ParameterError, Unsupported, UsageError};
use crate::hash::blake2b::Blake2bState;
use crate::hash::{
    Crc32, Keccak224, Keccak256, Keccak384, Keccak512, Md4, Md5, Ripemd160, Sha1, Sha224, Sha256,
    Sha384, Sha512, Sha3_224, Sha3_256, Sha3_384, Sha3_512, XxHash32, XxHash64,
};
use crate::kdf::Iters;
use alloc::boxed::Box;
use alloc::collections::btree_map::{BTreeMap, Entry};
use alloc::string::String;
use alloc::vec::Vec;

/// Object-safe streaming contract, implemented by every hasher in the crate.
///
/// Mirrors the typed `init`/`update`/`digest` surface; the same phase rules
/// apply (`UsageError` after finalization until `reset`).
pub trait StreamHasher {
    /// Reset to the IV, discarding absorbed input.
    fn reset(&mut self);

    /// Absorb `data`.
    ///
    /// # Errors
    ///
    /// [`UsageError`] if the state is already finalized.
    fn absorb(&mut self, data: &[u8]) -> Result<(), UsageError>;

    /// Finalize and emit the raw digest bytes.
    ///
    /// # Errors
    ///
    /// [`UsageError`] on a second call without an intervening `reset`.
    fn produce_vec(&mut self) -> Result<Vec<u8>, UsageError>;

    /// Finalize and emit the canonical lowercase hex rendering.
    ///
    /// # Errors
    ///
    /// [`UsageError`] on a second call without an intervening `reset`.
    fn produce_hex(&mut self) -> Result<String, UsageError> {
        self.produce_vec().map(|raw| crate::hex::encode(&raw))
    }

    /// The input block width, in bytes.
    fn block_size(&self) -> usize;

    /// The digest width, in bytes.
    fn digest_size(&self) -> usize;
}

/// A hash algorithm variant, carrying its construction parameters.
///
/// Keyed BLAKE2b deliberately has no descriptor: key material does not
/// belong in a pool. Use [`Blake2b::with_key`] directly.
///
/// [`Blake2b::with_key`]: crate::hash::Blake2b::with_key
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    Md4,
    Md5,
    Ripemd160,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Keccak224,
    Keccak256,
    Keccak384,
    Keccak512,
    /// Unkeyed BLAKE2b with a digest length in `1..=64`.
    Blake2b {
        /// Digest length in bytes.
        digest_len: usize,
    },
    Crc32,
    /// xxHash32 with its 32-bit seed.
    XxHash32 {
        /// The seed.
        seed: u32,
    },
    /// xxHash64 with its 64-bit seed.
    XxHash64 {
        /// The seed.
        seed: u64,
    },
}

impl Algorithm {
    /// The canonical algorithm name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Md4 => "md4",
            Self::Md5 => "md5",
            Self::Ripemd160 => "ripemd160",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
            Self::Keccak224 => "keccak224",
            Self::Keccak256 => "keccak256",
            Self::Keccak384 => "keccak384",
            Self::Keccak512 => "keccak512",
            Self::Blake2b { .. } => "blake2b",
            Self::Crc32 => "crc32",
            Self::XxHash32 { .. } => "xxhash32",
            Self::XxHash64 { .. } => "xxhash64",
        }
    }

    /// The input block width the compression function consumes, in bytes.
    /// CRC32 streams byte-wise and reports `1`.
    #[must_use]
    pub const fn block_size(&self) -> usize {
        match self {
            Self::Md4 | Self::Md5 | Self::Ripemd160 | Self::Sha1 | Self::Sha224 | Self::Sha256 => {
                64
            }
            Self::Sha384 | Self::Sha512 | Self::Blake2b { .. } => 128,
            Self::Sha3_224 | Self::Keccak224 => 144,
            Self::Sha3_256 | Self::Keccak256 => 136,
            Self::Sha3_384 | Self::Keccak384 => 104,
            Self::Sha3_512 | Self::Keccak512 => 72,
            Self::Crc32 => 1,
            Self::XxHash32 { .. } => 16,
            Self::XxHash64 { .. } => 32,
        }
    }

    /// The digest width, in bytes.
    #[must_use]
    pub const fn digest_size(&self) -> usize {
        match self {
            Self::Md4 | Self::Md5 => 16,
            Self::Ripemd160 | Self::Sha1 => 20,
            Self::Sha224 | Self::Sha3_224 | Self::Keccak224 => 28,
            Self::Sha256 | Self::Sha3_256 | Self::Keccak256 => 32,
            Self::Sha384 | Self::Sha3_384 | Self::Keccak384 => 48,
            Self::Sha512 | Self::Sha3_512 | Self::Keccak512 => 64,
            Self::Blake2b { digest_len } => *digest_len,
            Self::Crc32 | Self::XxHash32 { .. } => 4,
            Self::XxHash64 { .. } => 8,
        }
    }

    /// Whether the variant has a defined HMAC block discipline.
    #[must_use]
    pub const fn supports_hmac(&self) -> bool {
        !matches!(
            self,
            Self::Blake2b { .. } | Self::Crc32 | Self::XxHash32 { .. } | Self::XxHash64 { .. }
        )
    }

    /// Construct an independent streaming hasher for this variant.
    ///
    /// # Errors
    ///
    /// `ParameterError` for a BLAKE2b digest length outside `1..=64`.
    pub fn hasher(&self) -> Result<Box<dyn StreamHasher>, ParameterError> {
        Ok(match self {
            Self::Md4 => Box::new(Md4::new()),
            Self::Md5 => Box::new(Md5::new()),
            Self::Ripemd160 => Box::new(Ripemd160::new()),
            Self::Sha1 => Box::new(Sha1::new()),
            Self::Sha224 => Box::new(Sha224::new()),
            Self::Sha256 => Box::new(Sha256::new()),
            Self::Sha384 => Box::new(Sha384::new()),
            Self::Sha512 => Box::new(Sha512::new()),
            Self::Sha3_224 => Box::new(Sha3_224::new()),
            Self::Sha3_256 => Box::new(Sha3_256::new()),
            Self::Sha3_384 => Box::new(Sha3_384::new()),
            Self::Sha3_512 => Box::new(Sha3_512::new()),
            Self::Keccak224 => Box::new(Keccak224::new()),
            Self::Keccak256 => Box::new(Keccak256::new()),
            Self::Keccak384 => Box::new(Keccak384::new()),
            Self::Keccak512 => Box::new(Keccak512::new()),
            Self::Blake2b { digest_len } => Box::new(Blake2bState::create(*digest_len, &[])?),
            Self::Crc32 => Box::new(Crc32::new()),
            Self::XxHash32 { seed } => Box::new(XxHash32::with_seed(*seed)),
            Self::XxHash64 { seed } => Box::new(XxHash64::with_seed(*seed)),
        })
    }

    /// One-shot `HMAC(key, message)` over this variant, hex-encoded.
    ///
    /// # Errors
    ///
    /// [`Unsupported`] when [`supports_hmac`] is false.
    ///
    /// [`supports_hmac`]: Self::supports_hmac
    pub fn hmac_hex(&self, key: &[u8], message: &[u8]) -> Result<String, Error> {
        use crate::mac::hmac::hmac_hex;

        Ok(match self {
            Self::Md4 => hmac_hex::<Md4>(key, message),
            Self::Md5 => hmac_hex::<Md5>(key, message),
            Self::Ripemd160 => hmac_hex::<Ripemd160>(key, message),
            Self::Sha1 => hmac_hex::<Sha1>(key, message),
            Self::Sha224 => hmac_hex::<Sha224>(key, message),
            Self::Sha256 => hmac_hex::<Sha256>(key, message),
            Self::Sha384 => hmac_hex::<Sha384>(key, message),
            Self::Sha512 => hmac_hex::<Sha512>(key, message),
            Self::Sha3_224 => hmac_hex::<Sha3_224>(key, message),
            Self::Sha3_256 => hmac_hex::<Sha3_256>(key, message),
            Self::Sha3_384 => hmac_hex::<Sha3_384>(key, message),
            Self::Sha3_512 => hmac_hex::<Sha3_512>(key, message),
            Self::Keccak224 => hmac_hex::<Keccak224>(key, message),
            Self::Keccak256 => hmac_hex::<Keccak256>(key, message),
            Self::Keccak384 => hmac_hex::<Keccak384>(key, message),
            Self::Keccak512 => hmac_hex::<Keccak512>(key, message),
            Self::Blake2b { .. } | Self::Crc32 | Self::XxHash32 { .. } | Self::XxHash64 { .. } => {
                return Err(Unsupported.into())
            }
        })
    }

    /// PBKDF2-HMAC over this variant, writing `out_key.len()` derived bytes.
    ///
    /// # Errors
    ///
    /// - [`Unsupported`] when [`supports_hmac`] is false.
    /// - `ParameterError` for an output exceeding `(2^32 - 1) * hLen`.
    ///
    /// [`supports_hmac`]: Self::supports_hmac
    pub fn pbkdf2_into(
        &self,
        password: &[u8],
        salt: &[u8],
        iters: Iters,
        out_key: &mut [u8],
    ) -> Result<(), Error> {
        use crate::kdf::pbkdf2_into;

        match self {
            Self::Md4 => pbkdf2_into::<Md4>(password, salt, iters, out_key)?,
            Self::Md5 => pbkdf2_into::<Md5>(password, salt, iters, out_key)?,
            Self::Ripemd160 => pbkdf2_into::<Ripemd160>(password, salt, iters, out_key)?,
            Self::Sha1 => pbkdf2_into::<Sha1>(password, salt, iters, out_key)?,
            Self::Sha224 => pbkdf2_into::<Sha224>(password, salt, iters, out_key)?,
            Self::Sha256 => pbkdf2_into::<Sha256>(password, salt, iters, out_key)?,
            Self::Sha384 => pbkdf2_into::<Sha384>(password, salt, iters, out_key)?,
            Self::Sha512 => pbkdf2_into::<Sha512>(password, salt, iters, out_key)?,
            Self::Sha3_224 => pbkdf2_into::<Sha3_224>(password, salt, iters, out_key)?,
            Self::Sha3_256 => pbkdf2_into::<Sha3_256>(password, salt, iters, out_key)?,
            Self::Sha3_384 => pbkdf2_into::<Sha3_384>(password, salt, iters, out_key)?,
            Self::Sha3_512 => pbkdf2_into::<Sha3_512>(password, salt, iters, out_key)?,
            Self::Keccak224 => pbkdf2_into::<Keccak224>(password, salt, iters, out_key)?,
            Self::Keccak256 => pbkdf2_into::<Keccak256>(password, salt, iters, out_key)?,
            Self::Keccak384 => pbkdf2_into::<Keccak384>(password, salt, iters, out_key)?,
            Self::Keccak512 => pbkdf2_into::<Keccak512>(password, salt, iters, out_key)?,
            Self::Blake2b { .. } | Self::Crc32 | Self::XxHash32 { .. } | Self::XxHash64 { .. } => {
                return Err(Unsupported.into())
            }
        }
        Ok(())
    }
}

/// An owned pool of hasher instances, one per requested variant.
///
/// The short-form one-shot path: `init → update → digest → hex` on a cached
/// instance. Exclusive access serializes concurrent one-shots by
/// construction; independent hashers come from [`Algorithm::hasher`].
pub struct Registry {
    pool: BTreeMap<Algorithm, Box<dyn StreamHasher>>,
}

impl Registry {
    /// Create an empty registry; instances are created on first use.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: BTreeMap::new(),
        }
    }

    /// Hash `data` with `algo` through the pooled instance, returning the
    /// canonical lowercase hex digest.
    ///
    /// # Errors
    ///
    /// `ParameterError` for invalid variant parameters.
    pub fn hash_hex(&mut self, algo: Algorithm, data: &[u8]) -> Result<String, Error> {
        let hasher = match self.pool.entry(algo) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(slot) => slot.insert(algo.hasher()?),
        };

        hasher.reset();
        hasher.absorb(data)?;
        Ok(hasher.produce_hex()?)
    }

    /// Hash `data`, returning the raw digest bytes.
    ///
    /// # Errors
    ///
    /// `ParameterError` for invalid variant parameters.
    pub fn hash_vec(&mut self, algo: Algorithm, data: &[u8]) -> Result<Vec<u8>, Error> {
        let hasher = match self.pool.entry(algo) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(slot) => slot.insert(algo.hasher()?),
        };

        hasher.reset();
        hasher.absorb(data)?;
        Ok(hasher.produce_vec()?)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_dispatch_matches_typed_hashers() {
        let mut registry = Registry::new();

        assert_eq!(
            registry.hash_hex(Algorithm::Md5, b"").unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            registry.hash_hex(Algorithm::Sha256, b"abc").unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            registry.hash_hex(Algorithm::Sha3_256, b"abc").unwrap(),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
        assert_eq!(
            registry
                .hash_hex(Algorithm::XxHash32 { seed: 0 }, b"")
                .unwrap(),
            "02cc5d05"
        );
        assert_eq!(
            registry.hash_hex(Algorithm::Crc32, b"123456789").unwrap(),
            "cbf43926"
        );
    }

    #[test]
    fn pooled_instances_are_reused_cleanly() {
        let mut registry = Registry::new();

        let first = registry.hash_hex(Algorithm::Sha512, b"first").unwrap();
        let _ = registry.hash_hex(Algorithm::Sha512, b"interleaved").unwrap();
        let again = registry.hash_hex(Algorithm::Sha512, b"first").unwrap();

        assert_eq!(first, again);
    }

    #[test]
    fn blake2b_lengths_are_distinct_pool_slots() {
        let mut registry = Registry::new();

        let wide = registry
            .hash_hex(Algorithm::Blake2b { digest_len: 64 }, b"abc")
            .unwrap();
        let narrow = registry
            .hash_hex(Algorithm::Blake2b { digest_len: 32 }, b"abc")
            .unwrap();

        assert_eq!(wide.len(), 128);
        assert_eq!(narrow.len(), 64);
        assert_ne!(&wide[..64], narrow.as_str());
    }

    #[test]
    fn blake2b_parameter_validation() {
        let mut registry = Registry::new();
        assert!(registry
            .hash_hex(Algorithm::Blake2b { digest_len: 0 }, b"")
            .is_err());
        assert!(registry
            .hash_hex(Algorithm::Blake2b { digest_len: 65 }, b"")
            .is_err());
    }

    #[test]
    fn seeds_key_the_pool() {
        let mut registry = Registry::new();

        let a = registry
            .hash_hex(Algorithm::XxHash64 { seed: 1 }, b"abc")
            .unwrap();
        let b = registry
            .hash_hex(Algorithm::XxHash64 { seed: 2 }, b"abc")
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn descriptor_table() {
        for (algo, block, digest, hmac) in [
            (Algorithm::Md4, 64, 16, true),
            (Algorithm::Md5, 64, 16, true),
            (Algorithm::Ripemd160, 64, 20, true),
            (Algorithm::Sha1, 64, 20, true),
            (Algorithm::Sha224, 64, 28, true),
            (Algorithm::Sha256, 64, 32, true),
            (Algorithm::Sha384, 128, 48, true),
            (Algorithm::Sha512, 128, 64, true),
            (Algorithm::Sha3_224, 144, 28, true),
            (Algorithm::Sha3_256, 136, 32, true),
            (Algorithm::Sha3_384, 104, 48, true),
            (Algorithm::Sha3_512, 72, 64, true),
            (Algorithm::Keccak224, 144, 28, true),
            (Algorithm::Keccak256, 136, 32, true),
            (Algorithm::Keccak384, 104, 48, true),
            (Algorithm::Keccak512, 72, 64, true),
            (Algorithm::Blake2b { digest_len: 64 }, 128, 64, false),
            (Algorithm::Crc32, 1, 4, false),
            (Algorithm::XxHash32 { seed: 0 }, 16, 4, false),
            (Algorithm::XxHash64 { seed: 0 }, 32, 8, false),
        ] {
            assert_eq!(algo.block_size(), block, "{}", algo.name());
            assert_eq!(algo.digest_size(), digest, "{}", algo.name());
            assert_eq!(algo.supports_hmac(), hmac, "{}", algo.name());

            let boxed = algo.hasher().unwrap();
            assert_eq!(boxed.block_size(), block);
            assert_eq!(boxed.digest_size(), digest);
        }
    }

    #[test]
    fn dyn_hasher_phase_machine() {
        let mut hasher = Algorithm::Sha256.hasher().unwrap();
        hasher.reset();
        hasher.absorb(b"abc").unwrap();
        let first = hasher.produce_hex().unwrap();

        assert!(hasher.absorb(b"late").is_err());
        assert!(hasher.produce_vec().is_err());

        hasher.reset();
        hasher.absorb(b"abc").unwrap();
        assert_eq!(hasher.produce_hex().unwrap(), first);
    }

    #[test]
    fn dynamic_hmac_dispatch() {
        let out = Algorithm::Sha256.hmac_hex(b"", b"").unwrap();
        assert_eq!(
            out,
            "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad"
        );

        for algo in [
            Algorithm::Blake2b { digest_len: 64 },
            Algorithm::Crc32,
            Algorithm::XxHash32 { seed: 0 },
            Algorithm::XxHash64 { seed: 0 },
        ] {
            assert!(matches!(
                algo.hmac_hex(b"key", b"msg"),
                Err(Error::Unsupported(_))
            ));
        }
    }

    #[test]
    fn dynamic_pbkdf2_dispatch() {
        let mut out = [0u8; 20];
        Algorithm::Sha1
            .pbkdf2_into(
                b"password",
                b"salt",
                Iters::new(1).unwrap(),
                &mut out,
            )
            .unwrap();
        assert_eq!(hex::encode(out), "0c60c80f961f0e71f3a9b524af6012062fe037a6");

        assert!(Algorithm::Crc32
            .pbkdf2_into(b"p", b"s", Iters::new(1).unwrap(), &mut out)
            .is_err());
    }
}
