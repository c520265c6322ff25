//! The hash-capability contract `HMAC` is generic over.

use crate::sealed::HmacSealed as Sealed;

/// A hash function with a well-defined HMAC block discipline.
///
/// Implemented by every Merkle–Damgård and sponge hasher in this crate:
///
/// - `Md4`, `Md5`, `Ripemd160`, `Sha1`
/// - `Sha224`, `Sha256`, `Sha384`, `Sha512`
/// - `Sha3_224`, `Sha3_256`, `Sha3_384`, `Sha3_512`
/// - `Keccak224`, `Keccak256`, `Keccak384`, `Keccak512`
///
/// BLAKE2b, CRC32, xxHash32, and xxHash64 have no HMAC block discipline in
/// this library and never implement it; requesting them through the dynamic
/// layer yields [`Unsupported`].
///
/// The trait is sealed. Its methods bypass the public phase machine; `Hmac`
/// and `PBKDF2` manage the lifecycle themselves.
///
/// [`Unsupported`]: crate::Unsupported
pub trait Hash: Sealed + Clone {
    /// The block width the HMAC key is padded to.
    const BLOCK_SIZE: usize;
    /// The digest width.
    const DIGEST_SIZE: usize;
    /// The typed digest this hash emits.
    type Output: Copy + AsRef<[u8]>;

    #[doc(hidden)]
    #[must_use]
    fn fresh() -> Self;

    #[doc(hidden)]
    fn absorb(&mut self, data: &[u8]);

    #[doc(hidden)]
    #[must_use]
    fn produce(&mut self) -> Self::Output;

    #[doc(hidden)]
    fn produce_into(&mut self, out: &mut [u8]);

    #[doc(hidden)]
    fn wipe(&mut self);
}
