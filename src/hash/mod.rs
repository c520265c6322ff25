//! Hash Algorithms
//!
//! Every algorithm exposes the same streaming contract: `init` resets the
//! state to its IV, `update` absorbs any number of byte slices, and `digest`
//! finalizes exactly once. A finalized state rejects further `update` or
//! `digest` calls with [`UsageError`] until `init` is called again; this
//! single-shot rule is applied uniformly, including to the non-cryptographic
//! CRC32 and xxHash families.
//!
//! [`UsageError`]: crate::UsageError

#[macro_use]
mod api_gen;

#[cfg(test)]
pub(crate) mod test_utils;

pub(crate) mod keccak;

#[doc(hidden)]
pub mod md4;
#[doc(hidden)]
pub mod md5;
#[doc(hidden)]
pub mod ripemd160;
#[doc(hidden)]
pub mod sha1;
#[doc(hidden)]
pub mod sha224;
#[doc(hidden)]
pub mod sha256;
#[doc(hidden)]
pub mod sha384;
#[doc(hidden)]
pub mod sha512;
#[doc(hidden)]
pub mod sha3_224;
#[doc(hidden)]
pub mod sha3_256;
#[doc(hidden)]
pub mod sha3_384;
#[doc(hidden)]
pub mod sha3_512;
#[doc(hidden)]
pub mod keccak_224;
#[doc(hidden)]
pub mod keccak_256;
#[doc(hidden)]
pub mod keccak_384;
#[doc(hidden)]
pub mod keccak_512;
#[doc(hidden)]
pub mod blake2b;
#[doc(hidden)]
pub mod crc32;
#[doc(hidden)]
pub mod xxhash32;
#[doc(hidden)]
pub mod xxhash64;

pub use {
    blake2b::Blake2b,
    crc32::Crc32,
    keccak_224::Keccak224,
    keccak_256::Keccak256,
    keccak_384::Keccak384,
    keccak_512::Keccak512,
    md4::Md4,
    md5::Md5,
    ripemd160::Ripemd160,
    sha1::Sha1,
    sha224::Sha224,
    sha256::Sha256,
    sha384::Sha384,
    sha512::Sha512,
    sha3_224::Sha3_224,
    sha3_256::Sha3_256,
    sha3_384::Sha3_384,
    sha3_512::Sha3_512,
    xxhash32::XxHash32,
    xxhash64::XxHash64,
};

/// The widest block any supported algorithm consumes (SHA3-224's rate).
pub(crate) const MAX_BLOCK: usize = 144;

/// The widest digest any supported algorithm emits.
pub(crate) const MAX_DIGEST: usize = 64;

/// The streaming lifecycle. `Fresh` and `Absorbing` both accept input;
/// `Finalized` rejects everything except `init`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Fresh,
    Absorbing,
    Finalized,
}

/// The per-algorithm compression core.
///
/// The streaming facade owns the partial-block buffer and the running input
/// length; the engine only ever sees whole blocks plus one trailing
/// `finalize` call carrying the pending tail and the total byte count.
pub(crate) trait Engine: Clone {
    /// Input block width in bytes. CRC32 uses 1 (pure byte streaming).
    const BLOCK: usize;
    /// Digest width in bytes.
    const OUT: usize;
    /// Hold a full block back from `compress` until more input arrives.
    ///
    /// BLAKE2b must know at compression time whether a block is the last
    /// one, so its facade may buffer exactly one full block.
    const DEFER: bool = false;

    /// Restore the IV.
    fn reset(&mut self);

    /// Compress `data`, whose length is a non-zero multiple of `BLOCK`.
    fn compress(&mut self, data: &[u8]);

    /// Pad and emit the digest. `tail.len() < BLOCK` (`<= BLOCK` when
    /// `DEFER`), `out.len() == OUT`.
    fn finalize(&mut self, tail: &[u8], total: u128, out: &mut [u8]);

    /// Zero the working state.
    fn wipe(&mut self);
}

/// Shared buffering step for every facade: fill the pending block, drain
/// whole blocks straight from the input, stash the remainder.
pub(crate) fn absorb<E: Engine>(
    core: &mut E,
    buf: &mut [u8],
    buffered: &mut usize,
    total: &mut u128,
    mut data: &[u8],
) {
    *total += data.len() as u128;
    let bs = E::BLOCK;

    if E::DEFER {
        // Only compress a full buffer once at least one more byte shows up,
        // so the final block is still in hand at `finalize`.
        while !data.is_empty() {
            if *buffered == bs {
                core.compress(&buf[..bs]);
                *buffered = 0;
            }
            let take = core::cmp::min(bs - *buffered, data.len());
            buf[*buffered..*buffered + take].copy_from_slice(&data[..take]);
            *buffered += take;
            data = &data[take..];
        }
        return;
    }

    if *buffered > 0 {
        let take = core::cmp::min(bs - *buffered, data.len());
        buf[*buffered..*buffered + take].copy_from_slice(&data[..take]);
        *buffered += take;
        data = &data[take..];

        if *buffered < bs {
            return;
        }
        core.compress(&buf[..bs]);
        *buffered = 0;
    }

    let whole = data.len() - data.len() % bs;
    if whole > 0 {
        core.compress(&data[..whole]);
        data = &data[whole..];
    }

    if !data.is_empty() {
        buf[..data.len()].copy_from_slice(data);
        *buffered = data.len();
    }
}

#[inline(always)]
pub(crate) fn be32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[inline(always)]
pub(crate) fn le32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[inline(always)]
pub(crate) fn be64(bytes: &[u8]) -> u64 {
    u64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

#[inline(always)]
pub(crate) fn le64(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Merkle–Damgård padding: `0x80`, zeros, then the bit length in the final
/// 8 bytes (16 for 128-byte blocks with a big-endian length). Spills into a
/// second block when the tail leaves no room for the length field.
pub(crate) fn md_pad<F: FnMut(&[u8])>(
    block: usize,
    tail: &[u8],
    total: u128,
    le_len: bool,
    mut compress: F,
) {
    debug_assert!(block == 64 || block == 128);
    debug_assert!(tail.len() < block);

    let mut scratch = [0u8; 256];
    scratch[..tail.len()].copy_from_slice(tail);
    scratch[tail.len()] = 0x80;

    let len_field = if block == 128 { 16 } else { 8 };
    let padded = if tail.len() + 1 > block - len_field {
        2 * block
    } else {
        block
    };

    let bits = total << 3;
    if le_len {
        scratch[padded - 8..padded].copy_from_slice(&(bits as u64).to_le_bytes());
    } else if block == 64 {
        scratch[padded - 8..padded].copy_from_slice(&(bits as u64).to_be_bytes());
    } else {
        scratch[padded - 16..padded].copy_from_slice(&bits.to_be_bytes());
    }

    compress(&scratch[..padded]);
}
