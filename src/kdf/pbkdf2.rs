//! The Password Based Key Derivation Function 2 (RFC 2898 / RFC 8018).

use crate::hash::MAX_DIGEST;
use crate::kdf::Iters;
use crate::mac::hmac::{algo::Hash, Hmac};
use crate::ParameterError;
use zeroize::Zeroize;

/// Derive `out_key.len()` bytes from `password` and `salt` with `iters`
/// iterations of `HMAC-H`.
///
/// A single HMAC instance is constructed once and its key-pad templates are
/// reused across all block and iteration PRF invocations; the pads are never
/// re-derived. Derived key blocks are
/// `T_i = U_1 XOR ... XOR U_c` with `U_1 = PRF(salt || BE32(i))`.
///
/// # Errors
///
/// `ParameterError` if `out_key` exceeds `(2^32 - 1) * DIGEST_SIZE` bytes.
///
/// # Example
///
/// ```
/// use fleet_hash::kdf::{pbkdf2_into, Iters};
/// use fleet_hash::hash::Sha256;
///
/// let mut key = [0u8; 32];
/// pbkdf2_into::<Sha256>(b"password", b"salt", Iters::new(4096).unwrap(), &mut key)
///     .unwrap();
/// ```
pub fn pbkdf2_into<H: Hash>(
    password: &[u8],
    salt: &[u8],
    iters: Iters,
    out_key: &mut [u8],
) -> Result<(), ParameterError> {
    let h_len = H::DIGEST_SIZE;
    if out_key.len() as u128 > u128::from(u32::MAX) * h_len as u128 {
        return Err(ParameterError);
    }

    let mut prf = Hmac::<H>::new(password);
    let mut u = [0u8; MAX_DIGEST];
    let mut next = [0u8; MAX_DIGEST];
    let mut acc = [0u8; MAX_DIGEST];

    for (index, chunk) in out_key.chunks_mut(h_len).enumerate() {
        let counter = (index as u32 + 1).to_be_bytes();

        prf.stream_once(&[salt, &counter], &mut u[..h_len]);
        acc[..h_len].copy_from_slice(&u[..h_len]);

        for _ in 1..iters.get() {
            prf.stream_once(&[&u[..h_len]], &mut next[..h_len]);
            u[..h_len].copy_from_slice(&next[..h_len]);
            for (a, b) in acc[..h_len].iter_mut().zip(u[..h_len].iter()) {
                *a ^= b;
            }
        }

        chunk.copy_from_slice(&acc[..chunk.len()]);
    }

    u.zeroize();
    next.zeroize();
    acc.zeroize();
    Ok(())
}

/// Derive a fixed-size key from `password` and `salt`.
///
/// # Errors
///
/// `ParameterError` if `KL` exceeds `(2^32 - 1) * DIGEST_SIZE` bytes.
///
/// # Example
///
/// ```
/// use fleet_hash::kdf::{pbkdf2, Iters};
/// use fleet_hash::hash::Sha1;
///
/// let key = pbkdf2::<20, Sha1>(b"password", b"salt", Iters::new(1).unwrap())
///     .unwrap();
/// assert_eq!(key.len(), 20);
/// ```
pub fn pbkdf2<const KL: usize, H: Hash>(
    password: &[u8],
    salt: &[u8],
    iters: Iters,
) -> Result<[u8; KL], ParameterError> {
    let mut out = [0u8; KL];
    pbkdf2_into::<H>(password, salt, iters, out.as_mut_slice())?;
    Ok(out)
}
