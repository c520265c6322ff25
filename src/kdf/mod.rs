//! Key Derivation Functions

mod pbkdf2;

pub use pbkdf2::{pbkdf2, pbkdf2_into};

#[doc(inline)]
pub use crate::mac::hmac::Hash;

use crate::error::ParameterError;
use core::num::NonZeroU32;

/// A PBKDF2 iteration count.
///
/// Non-positive counts are unrepresentable; construction is the validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iters(NonZeroU32);

impl Iters {
    /// Create an iteration count.
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub const fn new(count: u32) -> Option<Self> {
        match NonZeroU32::new(count) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// The count as a `u32`.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<NonZeroU32> for Iters {
    #[inline]
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl TryFrom<u32> for Iters {
    type Error = ParameterError;

    /// # Errors
    ///
    /// `ParameterError` for a zero iteration count.
    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParameterError)
    }
}
