use core::fmt;

/// An operation was invoked in a forbidden phase of the hashing state machine.
///
/// Returned when `update` or `digest` is called on a state which has already
/// been finalized. Calling `init` clears the condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UsageError;

impl fmt::Display for UsageError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UsageError: state already finalized")
    }
}

/// HMAC or PBKDF2 was requested over an algorithm without a defined HMAC
/// block discipline (BLAKE2b, CRC32, xxHash32, xxHash64).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unsupported: algorithm is not HMAC-capable")
    }
}

/// A constructor was given an illegal parameter.
///
/// Covers BLAKE2b digest lengths outside `1..=64`, BLAKE2b keys which are
/// empty or longer than 64 bytes, and PBKDF2 output lengths exceeding
/// `(2^32 - 1) * hLen`. A state refused at construction never enters the
/// state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParameterError;

impl fmt::Display for ParameterError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ParameterError")
    }
}

/// The provided output buffer was not the expected length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidSize;

impl fmt::Display for InvalidSize {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InvalidSize")
    }
}

/// Aggregate error for the dynamic dispatch layer, where any of the
/// specific failures may surface through one call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// See [`UsageError`].
    Usage(UsageError),
    /// See [`Unsupported`].
    Unsupported(Unsupported),
    /// See [`ParameterError`].
    Parameter(ParameterError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(e) => fmt::Display::fmt(e, f),
            Self::Unsupported(e) => fmt::Display::fmt(e, f),
            Self::Parameter(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl From<UsageError> for Error {
    #[inline]
    fn from(value: UsageError) -> Self {
        Self::Usage(value)
    }
}

impl From<Unsupported> for Error {
    #[inline]
    fn from(value: Unsupported) -> Self {
        Self::Unsupported(value)
    }
}

impl From<ParameterError> for Error {
    #[inline]
    fn from(value: ParameterError) -> Self {
        Self::Parameter(value)
    }
}

std! {
    impl std::error::Error for UsageError {}
    impl std::error::Error for Unsupported {}
    impl std::error::Error for ParameterError {}
    impl std::error::Error for InvalidSize {}
    impl std::error::Error for Error {}
}
