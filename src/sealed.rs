/// General-purpose sealing for traits which must not be implemented downstream.
pub trait Sealed {}

/// Sealing for the HMAC hash-capability trait.
///
/// Only algorithms with a well-defined HMAC block discipline implement this;
/// BLAKE2b, CRC32, and the xxHash family never do.
pub trait HmacSealed {}
