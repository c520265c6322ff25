#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    clippy::all
)]
// the state machines intentionally expose `new` without `Default`, matching the
// explicit-lifecycle contract.
#![allow(clippy::new_without_default)]
// module names repeat algorithm names by design (hash::sha256::Sha256).
#![allow(clippy::module_name_repetitions)]
// compression rounds read clearer with explicit index arithmetic.
#![allow(clippy::needless_range_loop)]
// digest widths are all well below u32::MAX.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::inline_always)]
// this devalues things which actually require the must-use attribute
#![allow(clippy::must_use_candidate)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod sealed;

pub mod ct;
pub mod hex;
mod error;
pub mod digest;

pub mod hash;
pub mod mac;
pub mod kdf;

alloc! {
    pub mod registry;
}

pub use error::{Error, InvalidSize, ParameterError, Unsupported, UsageError};
pub use ct::ct_eq;
pub use digest::Digest;
