/// Create the streaming facade for a hashing function.
///
/// Generates the public state machine (buffering, phases, one-shots) around a
/// compression engine, the HMAC capability wiring when requested, the dynamic
/// dispatch impl, and the shared test battery.
macro_rules! make_hasher {
    (
        $(sec_warning: $warning:literal,)?
        name: $name:ident,
        engine: $engine:ty,
        bs: $bs:literal,
        ds: $ds:literal
        $(, hmac: $hmac:ident)?
        $(, rc: $rc:ty)?
        $(,)?
    ) => {
        #[doc = concat!("The `", stringify!($name), "` hasher.")]
        #[doc = ""]
        $(
            #[doc = "# Security Warning"]
            #[doc = ""]
            #[doc = $warning]
            #[doc = ""]
        )?
        #[doc = "`digest` finalizes exactly once; call [`init`] to reuse the state."]
        #[doc = ""]
        #[doc = "# Example"]
        #[doc = ""]
        #[doc = "```"]
        #[doc = concat!("use fleet_hash::hash::", stringify!($name), ";")]
        #[doc = ""]
        #[doc = concat!("let mut hasher = ", stringify!($name), "::new();")]
        #[doc = "hasher.update(b\"hello \").unwrap();"]
        #[doc = "hasher.update(b\"world\").unwrap();"]
        #[doc = ""]
        #[doc = "let streamed = hasher.digest().unwrap();"]
        #[doc = concat!("assert_eq!(streamed, ", stringify!($name), "::hash(b\"hello world\"));")]
        #[doc = concat!("assert_eq!(streamed.as_bytes().len(), ", stringify!($ds), ");")]
        #[doc = "```"]
        #[doc = ""]
        #[doc = "[`init`]: Self::init"]
        #[derive(Clone)]
        pub struct $name {
            core: $engine,
            buf: [u8; $bs],
            buffered: usize,
            total: u128,
            phase: $crate::hash::Phase,
        }

        impl $name {
            #[doc = "The input block width the compression function consumes, in bytes."]
            pub const BLOCK_SIZE: usize = $bs;
            #[doc = "The digest width, in bytes."]
            pub const DIGEST_SIZE: usize = $ds;

            #[doc = concat!("Create a new `", stringify!($name), "` instance at its IV.")]
            #[must_use]
            pub fn new() -> Self {
                Self {
                    core: <$engine>::default(),
                    buf: [0u8; $bs],
                    buffered: 0,
                    total: 0,
                    phase: $crate::hash::Phase::Fresh,
                }
            }

            #[doc = "Reset to the IV, discarding any absorbed input."]
            #[doc = ""]
            #[doc = "Valid from every phase (including after `digest`) and idempotent."]
            #[inline]
            pub fn init(&mut self) {
                <$engine as $crate::hash::Engine>::reset(&mut self.core);
                self.buffered = 0;
                self.total = 0;
                self.phase = $crate::hash::Phase::Absorbing;
            }

            #[inline]
            fn absorb_bytes(&mut self, data: &[u8]) {
                self.phase = $crate::hash::Phase::Absorbing;
                $crate::hash::absorb(
                    &mut self.core,
                    &mut self.buf,
                    &mut self.buffered,
                    &mut self.total,
                    data,
                );
            }

            #[inline]
            fn finish_into(&mut self, out: &mut [u8]) {
                <$engine as $crate::hash::Engine>::finalize(
                    &mut self.core,
                    &self.buf[..self.buffered],
                    self.total,
                    out,
                );
                self.phase = $crate::hash::Phase::Finalized;
            }

            #[doc = "Absorb `data`. May be called any number of times with any"]
            #[doc = "slice lengths, including zero; chunk boundaries never affect"]
            #[doc = "the digest."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "[`UsageError`] if the state is already finalized."]
            #[doc = ""]
            #[doc = "[`UsageError`]: crate::UsageError"]
            #[inline]
            pub fn update(&mut self, data: &[u8]) -> Result<&mut Self, $crate::error::UsageError> {
                if matches!(self.phase, $crate::hash::Phase::Finalized) {
                    return Err($crate::error::UsageError);
                }
                self.absorb_bytes(data);
                Ok(self)
            }

            #[doc = "Pad, encode the input length, and emit the digest,"]
            #[doc = "transitioning to the finalized phase."]
            #[doc = ""]
            #[doc = "Permitted from the fresh phase (hashes the empty input)."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "[`UsageError`] on a second call without an intervening"]
            #[doc = "[`init`]."]
            #[doc = ""]
            #[doc = "[`UsageError`]: crate::UsageError"]
            #[doc = "[`init`]: Self::init"]
            pub fn digest(
                &mut self,
            ) -> Result<$crate::digest::Digest<$ds>, $crate::error::UsageError> {
                if matches!(self.phase, $crate::hash::Phase::Finalized) {
                    return Err($crate::error::UsageError);
                }
                let mut out = $crate::digest::Digest::zeroed();
                self.finish_into(out.as_mut_bytes());
                Ok(out)
            }

            #[doc = "As [`digest`], writing the raw bytes into `output`."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "[`UsageError`] if the state is already finalized."]
            #[doc = ""]
            #[doc = "[`digest`]: Self::digest"]
            #[doc = "[`UsageError`]: crate::UsageError"]
            pub fn digest_into_exact(
                &mut self,
                output: &mut [u8; $ds],
            ) -> Result<(), $crate::error::UsageError> {
                if matches!(self.phase, $crate::hash::Phase::Finalized) {
                    return Err($crate::error::UsageError);
                }
                self.finish_into(output);
                Ok(())
            }

            #[doc = concat!("Hash `data` in one shot: `init` → `update` → `digest`.")]
            pub fn hash(data: &[u8]) -> $crate::digest::Digest<$ds> {
                let mut hasher = Self::new();
                hasher.absorb_bytes(data);
                let mut out = $crate::digest::Digest::zeroed();
                hasher.finish_into(out.as_mut_bytes());
                out
            }

            #[doc = "The input block width, in bytes."]
            #[must_use]
            pub const fn block_size(&self) -> usize {
                Self::BLOCK_SIZE
            }

            #[doc = "The digest width, in bytes."]
            #[must_use]
            pub const fn digest_size(&self) -> usize {
                Self::DIGEST_SIZE
            }
        }

        alloc! {
            impl $name {
                #[doc = "Hash `data` in one shot, returning the canonical"]
                #[doc = "lowercase hex rendering."]
                #[must_use]
                pub fn hash_hex(data: &[u8]) -> alloc::string::String {
                    Self::hash(data).hex()
                }
            }
        }

        $(
            make_hasher!(@ensure_yes $hmac);

            impl $crate::sealed::HmacSealed for $name {}

            impl $crate::mac::hmac::algo::Hash for $name {
                const BLOCK_SIZE: usize = $bs;
                const DIGEST_SIZE: usize = $ds;
                type Output = $crate::digest::Digest<$ds>;

                fn fresh() -> Self {
                    let mut hasher = Self::new();
                    hasher.init();
                    hasher
                }

                fn absorb(&mut self, data: &[u8]) {
                    self.absorb_bytes(data);
                }

                fn produce(&mut self) -> Self::Output {
                    let mut out = $crate::digest::Digest::zeroed();
                    self.finish_into(out.as_mut_bytes());
                    out
                }

                fn produce_into(&mut self, out: &mut [u8]) {
                    self.finish_into(out);
                }

                fn wipe(&mut self) {
                    use zeroize::Zeroize as _;
                    <$engine as $crate::hash::Engine>::wipe(&mut self.core);
                    self.buf.zeroize();
                    self.buffered = 0;
                    self.total = 0;
                    self.phase = $crate::hash::Phase::Fresh;
                }
            }
        )?

        #[cfg(any(test, feature = "alloc"))]
        impl $crate::registry::StreamHasher for $name {
            fn reset(&mut self) {
                self.init();
            }

            fn absorb(&mut self, data: &[u8]) -> Result<(), $crate::error::UsageError> {
                self.update(data).map(|_| ())
            }

            fn produce_vec(
                &mut self,
            ) -> Result<alloc::vec::Vec<u8>, $crate::error::UsageError> {
                self.digest().map(|d| d.as_bytes().to_vec())
            }

            fn block_size(&self) -> usize {
                Self::BLOCK_SIZE
            }

            fn digest_size(&self) -> usize {
                Self::DIGEST_SIZE
            }
        }

        #[cfg(test)]
        mod unit_tests {
            use super::*;

            #[test]
            fn streaming_matches_one_shot() {
                let mut hasher = $name::new();
                hasher.update(b"hello ").unwrap();
                hasher.update(b"world").unwrap();

                assert_eq!(hasher.digest().unwrap(), $name::hash(b"hello world"));
            }

            #[test]
            fn zero_length_updates_are_no_ops() {
                let mut hasher = $name::new();
                hasher.update(b"").unwrap();
                hasher.update(b"hello world").unwrap();
                hasher.update(b"").unwrap();

                assert_eq!(hasher.digest().unwrap(), $name::hash(b"hello world"));
            }

            #[test]
            fn digest_from_fresh_hashes_empty_input() {
                let mut hasher = $name::new();
                assert_eq!(hasher.digest().unwrap(), $name::hash(b""));
            }

            #[test]
            fn update_after_digest_is_rejected() {
                let mut hasher = $name::new();
                hasher.update(b"hello world").unwrap();
                let _ = hasher.digest().unwrap();

                assert!(hasher.update(b"more").is_err());
            }

            #[test]
            fn second_digest_without_init_is_rejected() {
                let mut hasher = $name::new();
                let _ = hasher.digest().unwrap();

                assert!(hasher.digest().is_err());
            }

            #[test]
            fn init_clears_the_finalized_phase() {
                let mut hasher = $name::new();
                hasher.update(b"first message").unwrap();
                let first = hasher.digest().unwrap();

                hasher.init();
                hasher.update(b"first message").unwrap();

                assert_eq!(hasher.digest().unwrap(), first);
            }

            #[test]
            fn init_is_idempotent() {
                let mut hasher = $name::new();
                hasher.init();
                hasher.init();
                assert_eq!(hasher.digest().unwrap(), $name::hash(b""));
            }

            #[test]
            fn clones_are_isolated() {
                let mut hasher = $name::new();
                hasher.update(b"shared prefix").unwrap();

                let mut forked = hasher.clone();
                hasher.update(b" left").unwrap();
                forked.update(b" right").unwrap();

                assert_eq!(hasher.digest().unwrap(), $name::hash(b"shared prefix left"));
                assert_eq!(forked.digest().unwrap(), $name::hash(b"shared prefix right"));
            }

            #[test]
            fn digest_into_exact_matches_digest() {
                let mut out = [0u8; $ds];
                let mut hasher = $name::new();
                hasher.update(b"hello world").unwrap();
                hasher.digest_into_exact(&mut out).unwrap();

                assert_eq!($name::hash(b"hello world"), out);
            }

            #[test]
            fn one_shot_hex_is_lowercase() {
                let hex = $name::hash_hex(b"hello world");
                assert_eq!(hex.len(), $ds * 2);
                assert!(hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
            }
        }

        $(

            #[cfg(test)]
            mod property_tests {
                use super::*;
                use $crate::hash::test_utils::Chunks;
                use proptest::prelude::*;

                fn reference(data: &[u8]) -> std::vec::Vec<u8> {
                    use digest::Digest as _;
                    <$rc>::digest(data).to_vec()
                }

                proptest! {
                    #![proptest_config(ProptestConfig::with_cases(512))]

                    #[test]
                    fn reference_equivalence_single_update(
                        input in proptest::collection::vec(any::<u8>(), 0..2048)
                    ) {
                        let mut hasher = $name::new();
                        hasher.update(input.as_slice()).unwrap();

                        let digest = hasher.digest().unwrap();
                        let reference_digest = reference(input.as_slice());
                        prop_assert_eq!(
                            digest.as_bytes(),
                            reference_digest.as_slice()
                        );
                    }

                    #[test]
                    fn reference_equivalence_arbitrary_chunks(chunks in any::<Chunks>()) {
                        let mut hasher = $name::new();
                        for part in &chunks.parts {
                            hasher.update(part.as_slice()).unwrap();
                        }

                        let digest = hasher.digest().unwrap();
                        let reference_digest = reference(chunks.joined().as_slice());
                        prop_assert_eq!(
                            digest.as_bytes(),
                            reference_digest.as_slice()
                        );
                    }

                    #[test]
                    fn chunking_invariance(chunks in any::<Chunks>()) {
                        let mut hasher = $name::new();
                        for part in &chunks.parts {
                            hasher.update(part.as_slice()).unwrap();
                        }

                        prop_assert_eq!(
                            hasher.digest().unwrap(),
                            $name::hash(chunks.joined().as_slice())
                        );
                    }
                }
            }
        )?
    };

    (@ensure_yes yes) => {};
}
