use proptest::arbitrary::{any, Arbitrary};
use proptest::collection::vec;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::vec::Vec;

/// An arbitrary message split into arbitrary update-call boundaries,
/// including empty chunks.
#[derive(Debug, Clone)]
pub(crate) struct Chunks {
    pub parts: Vec<Vec<u8>>,
}

impl Chunks {
    /// The message the chunks concatenate to.
    pub fn joined(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.parts.iter().map(Vec::len).sum());
        for part in &self.parts {
            out.extend_from_slice(part);
        }
        out
    }
}

impl Arbitrary for Chunks {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        vec(vec(any::<u8>(), 0..257), 0..24)
            .prop_map(|parts| Chunks { parts })
            .boxed()
    }
}
