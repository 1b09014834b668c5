//! The forward transform interface shared by every construction strategy.

use crate::inverse;
use crate::rotation::RotationSort;
use crate::sais::Sais;
use crate::scratch::Scratch;
use crate::suffix::SuffixArrayBwt;
use blocksort_core::error::{BlockSortError, Result, try_resize};
use blocksort_core::Strategy;

/// Primary index reported for an empty block. No rotation exists, so it
/// never addresses a byte.
pub const EMPTY_INDEX: usize = usize::MAX;

/// One transformed block: the permuted bytes plus the rank of the
/// original rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BwtBlock {
    /// Last column of the sorted rotation matrix.
    pub data: Vec<u8>,
    /// Sorted rank of the unrotated block, or [`EMPTY_INDEX`].
    pub primary_index: usize,
}

impl BwtBlock {
    /// Number of bytes in the block.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the block is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Invert the transform.
    pub fn decode(&self) -> Result<Vec<u8>> {
        inverse::decode(&self.data, self.primary_index)
    }
}

impl Default for BwtBlock {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            primary_index: EMPTY_INDEX,
        }
    }
}

/// A forward Burrows-Wheeler construction.
///
/// Every implementation must produce the same output for the same block:
/// rotations are ordered lexicographically, and equal rotations by
/// ascending starting offset.
pub trait BwtEncoder {
    /// Transform `block` into `output` and return the primary index.
    ///
    /// `output` must be exactly as long as `block`. The block is only read.
    fn encode_into(
        &self,
        block: &[u8],
        output: &mut [u8],
        scratch: &mut Scratch,
    ) -> Result<usize>;

    /// Short name used in logs and benchmarks.
    fn name(&self) -> &'static str;

    /// Transform `block` into a new [`BwtBlock`], reusing `scratch`.
    fn encode_with(&self, block: &[u8], scratch: &mut Scratch) -> Result<BwtBlock> {
        let mut data = Vec::new();
        try_resize(&mut data, block.len(), 0)?;
        let primary_index = self.encode_into(block, &mut data, scratch)?;
        Ok(BwtBlock {
            data,
            primary_index,
        })
    }

    /// Transform `block` with a throwaway scratch arena.
    fn encode(&self, block: &[u8]) -> Result<BwtBlock> {
        self.encode_with(block, &mut Scratch::new())
    }
}

impl<E: BwtEncoder + ?Sized> BwtEncoder for &E {
    fn encode_into(
        &self,
        block: &[u8],
        output: &mut [u8],
        scratch: &mut Scratch,
    ) -> Result<usize> {
        (**self).encode_into(block, output, scratch)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl BwtEncoder for Strategy {
    fn encode_into(
        &self,
        block: &[u8],
        output: &mut [u8],
        scratch: &mut Scratch,
    ) -> Result<usize> {
        match self {
            Strategy::Reference => RotationSort.encode_into(block, output, scratch),
            Strategy::SuffixArray => SuffixArrayBwt::new(Sais).encode_into(block, output, scratch),
        }
    }

    fn name(&self) -> &'static str {
        Strategy::name(self)
    }
}

/// Reject an output buffer that cannot hold the permutation.
pub(crate) fn check_output(block: &[u8], output: &[u8]) -> Result<()> {
    if output.len() != block.len() {
        return Err(BlockSortError::length_mismatch(block.len(), output.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_dispatch_banana() {
        for strategy in [Strategy::Reference, Strategy::SuffixArray] {
            let block = strategy.encode(b"banana").unwrap();
            assert_eq!(block.data, b"nnbaaa", "{}", strategy.name());
            assert_eq!(block.primary_index, 3);
            assert_eq!(block.decode().unwrap(), b"banana");
        }
    }

    #[test]
    fn test_strategy_names_match_encoders() {
        assert_eq!(BwtEncoder::name(&Strategy::Reference), RotationSort.name());
        assert_eq!(
            BwtEncoder::name(&Strategy::SuffixArray),
            SuffixArrayBwt::new(Sais).name()
        );
        assert_eq!(RotationSort.name(), "rotation-sort");
        assert_eq!(SuffixArrayBwt::new(Sais).name(), "suffix-array");
    }

    #[test]
    fn test_output_length_mismatch() {
        let mut output = [0u8; 3];
        let err = Strategy::SuffixArray
            .encode_into(b"banana", &mut output, &mut Scratch::new())
            .unwrap_err();
        assert!(matches!(
            err,
            BlockSortError::LengthMismatch {
                expected: 6,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_default_block_is_empty() {
        let block = BwtBlock::default();
        assert!(block.is_empty());
        assert_eq!(block.primary_index, EMPTY_INDEX);
        assert!(block.decode().unwrap().is_empty());
    }

    #[test]
    fn test_encoder_by_reference() {
        fn run<E: BwtEncoder>(encoder: E) -> BwtBlock {
            encoder.encode(b"abab").unwrap()
        }

        let block = run(&RotationSort);
        assert_eq!(block.data, b"bbaa");
        assert_eq!(block.primary_index, 0);

        let encoder: &dyn BwtEncoder = &Strategy::SuffixArray;
        assert_eq!(run(encoder), block);
    }
}
