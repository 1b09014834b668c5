//! Burrows-Wheeler block-sorting transform.
//!
//! This crate provides the reversible permutation at the heart of a
//! bzip2-style compressor:
//!
//! 1. Forward transform - sort every cyclic rotation of a block and emit the
//!    last byte of each, plus the rank of the unrotated block
//! 2. Inverse transform - rebuild the block from that output in O(n)
//!
//! Two forward strategies produce identical output:
//!
//! - [`SuffixArrayBwt`] derives the rotation order from a suffix array built
//!   by [`Sais`] in linear time (the default)
//! - [`RotationSort`] compares rotations directly, for validation and tiny
//!   blocks
//!
//! Equal rotations (periodic blocks) are ordered by starting offset.
//!
//! ```rust
//! use blocksort_bwt::{decode, encode};
//!
//! let block = encode(b"banana").unwrap();
//! assert_eq!(block.data, b"nnbaaa");
//! assert_eq!(block.primary_index, 3);
//! assert_eq!(decode(&block.data, block.primary_index).unwrap(), b"banana");
//! ```
//!
//! All working memory lives in a caller-owned [`Scratch`]; nothing is
//! shared between calls, so independent blocks can be transformed on as
//! many threads as there are scratch arenas.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod blocks;
mod encoder;
mod inverse;
mod naive;
mod rotation;
mod sais;
mod scratch;
mod suffix;

pub use blocks::{decode_blocks, encode_blocks};
pub use encoder::{BwtBlock, BwtEncoder, EMPTY_INDEX};
pub use inverse::{decode, decode_into};
pub use naive::NaiveSuffixSort;
pub use rotation::RotationSort;
pub use sais::Sais;
pub use scratch::Scratch;
pub use suffix::SuffixArrayBwt;

#[cfg(feature = "parallel")]
pub use blocks::{decode_blocks_parallel, encode_blocks_parallel};

pub use blocksort_core::{
    BlockSize, BlockSortError, MAX_BLOCK_SIZE, Result, Strategy, SuffixArrayProvider,
    TransformConfig,
};

/// Transform one block with the default (suffix array) strategy.
pub fn encode(block: &[u8]) -> Result<BwtBlock> {
    SuffixArrayBwt::new(Sais).encode(block)
}
