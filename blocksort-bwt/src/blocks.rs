//! Multi-block drivers.
//!
//! Input is cut at the configured block size and every block is
//! transformed on its own. Blocks share nothing, so the parallel variants
//! only need one scratch arena per worker.

use crate::encoder::{BwtBlock, BwtEncoder};
use crate::inverse;
use crate::scratch::Scratch;
use blocksort_core::TransformConfig;
use blocksort_core::error::{Result, try_resize};
use log::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Transform `input` block by block.
///
/// Empty input yields no blocks.
pub fn encode_blocks(input: &[u8], config: &TransformConfig) -> Result<Vec<BwtBlock>> {
    let block_size = config.block_size.bytes();
    debug!(
        "encoding {} bytes in {}-byte blocks with {}",
        input.len(),
        block_size,
        config.strategy.name()
    );

    let mut scratch = Scratch::with_block_size(block_size.min(input.len()));
    input
        .chunks(block_size)
        .enumerate()
        .map(|(seq, chunk)| {
            trace!("block {}: {} bytes", seq, chunk.len());
            config.strategy.encode_with(chunk, &mut scratch)
        })
        .collect()
}

/// Invert [`encode_blocks`], concatenating the recovered blocks.
pub fn decode_blocks(blocks: &[BwtBlock]) -> Result<Vec<u8>> {
    let mut output = allocate_output(blocks)?;
    let mut scratch = Scratch::new();
    let mut offset = 0;
    for (seq, block) in blocks.iter().enumerate() {
        trace!("block {}: {} bytes", seq, block.len());
        let end = offset + block.len();
        inverse::decode_into(
            &block.data,
            block.primary_index,
            &mut output[offset..end],
            &mut scratch,
        )?;
        offset = end;
    }
    Ok(output)
}

/// Transform `input` block by block on the rayon thread pool (requires
/// the `parallel` feature).
///
/// Each worker owns one scratch arena for all the blocks it handles. The
/// result is identical to [`encode_blocks`].
#[cfg(feature = "parallel")]
pub fn encode_blocks_parallel(input: &[u8], config: &TransformConfig) -> Result<Vec<BwtBlock>> {
    let block_size = config.block_size.bytes();
    debug!(
        "encoding {} bytes in {}-byte blocks with {} (parallel)",
        input.len(),
        block_size,
        config.strategy.name()
    );

    input
        .par_chunks(block_size)
        .map_init(Scratch::new, |scratch, chunk| {
            config.strategy.encode_with(chunk, scratch)
        })
        .collect()
}

/// Invert blocks on the rayon thread pool (requires the `parallel`
/// feature). The result is identical to [`decode_blocks`].
#[cfg(feature = "parallel")]
pub fn decode_blocks_parallel(blocks: &[BwtBlock]) -> Result<Vec<u8>> {
    let mut output = allocate_output(blocks)?;

    // Carve the output into one disjoint slice per block
    let mut slices = Vec::with_capacity(blocks.len());
    let mut rest = output.as_mut_slice();
    for block in blocks {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(block.len());
        slices.push(head);
        rest = tail;
    }

    blocks
        .par_iter()
        .zip(slices.into_par_iter())
        .map_init(Scratch::new, |scratch, (block, out)| {
            inverse::decode_into(&block.data, block.primary_index, out, scratch)
        })
        .collect::<Result<()>>()?;

    Ok(output)
}

/// Zeroed buffer large enough for every block.
fn allocate_output(blocks: &[BwtBlock]) -> Result<Vec<u8>> {
    let total = blocks.iter().map(BwtBlock::len).sum();
    let mut output = Vec::new();
    try_resize(&mut output, total, 0)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocksort_core::{BlockSize, BlockSortError, Strategy};

    fn sample(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. ";
        text.iter().copied().cycle().take(size).collect()
    }

    #[test]
    fn test_empty_input() {
        let blocks = encode_blocks(b"", &TransformConfig::default()).unwrap();
        assert!(blocks.is_empty());
        assert!(decode_blocks(&blocks).unwrap().is_empty());
    }

    #[test]
    fn test_block_splitting() {
        let input = sample(250_000);
        let config = TransformConfig::new().with_block_size(BlockSize::MIN);
        let blocks = encode_blocks(&input, &config).unwrap();

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].len(), 100_000);
        assert_eq!(blocks[2].len(), 50_000);
        assert_eq!(decode_blocks(&blocks).unwrap(), input);
    }

    #[test]
    fn test_strategies_agree_per_block() {
        let input = sample(600);
        let fast = encode_blocks(&input, &TransformConfig::new()).unwrap();
        let slow = encode_blocks(
            &input,
            &TransformConfig::new().with_strategy(Strategy::Reference),
        )
        .unwrap();
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_bad_block_fails_whole_decode() {
        let mut blocks = encode_blocks(&sample(100), &TransformConfig::new()).unwrap();
        blocks[0].primary_index = 100;
        let err = decode_blocks(&blocks).unwrap_err();
        assert!(matches!(err, BlockSortError::InvalidIndex { .. }));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let input = sample(350_000);
        let config = TransformConfig::new().with_block_size(1);

        let serial = encode_blocks(&input, &config).unwrap();
        let parallel = encode_blocks_parallel(&input, &config).unwrap();
        assert_eq!(serial, parallel);

        assert_eq!(decode_blocks_parallel(&parallel).unwrap(), input);
    }
}
