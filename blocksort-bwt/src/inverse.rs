//! Inverse Burrows-Wheeler Transform.
//!
//! Independent of how the forward output was built: one counting pass, one
//! pass building the next-pointer array, one pointer chase.

use crate::encoder::EMPTY_INDEX;
use crate::scratch::Scratch;
use blocksort_core::error::{BlockSortError, Result, try_resize};

/// Reconstruct the original block from the permutation and primary index.
pub fn decode(data: &[u8], primary_index: usize) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    try_resize(&mut output, data.len(), 0)?;
    decode_into(data, primary_index, &mut output, &mut Scratch::new())?;
    Ok(output)
}

/// Reconstruct the original block into `output`, which must be exactly as
/// long as `data`.
///
/// Both the index and the output length are checked before anything is
/// written, so a rejected call leaves `output` untouched.
pub fn decode_into(
    data: &[u8],
    primary_index: usize,
    output: &mut [u8],
    scratch: &mut Scratch,
) -> Result<()> {
    let n = data.len();
    if output.len() != n {
        return Err(BlockSortError::length_mismatch(n, output.len()));
    }
    if n == 0 {
        return if primary_index == EMPTY_INDEX {
            Ok(())
        } else {
            Err(BlockSortError::invalid_index(primary_index, 0))
        };
    }
    if primary_index >= n {
        return Err(BlockSortError::invalid_index(primary_index, n));
    }

    // Count occurrences of each byte
    let mut counts = [0usize; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    // Starting rank of each byte value in sorted order
    let mut cumulative = [0usize; 256];
    let mut total = 0;
    for (slot, &count) in cumulative.iter_mut().zip(counts.iter()) {
        *slot = total;
        total += count;
    }

    // next[r] is the permutation position whose rotation has sorted rank r
    let next = &mut scratch.next;
    try_resize(next, n, 0)?;
    for (i, &byte) in data.iter().enumerate() {
        next[cumulative[byte as usize]] = i;
        cumulative[byte as usize] += 1;
    }

    // Follow the chain from the row that holds the original first byte
    let mut idx = next[primary_index];
    for out in output.iter_mut() {
        *out = data[idx];
        idx = next[idx];
    }

    Ok(())
}
