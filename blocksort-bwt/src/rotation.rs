//! Reference forward transform by direct rotation sorting.
//!
//! Every rotation is compared byte by byte through modular indexing, so no
//! rotation is ever materialized. Worst case is O(n² log n) (long runs of a
//! single byte); use it to validate the suffix array strategy and for tiny
//! blocks only.

use crate::encoder::{BwtEncoder, EMPTY_INDEX, check_output};
use crate::scratch::Scratch;
use blocksort_core::Strategy;
use blocksort_core::error::{BlockSortError, Result, try_resize};
use std::cmp::Ordering;

/// Rotation-sort strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationSort;

impl BwtEncoder for RotationSort {
    fn encode_into(
        &self,
        block: &[u8],
        output: &mut [u8],
        scratch: &mut Scratch,
    ) -> Result<usize> {
        check_output(block, output)?;
        let n = block.len();
        if n == 0 {
            return Ok(EMPTY_INDEX);
        }

        let Scratch {
            rotations, keys, ..
        } = scratch;

        rotations.clear();
        rotations
            .try_reserve_exact(n)
            .map_err(|e| BlockSortError::allocation(n, e))?;
        rotations.extend(0..n);

        // Sort keys from the first 4 bytes (or fewer for short blocks)
        let key_len = n.min(4);
        try_resize(keys, n, 0)?;
        for (i, key) in keys.iter_mut().enumerate() {
            for j in 0..key_len {
                *key = (*key << 8) | block[(i + j) % n] as u32;
            }
        }

        // Keys first, then the remaining bytes of both rotations, then
        // offset so equal rotations keep their original order
        rotations.sort_unstable_by(|&a, &b| {
            keys[a]
                .cmp(&keys[b])
                .then_with(|| compare_from(block, a, b, key_len))
                .then(a.cmp(&b))
        });

        // Last column, and the rank of the rotation starting at 0
        let mut primary = 0;
        for (rank, &start) in rotations.iter().enumerate() {
            output[rank] = block[(start + n - 1) % n];
            if start == 0 {
                primary = rank;
            }
        }

        Ok(primary)
    }

    fn name(&self) -> &'static str {
        Strategy::Reference.name()
    }
}

/// Compare rotations `a` and `b` of `data`, skipping the first `skip` bytes.
fn compare_from(data: &[u8], a: usize, b: usize, skip: usize) -> Ordering {
    let n = data.len();
    for i in skip..n {
        let byte_a = data[(a + i) % n];
        let byte_b = data[(b + i) % n];
        match byte_a.cmp(&byte_b) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
