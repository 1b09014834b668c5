//! Forward transform derived from a suffix array.
//!
//! A rotation starting at offset `i` is the first `n` bytes of the suffix
//! at `i` in the block written twice, so sorting those suffixes sorts the
//! rotations. The output byte for each rotation is the one cyclically
//! before it.
//!
//! Periodic blocks need care. If rotations `i < j` are equal, the doubled
//! buffer's suffix at `j` is a proper prefix of the one at `i` and sorts
//! first, the reverse of the offset order rotation sorting uses. To keep
//! both strategies identical the block is first reduced to its primitive
//! root `u` (block = `u^k`). Rotations of `u` are all distinct, so the
//! suffix array of `u·u` orders them strictly. Each rotation of `u` stands
//! for `k` equal rotations of the block, which share one output byte, and
//! offset 0 is the first of its group.

use crate::encoder::{BwtEncoder, EMPTY_INDEX, check_output};
use crate::sais::Sais;
use crate::scratch::Scratch;
use blocksort_core::Strategy;
use blocksort_core::error::{BlockSortError, Result, try_resize};
use blocksort_core::traits::SuffixArrayProvider;
use log::{debug, trace};

/// Suffix-array strategy, generic over the suffix array construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuffixArrayBwt<P = Sais> {
    provider: P,
}

impl<P: SuffixArrayProvider> SuffixArrayBwt<P> {
    /// Create the strategy around a suffix array provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The suffix array provider in use.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: SuffixArrayProvider> BwtEncoder for SuffixArrayBwt<P> {
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

        let period = primitive_period(block, &mut scratch.border)?;
        let repeats = n / period;
        if repeats > 1 {
            debug!(
                "block of {} bytes is {} repeats of a {}-byte root",
                n, repeats, period
            );
        }
        let root = &block[..period];

        let doubled = &mut scratch.doubled;
        doubled.clear();
        doubled
            .try_reserve_exact(2 * period)
            .map_err(|e| BlockSortError::allocation(2 * period, e))?;
        doubled.extend_from_slice(root);
        doubled.extend_from_slice(root);

        self.provider.build_into(doubled, &mut scratch.sa)?;
        trace!(
            "{} built suffix array of {} entries",
            self.provider.name(),
            scratch.sa.len()
        );
        if scratch.sa.len() != doubled.len() {
            return Err(BlockSortError::invalid_suffix_array(format!(
                "{} returned {} entries for a text of {}",
                self.provider.name(),
                scratch.sa.len(),
                doubled.len()
            )));
        }

        let mut rank = 0;
        let mut primary = None;
        for &start in &scratch.sa {
            if start >= period {
                continue;
            }
            if rank == period {
                return Err(BlockSortError::invalid_suffix_array(
                    "more rotation offsets than rotations",
                ));
            }
            let byte = root[(start + period - 1) % period];
            output[rank * repeats..(rank + 1) * repeats].fill(byte);
            if start == 0 {
                primary = Some(rank * repeats);
            }
            rank += 1;
        }

        match primary {
            Some(primary) if rank == period => Ok(primary),
            _ => Err(BlockSortError::invalid_suffix_array(
                "rotation offsets are not a permutation",
            )),
        }
    }

    fn name(&self) -> &'static str {
        Strategy::SuffixArray.name()
    }
}

/// Length of the shortest `u` with `block == u^k`, using the classic
/// border table: the shortest period is `n - border(n)`, and it is a root
/// only when it divides `n`. `block` must not be empty.
pub(crate) fn primitive_period(block: &[u8], border: &mut Vec<usize>) -> Result<usize> {
    let n = block.len();
    debug_assert!(n > 0);
    try_resize(border, n, 0)?;

    let mut k = 0;
    for i in 1..n {
        while k > 0 && block[i] != block[k] {
            k = border[k - 1];
        }
        if block[i] == block[k] {
            k += 1;
        }
        border[i] = k;
    }

    let period = n - border[n - 1];
    Ok(if n % period == 0 { period } else { n })
}
