//! Comparison-sort suffix array provider.
//!
//! O(n² log n) worst case. Used as a baseline for [`crate::Sais`] and as a
//! stand-in provider where speed does not matter.

use blocksort_core::error::{BlockSortError, Result};
use blocksort_core::traits::SuffixArrayProvider;

/// Sorts suffix slices directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveSuffixSort;

impl SuffixArrayProvider for NaiveSuffixSort {
    fn build_into(&self, text: &[u8], sa: &mut Vec<usize>) -> Result<()> {
        sa.clear();
        sa.try_reserve_exact(text.len())
            .map_err(|e| BlockSortError::allocation(text.len(), e))?;
        sa.extend(0..text.len());
        // Slice order already puts a proper prefix first
        sa.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}
