//! Core traits for block-sorting.

use crate::error::Result;

/// A suffix array construction algorithm.
///
/// Given a text of length `m`, an implementation fills `sa` with a
/// permutation of `0..m` such that the suffix starting at `sa[i]` is
/// lexicographically no greater than the suffix starting at `sa[i + 1]`.
/// Bytes compare by value and a suffix that is a proper prefix of another
/// sorts first. Since every suffix has a distinct length, the order is
/// total and there is exactly one correct answer per text.
///
/// Implementations must not mutate the text and must not keep state
/// between calls; the output buffer is owned by the caller so it can be
/// reused across blocks.
pub trait SuffixArrayProvider {
    /// Build the suffix array of `text` into `sa`, replacing its contents.
    fn build_into(&self, text: &[u8], sa: &mut Vec<usize>) -> Result<()>;

    /// Build the suffix array of `text` into a fresh vector.
    fn build(&self, text: &[u8]) -> Result<Vec<usize>> {
        let mut sa = Vec::new();
        self.build_into(text, &mut sa)?;
        Ok(sa)
    }

    /// Short name used in logs and benchmarks.
    fn name(&self) -> &'static str;
}

impl<P: SuffixArrayProvider + ?Sized> SuffixArrayProvider for &P {
    fn build_into(&self, text: &[u8], sa: &mut Vec<usize>) -> Result<()> {
        (**self).build_into(text, sa)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
