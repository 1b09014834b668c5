//! Suffix array construction by induced sorting (SA-IS).
//!
//! Linear time and space. Suffixes are classified as S-type (smaller than
//! the suffix that follows) or L-type, the leftmost S-type positions (LMS)
//! are sorted first, and the full order is induced from them. When two LMS
//! substrings are equal the problem is renamed into a shorter integer text
//! and solved recursively.
//!
//! See: Nong, Zhang and Chan (2009), "Linear Suffix Array Construction by
//! Almost Pure Induced-Sorting".

use blocksort_core::error::{BlockSortError, Result, try_resize};
use blocksort_core::traits::SuffixArrayProvider;

/// Marks an unfilled suffix array slot or a position that is not LMS.
const EMPTY: usize = usize::MAX;

/// Linear-time suffix array provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sais;

impl SuffixArrayProvider for Sais {
    fn build_into(&self, text: &[u8], sa: &mut Vec<usize>) -> Result<()> {
        try_resize(sa, text.len(), EMPTY)?;
        sa_is(text, u8::MAX as usize, sa)
    }

    fn name(&self) -> &'static str {
        "sa-is"
    }
}

/// A buffer of `len` copies of `value`, or an allocation error.
fn filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    try_resize(&mut buf, len, value)?;
    Ok(buf)
}

/// An empty buffer able to hold `len` items without reallocating.
fn reserved<T>(len: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|e| BlockSortError::allocation(len, e))?;
    Ok(buf)
}

/// Fill `sa` with the suffix array of `s`, whose symbols lie in
/// `0..=upper`. `sa` must be exactly as long as `s`.
fn sa_is<T: Copy + Into<usize>>(s: &[T], upper: usize, sa: &mut [usize]) -> Result<()> {
    let n = s.len();
    debug_assert_eq!(sa.len(), n);
    let at = |i: usize| -> usize { s[i].into() };

    match n {
        0 => return Ok(()),
        1 => {
            sa[0] = 0;
            return Ok(());
        }
        2 => {
            // Equal symbols: the shorter suffix sorts first
            if at(0) < at(1) {
                sa.copy_from_slice(&[0, 1]);
            } else {
                sa.copy_from_slice(&[1, 0]);
            }
            return Ok(());
        }
        _ => {}
    }

    // ls[i] is true when suffix i is S-type. The last suffix is L-type
    // against the virtual sentinel.
    let mut ls = filled(n, false)?;
    for i in (0..n - 1).rev() {
        ls[i] = if at(i) == at(i + 1) {
            ls[i + 1]
        } else {
            at(i) < at(i + 1)
        };
    }

    // sum_l[c]: first slot of bucket c. sum_s[c]: first S-type slot of
    // bucket c. An S-type symbol is never `upper`, so c + 1 stays in range.
    let mut sum_l = filled(upper + 1, 0usize)?;
    let mut sum_s = filled(upper + 1, 0usize)?;
    for i in 0..n {
        if ls[i] {
            sum_l[at(i) + 1] += 1;
        } else {
            sum_s[at(i)] += 1;
        }
    }
    for c in 0..=upper {
        sum_s[c] += sum_l[c];
        if c < upper {
            sum_l[c + 1] += sum_s[c];
        }
    }

    let buckets = Buckets {
        ls: &ls,
        sum_l: &sum_l,
        sum_s: &sum_s,
    };

    let mut lms_map = filled(n + 1, EMPTY)?;
    // At most one LMS position per two symbols
    let mut lms = reserved(n / 2)?;
    for i in 1..n {
        if !ls[i - 1] && ls[i] {
            lms_map[i] = lms.len();
            lms.push(i);
        }
    }
    let m = lms.len();

    // First pass orders LMS substrings, not yet whole suffixes
    buckets.induce(s, &lms, sa)?;

    if m == 0 {
        return Ok(());
    }

    let mut sorted_lms = reserved(m)?;
    sorted_lms.extend(sa.iter().copied().filter(|&v| lms_map[v] != EMPTY));

    // Name each LMS substring by its rank among distinct substrings
    let mut rec_s = filled(m, 0usize)?;
    let mut rec_upper = 0;
    rec_s[lms_map[sorted_lms[0]]] = 0;
    for i in 1..m {
        let mut l = sorted_lms[i - 1];
        let mut r = sorted_lms[i];
        let end_l = if lms_map[l] + 1 < m {
            lms[lms_map[l] + 1]
        } else {
            n
        };
        let end_r = if lms_map[r] + 1 < m {
            lms[lms_map[r] + 1]
        } else {
            n
        };
        let same = if end_l - l != end_r - r {
            false
        } else {
            while l < end_l && at(l) == at(r) {
                l += 1;
                r += 1;
            }
            l != n && r != n && at(l) == at(r)
        };
        if !same {
            rec_upper += 1;
        }
        rec_s[lms_map[sorted_lms[i]]] = rec_upper;
    }

    let mut rec_sa = filled(m, 0usize)?;
    sa_is(&rec_s, rec_upper, &mut rec_sa)?;
    for (slot, &rank) in sorted_lms.iter_mut().zip(&rec_sa) {
        *slot = lms[rank];
    }

    buckets.induce(s, &sorted_lms, sa)
}

/// Suffix types and bucket boundaries shared by both induce passes.
struct Buckets<'a> {
    ls: &'a [bool],
    sum_l: &'a [usize],
    sum_s: &'a [usize],
}

impl Buckets<'_> {
    /// Seed `sa` with the LMS positions in `lms` order, then induce
    /// L-type suffixes left to right and S-type suffixes right to left.
    fn induce<T: Copy + Into<usize>>(
        &self,
        s: &[T],
        lms: &[usize],
        sa: &mut [usize],
    ) -> Result<()> {
        let n = s.len();
        let at = |i: usize| -> usize { s[i].into() };
        let ls = self.ls;

        sa.fill(EMPTY);
        let mut buf = reserved(self.sum_s.len())?;
        buf.extend_from_slice(self.sum_s);
        for &d in lms {
            if d == n {
                continue;
            }
            let c = at(d);
            sa[buf[c]] = d;
            buf[c] += 1;
        }

        buf.copy_from_slice(self.sum_l);
        let c = at(n - 1);
        sa[buf[c]] = n - 1;
        buf[c] += 1;
        for i in 0..n {
            let v = sa[i];
            if v != EMPTY && v >= 1 && !ls[v - 1] {
                let c = at(v - 1);
                sa[buf[c]] = v - 1;
                buf[c] += 1;
            }
        }

        buf.copy_from_slice(self.sum_l);
        for i in (0..n).rev() {
            let v = sa[i];
            if v != EMPTY && v >= 1 && ls[v - 1] {
                let c = at(v - 1) + 1;
                buf[c] -= 1;
                sa[buf[c]] = v - 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::NaiveSuffixSort;

    fn check(text: &[u8]) {
        let fast = Sais.build(text).unwrap();
        let slow = NaiveSuffixSort.build(text).unwrap();
        assert_eq!(fast, slow, "suffix arrays differ for {:?}", text);
    }

    #[test]
    fn test_small_inputs() {
        assert!(Sais.build(b"").unwrap().is_empty());
        assert_eq!(Sais.build(b"x").unwrap(), vec![0]);
        assert_eq!(Sais.build(b"aa").unwrap(), vec![1, 0]);
        assert_eq!(Sais.build(b"ab").unwrap(), vec![0, 1]);
        assert_eq!(Sais.build(b"ba").unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_banana() {
        assert_eq!(Sais.build(b"banana").unwrap(), vec![5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_matches_naive() {
        let cases: [&[u8]; 8] = [
            b"mississippi",
            b"abracadabra",
            b"dabracadabrac",
            b"aaaaaaaaaaaaaaaa",
            b"abababababababab",
            b"cabbagecabbagecabbage",
            b"the quick brown fox jumps over the lazy dog",
            b"zyxwvutsrqponmlkjihgfedcba",
        ];
        for text in cases {
            check(text);
        }
    }

    #[test]
    fn test_every_byte_value() {
        let mut text: Vec<u8> = (0..=255).collect();
        text.extend((0..=255).rev());
        text.extend((0..=255).step_by(3));
        check(&text);
    }

    #[test]
    fn test_recursion_on_repetitive_text() {
        // Many equal LMS substrings force several levels of renaming
        let mut text = Vec::new();
        for i in 0..200u32 {
            text.extend_from_slice(b"abcab");
            text.push(b'a' + (i % 3) as u8);
        }
        check(&text);
    }

    #[test]
    fn test_pseudo_random() {
        let mut seed = 12345u32;
        for len in [3usize, 7, 31, 100, 1000, 4096] {
            for alphabet in [2u32, 4, 256] {
                let text: Vec<u8> = (0..len)
                    .map(|_| {
                        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
                        ((seed >> 16) % alphabet) as u8
                    })
                    .collect();
                check(&text);
            }
        }
    }

    #[test]
    fn test_oversized_buffers_report_allocation() {
        let err = filled(usize::MAX / 2, 0usize).unwrap_err();
        assert!(err.is_resource_error());
        assert!(matches!(err, BlockSortError::Allocation { .. }));

        let err = reserved::<usize>(usize::MAX / 2).unwrap_err();
        assert!(matches!(
            err,
            BlockSortError::Allocation { requested, .. } if requested == usize::MAX / 2
        ));
    }

    #[test]
    fn test_reuses_buffer() {
        let mut sa = vec![42; 100];
        Sais.build_into(b"banana", &mut sa).unwrap();
        assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
    }
}
