use std::collections::BTreeMap;

use crate::Symbol;

/// Digit reported for positions past the end of a suffix.
pub const SENTINEL: u32 = 0;

// Keys below this bound are counted in a flat table.
const DENSE_LIMIT: u32 = 1 << 16;

/// Returns the ordinal of `text[suffix + column]`, or [`SENTINEL`] past the end.
#[inline]
pub fn digit<T: Symbol>(text: &[T], suffix: usize, column: usize) -> u32 {
    text.get(suffix + column).map_or(SENTINEL, |&c| c.ordinal())
}

/// Stable bucket sort of `indices` by `key`.
///
/// Indices with smaller keys come first, and indices sharing a key keep
/// their relative order from the input.
pub fn bucket_sort_by<F>(indices: &[usize], key: F) -> Vec<usize>
where
    F: Fn(usize) -> u32,
{
    let keys: Vec<u32> = indices.iter().map(|&i| key(i)).collect();
    let mut offsets = BucketOffsets::from_keys(&keys);
    let mut sorted = vec![0; indices.len()];
    for (&i, &k) in indices.iter().zip(&keys) {
        sorted[offsets.advance(k)] = i;
    }
    sorted
}

/// Next free output position of every key present in one bucket-sort pass.
enum BucketOffsets {
    Dense(Vec<usize>),
    Sparse(BTreeMap<u32, usize>),
}

impl BucketOffsets {
    fn from_keys(keys: &[u32]) -> Self {
        let max_key = keys.iter().copied().max().unwrap_or(SENTINEL);
        if max_key < DENSE_LIMIT {
            let mut counts = vec![0; max_key as usize + 1];
            for &k in keys {
                counts[k as usize] += 1;
            }
            exclusive_sum(counts.iter_mut());
            Self::Dense(counts)
        } else {
            let mut counts = BTreeMap::new();
            for &k in keys {
                *counts.entry(k).or_insert(0) += 1;
            }
            exclusive_sum(counts.values_mut());
            Self::Sparse(counts)
        }
    }

    /// Returns the position for the next index with `key` and moves past it.
    fn advance(&mut self, key: u32) -> usize {
        let offset = match self {
            Self::Dense(offsets) => &mut offsets[key as usize],
            // Every key was tallied in from_keys.
            Self::Sparse(offsets) => offsets.entry(key).or_insert(0),
        };
        let current = *offset;
        *offset += 1;
        current
    }
}

fn exclusive_sum<'a>(values: impl Iterator<Item = &'a mut usize>) {
    let mut sum = 0;
    for value in values {
        let value = std::mem::replace(value, sum);
        sum += value;
    }
}

/// Sorts suffixes with one full bucket-sort pass per column, last column first.
pub struct LsdRadixSorter<'a, T> {
    text: &'a [T],
    verbose: bool,
}

impl<'a, T: Symbol> LsdRadixSorter<'a, T> {
    pub fn sort(text: &'a [T], suffixes: Vec<usize>, verbose: bool) -> Vec<usize> {
        let sorter = Self { text, verbose };
        sorter.sort_columns(suffixes)
    }

    fn sort_columns(&self, mut suffixes: Vec<usize>) -> Vec<usize> {
        // Every suffix is padded with sentinels to n + 1 columns.
        let n_columns = self.text.len() + 1;
        let report_every = (n_columns / 10).max(1);
        for column in (0..n_columns).rev() {
            let pass = n_columns - column;
            if self.verbose && (pass % report_every == 0 || pass == n_columns) {
                eprintln!("Sorting columns: {}/{}", pass, n_columns);
            }
            let text = self.text;
            suffixes = bucket_sort_by(&suffixes, |suffix| digit(text, suffix, column));
        }
        suffixes
    }
}

/// A half-open range of the suffix list whose suffixes share their first
/// `column` digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Range {
    start: usize,
    end: usize,
    column: usize,
}

/// Sorts suffixes by refining ranges from the first column on.
///
/// Pending ranges live on an explicit stack instead of the call stack, so long
/// shared prefixes do not deepen recursion.
pub struct MsdRadixSorter<'a, T> {
    text: &'a [T],
    suffixes: Vec<usize>,
    threshold: usize,
    worklist: Vec<Range>,
    n_refined: usize,
    n_compared: usize,
}

impl<'a, T: Symbol> MsdRadixSorter<'a, T> {
    /// Ranges of at most `threshold` suffixes are finished with a comparison
    /// sort. A threshold of 1 refines by radix only, and 0 is treated as 1.
    pub fn sort(
        text: &'a [T],
        suffixes: Vec<usize>,
        threshold: usize,
        verbose: bool,
    ) -> Vec<usize> {
        let n_suffixes = suffixes.len();
        let threshold = threshold.max(1);
        let mut sorter = Self {
            text,
            suffixes,
            threshold,
            worklist: vec![Range {
                start: 0,
                end: n_suffixes,
                column: 0,
            }],
            n_refined: 0,
            n_compared: 0,
        };
        while let Some(range) = sorter.worklist.pop() {
            sorter.sort_range(range);
        }
        if verbose {
            eprintln!("Refined ranges: {}", sorter.n_refined);
            eprintln!("Comparison-sorted ranges: {}", sorter.n_compared);
        }
        sorter.suffixes
    }

    fn sort_range(&mut self, range: Range) {
        let Range { start, end, column } = range;
        let text = self.text;

        if end - start <= self.threshold {
            if end - start > 1 {
                // Sorts small ranges with comparison sort.
                self.suffixes[start..end]
                    .sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]).then_with(|| a.cmp(&b)));
                self.n_compared += 1;
            }
            return;
        }
        self.n_refined += 1;

        let sorted = bucket_sort_by(&self.suffixes[start..end], |suffix| {
            digit(text, suffix, column)
        });
        self.suffixes[start..end].copy_from_slice(&sorted);

        // Queues each run of equal digits that still has to be told apart.
        let mut i = start;
        while i < end {
            let c = digit(text, self.suffixes[i], column);
            let mut j = i + 1;
            while j < end && digit(text, self.suffixes[j], column) == c {
                j += 1;
            }
            // Suffixes exhausted at the same column are identical.
            if j - i > 1 && c != SENTINEL {
                self.worklist.push(Range {
                    start: i,
                    end: j,
                    column: column + 1,
                });
            }
            i = j;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit() {
        let text = b"abaab";
        assert_eq!(digit(text, 0, 0), b'a' as u32);
        assert_eq!(digit(text, 1, 3), b'b' as u32);
        assert_eq!(digit(text, 3, 2), SENTINEL);
        assert_eq!(digit(text, 5, 0), SENTINEL);
        assert_eq!(digit(text, 5, 5), SENTINEL);
    }

    #[test]
    fn test_bucket_sort_by() {
        let text = b"mississippi";
        let suffixes: Vec<usize> = (0..text.len()).collect();
        let sorted = bucket_sort_by(&suffixes, |i| text[i] as u32);
        assert_eq!(sorted, vec![1, 4, 7, 10, 0, 8, 9, 2, 3, 5, 6]);
    }

    #[test]
    fn test_bucket_sort_by_column() {
        let text = b"abaab";
        let suffixes: Vec<usize> = (0..=text.len()).collect();
        let sorted = bucket_sort_by(&suffixes, |suffix| digit(text, suffix, 1));
        // Keys: b, a, a, b, $, $.
        assert_eq!(sorted, vec![4, 5, 1, 2, 0, 3]);
    }

    #[test]
    fn test_bucket_sort_by_sparse_keys() {
        let text = [70000u32, 5, 70000, 3, 1 << 20];
        let suffixes = vec![4, 0, 1, 2, 3];
        let sorted = bucket_sort_by(&suffixes, |i| text[i]);
        assert_eq!(sorted, vec![3, 1, 0, 2, 4]);
    }

    #[test]
    fn test_bucket_sort_by_empty() {
        let sorted = bucket_sort_by(&[], |_| 1);
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_lsd_radix_sorter() {
        let text = b"abaab";
        let suffixes = (0..=text.len()).collect();
        let suffixes = LsdRadixSorter::sort(text, suffixes, false);
        assert_eq!(suffixes, vec![5, 2, 3, 0, 4, 1]);
    }

    #[test]
    fn test_lsd_radix_sorter_part() {
        let text = b"abracadabra$";
        let suffixes = vec![1, 3, 4, 7, 10];
        let suffixes = LsdRadixSorter::sort(text, suffixes, false);
        assert_eq!(suffixes, vec![10, 7, 3, 1, 4]);
    }

    #[test]
    fn test_msd_radix_sorter_1() {
        let text = b"abracadabra$";
        let suffixes = (0..text.len()).collect();
        let suffixes = MsdRadixSorter::sort(text, suffixes, 1, false);
        assert_eq!(suffixes, vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
    }

    #[test]
    fn test_msd_radix_sorter_2() {
        let text = b"abracadabra$";
        let suffixes = (0..text.len()).collect();
        let suffixes = MsdRadixSorter::sort(text, suffixes, 2, false);
        assert_eq!(suffixes, vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
    }

    #[test]
    fn test_msd_radix_sorter_4() {
        let text = b"abracadabra$";
        let suffixes = (0..text.len()).collect();
        let suffixes = MsdRadixSorter::sort(text, suffixes, 4, false);
        assert_eq!(suffixes, vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
    }

    #[test]
    fn test_msd_radix_sorter_part_1() {
        let text = b"abracadabra$";
        let suffixes = vec![1, 3, 4, 7, 10];
        let suffixes = MsdRadixSorter::sort(text, suffixes, 1, false);
        assert_eq!(suffixes, vec![10, 7, 3, 1, 4]);
    }

    #[test]
    fn test_msd_radix_sorter_part_2() {
        let text = b"abracadabra$";
        let suffixes = vec![1, 3, 4, 7, 10];
        let suffixes = MsdRadixSorter::sort(text, suffixes, 2, false);
        assert_eq!(suffixes, vec![10, 7, 3, 1, 4]);
    }

    #[test]
    fn test_msd_radix_sorter_with_empty_suffix() {
        let text = b"mississippi";
        let suffixes = (0..=text.len()).collect();
        let suffixes = MsdRadixSorter::sort(text, suffixes, 1, false);
        assert_eq!(suffixes, vec![11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
    }

    #[test]
    fn test_msd_radix_sorter_duplicates_terminate() {
        let text = b"aaa";
        let suffixes = vec![1, 1, 0];
        let suffixes = MsdRadixSorter::sort(text, suffixes, 1, false);
        assert_eq!(suffixes, vec![1, 1, 0]);
    }

    #[test]
    fn test_msd_radix_sorter_zero_threshold() {
        let text = b"abracadabra$";
        let suffixes = (0..text.len()).collect();
        let suffixes = MsdRadixSorter::sort(text, suffixes, 0, false);
        assert_eq!(suffixes, vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
    }

    #[test]
    fn test_msd_radix_sorter_no_suffixes() {
        let text = b"abc";
        let suffixes = MsdRadixSorter::sort(text, vec![], 1, false);
        assert!(suffixes.is_empty());
    }
}
