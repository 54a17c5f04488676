//! Suffix array construction by radix sorting.
//!
//! The suffix array of a text of length `n` holds all `n + 1` suffix start
//! positions, the empty suffix `n` included, in lexicographic order. Two
//! builders are provided, both driven by the same stable bucket sort:
//!
//! - [`lsd_suffix_array`] sorts by every column, last first;
//! - [`msd_suffix_array`] sorts by the first column and refines ranges of
//!   suffixes sharing a prefix.
//!
//! Positions past the end of a suffix read as the sentinel `0`, which must sort
//! below every symbol of the text. Texts containing a symbol with ordinal `0`
//! (e.g. a NUL byte) get an unspecified order.
//!
//! ```
//! let sa = radix_sa::msd_suffix_array(b"abaab");
//! assert_eq!(sa, vec![5, 2, 3, 0, 4, 1]);
//! ```
mod radixsort;
mod symbol;

use anyhow::{anyhow, Result};

pub use radixsort::{LsdRadixSorter, MsdRadixSorter, SENTINEL};
pub use symbol::Symbol;

/// Radix sorting order used by [`SuffixArrayBuilder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Least-significant digit first.
    Lsd,
    /// Most-significant digit first.
    #[default]
    Msd,
}

///
pub struct SuffixArrayBuilder<'a, T> {
    text: &'a [T],
    strategy: Strategy,
    msd_threshold: usize,
    verbose: bool,
}

impl<'a, T: Symbol> SuffixArrayBuilder<'a, T> {
    pub fn new(text: &'a [T]) -> Self {
        Self {
            text,
            strategy: Strategy::default(),
            msd_threshold: 1,
            verbose: false,
        }
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Ranges of at most `msd_threshold` suffixes are finished by comparison
    /// sort instead of further radix passes. Ignored by [`Strategy::Lsd`].
    pub fn msd_threshold(mut self, msd_threshold: usize) -> Result<Self> {
        if msd_threshold == 0 {
            return Err(anyhow!("msd_threshold must be positive."));
        }
        self.msd_threshold = msd_threshold;
        Ok(self)
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(&self) -> Vec<usize> {
        assert_ne!(self.msd_threshold, 0);

        let text = self.text;
        let suffixes = (0..=text.len()).collect();

        if self.verbose {
            eprintln!("Text length: {:?}", text.len());
            eprintln!("Strategy: {:?}", self.strategy);
        }

        match self.strategy {
            Strategy::Lsd => LsdRadixSorter::sort(text, suffixes, self.verbose),
            Strategy::Msd => {
                if self.verbose {
                    eprintln!("Threshold: {:?}", self.msd_threshold);
                }
                MsdRadixSorter::sort(text, suffixes, self.msd_threshold, self.verbose)
            }
        }
    }
}

/// Computes the suffix array of `text` by least-significant digit radix sort.
///
/// Runs `n + 1` full passes regardless of how early the suffixes are told apart.
pub fn lsd_suffix_array<T: Symbol>(text: &[T]) -> Vec<usize> {
    SuffixArrayBuilder::new(text)
        .strategy(Strategy::Lsd)
        .build()
}

/// Computes the suffix array of `text` by most-significant digit radix sort.
pub fn msd_suffix_array<T: Symbol>(text: &[T]) -> Vec<usize> {
    SuffixArrayBuilder::new(text)
        .strategy(Strategy::Msd)
        .build()
}

/// Stable bucket sort of `indices` by the symbols of `text` they point to.
///
/// `indices` must have the same length as `text` and only hold positions of
/// `text`.
pub fn bucket_sort<T: Symbol>(text: &[T], indices: &[usize]) -> Result<Vec<usize>> {
    if indices.len() != text.len() {
        return Err(anyhow!(
            "length mismatch: {} indices for a text of length {}.",
            indices.len(),
            text.len()
        ));
    }
    if let Some(&i) = indices.iter().find(|&&i| i >= text.len()) {
        return Err(anyhow!(
            "index out of range: {} for a text of length {}.",
            i,
            text.len()
        ));
    }
    Ok(radixsort::bucket_sort_by(indices, |i| text[i].ordinal()))
}

/// Returns the symbols of `text` in non-decreasing order.
pub fn count_sort<T: Symbol>(text: &[T]) -> Vec<T> {
    let positions: Vec<usize> = (0..text.len()).collect();
    radixsort::bucket_sort_by(&positions, |i| text[i].ordinal())
        .into_iter()
        .map(|i| text[i])
        .collect()
}

/// Returns the characters of `text` in non-decreasing order.
pub fn sort_characters(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    count_sort(&chars).into_iter().collect()
}

/// Checks that `sa` is the suffix array of `text`.
pub fn verify_suffix_array<T: Symbol>(text: &[T], sa: &[usize]) -> Result<()> {
    let n = text.len();
    if sa.len() != n + 1 {
        return Err(anyhow!(
            "suffix array has {} entries, expected {}.",
            sa.len(),
            n + 1
        ));
    }
    let mut seen = vec![false; n + 1];
    for &suffix in sa {
        if suffix > n {
            return Err(anyhow!("suffix {} is out of range.", suffix));
        }
        if seen[suffix] {
            return Err(anyhow!("suffix {} appears twice.", suffix));
        }
        seen[suffix] = true;
    }
    for (rank, pair) in sa.windows(2).enumerate() {
        if text[pair[0]..] >= text[pair[1]..] {
            return Err(anyhow!(
                "suffixes {} and {} at ranks {} and {} are out of order.",
                pair[0],
                pair[1],
                rank,
                rank + 1
            ));
        }
    }
    Ok(())
}
