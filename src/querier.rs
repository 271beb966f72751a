//! Arbitrary-pair LCP queries over a fixed text.
//!
//! Owns the text, its suffix array, the inverse suffix array, the LCP
//! array, and a sparse table over it; everything is built once and
//! immutable afterwards.

use crate::lcp;
use crate::rmq::SparseTable;

/// Precomputed structure answering longest-common-prefix queries between
/// any two suffixes of a fixed text.
#[derive(Debug, Clone)]
pub struct LcpQuerier {
    text: Vec<u8>,
    suffix_array: Vec<usize>,
    inverse: Vec<usize>,
    lcp: Vec<usize>,
    rmq: SparseTable,
}

impl LcpQuerier {
    /// Build the querier from a text and its suffix array.
    ///
    /// Time complexity: O(n log n), dominated by the sparse table build.
    ///
    /// # Panics
    ///
    /// Panics if `suffix_array.len() != text.len()`.
    pub fn new(text: Vec<u8>, suffix_array: Vec<usize>) -> Self {
        assert_eq!(
            suffix_array.len(),
            text.len(),
            "suffix array length {} does not match text length {}",
            suffix_array.len(),
            text.len()
        );

        let inverse = lcp::inverse_suffix_array(&suffix_array);
        let lcp_array = lcp::build_lcp_array(&text, &suffix_array);
        let rmq = SparseTable::new(&lcp_array);

        Self {
            text,
            suffix_array,
            inverse,
            lcp: lcp_array,
            rmq,
        }
    }

    /// Length of the longest common prefix of the suffixes starting at `i`
    /// and `j`.
    ///
    /// The LCP of two suffixes equals the minimum adjacent-pair LCP between
    /// their rank positions in the suffix array, so this is one
    /// range-minimum query. O(1) per call.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not a valid suffix start.
    pub fn lcp(&self, i: usize, j: usize) -> usize {
        let n = self.text.len();
        assert!(i < n && j < n, "suffix start out of bounds");
        if i == j {
            // A suffix's common prefix with itself is its full length.
            return n - i;
        }

        let (lo, hi) = if self.inverse[i] < self.inverse[j] {
            (self.inverse[i], self.inverse[j])
        } else {
            (self.inverse[j], self.inverse[i])
        };
        self.rmq.range_min(lo, hi - 1)
    }

    /// The text the structure was built over.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Suffix starting offsets in ascending lexicographic order.
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    /// Adjacent-pair LCP values (`n - 1` entries).
    pub fn lcp_array(&self) -> &[usize] {
        &self.lcp
    }

    /// Length of the indexed text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the indexed text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// All positions where `pattern` occurs in the text, ascending.
    ///
    /// Two binary searches over the suffix array locate the block of
    /// suffixes that start with `pattern`; the k matches are then sorted
    /// into text order.
    ///
    /// Time complexity: O(m log n + k log k) for an m-byte pattern with k
    /// occurrences.
    pub fn find(&self, pattern: &[u8]) -> Vec<usize> {
        if pattern.is_empty() || pattern.len() > self.text.len() {
            return Vec::new();
        }

        let n = self.text.len();
        let m = pattern.len();
        let lo = self
            .suffix_array
            .partition_point(|&start| &self.text[start..] < pattern);
        let hi = self.suffix_array.partition_point(|&start| {
            let end = (start + m).min(n);
            &self.text[start..end] <= pattern
        });

        let mut positions = self.suffix_array[lo..hi].to_vec();
        positions.sort_unstable();
        positions
    }

    /// Maximal suffix-array intervals whose suffixes share a prefix of at
    /// least `min_len` bytes.
    ///
    /// Returns `(start, end, lcp)` triples where `start..=end` indexes the
    /// suffix array and `lcp` is the shared-prefix length of the interval.
    /// Every repeated substring of the text of length >= `min_len` shows up
    /// as (a prefix of) one of these intervals.
    pub fn repeated_intervals(&self, min_len: usize) -> Vec<(usize, usize, usize)> {
        if self.lcp.is_empty() {
            return Vec::new();
        }

        let mut intervals = Vec::new();
        let mut stack: Vec<(usize, usize)> = Vec::new(); // (interval start, shared length)

        for (i, &lcp_value) in self.lcp.iter().enumerate() {
            let mut start = i;

            while !stack.is_empty() && stack.last().unwrap().1 > lcp_value {
                let (prev_start, prev_lcp) = stack.pop().unwrap();
                if prev_lcp >= min_len {
                    intervals.push((prev_start, i, prev_lcp));
                }
                start = prev_start;
            }

            if stack.is_empty() || stack.last().unwrap().1 < lcp_value {
                stack.push((start, lcp_value));
            }
        }

        // Intervals still open at the end run through the last suffix.
        let last = self.lcp.len();
        while let Some((start, lcp_value)) = stack.pop() {
            if lcp_value >= min_len {
                intervals.push((start, last, lcp_value));
            }
        }

        intervals
    }
}
