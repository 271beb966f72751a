//! LCP array construction (Kasai's algorithm) and the inverse suffix array.

/// Invert a suffix array: `inverse[sa[k]] = k`.
///
/// Maps a suffix's starting offset to its rank position in the suffix
/// array. O(n).
pub fn inverse_suffix_array(sa: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; sa.len()];
    for (rank, &start) in sa.iter().enumerate() {
        inverse[start] = rank;
    }
    inverse
}

/// Build the LCP array with Kasai's algorithm.
///
/// `lcp[k]` is the longest-common-prefix length of the suffixes starting at
/// `sa[k]` and `sa[k + 1]`, so the result holds `n - 1` entries.
///
/// Iterates the text in position order carrying the running prefix length
/// `h`: moving from position `i` to `i + 1` can shrink the match by at most
/// one character, so `h` is decremented instead of recomputed, which bounds
/// the total character comparisons.
///
/// Time complexity: O(n)
/// Space complexity: O(n) for the inverse suffix array
///
/// # Panics
///
/// Panics if `sa.len() != text.len()`.
pub fn build_lcp_array(text: &[u8], sa: &[usize]) -> Vec<usize> {
    let n = text.len();
    assert_eq!(
        sa.len(),
        n,
        "suffix array length {} does not match text length {}",
        sa.len(),
        n
    );
    if n <= 1 {
        return Vec::new();
    }

    let inverse = inverse_suffix_array(sa);
    let mut lcp = vec![0usize; n - 1];
    let mut h = 0usize;

    for i in 0..n {
        let pos = inverse[i];
        if pos == n - 1 {
            // The lexicographically last suffix has no right neighbor. The
            // inverse is a bijection, so this branch runs exactly once.
            h = 0;
            continue;
        }

        let j = sa[pos + 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }
        lcp[pos] = h;

        if h > 0 {
            h -= 1;
        }
    }

    lcp
}
