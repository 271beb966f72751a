//! Core types and validation helpers for the suffix index.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Name of the linear-time DC3/skew builder.
pub const ALGORITHM_DC3: &str = "dc3";
/// Name of the prefix-doubling builder.
pub const ALGORITHM_DOUBLING: &str = "doubling";

/// Configuration for index construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[wasm_bindgen]
pub struct IndexConfig {
    /// Construction algorithm: "dc3" or "doubling"
    #[wasm_bindgen(skip)]
    pub algorithm: String,
    /// Re-check the built suffix array (permutation + sorted order) before
    /// handing it out
    pub verify: bool,
}

#[wasm_bindgen]
impl IndexConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn algorithm(&self) -> String {
        self.algorithm.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_algorithm(&mut self, algorithm: String) {
        self.algorithm = algorithm;
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            algorithm: ALGORITHM_DC3.to_string(),
            verify: false,
        }
    }
}

/// Metadata describing a built index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[wasm_bindgen]
pub struct IndexStats {
    /// Number of bytes in the indexed text
    pub text_length: usize,
    /// Number of suffixes in the suffix array (equals text_length)
    pub suffix_count: usize,
    /// Largest adjacent-pair LCP value (0 for texts shorter than 2 bytes)
    pub max_lcp: usize,
    /// Number of distinct byte values in the text
    pub distinct_bytes: usize,
    /// Algorithm that built the suffix array
    #[wasm_bindgen(skip)]
    pub algorithm: String,
}

#[wasm_bindgen]
impl IndexStats {
    /// Algorithm that built the suffix array.
    #[wasm_bindgen(getter)]
    pub fn algorithm(&self) -> String {
        self.algorithm.clone()
    }
}

/// Length of the longest common prefix of the suffixes at `i` and `j`, by
/// direct character comparison.
#[inline]
pub fn common_prefix_len(text: &[u8], i: usize, j: usize) -> usize {
    text[i..]
        .iter()
        .zip(&text[j..])
        .take_while(|(a, b)| a == b)
        .count()
}

/// Check that `sa` is a permutation of `[0, n)`.
pub fn is_permutation(sa: &[usize], n: usize) -> bool {
    if sa.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &start in sa {
        if start >= n || seen[start] {
            return false;
        }
        seen[start] = true;
    }
    true
}

/// Check that consecutive entries of `sa` are in ascending suffix order.
pub fn is_sorted_suffix_order(text: &[u8], sa: &[usize]) -> bool {
    sa.windows(2).all(|pair| text[pair[0]..] <= text[pair[1]..])
}
