//! Suffix Index Core - suffix array construction and LCP queries
//!
//! This is the WebAssembly core for the suffix index library. It builds
//! suffix arrays (prefix doubling or linear-time DC3), derives LCP arrays
//! with Kasai's algorithm, and answers longest-common-prefix and substring
//! queries over a fixed byte text.
//!
//! # Example (from JavaScript)
//!
//! ```javascript
//! import { initWasm, LcpIndex } from '@suffix-index/sdk';
//!
//! await initWasm();
//! const text = new TextEncoder().encode('banana');
//! const index = new LcpIndex(text, {});
//! index.lcp(1, 3); // 3
//! index.find(new TextEncoder().encode('ana')); // [1, 3]
//! ```

pub mod config;
pub mod counting_sort;
pub mod dc3;
pub mod doubling;
pub mod lcp;
pub mod querier;
pub mod rmq;
pub mod types;

use config::JsIndexConfig;
use types::{IndexConfig, IndexStats, ALGORITHM_DC3, ALGORITHM_DOUBLING};
use wasm_bindgen::prelude::*;

pub use dc3::build_suffix_array as build_suffix_array_dc3;
pub use doubling::build_suffix_array as build_suffix_array_doubling;
pub use lcp::{build_lcp_array, inverse_suffix_array};
pub use querier::LcpQuerier;
pub use rmq::SparseTable;

/// Initialize panic hook for better error messages in WASM.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Build an invalid-argument error for the JS boundary.
fn invalid_argument(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

/// Parse an optional JS config object into a full configuration.
fn parse_config(config: JsValue) -> Result<IndexConfig, JsValue> {
    let js_config: JsIndexConfig = if config.is_undefined() || config.is_null() {
        JsIndexConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| invalid_argument(&e.to_string()))?
    };
    Ok(js_config.merge_with_defaults())
}

/// Reject texts whose offsets cannot round-trip through the u32 boundary.
fn check_text_length(text: &[u8]) -> Result<(), String> {
    if text.len() > u32::MAX as usize {
        return Err(format!(
            "text of {} bytes exceeds the 32-bit offset limit",
            text.len()
        ));
    }
    Ok(())
}

/// Build a suffix array with the configured algorithm, optionally
/// re-validating the result.
fn build_with(text: &[u8], config: &IndexConfig) -> Result<Vec<usize>, String> {
    let sa = match config.algorithm.as_str() {
        ALGORITHM_DC3 => dc3::build_suffix_array(text),
        ALGORITHM_DOUBLING => doubling::build_suffix_array(text),
        other => return Err(format!("unknown suffix array algorithm: {}", other)),
    };

    if config.verify
        && !(types::is_permutation(&sa, text.len()) && types::is_sorted_suffix_order(text, &sa))
    {
        return Err("suffix array verification failed".to_string());
    }

    Ok(sa)
}

/// Internal index constructor shared by the boundary and the native tests.
fn build_index_internal(text: &[u8], config: &IndexConfig) -> Result<LcpIndex, String> {
    check_text_length(text)?;
    let sa = build_with(text, config)?;
    Ok(LcpIndex {
        querier: LcpQuerier::new(text.to_vec(), sa),
        algorithm: config.algorithm.clone(),
    })
}

/// Build the suffix array of `text`.
///
/// # Arguments
///
/// * `text` - The text bytes (Uint8Array from JS)
/// * `config` - Optional configuration (JsValue representing JsIndexConfig)
///
/// # Returns
///
/// The suffix starting offsets in ascending lexicographic order.
#[wasm_bindgen]
pub fn suffix_array(text: &[u8], config: JsValue) -> Result<Vec<u32>, JsValue> {
    let config = parse_config(config)?;
    check_text_length(text).map_err(|e| invalid_argument(&e))?;
    let sa = build_with(text, &config).map_err(|e| invalid_argument(&e))?;
    Ok(sa.into_iter().map(|start| start as u32).collect())
}

/// Build the LCP array for `text` and its suffix array.
///
/// Validates that `suffix_array` is a permutation of the text's offsets
/// before entering the linear-time construction.
#[wasm_bindgen]
pub fn lcp_array(text: &[u8], suffix_array: &[u32]) -> Result<Vec<u32>, JsValue> {
    check_text_length(text).map_err(|e| invalid_argument(&e))?;
    if suffix_array.len() != text.len() {
        return Err(invalid_argument(&format!(
            "suffix array length {} does not match text length {}",
            suffix_array.len(),
            text.len()
        )));
    }

    let sa: Vec<usize> = suffix_array.iter().map(|&start| start as usize).collect();
    if !types::is_permutation(&sa, text.len()) {
        return Err(invalid_argument(
            "suffix array is not a permutation of the text offsets",
        ));
    }

    let lcp = lcp::build_lcp_array(text, &sa);
    Ok(lcp.into_iter().map(|value| value as u32).collect())
}

/// Prebuilt index answering LCP and substring queries over one text.
#[wasm_bindgen]
#[derive(Debug)]
pub struct LcpIndex {
    querier: LcpQuerier,
    algorithm: String,
}

#[wasm_bindgen]
impl LcpIndex {
    /// Build an index over `text`.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &[u8], config: JsValue) -> Result<LcpIndex, JsValue> {
        let config = parse_config(config)?;
        build_index_internal(text, &config).map_err(|e| invalid_argument(&e))
    }

    /// Longest-common-prefix length of the suffixes starting at `i` and
    /// `j`.
    pub fn lcp(&self, i: u32, j: u32) -> Result<u32, JsValue> {
        let n = self.querier.len();
        let (i, j) = (i as usize, j as usize);
        if i >= n || j >= n {
            return Err(invalid_argument(&format!(
                "suffix starts ({}, {}) out of range for text of length {}",
                i, j, n
            )));
        }
        Ok(self.querier.lcp(i, j) as u32)
    }

    /// Positions of all occurrences of `pattern`, in ascending text order.
    pub fn find(&self, pattern: &[u8]) -> Vec<u32> {
        self.querier
            .find(pattern)
            .into_iter()
            .map(|position| position as u32)
            .collect()
    }

    /// Number of occurrences of `pattern`.
    pub fn count(&self, pattern: &[u8]) -> u32 {
        self.querier.find(pattern).len() as u32
    }

    /// Length of the indexed text.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> u32 {
        self.querier.len() as u32
    }

    /// Get the suffix array as a JS array.
    #[wasm_bindgen(js_name = getSuffixArray)]
    pub fn get_suffix_array(&self) -> Vec<u32> {
        self.querier
            .suffix_array()
            .iter()
            .map(|&start| start as u32)
            .collect()
    }

    /// Get the adjacent-pair LCP array as a JS array.
    #[wasm_bindgen(js_name = getLcpArray)]
    pub fn get_lcp_array(&self) -> Vec<u32> {
        self.querier
            .lcp_array()
            .iter()
            .map(|&value| value as u32)
            .collect()
    }

    /// Metadata about this index.
    pub fn stats(&self) -> IndexStats {
        let text = self.querier.text();
        let mut seen = [false; 256];
        let mut distinct_bytes = 0;
        for &byte in text {
            if !seen[byte as usize] {
                seen[byte as usize] = true;
                distinct_bytes += 1;
            }
        }

        IndexStats {
            text_length: text.len(),
            suffix_count: self.querier.suffix_array().len(),
            max_lcp: self.querier.lcp_array().iter().copied().max().unwrap_or(0),
            distinct_bytes,
            algorithm: self.algorithm.clone(),
        }
    }
}

/// Enumerate repeated substrings of `text` without keeping the index.
///
/// Useful for analysis before deciding what to query. Returns an array of
/// `{ pattern, length, count, positions }` objects, one per maximal group
/// of suffixes sharing a prefix of at least `min_len` bytes.
#[wasm_bindgen]
pub fn repeated_patterns(
    text: &[u8],
    min_len: usize,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    let index = build_index_internal(text, &config).map_err(|e| invalid_argument(&e))?;

    let result: Vec<serde_json::Value> = index
        .querier
        .repeated_intervals(min_len)
        .iter()
        .map(|&(start, end, length)| {
            let first = index.querier.suffix_array()[start];
            serde_json::json!({
                "pattern": index.querier.text()[first..first + length].to_vec(),
                "length": length,
                "count": end - start + 1,
                "positions": index.querier.suffix_array()[start..=end].to_vec(),
            })
        })
        .collect();

    serde_wasm_bindgen::to_value(&result).map_err(|e| invalid_argument(&e.to_string()))
}

/// Get version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
