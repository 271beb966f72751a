//! Boundary configuration for index construction.

use crate::types::IndexConfig;
use serde::{Deserialize, Serialize};

/// JavaScript-facing configuration. Every field is optional so callers can
/// pass a partial object, or nothing at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsIndexConfig {
    /// Construction algorithm: "dc3" (default) or "doubling"
    pub algorithm: Option<String>,
    /// Re-check the built suffix array before returning it
    pub verify: Option<bool>,
}

impl JsIndexConfig {
    /// Fill unset fields with the crate defaults.
    pub fn merge_with_defaults(&self) -> IndexConfig {
        let defaults = IndexConfig::default();
        IndexConfig {
            algorithm: self.algorithm.clone().unwrap_or(defaults.algorithm),
            verify: self.verify.unwrap_or(defaults.verify),
        }
    }
}
