//! Filter profile construction from a dashboard URL.
//!
//! Projects the query string of a parsed URL into an ordered map of
//! normalized filter keys to value lists, ready for rendering.

use crate::classify::{classify_path, DashboardType};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Suffix the dashboard appends to multi-value filter keys in the query string.
const IN_SUFFIX: &str = "~in";

/// Failure to turn an input string into a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The input string is not a syntactically valid URL.
    #[error("invalid URL: {0}")]
    Parse(#[from] url::ParseError),
}

/// Normalized, labeled collection of filters plus the dashboard type.
///
/// `filters` preserves first-seen query-string order so the rendered report
/// is deterministic; values within a key preserve comma-split order.
#[derive(Debug, Clone, Serialize)]
pub struct FilterProfile {
    pub dashboard_type: DashboardType,
    pub filters: IndexMap<String, Vec<String>>,
}

impl FilterProfile {
    /// Parses `input` as a URL and projects its query string into a profile.
    pub fn from_url_str(input: &str) -> Result<Self, ProfileError> {
        let parsed = Url::parse(input)?;
        Ok(Self::from_parsed(&parsed))
    }

    /// Builds a profile from an already-parsed URL.
    ///
    /// Keys are normalized by stripping one trailing `~in`. For repeated
    /// keys the first value wins; later occurrences are ignored. The first
    /// value is comma-split into the stored sequence, keeping empty
    /// segments, so every stored sequence has at least one element.
    pub fn from_parsed(url: &Url) -> Self {
        let dashboard_type = classify_path(url.path());

        let mut filters: IndexMap<String, Vec<String>> = IndexMap::new();
        for (key, value) in url.query_pairs() {
            let normalized = normalize_key(&key);
            if filters.contains_key(normalized) {
                continue;
            }
            let values = value.split(',').map(str::to_string).collect();
            filters.insert(normalized.to_string(), values);
        }

        Self {
            dashboard_type,
            filters,
        }
    }
}

/// Strips one trailing `~in` suffix if present; no other normalization.
fn normalize_key(key: &str) -> &str {
    key.strip_suffix(IN_SUFFIX).unwrap_or(key)
}
