//! Lexical URL features.
//!
//! Standalone utility: these work on raw URL strings and are not the columns
//! of the training CSV. All functions are total; any string, including the
//! empty one, yields a value.
//!
//! The IP and https checks are syntactic only: `999.999.999.999` counts as an
//! IP and `httpsfoo` counts as https.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

// Optional scheme, then a dotted quad of 1-3 digit groups. Unanchored.
static IP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?://)?(\d{1,3}\.){3}\d{1,3}").unwrap());

/// Features of a single URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureVector {
    pub url_length: i64,
    pub dot_count: i64,
    pub has_ip: i64,
    pub has_https: i64,
}

impl FeatureVector {
    /// Feature name → value.
    pub fn to_map(&self) -> BTreeMap<&'static str, i64> {
        BTreeMap::from([
            ("url_length", self.url_length),
            ("dot_count", self.dot_count),
            ("has_ip", self.has_ip),
            ("has_https", self.has_https),
        ])
    }
}

/// Number of characters, untrimmed and undecoded.
pub fn url_length(url: &str) -> i64 {
    url.chars().count() as i64
}

pub fn count_dots(url: &str) -> i64 {
    url.matches('.').count() as i64
}

/// 1 if the string contains something shaped like an IPv4 literal.
pub fn has_ip_address(url: &str) -> i64 {
    i64::from(IP_PATTERN.is_match(url))
}

/// 1 if the string begins with `https`. `://` is not required.
pub fn has_https(url: &str) -> i64 {
    i64::from(url.starts_with("https"))
}

pub fn extract_features(url: &str) -> FeatureVector {
    FeatureVector {
        url_length: url_length(url),
        dot_count: count_dots(url),
        has_ip: has_ip_address(url),
        has_https: has_https(url),
    }
}
