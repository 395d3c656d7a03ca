use std::collections::BTreeMap;

use crate::foundation::error::QualityResult;

/// Flat `name -> value` strategy parameters, supplied once when a strategy is created.
///
/// Keys are free-form; strategies document the ones they read (for example
/// `scene_measure` or `scale_min:<measure>`). Values are kept as strings and only
/// interpreted by the strategy that consumes them.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StrategyParams {
    values: BTreeMap<String, String>,
}

impl StrategyParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, value)` pairs. Later pairs replace earlier ones with the same key.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut out = Self::new();
        for (k, v) in pairs {
            out.set(k, v);
        }
        out
    }

    /// Parse a JSON object of string values.
    pub fn from_json_str(s: &str) -> QualityResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Insert or replace a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Lookup with a fallback used only when `key` is absent.
    pub fn fetch_name_value_def<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Lookup parsed as a float.
    ///
    /// `default` applies only when the key is absent. A present but malformed value is
    /// parsed permissively (see [`parse_float_prefix`]) and never rejected.
    pub fn fetch_f64_def(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            Some(raw) => parse_float_prefix(raw),
            None => default,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse the longest leading float literal of `raw`, after leading whitespace.
///
/// Mirrors C `atof`: `"0.25abc"` yields `0.25`, and input with no numeric prefix yields `0.0`.
pub fn parse_float_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let mut end = s.len();
    while end > 0 {
        if s.is_char_boundary(end) {
            if let Ok(v) = s[..end].parse::<f64>() {
                return v;
            }
        }
        end -= 1;
    }
    0.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/params.rs"]
mod tests;
