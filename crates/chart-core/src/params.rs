// File: crates/chart-core/src/params.rs
// Summary: Activation parameters decoded from a script locator's query suffix.
// Notes:
// - Parsing never fails. Pairs that are not exactly `key=value`, or that do not
//   percent-decode to UTF-8, are dropped silently.

use std::collections::BTreeMap;

use crate::error::{ChartError, Result};
use crate::types::{PARAM_ENDPOINT, PARAM_ENDPOINTS, PARAM_ID};

/// Flat key/value map built once from a locator such as
/// `histogram.js?endpoint=/fetch_hourly_histogram/3&id=hist`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptParams {
    values: BTreeMap<String, String>,
}

impl ScriptParams {
    /// Decode the query suffix of `locator`.
    ///
    /// Everything up to and including the first `?` is ignored. The rest is split
    /// on `;` or `&`; each piece must split on `=` into exactly two parts. Keys and
    /// values are percent-decoded, then `+` in the value becomes a space. Later
    /// keys overwrite earlier ones.
    pub fn parse(locator: &str) -> Self {
        let mut values = BTreeMap::new();
        let Some((_, query)) = locator.split_once('?') else {
            return Self { values };
        };

        for pair in query.split([';', '&']) {
            let parts: Vec<&str> = pair.split('=').collect();
            let [key, value] = parts.as_slice() else { continue };
            let (Ok(key), Ok(value)) = (urlencoding::decode(key), urlencoding::decode(value)) else {
                continue;
            };
            values.insert(key.into_owned(), value.replace('+', " "));
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get) but reports the absent key as an error.
    pub fn require(&self, key: &'static str) -> Result<&str> {
        self.get(key).ok_or(ChartError::MissingParameter(key))
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn endpoint(&self) -> Option<&str> { self.get(PARAM_ENDPOINT) }

    pub fn element_id(&self) -> Option<&str> { self.get(PARAM_ID) }

    /// Comma-separated `endpoints` value, trimmed, empty items skipped.
    pub fn endpoints(&self) -> Vec<String> {
        self.get(PARAM_ENDPOINTS)
            .map(split_endpoints)
            .unwrap_or_default()
    }
}

fn split_endpoints(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

impl<'a> FromIterator<(&'a str, &'a str)> for ScriptParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect(),
        }
    }
}
