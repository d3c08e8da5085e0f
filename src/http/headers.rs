//! Response header injection module
//!
//! Holds the fixed set of headers every response carries: the cross-origin
//! isolation pair needed for `SharedArrayBuffer`, plus cache-busting headers
//! so the browser always refetches during development.

use hyper::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const COOP: &str = "Cross-Origin-Opener-Policy";
pub const COEP: &str = "Cross-Origin-Embedder-Policy";

#[derive(Debug, Clone)]
struct Entry {
    display: &'static str,
    name: HeaderName,
    value: HeaderValue,
}

/// Ordered, immutable set of headers applied to every response
#[derive(Debug, Clone)]
pub struct HeaderSet {
    entries: Vec<Entry>,
}

impl HeaderSet {
    /// Build the cross-origin isolation header set, in the order it is sent
    pub fn isolation() -> Self {
        let entry = |display: &'static str, name: HeaderName, value: &'static str| Entry {
            display,
            name,
            value: HeaderValue::from_static(value),
        };
        Self {
            entries: vec![
                entry(
                    COOP,
                    HeaderName::from_static("cross-origin-opener-policy"),
                    "same-origin",
                ),
                entry(
                    COEP,
                    HeaderName::from_static("cross-origin-embedder-policy"),
                    "credentialless",
                ),
                entry("Cache-Control", CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
                entry("Pragma", PRAGMA, "no-cache"),
                entry("Expires", EXPIRES, "0"),
            ],
        }
    }

    /// Set every header on `headers`, replacing any existing values
    pub fn apply(&self, headers: &mut HeaderMap) {
        for entry in &self.entries {
            headers.insert(entry.name.clone(), entry.value.clone());
        }
    }

    /// Value for `name` (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.display.eq_ignore_ascii_case(name))
            .and_then(|e| e.value.to_str().ok())
    }

    /// Iterate entries as (display name, value)
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.display, e.value.to_str().unwrap_or_default()))
    }

}

/// Serializes as a JSON object keyed by display name, insertion order kept
impl Serialize for HeaderSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
