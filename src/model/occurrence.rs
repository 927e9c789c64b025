//! Darwin Core occurrence records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One material-examined entry, keyed by Darwin Core term
/// (`catalogNumber`, `decimalLatitude`, ...).
///
/// Only terms tagged in the source are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Occurrence {
    terms: IndexMap<String, String>,
}

impl Occurrence {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a term value. A repeated term overwrites the earlier value.
    pub fn set(&mut self, term: impl Into<String>, value: impl Into<String>) {
        self.terms.insert(term.into(), value.into());
    }

    /// Value of a term.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.terms.get(term).map(String::as_str)
    }

    /// Terms and values in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of tagged terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the list item carried no tagged content.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Occurrence {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut occurrence = Self::new();
        for (term, value) in iter {
            occurrence.set(term, value);
        }
        occurrence
    }
}
