//! Taxonomic names broken down by rank.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A taxonomic name as a mapping from rank (genus, species, ...) to name
/// fragment.
///
/// Fragments keep the order in which their ranks were first seen, which is
/// the order used by [`display`](Self::display). Equality and hashing ignore
/// that order: two names are equal when they map the same ranks to the same
/// fragments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonName {
    parts: IndexMap<String, String>,
}

impl TaxonName {
    /// Create an empty name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fragment for a rank. Re-setting a rank keeps its position.
    pub fn insert(&mut self, rank: impl Into<String>, fragment: impl Into<String>) {
        self.parts.insert(rank.into(), fragment.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, rank: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.insert(rank, fragment);
        self
    }

    /// Fragment for a rank.
    pub fn get(&self, rank: &str) -> Option<&str> {
        self.parts.get(rank).map(String::as_str)
    }

    /// Ranks and fragments in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of ranks.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no rank was recorded.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Fragments joined by a single space, in rank-encounter order.
    ///
    /// ```
    /// use taxpub::TaxonName;
    ///
    /// let name = TaxonName::new()
    ///     .with("genus", "Longicoelotes")
    ///     .with("species", "kulianganus");
    /// assert_eq!(name.display(), "Longicoelotes kulianganus");
    /// ```
    pub fn display(&self) -> String {
        self.parts
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Rank/fragment pairs sorted by rank, the order-independent identity.
    fn canonical(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        pairs.sort_unstable();
        pairs
    }
}

impl PartialEq for TaxonName {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for TaxonName {}

impl Hash for TaxonName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}
