//! Aggregate article record.

use serde::{Deserialize, Serialize};

use super::{Author, ConferenceInfo, Figure, Occurrence, Reference, TaxonName};

/// Everything the extractors can pull from one article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// DOI as a resolver URL
    pub doi: String,

    /// Article title
    pub title: String,

    /// Abstract text
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// JATS article type, e.g. "research-article"
    pub article_type: String,

    /// Keywords in source order
    pub keywords: Vec<String>,

    /// Authors in source order
    pub authors: Vec<Author>,

    /// Corresponding author line
    pub corresponding_author: String,

    /// Conference details (empty for journal articles)
    pub conference: ConferenceInfo,

    /// Deduplicated taxonomic names
    pub taxa: Vec<TaxonName>,

    /// Occurrence records
    pub occurrences: Vec<Occurrence>,

    /// Figures
    pub figures: Vec<Figure>,

    /// Cited references
    pub references: Vec<Reference>,
}

impl Article {
    /// Whether the article came from a proceedings volume.
    pub fn is_proceedings(&self) -> bool {
        !self.conference.is_empty()
    }

    /// Flat scientific names, one per non-empty taxon record.
    pub fn scientific_names(&self) -> Vec<String> {
        self.taxa
            .iter()
            .filter(|name| !name.is_empty())
            .map(TaxonName::display)
            .collect()
    }
}
