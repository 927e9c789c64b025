//! Bibliographic reference records.

use serde::{Deserialize, Serialize};

/// An author of a cited work, kept as written in the reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceAuthor {
    /// Family name
    pub surname: String,

    /// Given names or initials
    pub given_names: String,
}

impl ReferenceAuthor {
    /// Create a reference author.
    pub fn new(surname: impl Into<String>, given_names: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            given_names: given_names.into(),
        }
    }
}

/// One entry of the article's reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Title of the cited article, without its trailing period
    pub title: String,

    /// Corporate author
    pub institution: String,

    /// Publication year
    pub year: String,

    /// Journal or book title, without its trailing period
    pub source: String,

    /// Volume
    pub volume: String,

    /// Page range, e.g. "33–50"
    pub pages: String,

    /// DOI as a resolver URL
    pub doi: String,

    /// Other external link
    pub uri: String,

    /// Assembled human-readable citation
    pub full_citation: String,

    /// Authors in citation order
    pub authors: Vec<ReferenceAuthor>,
}

impl Reference {
    /// Canonical external link: the DOI when present, otherwise the URI.
    pub fn link(&self) -> &str {
        if self.doi.is_empty() {
            &self.uri
        } else {
            &self.doi
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_prefers_doi() {
        let mut reference = Reference {
            uri: "http://wsc.nmbe.ch".to_string(),
            ..Default::default()
        };
        assert_eq!(reference.link(), "http://wsc.nmbe.ch");

        reference.doi = "https://doi.org/10.3897/zookeys.585.8007".to_string();
        assert_eq!(reference.link(), "https://doi.org/10.3897/zookeys.585.8007");
    }
}
