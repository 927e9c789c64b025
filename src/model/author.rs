//! Article contributor records.

use serde::{Deserialize, Serialize};

/// An author of the article.
///
/// Every field is always present; missing data is an empty string or an
/// empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Given names, e.g. "David Peter"
    pub given: String,

    /// Family name
    pub surname: String,

    /// `given + " " + surname`
    pub fullname: String,

    /// Contact email, as written in the source
    pub email: String,

    /// Affiliation address lines, in cross-reference order
    pub affiliations: Vec<String>,

    /// ORCID URI
    pub orcid: String,
}

impl Author {
    /// Create an author from name parts, deriving the full name.
    pub fn new(given: impl Into<String>, surname: impl Into<String>) -> Self {
        let given = given.into();
        let surname = surname.into();
        Self {
            fullname: format!("{} {}", given, surname),
            given,
            surname,
            ..Default::default()
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the ORCID URI.
    pub fn with_orcid(mut self, orcid: impl Into<String>) -> Self {
        self.orcid = orcid.into();
        self
    }

    /// Set the affiliation lines.
    pub fn with_affiliations(mut self, affiliations: Vec<String>) -> Self {
        self.affiliations = affiliations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullname_is_derived() {
        let author = Author::new("Xiaoqing", "Zhang");
        assert_eq!(author.fullname, "Xiaoqing Zhang");
        assert_eq!(author.email, "");
        assert!(author.affiliations.is_empty());
    }

    #[test]
    fn test_serializes_every_field() {
        let author = Author::new("Fabien", "Cavière").with_email("caviere@gbif.fr");
        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(json["fullname"], "Fabien Cavière");
        assert_eq!(json["orcid"], "");
        assert_eq!(json["affiliations"], serde_json::json!([]));
    }
}
