//! Proceedings conference metadata.

use serde::{Deserialize, Serialize};

/// Conference details of a proceedings paper.
///
/// Journal articles have no conference section and get the empty record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceInfo {
    /// Whether the document has a `conference` element, even an empty one
    #[serde(default)]
    pub present: bool,

    /// Conference dates, e.g. "1-6 October 2017"
    pub date: String,

    /// Full conference name
    pub name: String,

    /// Short name, e.g. "TDWG 2017"
    pub acronym: String,

    /// Venue
    pub location: String,

    /// Conference theme
    pub theme: String,

    /// Session (conference part) the paper was presented in
    pub session: String,

    /// Presenting author
    pub presenter: String,
}

impl ConferenceInfo {
    /// Whether this is the empty record returned for non-proceedings documents.
    pub fn is_empty(&self) -> bool {
        !self.present
    }
}
