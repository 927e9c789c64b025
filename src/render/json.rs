//! JSON rendering for extracted records.

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any extracted record (an [`Article`](crate::model::Article),
/// a list of references, a single author, ...) to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, Author, TaxonName};

    #[test]
    fn test_to_json_pretty() {
        let article = Article {
            title: "A new species of Longicoelotes".to_string(),
            abstract_text: "Abstract".to_string(),
            ..Default::default()
        };

        let json = to_json(&article, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"abstract\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let authors = vec![Author::new("Xiaoqing", "Zhang")];
        let json = to_json(&authors, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with('['));
    }

    #[test]
    fn test_taxon_is_a_plain_object() {
        let taxon = TaxonName::new()
            .with("genus", "Longicoelotes")
            .with("species", "kulianganus");
        assert_eq!(
            to_json(&taxon, JsonFormat::Compact).unwrap(),
            r#"{"genus":"Longicoelotes","species":"kulianganus"}"#
        );
    }
}
