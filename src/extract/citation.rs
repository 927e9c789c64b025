//! Human-readable citation strings.

use crate::model::{Reference, ReferenceAuthor};
use crate::normalize::clean_text;

const COMPONENT_SEPARATOR: &str = ". ";

/// Render an author list as "Surname, G, G Surname, G Surname".
///
/// Only the first author is inverted. Name parts are normalized here since
/// `ReferenceAuthor` keeps them raw. Empty name parts are left out, and
/// authors with neither part are skipped.
pub fn format_authors(authors: &[ReferenceAuthor]) -> String {
    authors
        .iter()
        .enumerate()
        .map(|(i, author)| {
            let surname = clean_text(&author.surname);
            let given_names = clean_text(&author.given_names);
            let parts = if i == 0 {
                [surname.as_str(), given_names.as_str()]
            } else {
                [given_names.as_str(), surname.as_str()]
            };
            let separator = if i == 0 { ", " } else { " " };
            join_non_empty(&parts, separator)
        })
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Assemble the citation string for a reference.
///
/// Components appear in the order institution, authors, year, title,
/// source with volume and pages, link. Empty components are dropped before
/// joining with ". ", so the result never contains an empty segment.
///
/// # Example
///
/// ```
/// use taxpub::extract::format_citation;
/// use taxpub::model::Reference;
///
/// let reference = Reference {
///     institution: "World Spider Catalog".to_string(),
///     year: "2017".to_string(),
///     title: "World Spider Catalog".to_string(),
///     uri: "http://wsc.nmbe.ch".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(
///     format_citation(&reference),
///     "World Spider Catalog. 2017. World Spider Catalog. http://wsc.nmbe.ch"
/// );
/// ```
pub fn format_citation(reference: &Reference) -> String {
    let location = join_non_empty(&[reference.volume.as_str(), reference.pages.as_str()], ": ");
    let published_in = join_non_empty(&[reference.source.as_str(), location.as_str()], " ");
    let authors = format_authors(&reference.authors);

    join_non_empty(
        &[
            reference.institution.as_str(),
            authors.as_str(),
            reference.year.as_str(),
            reference.title.as_str(),
            published_in.as_str(),
            reference.link(),
        ],
        COMPONENT_SEPARATOR,
    )
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zhao_li() -> Reference {
        Reference {
            title: "Papiliocoelotes gen. n., a new genus of communal spiders".to_string(),
            year: "2016".to_string(),
            source: "ZooKeys".to_string(),
            volume: "585".to_string(),
            pages: "33\u{2013}50".to_string(),
            doi: "https://doi.org/10.3897/zookeys.585.8007".to_string(),
            authors: vec![
                ReferenceAuthor::new("Zhao", "Z"),
                ReferenceAuthor::new("Li", "S"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_format_authors() {
        let authors = vec![
            ReferenceAuthor::new("Wang", "XP"),
            ReferenceAuthor::new("Ono", "H"),
            ReferenceAuthor::new("Tanikawa", "A"),
        ];
        assert_eq!(format_authors(&authors), "Wang, XP, H Ono, A Tanikawa");
        assert_eq!(format_authors(&[]), "");
    }

    #[test]
    fn test_format_authors_missing_parts() {
        let authors = vec![
            ReferenceAuthor::new("Chamberlin", ""),
            ReferenceAuthor::new("", ""),
            ReferenceAuthor::new("Ivie", "W"),
        ];
        assert_eq!(format_authors(&authors), "Chamberlin, W Ivie");
    }

    #[test]
    fn test_format_authors_cleans_raw_names() {
        let authors = vec![
            ReferenceAuthor::new(" Shorthouse\n", "David\n          Peter"),
            ReferenceAuthor::new("Page", "  Roderic\tD"),
        ];
        assert_eq!(
            format_authors(&authors),
            "Shorthouse, David Peter, Roderic D Page"
        );
    }

    #[test]
    fn test_journal_article() {
        assert_eq!(
            format_citation(&zhao_li()),
            "Zhao, Z, S Li. 2016. Papiliocoelotes gen. n., a new genus of communal spiders. \
             ZooKeys 585: 33\u{2013}50. https://doi.org/10.3897/zookeys.585.8007"
        );
    }

    #[test]
    fn test_uri_used_without_doi() {
        let reference = Reference {
            doi: String::new(),
            uri: "http://example.org/paper".to_string(),
            ..zhao_li()
        };
        assert!(format_citation(&reference).ends_with(". http://example.org/paper"));
    }

    #[test]
    fn test_source_without_volume() {
        let reference = Reference {
            volume: String::new(),
            pages: String::new(),
            ..zhao_li()
        };
        assert!(format_citation(&reference).contains(". ZooKeys. https://"));
    }

    #[test]
    fn test_never_emits_empty_components() {
        let samples = [
            Reference::default(),
            Reference {
                year: "1999".to_string(),
                ..Default::default()
            },
            Reference {
                volume: "12".to_string(),
                uri: "http://a.b".to_string(),
                ..Default::default()
            },
            zhao_li(),
        ];
        for reference in &samples {
            let citation = format_citation(reference);
            assert!(!citation.contains(". . "), "{}", citation);
            assert!(!citation.starts_with(". "), "{}", citation);
            assert!(!citation.ends_with(". "), "{}", citation);
        }
        assert_eq!(format_citation(&Reference::default()), "");
    }
}
