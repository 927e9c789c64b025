//! Reference list extraction.
//!
//! JATS tags a cited work either as a structured `element-citation` or as
//! an inline `mixed-citation`. The two differ in where identifiers live, so
//! each reference is classified once and its fields are read through the
//! location table of its variant.

use super::{clean_text_at, format_citation, raw_text};
use crate::error::Result;
use crate::model::{Document, Node, Path, Reference, ReferenceAuthor};
use crate::normalize::{chomp, expand_doi};

/// Citation markup variant of a reference-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CitationKind {
    Element,
    Mixed,
}

/// Where a citation variant keeps its identifiers.
struct Locations {
    doi: &'static str,
    uri: &'static str,
}

impl CitationKind {
    /// Classify a `ref` element, returning the citation node.
    fn classify(reference: Node<'_>) -> Option<(Self, Node<'_>)> {
        if let Some(citation) = reference.child("element-citation") {
            return Some((Self::Element, citation));
        }
        reference
            .child("mixed-citation")
            .map(|citation| (Self::Mixed, citation))
    }

    fn locations(self) -> Locations {
        match self {
            Self::Element => Locations {
                doi: "pub-id[@pub-id-type='doi']",
                uri: "uri",
            },
            Self::Mixed => Locations {
                doi: "ext-link[@ext-link-type='doi']",
                uri: "ext-link[@ext-link-type='uri']",
            },
        }
    }
}

/// Reference-list entries in document order.
///
/// Entries without a recognized citation element are skipped.
pub fn references(doc: &Document) -> Result<Vec<Reference>> {
    doc.ensure_loaded()?;

    let entries = doc.select(&Path::parse("//ref-list/ref")?);
    let mut references = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some((kind, citation)) = CitationKind::classify(entry) else {
            log::debug!(
                "Skipping reference {} without a citation element",
                entry.attribute("id").unwrap_or("?")
            );
            continue;
        };
        references.push(reference(kind, citation)?);
    }

    Ok(references)
}

fn reference(kind: CitationKind, citation: Node<'_>) -> Result<Reference> {
    let locations = kind.locations();

    let names = Path::parse("person-group/name")?;
    let authors = citation
        .select(&names)
        .iter()
        .map(|name| -> Result<ReferenceAuthor> {
            Ok(ReferenceAuthor::new(
                raw_text(*name, "surname")?,
                raw_text(*name, "given-names")?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let first_page = clean_text_at(citation, "fpage")?;
    let last_page = clean_text_at(citation, "lpage")?;
    let pages = if first_page.is_empty() || last_page.is_empty() {
        String::new()
    } else {
        format!("{}\u{2013}{}", first_page, last_page)
    };

    let mut reference = Reference {
        title: chomp(&clean_text_at(citation, "article-title")?, '.').to_string(),
        institution: clean_text_at(citation, "institution")?,
        year: clean_text_at(citation, "year")?,
        source: chomp(&clean_text_at(citation, "source")?, '.').to_string(),
        volume: clean_text_at(citation, "volume")?,
        pages,
        doi: expand_doi(&clean_text_at(citation, locations.doi)?),
        uri: clean_text_at(citation, locations.uri)?,
        full_citation: String::new(),
        authors,
    };
    reference.full_citation = format_citation(&reference);

    Ok(reference)
}
