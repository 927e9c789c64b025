//! Taxonomic names from TaxPub `tp:taxon-name` markup.

use indexmap::IndexSet;

use crate::error::Result;
use crate::model::{Document, Node, Path, TaxonName};

const RANK_ATTRIBUTE: &str = "taxon-name-part-type";
const REGISTERED_ATTRIBUTE: &str = "reg";

/// Distinct ranked names in order of first occurrence.
///
/// Each `tp:taxon-name` contributes one record built from its direct
/// children that carry a rank. A child's `reg` value, when present, is used
/// instead of its text. A name without ranked children still counts, as the
/// empty record.
pub fn taxa(doc: &Document) -> Result<Vec<TaxonName>> {
    doc.ensure_loaded()?;

    let mut names: IndexSet<TaxonName> = IndexSet::new();
    for taxon in doc.select(&Path::parse("//tp:taxon-name")?) {
        names.insert(ranked_parts(taxon));
    }

    log::debug!("Found {} distinct taxon names", names.len());
    Ok(names.into_iter().collect())
}

/// Distinct names rendered as space-joined fragments, e.g.
/// "Longicoelotes kulianganus". The empty record is skipped.
pub fn scientific_names(doc: &Document) -> Result<Vec<String>> {
    Ok(taxa(doc)?
        .iter()
        .filter(|name| !name.is_empty())
        .map(TaxonName::display)
        .collect())
}

fn ranked_parts(taxon: Node<'_>) -> TaxonName {
    let mut name = TaxonName::new();
    for part in taxon.elements() {
        let Some(rank) = part.attribute(RANK_ATTRIBUTE) else {
            continue;
        };
        match part.attribute(REGISTERED_ATTRIBUTE) {
            Some(registered) => name.insert(rank, registered),
            None => name.insert(rank, part.text()),
        }
    }
    name
}
