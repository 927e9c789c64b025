//! Author records with resolved affiliations.

use std::collections::HashMap;

use super::{clean_text_at, raw_text};
use crate::error::Result;
use crate::model::{Author, Document, Path};
use crate::normalize::clean_text;

/// Authors in document order.
///
/// Affiliations are resolved by following each `xref/@rid` on the
/// contributor to the `aff` element with that id and taking its address
/// line. Cross-references that point at anything other than an affiliation
/// are ignored, as are affiliations without address text.
pub fn authors(doc: &Document) -> Result<Vec<Author>> {
    doc.ensure_loaded()?;

    let addresses = affiliation_addresses(doc)?;
    let contribs = doc.select(&Path::parse("//contrib[@contrib-type='author']")?);
    let xref_path = Path::parse("xref[@rid]")?;

    let mut authors = Vec::with_capacity(contribs.len());
    for contrib in contribs {
        let affiliations = contrib
            .select(&xref_path)
            .iter()
            .filter_map(|xref| xref.attribute("rid"))
            .flat_map(str::split_whitespace)
            .filter_map(|rid| addresses.get(rid))
            .map(|address| clean_text(address))
            .filter(|address| !address.is_empty())
            .collect();

        let author = Author::new(
            clean_text_at(contrib, "name/given-names")?,
            clean_text_at(contrib, "name/surname")?,
        )
        .with_email(raw_text(contrib, "email")?)
        .with_orcid(raw_text(contrib, "uri[@content-type='orcid']")?)
        .with_affiliations(affiliations);

        authors.push(author);
    }

    Ok(authors)
}

/// Raw address-line text of every `aff` element, keyed by id.
fn affiliation_addresses(doc: &Document) -> Result<HashMap<&str, String>> {
    let addr_line = Path::parse("addr-line")?;
    let mut addresses: HashMap<&str, String> = HashMap::new();
    for aff in doc.select(&Path::parse("//aff[@id]")?) {
        if let Some(id) = aff.attribute("id") {
            addresses
                .entry(id)
                .or_default()
                .push_str(&aff.select_text(&addr_line));
        }
    }
    Ok(addresses)
}
