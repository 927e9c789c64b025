//! Single-valued article fields and keywords.

use super::{clean_text_at, raw_text};
use crate::error::Result;
use crate::model::{Document, Path};
use crate::normalize::{chomp, clean_text, expand_doi};

const CORRESPONDING_LABEL: &str = "Corresponding author: ";

/// Article DOI as a resolver URL, or empty.
pub fn doi(doc: &Document) -> Result<String> {
    doc.ensure_loaded()?;
    let doi = clean_text_at(doc.root(), "//article-meta/article-id[@pub-id-type='doi']")?;
    Ok(expand_doi(&doi))
}

/// Article title.
pub fn title(doc: &Document) -> Result<String> {
    doc.ensure_loaded()?;
    clean_text_at(doc.root(), "//article-meta/title-group/article-title")
}

/// Abstract, including its heading when the source has one.
pub fn abstract_text(doc: &Document) -> Result<String> {
    doc.ensure_loaded()?;
    clean_text_at(doc.root(), "//article-meta/abstract")
}

/// JATS article type of the root element, e.g. "research-article".
pub fn article_type(doc: &Document) -> Result<String> {
    doc.ensure_loaded()?;
    Ok(doc
        .root_element()
        .and_then(|root| root.attribute("article-type"))
        .map(clean_text)
        .unwrap_or_default())
}

/// Keywords in source order.
pub fn keywords(doc: &Document) -> Result<Vec<String>> {
    doc.ensure_loaded()?;
    let path = Path::parse("//article-meta/kwd-group/kwd")?;
    Ok(doc
        .select(&path)
        .iter()
        .map(|kwd| clean_text(&kwd.text()))
        .collect())
}

/// Corresponding author line without its label, e.g.
/// "Zhe Zhao (zhaozhe@ioz.ac.cn)".
pub fn corresponding_author(doc: &Document) -> Result<String> {
    doc.ensure_loaded()?;
    let note = clean_text_at(doc.root(), "//author-notes/fn[@fn-type='corresp']/p")?;
    let note = note.replace(CORRESPONDING_LABEL, "");
    Ok(chomp(&note, '.').to_string())
}

/// The whole document text, normalized.
pub fn content(doc: &Document) -> Result<String> {
    doc.ensure_loaded()?;
    Ok(clean_text(&raw_text(doc.root(), "/*")?))
}
