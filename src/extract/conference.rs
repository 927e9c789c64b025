//! Proceedings conference metadata.

use super::clean_text_at;
use crate::error::Result;
use crate::model::{ConferenceInfo, Document, Path};

/// Conference details, or the empty record for journal articles.
///
/// The presence of a `conference` element is what marks a proceedings
/// paper.
pub fn conference(doc: &Document) -> Result<ConferenceInfo> {
    doc.ensure_loaded()?;

    let Some(conf) = doc
        .select(&Path::parse("//conference")?)
        .into_iter()
        .next()
    else {
        return Ok(ConferenceInfo::default());
    };

    Ok(ConferenceInfo {
        present: true,
        date: clean_text_at(conf, "conf-date")?,
        name: clean_text_at(conf, "conf-name")?,
        acronym: clean_text_at(conf, "conf-acronym")?,
        location: clean_text_at(conf, "conf-loc")?,
        theme: clean_text_at(conf, "conf-theme")?,
        session: conference_part(doc)?,
        presenter: presenting_author(doc)?,
    })
}

/// Session (conference part) label; empty for non-proceedings documents.
pub fn conference_part(doc: &Document) -> Result<String> {
    doc.ensure_loaded()?;
    clean_text_at(
        doc.root(),
        "//subj-group[@subj-group-type='conference-part']/subject",
    )
}

/// Presenting author paragraph; empty when the document names none.
pub fn presenting_author(doc: &Document) -> Result<String> {
    doc.ensure_loaded()?;
    clean_text_at(doc.root(), "//sec[@sec-type='Presenting author']/p")
}
