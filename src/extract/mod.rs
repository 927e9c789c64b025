//! Extractors that turn a loaded [`Document`] into plain records.
//!
//! Every extractor is a pure function of `&Document`: it checks that the
//! document is loaded, runs its path queries, normalizes the text it finds
//! and returns owned records. Missing optional content yields empty values;
//! the only error an extractor raises on its own is
//! [`Error::DocumentNotReady`](crate::Error::DocumentNotReady).
//!
//! # Example
//!
//! ```
//! use taxpub::{extract, parser::parse_str};
//!
//! let doc = parse_str(
//!     r#"<article><front><article-meta>
//!          <kwd-group><kwd>Coelotinae</kwd><kwd>taxonomy</kwd></kwd-group>
//!        </article-meta></front></article>"#,
//! )?;
//! assert_eq!(extract::keywords(&doc)?, vec!["Coelotinae", "taxonomy"]);
//! assert_eq!(extract::doi(&doc)?, "");
//! # Ok::<(), taxpub::Error>(())
//! ```

mod article;
mod authors;
mod citation;
mod conference;
mod figures;
mod metadata;
mod occurrences;
mod references;
mod taxa;

pub use article::{article, ExtractOptions};
pub use authors::authors;
pub use citation::{format_authors, format_citation};
pub use conference::{conference, conference_part, presenting_author};
pub use figures::figures;
pub use metadata::{abstract_text, article_type, content, corresponding_author, doi, keywords, title};
pub use occurrences::occurrences;
pub use references::references;
pub use taxa::{scientific_names, taxa};

use crate::error::Result;
use crate::model::{Node, Path};
use crate::normalize::clean_text;

/// Aggregated text under `expr`, relative to `node`, without normalization.
pub(crate) fn raw_text(node: Node<'_>, expr: &str) -> Result<String> {
    Ok(node.select_text(&Path::parse(expr)?))
}

/// Aggregated, normalized text under `expr`, relative to `node`.
pub(crate) fn clean_text_at(node: Node<'_>, expr: &str) -> Result<String> {
    Ok(clean_text(&raw_text(node, expr)?))
}
