//! Document tree and extracted record types.
//!
//! [`Document`] is the read-only tree every extractor queries through
//! compiled [`Path`] expressions. The remaining types are the plain records
//! the extractors return; they own their data and never borrow from the
//! document they were built from.

mod article;
mod author;
mod conference;
mod document;
mod figure;
mod occurrence;
mod path;
mod reference;
mod taxon;

pub use article::Article;
pub use author::Author;
pub use conference::ConferenceInfo;
pub use document::{Document, Node, NodeId};
pub use figure::{Figure, Graphic};
pub use occurrence::Occurrence;
pub use path::Path;
pub use reference::{Reference, ReferenceAuthor};
pub use taxon::TaxonName;
