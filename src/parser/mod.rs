//! XML parsing module.
//!
//! Turns raw bytes into the read-only [`Document`](crate::model::Document)
//! tree the extractors query.

mod options;
mod xml_parser;

pub use options::{ErrorMode, ParseOptions};
pub use xml_parser::{parse_bytes, parse_str, XmlParser};
