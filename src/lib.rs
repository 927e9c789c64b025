//! # taxpub
//!
//! Metadata extraction for TaxPub/JATS scholarly-article XML.
//!
//! Biodiversity journals publish articles as TaxPub-flavored JATS XML. This
//! library parses such documents and pulls out bibliographic metadata,
//! authors and affiliations, proceedings details, taxonomic names, Darwin
//! Core occurrence records, figures and formatted reference citations.
//!
//! ## Quick Start
//!
//! ```no_run
//! use taxpub::{extract, parse_file};
//!
//! fn main() -> taxpub::Result<()> {
//!     let doc = parse_file("zookeys.686.11711.xml")?;
//!
//!     println!("{}", extract::title(&doc)?);
//!     for reference in extract::references(&doc)? {
//!         println!("{}", reference.full_citation);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Normalized text**: whitespace, Unicode and invisible-character cleanup
//!   on every extracted string
//! - **Ranked taxon names**: deduplicated `tp:taxon-name` records
//! - **Citations**: element and mixed citations formatted consistently
//! - **Parallel extraction**: independent extractors run on Rayon
//! - **Remote loading**: fetch articles over HTTP(S) with the `async` feature

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_xml, XmlFormat};
pub use error::{Error, Result};
pub use extract::ExtractOptions;
pub use model::{
    Article, Author, ConferenceInfo, Document, Figure, Graphic, Node, NodeId, Occurrence, Path,
    Reference, ReferenceAuthor, TaxonName,
};
pub use normalize::{clean_text, expand_doi};
pub use parser::{ErrorMode, ParseOptions, XmlParser};
pub use render::JsonFormat;
pub use source::{load, load_with_options, Source};

#[cfg(feature = "async")]
pub use source::{load_async, load_async_with_options};

use std::io::Read;

/// Parse a TaxPub XML file into a document.
///
/// # Example
///
/// ```no_run
/// use taxpub::parse_file;
///
/// let doc = parse_file("zookeys.686.11711.xml").unwrap();
/// println!("Nodes: {}", doc.node_count());
/// ```
pub fn parse_file<P: AsRef<std::path::Path>>(path: P) -> Result<Document> {
    let parser = XmlParser::open(path)?;
    parser.parse()
}

/// Parse a TaxPub XML file with custom options.
///
/// # Example
///
/// ```no_run
/// use taxpub::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let doc = parse_file_with_options("truncated.xml", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<std::path::Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Document> {
    let parser = XmlParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a document from bytes, honoring its declared encoding.
///
/// # Example
///
/// ```
/// use taxpub::parse_bytes;
///
/// let doc = parse_bytes(b"<article><front/></article>").unwrap();
/// assert!(doc.is_loaded());
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = XmlParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a document from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = XmlParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a document from a UTF-8 string.
pub fn parse_str(text: &str) -> Result<Document> {
    parser::parse_str(text)
}

/// Parse a document from a UTF-8 string with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<Document> {
    let parser = XmlParser::from_text(text, options)?;
    parser.parse()
}

/// Parse a document from a reader.
///
/// # Example
///
/// ```no_run
/// use taxpub::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("zookeys.686.11711.xml").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = XmlParser::from_reader(reader)?;
    parser.parse()
}

/// Parse a document from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    let parser = XmlParser::from_reader_with_options(reader, options)?;
    parser.parse()
}

/// Builder for loading a document and querying it.
///
/// # Example
///
/// ```no_run
/// use taxpub::TaxPub;
///
/// let result = TaxPub::new()
///     .lenient()
///     .parse("zookeys.686.11711.xml")?;
/// println!("{}", result.doi()?);
/// println!("{}", result.to_json(taxpub::JsonFormat::Pretty)?);
/// # Ok::<(), taxpub::Error>(())
/// ```
pub struct TaxPub {
    parse_options: ParseOptions,
    extract_options: ExtractOptions,
}

impl TaxPub {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            extract_options: ExtractOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Disable parallel extraction.
    pub fn sequential(mut self) -> Self {
        self.extract_options = self.extract_options.sequential();
        self
    }

    /// Replace the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Replace the extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract_options = options;
        self
    }

    /// Parse an XML file.
    pub fn parse<P: AsRef<std::path::Path>>(self, path: P) -> Result<TaxPubResult> {
        let parser = XmlParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(TaxPubResult {
            document,
            extract_options: self.extract_options,
        })
    }

    /// Parse XML from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<TaxPubResult> {
        let parser = XmlParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(TaxPubResult {
            document,
            extract_options: self.extract_options,
        })
    }

    /// Load a local source.
    pub fn load(self, source: &Source) -> Result<TaxPubResult> {
        let document = load_with_options(source, self.parse_options)?;
        Ok(TaxPubResult {
            document,
            extract_options: self.extract_options,
        })
    }

    /// Load a local or remote source.
    #[cfg(feature = "async")]
    pub async fn load_async(self, source: &Source) -> Result<TaxPubResult> {
        let document = load_async_with_options(source, self.parse_options).await?;
        Ok(TaxPubResult {
            document,
            extract_options: self.extract_options,
        })
    }
}

impl Default for TaxPub {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document with extraction accessors.
pub struct TaxPubResult {
    /// The parsed document
    pub document: Document,
    extract_options: ExtractOptions,
}

impl TaxPubResult {
    /// Wrap an already-parsed document.
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            extract_options: ExtractOptions::default(),
        }
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Article DOI as a resolver URL.
    pub fn doi(&self) -> Result<String> {
        extract::doi(&self.document)
    }

    /// Article title.
    pub fn title(&self) -> Result<String> {
        extract::title(&self.document)
    }

    /// Abstract text.
    pub fn abstract_text(&self) -> Result<String> {
        extract::abstract_text(&self.document)
    }

    /// JATS article type.
    pub fn article_type(&self) -> Result<String> {
        extract::article_type(&self.document)
    }

    /// Keywords.
    pub fn keywords(&self) -> Result<Vec<String>> {
        extract::keywords(&self.document)
    }

    /// Corresponding author line.
    pub fn corresponding_author(&self) -> Result<String> {
        extract::corresponding_author(&self.document)
    }

    /// All text content, normalized.
    pub fn content(&self) -> Result<String> {
        extract::content(&self.document)
    }

    /// Authors with affiliations.
    pub fn authors(&self) -> Result<Vec<Author>> {
        extract::authors(&self.document)
    }

    /// Conference details.
    pub fn conference(&self) -> Result<ConferenceInfo> {
        extract::conference(&self.document)
    }

    /// Proceedings session label.
    pub fn conference_part(&self) -> Result<String> {
        extract::conference_part(&self.document)
    }

    /// Presenting author of a proceedings paper.
    pub fn presenting_author(&self) -> Result<String> {
        extract::presenting_author(&self.document)
    }

    /// Deduplicated taxon names.
    pub fn taxa(&self) -> Result<Vec<TaxonName>> {
        extract::taxa(&self.document)
    }

    /// Taxon names as strings.
    pub fn scientific_names(&self) -> Result<Vec<String>> {
        extract::scientific_names(&self.document)
    }

    /// Occurrence records.
    pub fn occurrences(&self) -> Result<Vec<Occurrence>> {
        extract::occurrences(&self.document)
    }

    /// Figures.
    pub fn figures(&self) -> Result<Vec<Figure>> {
        extract::figures(&self.document)
    }

    /// Cited references.
    pub fn references(&self) -> Result<Vec<Reference>> {
        extract::references(&self.document)
    }

    /// Every field at once.
    pub fn article(&self) -> Result<Article> {
        extract::article(&self.document, &self.extract_options)
    }

    /// The full article as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.article()?, format)
    }

    /// A plain-text summary of the article.
    pub fn to_text(&self) -> Result<String> {
        Ok(render::to_text(&self.article()?))
    }
}
