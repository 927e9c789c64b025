//! TaxPub/JATS document parser using quick-xml.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;

use crate::detect::{decode, detect_format_from_bytes, XmlFormat};
use crate::error::{Error, Result};
use crate::model::{Document, NodeId};

use super::options::ParseOptions;

/// XML document parser.
///
/// Decodes the input according to its byte-order mark or XML declaration,
/// then builds a [`Document`] tree with quick-xml.
pub struct XmlParser {
    source: String,
    format: XmlFormat,
    options: ParseOptions,
}

impl XmlParser {
    /// Open an XML file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open an XML file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        log::debug!("Read {} bytes from {}", data.len(), path.as_ref().display());
        Self::from_bytes_with_options(&data, options)
    }

    /// Prepare a parser for raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Prepare a parser for raw bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let format = detect_format_from_bytes(data)?;
        let source = decode(data, &format).into_owned();
        Ok(Self {
            source,
            format,
            options,
        })
    }

    /// Prepare a parser for already-decoded text.
    pub fn from_text(text: impl Into<String>, options: ParseOptions) -> Result<Self> {
        let source = text.into();
        let mut format = detect_format_from_bytes(source.as_bytes())?;
        // The text is UTF-8 whatever the declaration says.
        format.encoding = encoding_rs::UTF_8;
        Ok(Self {
            source,
            format,
            options,
        })
    }

    /// Prepare a parser from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Prepare a parser from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Detected format of the input.
    pub fn format(&self) -> &XmlFormat {
        &self.format
    }

    /// Get parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Build the document tree.
    pub fn parse(&self) -> Result<Document> {
        TreeBuilder::new(&self.source, &self.options).build()
    }
}

/// Parse a UTF-8 string with default options.
///
/// # Example
///
/// ```
/// let doc = taxpub::parser::parse_str("<article><front/></article>").unwrap();
/// assert!(doc.is_loaded());
/// ```
pub fn parse_str(text: &str) -> Result<Document> {
    XmlParser::from_text(text, ParseOptions::default())?.parse()
}

/// Parse raw bytes with default options.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    XmlParser::from_bytes(data)?.parse()
}

/// Internal tree construction state.
struct TreeBuilder<'a> {
    reader: Reader<&'a [u8]>,
    options: &'a ParseOptions,
    doc: Document,
    /// Open elements, innermost last; the document node is at the bottom.
    stack: Vec<(NodeId, String)>,
}

impl<'a> TreeBuilder<'a> {
    fn new(source: &'a str, options: &'a ParseOptions) -> Self {
        let mut reader = Reader::from_str(source);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        config.expand_empty_elements = false;

        let doc = Document::new();
        let root = doc.root().id();
        Self {
            reader,
            options,
            doc,
            stack: vec![(root, String::new())],
        }
    }

    fn build(mut self) -> Result<Document> {
        loop {
            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    let (name, attributes) = self.element_parts(&e)?;
                    let parent = self.open_parent(&name)?;
                    let id = self.doc.append_element(parent, name.clone(), attributes);
                    self.stack.push((id, name));
                }
                Ok(Event::Empty(e)) => {
                    let (name, attributes) = self.element_parts(&e)?;
                    let parent = self.open_parent(&name)?;
                    self.doc.append_element(parent, name, attributes);
                }
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    self.close(&name)?;
                }
                Ok(Event::Text(e)) => {
                    let text = self.unescape_text(&e)?;
                    self.push_text(&text);
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e).into_owned();
                    self.push_text(&text);
                }
                Ok(Event::Eof) => break,
                // Declarations, comments, processing instructions, DOCTYPE
                Ok(_) => {}
                Err(e) => {
                    let position = self.reader.error_position();
                    if self.options.is_lenient() && self.doc.is_loaded() {
                        log::warn!("Stopped parsing at byte {}: {}", position, e);
                        break;
                    }
                    return Err(Error::XmlParse(format!("{} at byte {}", e, position)));
                }
            }
        }

        if self.stack.len() > 1 {
            let unclosed: Vec<&str> = self.stack[1..].iter().map(|(_, n)| n.as_str()).collect();
            if !self.options.is_lenient() {
                return Err(Error::XmlParse(format!(
                    "unexpected end of document, unclosed <{}>",
                    unclosed.join("> <")
                )));
            }
            log::warn!("Closed {} unterminated element(s) at end of document", unclosed.len());
        }

        if !self.doc.is_loaded() {
            return Err(Error::XmlParse("document has no root element".to_string()));
        }

        log::debug!("Parsed document with {} nodes", self.doc.node_count());
        Ok(self.doc)
    }

    /// The node a new element is attached to.
    ///
    /// Extra top-level elements attach under the first root in lenient mode.
    fn open_parent(&self, name: &str) -> Result<NodeId> {
        let top = self.stack[self.stack.len() - 1].0;
        if self.stack.len() > 1 {
            return Ok(top);
        }
        match self.doc.root_element() {
            None => Ok(top),
            Some(root) if self.options.is_lenient() => {
                log::warn!("Attaching extra top-level element <{}> under the root", name);
                Ok(root.id())
            }
            Some(_) => Err(Error::XmlParse(format!(
                "multiple root elements, found <{}>",
                name
            ))),
        }
    }

    fn close(&mut self, name: &str) -> Result<()> {
        let open = self.stack.iter().rposition(|(_, n)| n == name);
        match open {
            Some(pos) if pos == self.stack.len() - 1 && pos > 0 => {
                self.stack.pop();
                Ok(())
            }
            Some(pos) if pos > 0 && self.options.is_lenient() => {
                log::warn!("Closing unterminated elements inside </{}>", name);
                self.stack.truncate(pos);
                Ok(())
            }
            _ if self.options.is_lenient() => {
                log::warn!("Ignoring unmatched closing tag </{}>", name);
                Ok(())
            }
            _ => {
                let expected = self
                    .stack
                    .last()
                    .map(|(_, n)| n.as_str())
                    .filter(|n| !n.is_empty())
                    .unwrap_or("no open element");
                Err(Error::XmlParse(format!(
                    "mismatched closing tag </{}>, expected </{}>",
                    name, expected
                )))
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        // Text outside the root element is insignificant.
        if self.stack.len() == 1 {
            return;
        }
        if !self.options.keep_whitespace_text && text.trim().is_empty() {
            return;
        }
        let parent = self.stack[self.stack.len() - 1].0;
        self.doc.append_text(parent, text);
    }

    fn unescape_text<'e>(&self, e: &'e BytesText<'e>) -> Result<Cow<'e, str>> {
        match e.unescape() {
            Ok(text) => Ok(text),
            Err(err) if self.options.is_lenient() => {
                log::warn!("Keeping raw text with unresolved entity: {}", err);
                Ok(String::from_utf8_lossy(e.as_ref()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn element_parts(&self, e: &BytesStart<'_>) -> Result<(String, Vec<(String, String)>)> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let mut attributes = Vec::new();

        for attr in e.attributes().with_checks(!self.options.is_lenient()) {
            let attr = match attr {
                Ok(attr) => attr,
                Err(err) if self.options.is_lenient() => {
                    log::warn!("Skipping malformed attribute on <{}>: {}", name, err);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = match attr.unescape_value() {
                Ok(value) => value.into_owned(),
                Err(_) if self.options.is_lenient() => {
                    String::from_utf8_lossy(&attr.value).into_owned()
                }
                Err(err) => return Err(err.into()),
            };
            attributes.push((key, value));
        }

        Ok((name, attributes))
    }
}
