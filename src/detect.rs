//! XML format detection and character decoding.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

use crate::error::{Error, Result};

/// XML format information read from the prolog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlFormat {
    /// XML version from the declaration (defaults to "1.0")
    pub version: String,
    /// Character encoding, from the byte-order mark or the declaration
    pub encoding: &'static Encoding,
    /// Whether the document carries an XML declaration
    pub has_declaration: bool,
}

impl std::fmt::Display for XmlFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "XML {} ({})", self.version, self.encoding.name())
    }
}

/// Number of leading bytes inspected for the prolog.
const PROLOG_LEN: usize = 512;

/// Detect XML format from a file path.
///
/// # Example
/// ```no_run
/// use taxpub::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("zookeys.686.11711.xml").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<XmlFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(PROLOG_LEN);
    BufReader::new(file)
        .take(PROLOG_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect XML format from the leading bytes of a document.
///
/// # Returns
/// * `Ok(XmlFormat)` if the data starts like an XML document
/// * `Err(Error::XmlParse)` if it does not
/// * `Err(Error::Encoding)` if the declared encoding is unknown
pub fn detect_format_from_bytes(data: &[u8]) -> Result<XmlFormat> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(data) {
        // A BOM settles the encoding; the prolog may not be ASCII-readable.
        let version = if encoding == UTF_8 {
            read_pseudo_attribute(prolog(&data[bom_len..]), "version")
        } else {
            None
        };
        return Ok(XmlFormat {
            has_declaration: version.is_some(),
            version: version.unwrap_or_else(|| "1.0".to_string()),
            encoding,
        });
    }

    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .ok_or_else(|| Error::XmlParse("document is empty".to_string()))?;
    if data[start] != b'<' {
        return Err(Error::XmlParse("not an XML document".to_string()));
    }

    let head = prolog(&data[start..]);
    if !head.starts_with("<?xml") {
        return Ok(XmlFormat {
            version: "1.0".to_string(),
            encoding: UTF_8,
            has_declaration: false,
        });
    }

    let version = read_pseudo_attribute(head, "version").unwrap_or_else(|| "1.0".to_string());
    let encoding = match read_pseudo_attribute(head, "encoding") {
        Some(label) => Encoding::for_label(label.as_bytes())
            .ok_or_else(|| Error::Encoding(format!("unsupported encoding '{}'", label)))?,
        None => UTF_8,
    };

    Ok(XmlFormat {
        version,
        encoding,
        has_declaration: true,
    })
}

/// The XML declaration, if the data starts with one.
fn prolog(data: &[u8]) -> &str {
    let end = data
        .windows(2)
        .position(|w| w == b"?>")
        .map(|p| p + 2)
        .unwrap_or(0)
        .min(PROLOG_LEN);
    std::str::from_utf8(&data[..end]).unwrap_or("")
}

/// Read `name="value"` from an XML declaration.
fn read_pseudo_attribute(prolog: &str, name: &str) -> Option<String> {
    let mut rest = prolog;
    while let Some(pos) = rest.find(name) {
        let after = rest[pos + name.len()..].trim_start();
        if let Some(value) = after.strip_prefix('=') {
            let value = value.trim_start();
            let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
            let body = &value[1..];
            return body.find(quote).map(|end| body[..end].to_string());
        }
        rest = &rest[pos + name.len()..];
    }
    None
}

/// Decode document bytes into text using the detected encoding.
///
/// Byte sequences that are invalid in that encoding become U+FFFD, which
/// text normalization later turns into spaces.
pub fn decode<'a>(data: &'a [u8], format: &XmlFormat) -> Cow<'a, str> {
    let (text, used, had_errors) = format.encoding.decode(data);
    if had_errors {
        log::warn!(
            "Replaced undecodable byte sequences while decoding {}",
            used.name()
        );
    }
    text
}

/// Check if a file looks like an XML document.
pub fn is_xml<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like an XML document.
pub fn is_xml_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
