//! Text normalization applied to every extracted string.
//!
//! Scholarly XML carries hard line breaks, indentation, non-breaking spaces
//! and the occasional invisible character inside prose elements. Every
//! user-facing field passes through [`clean_text`] before it is returned.

use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Resolver prefix used to turn a bare DOI into a URL.
pub const DOI_RESOLVER: &str = "https://doi.org/";

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Zero-width and invisible formatting characters that are dropped outright.
fn is_invisible_format(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'                      // soft hyphen
            | '\u{200B}'..='\u{200F}'   // zero-width space, joiners, direction marks
            | '\u{202A}'..='\u{202E}'   // bidi embedding controls
            | '\u{2060}'..='\u{2064}'   // word joiner, invisible operators
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

/// Canonicalize a raw text fragment.
///
/// Replacement characters (left by lossy decoding) and control characters
/// become spaces, invisible format characters are removed, the text is NFC
/// normalized, whitespace runs collapse to a single ASCII space, one trailing
/// comma is dropped and the ends are trimmed.
///
/// # Example
///
/// ```
/// use taxpub::normalize::clean_text;
///
/// assert_eq!(clean_text("  Canadian Museum\n\t of Nature,"), "Canadian Museum of Nature");
/// assert_eq!(clean_text(""), "");
/// ```
pub fn clean_text(text: &str) -> String {
    let replaced: String = text
        .chars()
        .filter(|c| !is_invisible_format(*c))
        .map(|c| {
            if c == '\u{FFFD}' || c.is_control() {
                ' '
            } else {
                c
            }
        })
        .nfc()
        .collect();

    let collapsed = whitespace_regex().replace_all(&replaced, " ");
    let chomped = collapsed.strip_suffix(',').unwrap_or(&collapsed);

    chomped.trim().to_string()
}

/// Expand a bare DOI (`10.xxxx/...`) into a resolvable URL.
///
/// Anything that does not start with `10.` is returned unchanged, including
/// values that already carry a scheme.
///
/// # Example
///
/// ```
/// use taxpub::normalize::expand_doi;
///
/// assert_eq!(
///     expand_doi("10.3897/zookeys.686.11711"),
///     "https://doi.org/10.3897/zookeys.686.11711"
/// );
/// assert_eq!(expand_doi("http://wsc.nmbe.ch"), "http://wsc.nmbe.ch");
/// ```
pub fn expand_doi(doi: &str) -> String {
    if doi.starts_with("10.") {
        format!("{}{}", DOI_RESOLVER, doi)
    } else {
        doi.to_string()
    }
}

/// Remove a single trailing occurrence of `suffix`, if present.
pub(crate) fn chomp<'a>(text: &'a str, suffix: char) -> &'a str {
    text.strip_suffix(suffix).unwrap_or(text)
}
