//! Document sources and loading.
//!
//! A [`Source`] is validated when it is built, so a bad URL scheme or a
//! missing file is reported as [`Error::InvalidConfiguration`] before any
//! loading starts. Local files load synchronously with [`load`]; remote
//! documents need the `async` feature and [`load_async`].

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::{ParseOptions, XmlParser};

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Remote document over HTTP(S)
    Url(Url),
    /// Local file
    File(PathBuf),
}

impl Source {
    /// A remote source. Only `http` and `https` URLs are accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use taxpub::{Error, Source};
    ///
    /// assert!(Source::url("https://zookeys.pensoft.net/article/11711/download/xml/").is_ok());
    /// assert!(matches!(
    ///     Source::url("ftp://example.org/article.xml"),
    ///     Err(Error::InvalidConfiguration(_))
    /// ));
    /// ```
    pub fn url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|e| Error::InvalidConfiguration(format!("invalid URL '{}': {}", url, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(Source::Url(parsed)),
            scheme => Err(Error::InvalidConfiguration(format!(
                "unsupported URL scheme '{}' in '{}'",
                scheme, url
            ))),
        }
    }

    /// A local file source. The file must exist.
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidConfiguration(format!(
                "file not found: {}",
                path.display()
            )));
        }
        Ok(Source::File(path.to_path_buf()))
    }

    /// Interpret user input: `http://` and `https://` prefixes make a URL
    /// source, anything else is a file path.
    pub fn parse(input: &str) -> Result<Self> {
        if input.starts_with("http://") || input.starts_with("https://") {
            Self::url(input)
        } else {
            Self::file(input)
        }
    }

    /// Whether the source is remote.
    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Url(_))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load and parse a local source.
///
/// Remote sources are rejected with [`Error::InvalidConfiguration`]; use
/// [`load_async`] for those.
pub fn load(source: &Source) -> Result<Document> {
    load_with_options(source, ParseOptions::default())
}

/// Load and parse a local source with custom parse options.
pub fn load_with_options(source: &Source, options: ParseOptions) -> Result<Document> {
    match source {
        Source::File(path) => XmlParser::open_with_options(path, options)?.parse(),
        Source::Url(url) => Err(Error::InvalidConfiguration(format!(
            "remote source {} requires async loading",
            url
        ))),
    }
}

/// Load and parse any source, fetching remote documents over HTTP(S).
#[cfg(feature = "async")]
pub async fn load_async(source: &Source) -> Result<Document> {
    load_async_with_options(source, ParseOptions::default()).await
}

/// Load and parse any source with custom parse options.
#[cfg(feature = "async")]
pub async fn load_async_with_options(source: &Source, options: ParseOptions) -> Result<Document> {
    let data = match source {
        Source::File(path) => tokio::fs::read(path).await?,
        Source::Url(url) => {
            log::debug!("Fetching {}", url);
            let response = reqwest::get(url.clone()).await?.error_for_status()?;
            response.bytes().await?.to_vec()
        }
    };
    log::debug!("Loaded {} bytes from {}", data.len(), source);

    XmlParser::from_bytes_with_options(&data, options)?.parse()
}
