//! Parsing options and configuration.

/// Options for parsing TaxPub XML documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Whether whitespace-only text between elements is kept.
    ///
    /// Keeping it preserves the spacing between adjacent inline elements
    /// (`<italic>Coelotes</italic> <italic>geei</italic>`) when text is
    /// aggregated.
    pub keep_whitespace_text: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (recover from malformed markup).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Keep or drop whitespace-only text nodes.
    pub fn with_whitespace_text(mut self, keep: bool) -> Self {
        self.keep_whitespace_text = keep;
        self
    }

    /// Whether the parser should recover instead of failing.
    pub fn is_lenient(&self) -> bool {
        self.error_mode == ErrorMode::Lenient
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            keep_whitespace_text: true,
        }
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any markup error
    #[default]
    Strict,
    /// Keep whatever was parsed before the error, tolerate mismatched and
    /// unclosed tags and unknown entities
    Lenient,
}
