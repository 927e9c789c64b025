//! Whole-article extraction.

use crate::error::Result;
use crate::model::{Article, Document};

use super::{
    abstract_text, article_type, authors, conference, corresponding_author, doi, figures,
    keywords, occurrences, references, taxa, title,
};

/// Options for [`article`].
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Run the independent body extractors on the rayon pool
    pub parallel: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl ExtractOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every extractor on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable or disable parallel extraction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Run every extractor and collect the results into an [`Article`].
///
/// The document is shared read-only, so with `parallel` set the taxon,
/// occurrence, figure and reference passes run concurrently.
pub fn article(doc: &Document, options: &ExtractOptions) -> Result<Article> {
    doc.ensure_loaded()?;

    let mut article = front_matter(doc)?;

    if options.parallel {
        let ((taxa, occurrences), (figures, references)) = rayon::join(
            || rayon::join(|| taxa(doc), || occurrences(doc)),
            || rayon::join(|| figures(doc), || references(doc)),
        );
        article.taxa = taxa?;
        article.occurrences = occurrences?;
        article.figures = figures?;
        article.references = references?;
    } else {
        article.taxa = taxa(doc)?;
        article.occurrences = occurrences(doc)?;
        article.figures = figures(doc)?;
        article.references = references(doc)?;
    }

    log::debug!(
        "Extracted article: {} authors, {} taxa, {} occurrences, {} figures, {} references",
        article.authors.len(),
        article.taxa.len(),
        article.occurrences.len(),
        article.figures.len(),
        article.references.len()
    );

    Ok(article)
}

fn front_matter(doc: &Document) -> Result<Article> {
    Ok(Article {
        doi: doi(doc)?,
        title: title(doc)?,
        abstract_text: abstract_text(doc)?,
        article_type: article_type(doc)?,
        keywords: keywords(doc)?,
        authors: authors(doc)?,
        corresponding_author: corresponding_author(doc)?,
        conference: conference(doc)?,
        ..Default::default()
    })
}
