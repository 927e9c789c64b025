//! Figure records.

use super::clean_text_at;
use crate::error::Result;
use crate::model::{Document, Figure, Graphic, Path};

/// Figures in document order.
pub fn figures(doc: &Document) -> Result<Vec<Figure>> {
    doc.ensure_loaded()?;

    let mut figures = Vec::new();
    for fig in doc.select(&Path::parse("//fig")?) {
        let graphic = fig
            .child("graphic")
            .map(|graphic| Graphic {
                href: graphic.attribute_local("href").unwrap_or_default().to_string(),
                id: graphic.attribute("id").unwrap_or_default().to_string(),
            })
            .unwrap_or_default();

        figures.push(Figure {
            label: clean_text_at(fig, "label")?,
            caption: clean_text_at(fig, "caption")?,
            graphic,
        });
    }

    Ok(figures)
}
