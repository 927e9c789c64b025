//! Darwin Core occurrence records from "material examined" lists.

use crate::error::Result;
use crate::model::{Document, Occurrence, Path};

/// One record per item of every occurrence list, in document order.
///
/// Tagged values are kept verbatim. An item without tagged content yields
/// an empty record so that positions line up with the source list.
pub fn occurrences(doc: &Document) -> Result<Vec<Occurrence>> {
    doc.ensure_loaded()?;

    let items = doc.select(&Path::parse(
        "//list[@list-content='occurrences']/list-item",
    )?);
    let tagged = Path::parse("*/named-content[@content-type]")?;

    let records = items
        .iter()
        .map(|item| {
            item.select(&tagged)
                .iter()
                .filter_map(|node| {
                    let content_type = node.attribute("content-type")?;
                    Some((term_name(content_type), node.text()))
                })
                .collect::<Occurrence>()
        })
        .collect();

    Ok(records)
}

/// Darwin Core term without its namespace prefix (`dwc:country` → `country`).
fn term_name(content_type: &str) -> &str {
    content_type
        .rsplit_once(':')
        .map_or(content_type, |(_, term)| term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::parser::parse_str;

    const MATERIAL: &str = r#"<article><body>
      <list list-content="occurrences">
        <list-item>
          <p>
            <bold>Type status:</bold>
            <named-content content-type="dwc:typeStatus">Other material</named-content>.
            <bold>Occurrence:</bold>
            <named-content content-type="dwc:catalogNumber">DHJPAR0052645</named-content>;
            <named-content content-type="dwc:sex">male</named-content>;
            <named-content content-type="dwc:locality">Area de Conservación Guanacaste</named-content>;
            <named-content content-type="decimalLatitude">10.8376</named-content>
          </p>
        </list-item>
        <list-item><p>No tagged content.</p></list-item>
      </list>
      <list list-content="other">
        <list-item><p><named-content content-type="dwc:sex">female</named-content></p></list-item>
      </list>
    </body></article>"#;

    #[test]
    fn test_terms_are_prefix_stripped() {
        let doc = parse_str(MATERIAL).unwrap();
        let records = occurrences(&doc).unwrap();
        let first = &records[0];
        assert_eq!(first.get("typeStatus"), Some("Other material"));
        assert_eq!(first.get("catalogNumber"), Some("DHJPAR0052645"));
        assert_eq!(first.get("locality"), Some("Area de Conservación Guanacaste"));
        assert_eq!(first.get("decimalLatitude"), Some("10.8376"));
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_untagged_item_yields_empty_record() {
        let doc = parse_str(MATERIAL).unwrap();
        let records = occurrences(&doc).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[1].is_empty());
    }

    #[test]
    fn test_term_name() {
        assert_eq!(term_name("dwc:scientificName"), "scientificName");
        assert_eq!(term_name("recordedBy"), "recordedBy");
    }

    #[test]
    fn test_unloaded() {
        assert!(matches!(
            occurrences(&Document::new()),
            Err(Error::DocumentNotReady)
        ));
    }
}
