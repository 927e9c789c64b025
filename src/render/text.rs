//! Plain text summary of an article.

use crate::model::Article;

/// Render a short human-readable summary: title, authors, DOI, keywords,
/// conference details and counts of the body records.
pub fn to_text(article: &Article) -> String {
    let mut out = String::new();

    if !article.title.is_empty() {
        out.push_str(&format!("{}\n", article.title));
    }
    if !article.authors.is_empty() {
        let names: Vec<&str> = article.authors.iter().map(|a| a.fullname.as_str()).collect();
        out.push_str(&format!("{}\n", names.join(", ")));
    }
    if !article.doi.is_empty() {
        out.push_str(&format!("{}\n", article.doi));
    }
    if !article.keywords.is_empty() {
        out.push_str(&format!("Keywords: {}\n", article.keywords.join(", ")));
    }

    let conference = &article.conference;
    if !conference.is_empty() {
        out.push('\n');
        out.push_str(&format!("Conference: {} ({})\n", conference.name, conference.acronym));
        for (label, value) in [
            ("Date", &conference.date),
            ("Location", &conference.location),
            ("Theme", &conference.theme),
            ("Session", &conference.session),
            ("Presenter", &conference.presenter),
        ] {
            if !value.is_empty() {
                out.push_str(&format!("{}: {}\n", label, value));
            }
        }
    }

    out.push('\n');
    out.push_str(&format!("Taxa: {}\n", article.taxa.len()));
    out.push_str(&format!("Occurrences: {}\n", article.occurrences.len()));
    out.push_str(&format!("Figures: {}\n", article.figures.len()));
    out.push_str(&format!("References: {}\n", article.references.len()));

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, ConferenceInfo};

    #[test]
    fn test_to_text() {
        let article = Article {
            title: "OpenBiodiv".to_string(),
            authors: vec![Author::new("Lyubomir", "Penev")],
            doi: "https://doi.org/10.3897/tdwgproceedings.1.20084".to_string(),
            conference: ConferenceInfo {
                present: true,
                name: "TDWG 2017 Annual Conference".to_string(),
                acronym: "TDWG 2017".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let text = to_text(&article);
        assert!(text.starts_with("OpenBiodiv\nLyubomir Penev\n"));
        assert!(text.contains("Conference: TDWG 2017 Annual Conference (TDWG 2017)"));
        assert!(!text.contains("Session:"));
        assert!(text.ends_with("References: 0"));
    }
}
