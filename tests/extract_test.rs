//! Integration tests for the extractors against article fixtures.

use std::path::PathBuf;

use taxpub::extract::{self, ExtractOptions};
use taxpub::model::{Author, ConferenceInfo, TaxonName};
use taxpub::{parse_file, Document, Error};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn paper() -> Document {
    parse_file(fixture("paper.xml")).unwrap()
}

fn proceedings() -> Document {
    parse_file(fixture("proceedings.xml")).unwrap()
}

// ==================== Metadata ====================

#[test]
fn test_article_type() {
    assert_eq!(extract::article_type(&proceedings()).unwrap(), "research-article");
}

#[test]
fn test_doi() {
    assert_eq!(
        extract::doi(&paper()).unwrap(),
        "https://doi.org/10.3897/zookeys.686.11711"
    );
    assert_eq!(
        extract::doi(&proceedings()).unwrap(),
        "https://doi.org/10.3897/tdwgproceedings.1.19829"
    );
}

#[test]
fn test_title() {
    assert!(extract::title(&paper())
        .unwrap()
        .starts_with("A new species of Longicoelotes (Araneae, Agelenidae)"));
    assert!(extract::title(&proceedings())
        .unwrap()
        .starts_with("Proposed Extension to Darwin Core"));
}

#[test]
fn test_abstract() {
    assert!(extract::abstract_text(&paper())
        .unwrap()
        .starts_with("Abstract A new Longicoeletes species is described from Jiangxi Province, China"));
    assert!(extract::abstract_text(&proceedings())
        .unwrap()
        .starts_with("Abstract The Global Biodiversity Information Facility"));
}

#[test]
fn test_keywords() {
    assert_eq!(
        extract::keywords(&paper()).unwrap(),
        vec!["East Asia", "description", "Coelotinae", "taxonomy"]
    );
    assert_eq!(
        extract::keywords(&proceedings()).unwrap(),
        vec![
            "Darwin Core extension",
            "ORCID",
            "role",
            "attribution",
            "collections",
            "curator"
        ]
    );
}

#[test]
fn test_corresponding_author() {
    assert_eq!(
        extract::corresponding_author(&paper()).unwrap(),
        "Zhe Zhao (zhaozhe@ioz.ac.cn)"
    );
    assert_eq!(
        extract::corresponding_author(&proceedings()).unwrap(),
        "David Peter Shorthouse (davidpshorthouse@gmail.com)"
    );
}

#[test]
fn test_content_is_normalized() {
    let content = extract::content(&paper()).unwrap();
    assert!(content.contains("World Spider Catalog"));
    assert!(!content.contains("  "));
    assert!(!content.contains('\n'));
}

// ==================== Authors ====================

#[test]
fn test_proceedings_author() {
    let authors = extract::authors(&proceedings()).unwrap();
    assert_eq!(
        authors[0],
        Author {
            given: "David Peter".to_string(),
            surname: "Shorthouse".to_string(),
            fullname: "David Peter Shorthouse".to_string(),
            email: "davidpshorthouse@gmail.com".to_string(),
            affiliations: vec!["Canadian Museum of Nature, Ottawa, Canada".to_string()],
            orcid: "https://orcid.org/0000-0001-7618-5230".to_string(),
        }
    );
}

#[test]
fn test_author_without_affiliation() {
    let authors = extract::authors(&proceedings()).unwrap();
    assert_eq!(authors[1], Author::new("Fabien", "Cavière").with_email("caviere@gbif.fr"));
}

#[test]
fn test_paper_author_without_email_or_orcid() {
    let authors = extract::authors(&paper()).unwrap();
    // Editors are not authors.
    assert_eq!(authors.len(), 2);
    assert_eq!(
        authors[0],
        Author {
            given: "Xiaoqing".to_string(),
            surname: "Zhang".to_string(),
            fullname: "Xiaoqing Zhang".to_string(),
            email: String::new(),
            affiliations: vec![
                "Institute of Zoology".to_string(),
                "Chinese Academy of Sciences, Beijing 100101, China".to_string(),
            ],
            orcid: String::new(),
        }
    );
}

// ==================== Conference ====================

#[test]
fn test_conference() {
    assert_eq!(
        extract::conference(&proceedings()).unwrap(),
        ConferenceInfo {
            present: true,
            date: "1-6 October 2017".to_string(),
            name: "TDWG 2017 Annual Conference".to_string(),
            acronym: "TDWG 2017".to_string(),
            location: "Ottawa, Canada".to_string(),
            theme: "Data Integration in a Big Data Universe: Associating Occurrences with Genes, Phenotypes, and Environments".to_string(),
            session: "24 Other Oral Presentations".to_string(),
            presenter: "David Peter Shorthouse".to_string(),
        }
    );
}

#[test]
fn test_no_conference_in_paper() {
    let doc = paper();
    assert!(extract::conference(&doc).unwrap().is_empty());
    assert_eq!(extract::conference_part(&doc).unwrap(), "");
    assert_eq!(extract::presenting_author(&doc).unwrap(), "");
}

// ==================== Taxa ====================

#[test]
fn test_scientific_names() {
    let names = extract::scientific_names(&paper()).unwrap();
    assert_eq!(
        names,
        vec![
            "Longicoelotes",
            "Araneae",
            "Agelenidae",
            "Longicoelotes kulianganus",
            "Longicoelotes geei",
            "Longicoelotes karschi",
        ]
    );
}

#[test]
fn test_ranked_taxa() {
    let taxa = extract::taxa(&paper()).unwrap();
    assert_eq!(
        taxa[3],
        TaxonName::new()
            .with("genus", "Longicoelotes")
            .with("species", "kulianganus")
    );
    assert!(extract::taxa(&proceedings()).unwrap().is_empty());
}

// ==================== Figures ====================

#[test]
fn test_paper_figures() {
    let figures = extract::figures(&paper()).unwrap();
    assert_eq!(figures.len(), 2);

    let first = &figures[0];
    assert_eq!(first.label, "Figure 1.");
    assert_eq!(
        first.caption,
        "Palp of Longicoelotes geei sp. n., holotype male. \
         A Prolateral view B Ventral view C Retrolateral view. \
         CAT = anterior tip of conductor, CF = cymbial furrow, CO = conductor, \
         CPT = posterior tip of conductor, E = embolus, EB = embolic base, \
         MA = median apophysis, PA = patellar apophysis, ST = subtegulum, \
         T = tegulum, TS = tegular sclerite, VTA = ventral tibial apophysis. \
         Scale bar: equal for A, B, C."
    );
    assert_eq!(first.graphic.href, "zookeys-686-137-g001.jpg");
    assert_eq!(first.graphic.id, "oo_146588.jpg");
}

// ==================== References ====================

#[test]
fn test_no_references_in_proceedings() {
    assert!(extract::references(&proceedings()).unwrap().is_empty());
}

#[test]
fn test_paper_references() {
    let refs = extract::references(&paper()).unwrap();
    assert_eq!(refs.len(), 10);
    assert_eq!(
        refs[7].full_citation,
        "World Spider Catalog. 2017. World Spider Catalog. http://wsc.nmbe.ch"
    );
    assert_eq!(
        refs[8].full_citation,
        "Zhao, Z, S Li. 2016. Papiliocoelotes gen. n., a new genus of \
         Coelotinae (Araneae, Agelenidae) spiders from the Wuling \
         Mountains, China. ZooKeys 585: 33\u{2013}50. \
         https://doi.org/10.3897/zookeys.585.8007"
    );
}

#[test]
fn test_reference_fields() {
    let refs = extract::references(&paper()).unwrap();

    let book = &refs[2];
    assert_eq!(book.source, "Spiders in Qinghai-Tibet Plateau of China");
    assert_eq!(book.title, "");
    assert_eq!(book.pages, "");

    let no_pages = &refs[6];
    assert_eq!(no_pages.volume, "1459");
    assert_eq!(no_pages.pages, "");
    assert!(no_pages.full_citation.ends_with("Zootaxa 1459"));

    for reference in &refs {
        assert!(reference.doi.is_empty() || reference.doi.starts_with("https://doi.org/"));
        assert!(!reference.full_citation.contains(". . "));
    }
}

// ==================== Whole article ====================

#[test]
fn test_article_round_trip_through_json() {
    let doc = paper();
    let article = extract::article(&doc, &ExtractOptions::default()).unwrap();
    let json = taxpub::render::to_json(&article, taxpub::JsonFormat::Compact).unwrap();
    let back: taxpub::Article = serde_json::from_str(&json).unwrap();
    assert_eq!(back, article);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let doc = proceedings();
    let parallel = extract::article(&doc, &ExtractOptions::new()).unwrap();
    let sequential = extract::article(&doc, &ExtractOptions::new().sequential()).unwrap();
    assert_eq!(parallel, sequential);
    assert!(parallel.is_proceedings());
}

#[test]
fn test_document_shared_across_threads() {
    let doc = paper();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| extract::references(&doc).unwrap().len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 10);
        }
    });
}

// ==================== Readiness ====================

#[test]
fn test_unloaded_document_is_rejected() {
    let doc = Document::new();
    assert!(matches!(extract::doi(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::title(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::keywords(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::authors(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::conference(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::conference_part(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::presenting_author(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::taxa(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::scientific_names(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::occurrences(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::figures(&doc), Err(Error::DocumentNotReady)));
    assert!(matches!(extract::references(&doc), Err(Error::DocumentNotReady)));
}
