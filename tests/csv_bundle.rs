// tests/csv_bundle.rs
use std::fs;
use std::path::PathBuf;

use flz_scrape::csv::parse_rows;
use flz_scrape::data::ArticleRecord;
use flz_scrape::store::bundle::{export_bundle, BOM, CSV_HEADERS};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("flz_bundle_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn rec(title: &str, link: &str, img: Option<&str>) -> ArticleRecord {
    ArticleRecord::new(title.to_string(), link.to_string(), img.map(|s| s.to_string()))
}

#[test]
fn bundle_writes_bom_headers_and_rows() {
    let dir = tmp_dir("basic");
    let csv_path = dir.join("news.csv");

    let records = vec![
        rec("Erster Artikel", "https://example.ch/story/1", None),
        rec("Zweiter Artikel", "https://example.ch/story/2", None),
    ];
    let summary = export_bundle(&records, &csv_path).unwrap();
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.images_saved, 0);

    let bytes = fs::read(&csv_path).unwrap();
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));

    let text = String::from_utf8(bytes).unwrap();
    let text = text.strip_prefix(BOM).unwrap();
    let rows = parse_rows(text, ',');
    assert_eq!(rows.len(), 3); // header + 2 records
    assert_eq!(rows[0], CSV_HEADERS.map(String::from).to_vec());
    assert_eq!(rows[1][0], "Erster Artikel");
    assert_eq!(rows[2][1], "https://example.ch/story/2");
}

#[test]
fn html_sidecar_mirrors_rows() {
    let dir = tmp_dir("sidecar");
    let csv_path = dir.join("news.csv");

    let records = vec![rec("Ein <b>Titel</b> & mehr", "https://example.ch/story/9", None)];
    let summary = export_bundle(&records, &csv_path).unwrap();

    assert_eq!(summary.html_path, dir.join("news.html"));
    let html = fs::read_to_string(&summary.html_path).unwrap();
    assert!(html.contains("<table"));
    assert!(html.contains("Ein &lt;b&gt;Titel&lt;/b&gt; &amp; mehr"));
    assert!(html.contains("https://example.ch/story/9"));
    assert!(html.contains("Kein Bild"));
}

#[test]
fn titles_with_commas_survive_the_round_trip() {
    let dir = tmp_dir("quoting");
    let csv_path = dir.join("news.csv");

    let records = vec![rec("Bern, Basel und Zürich", "https://example.ch/story/3", None)];
    export_bundle(&records, &csv_path).unwrap();

    let text = fs::read_to_string(&csv_path).unwrap();
    let text = text.strip_prefix(BOM).unwrap();
    let rows = parse_rows(text, ',');
    assert_eq!(rows[1][0], "Bern, Basel und Zürich");
}

#[test]
fn failed_image_download_marks_cells_and_continues() {
    let dir = tmp_dir("img_fail");
    let csv_path = dir.join("news.csv");

    // nothing listens here; the download fails fast
    let records = vec![
        rec("Mit kaputtem Bild", "https://example.ch/story/4", Some("http://127.0.0.1:1/pic.jpg")),
        rec("Ohne Bild", "https://example.ch/story/5", None),
    ];
    let summary = export_bundle(&records, &csv_path).unwrap();
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.images_saved, 0);

    let text = fs::read_to_string(&csv_path).unwrap();
    let text = text.strip_prefix(BOM).unwrap();
    let rows = parse_rows(text, ',');
    assert_eq!(rows[1][3], "Fehler beim Speichern");
    assert_eq!(rows[1][4], "Kein Bild");
    assert_eq!(rows[2][3], "");
    assert_eq!(rows[2][4], "");
}

#[test]
fn placeholders_are_excluded_from_the_bundle() {
    let dir = tmp_dir("no_placeholder");
    let csv_path = dir.join("news.csv");

    let records = vec![
        rec("Echt", "https://example.ch/story/6", None),
        ArticleRecord::placeholder(),
    ];
    let summary = export_bundle(&records, &csv_path).unwrap();
    assert_eq!(summary.rows, 1);

    let text = fs::read_to_string(&csv_path).unwrap();
    assert!(!text.contains("Platzhalter"));
}

#[test]
fn images_dir_sits_next_to_the_csv() {
    let dir = tmp_dir("layout");
    let csv_path = dir.join("news.csv");

    let summary = export_bundle(&[rec("A", "https://example.ch/a", None)], &csv_path).unwrap();
    assert_eq!(summary.images_dir, dir.join("images"));
    assert!(summary.images_dir.is_dir());
}
