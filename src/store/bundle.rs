// src/store/bundle.rs
//
// CSV + HTML persistence mode: one CSV (BOM-prefixed for spreadsheet
// apps), downloaded images in a sibling images/ folder, and an HTML
// sidecar mirroring the rows. A failed image download marks its cells and
// moves on; it never aborts the export.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::consts::{IMAGES_SUBDIR, IMAGE_TIMEOUT_SECS};
use crate::core::{net, sanitize};
use crate::csv::write_row;
use crate::data::ArticleRecord;

/// UTF-8 byte-order mark, so Excel opens the file as UTF-8.
pub const BOM: &str = "\u{feff}";

pub const CSV_HEADERS: [&str; 5] = ["Titel", "Link", "Bild-URL", "Bild-Pfad", "Bild-Link in Excel"];

const IMG_SAVE_FAILED: &str = "Fehler beim Speichern";
const IMG_NONE: &str = "Kein Bild";

pub struct BundleSummary {
    pub csv_path: PathBuf,
    pub html_path: PathBuf,
    pub images_dir: PathBuf,
    pub rows: usize,
    pub images_saved: usize,
}

/// Write `records` as a CSV/HTML/images bundle rooted at `csv_path`.
/// Placeholder records are not part of any persistence output.
pub fn export_bundle(
    records: &[ArticleRecord],
    csv_path: &Path,
) -> Result<BundleSummary, Box<dyn Error>> {
    let articles: Vec<&ArticleRecord> = records.iter().filter(|r| !r.is_placeholder()).collect();

    if let Some(parent) = csv_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let images_dir = csv_path
        .parent()
        .map(|p| p.join(IMAGES_SUBDIR))
        .unwrap_or_else(|| PathBuf::from(IMAGES_SUBDIR));
    fs::create_dir_all(&images_dir)?;

    let client = net::make_client(Duration::from_secs(IMAGE_TIMEOUT_SECS))?;

    let mut csv_buf: Vec<u8> = Vec::new();
    csv_buf.extend_from_slice(BOM.as_bytes());
    let headers: Vec<String> = CSV_HEADERS.iter().map(|h| s!(*h)).collect();
    write_row(&mut csv_buf, &headers, ',')?;

    let mut html = vec![
        s!("<html><head><meta charset='utf-8'><title>News Scraper Ergebnisse</title></head><body>"),
        s!("<h1>Gescrapte Artikel</h1><table border='1'><tr><th>Titel</th><th>Link</th><th>Bild</th></tr>"),
    ];

    let mut images_saved = 0usize;
    for (i, rec) in articles.iter().enumerate() {
        let (img_path_cell, img_excel_cell, local_img) = match rec.image_url.as_deref() {
            Some(url) => match save_image(&client, url, &images_dir, i) {
                Ok(path) => {
                    images_saved += 1;
                    let shown = path.display().to_string();
                    let formula = format!("=HYPERLINK(\"{shown}\", \"Bild öffnen\")");
                    (shown, formula, Some(path))
                }
                Err(e) => {
                    loge!("Export: image {} failed: {}", url, e);
                    (s!(IMG_SAVE_FAILED), s!(IMG_NONE), None)
                }
            },
            None => (s!(), s!(), None),
        };

        let row = vec![
            rec.title.clone(),
            rec.link.clone(),
            rec.image_url.clone().unwrap_or_default(),
            img_path_cell,
            img_excel_cell,
        ];
        write_row(&mut csv_buf, &row, ',')?;

        html.push(format!(
            "<tr><td>{}</td><td><a href='{}'>{}</a></td>",
            escape(&rec.title),
            escape(&rec.link),
            escape(&rec.link),
        ));
        match local_img {
            Some(path) => html.push(format!("<td><img src='{}' width='150'></td></tr>", path.display())),
            None => html.push(s!("<td>Kein Bild</td></tr>")),
        }
    }

    html.push(s!("</table></body></html>"));

    fs::write(csv_path, &csv_buf)?;
    let html_path = csv_path.with_extension("html");
    fs::write(&html_path, html.join("\n"))?;

    logf!(
        "Export: {} row(s) → {}, {} image(s) → {}",
        articles.len(),
        csv_path.display(),
        images_saved,
        images_dir.display()
    );

    Ok(BundleSummary {
        csv_path: csv_path.to_path_buf(),
        html_path,
        images_dir,
        rows: articles.len(),
        images_saved,
    })
}

fn save_image(
    client: &reqwest::blocking::Client,
    url: &str,
    images_dir: &Path,
    id: usize,
) -> Result<PathBuf, Box<dyn Error>> {
    let bytes = net::get_bytes(client, url)?;
    let name = sanitize::image_file_name(url, id);
    let path = images_dir.join(name);
    fs::write(&path, bytes)?;
    Ok(path)
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
