// src/scrape/listing.rs
//
// Article extraction from the listing page. The page fetch sits behind
// ListingSource so the extraction logic, the wait loop and the
// close-exactly-once contract are testable without a network.

use std::error::Error;
use std::thread;
use std::time::{Duration, Instant};

use url::Url;

use crate::config::consts::{LISTING_POLL_PAUSE_MS, LISTING_WAIT_SECS, PAGE_TIMEOUT_SECS};
use crate::core::{html, net, sanitize};
use crate::data::ArticleRecord;
use crate::progress::Progress;
use crate::scrape::images;

/// A scoped handle on the listing page. Acquired per extraction call and
/// closed on every exit path; `fetch` after `close` is an error.
pub trait ListingSource {
    fn listing_url(&self) -> &str;
    fn fetch(&mut self) -> Result<String, Box<dyn Error>>;
    fn close(&mut self);
}

/// Production source: one blocking HTTP client per extraction run.
pub struct HttpListing {
    url: String,
    client: Option<reqwest::blocking::Client>,
}

impl HttpListing {
    pub fn open(url: &str) -> Result<Self, Box<dyn Error>> {
        let client = net::make_client(Duration::from_secs(PAGE_TIMEOUT_SECS))?;
        Ok(Self { url: s!(url), client: Some(client) })
    }
}

impl ListingSource for HttpListing {
    fn listing_url(&self) -> &str {
        &self.url
    }

    fn fetch(&mut self) -> Result<String, Box<dyn Error>> {
        let client = self.client.as_ref().ok_or("listing session already closed")?;
        net::get_text(client, &self.url)
    }

    fn close(&mut self) {
        self.client = None;
    }
}

/// Extract up to `max_results` article records from the listing.
///
/// Finite and not restartable: every call re-drives the source. An empty
/// result (nothing appeared within the wait bound, or everything was
/// filtered) is a normal outcome, not an error.
pub fn collect_articles(
    source: &mut dyn ListingSource,
    search_term: &str,
    max_results: usize,
    progress: &mut dyn Progress,
) -> Vec<ArticleRecord> {
    collect_with_wait(
        source,
        search_term,
        max_results,
        Duration::from_secs(LISTING_WAIT_SECS),
        progress,
    )
}

/// Same as [`collect_articles`] with an explicit wait bound for the first
/// article block to appear.
pub fn collect_with_wait(
    source: &mut dyn ListingSource,
    search_term: &str,
    max_results: usize,
    wait: Duration,
    progress: &mut dyn Progress,
) -> Vec<ArticleRecord> {
    logf!("Scrape: begin url={} term={:?} max={}", source.listing_url(), search_term, max_results);

    let out = match wait_for_articles(source, wait) {
        Some(doc) => {
            let total = count_article_blocks(&doc);
            progress.begin(total);
            logf!("Scrape: listing has {} article block(s)", total);
            extract_from_doc(&doc, source.listing_url(), search_term, max_results)
        }
        None => {
            loge!(
                "Scrape: no articles within {:.1}s at {}",
                wait.as_secs_f32(),
                source.listing_url()
            );
            progress.log("No articles found");
            Vec::new()
        }
    };

    source.close();

    for rec in &out {
        progress.item_done(&rec.title);
    }
    progress.finish();
    logf!("Scrape: done, {} record(s)", out.len());
    out
}

/// Re-poll the source until the document contains at least one `<article`
/// block or the wait bound runs out. Fetch errors count as "not yet".
fn wait_for_articles(source: &mut dyn ListingSource, wait: Duration) -> Option<String> {
    let deadline = Instant::now() + wait;
    loop {
        match source.fetch() {
            Ok(doc) => {
                if html::find_open_tag_ci(&doc, "article", 0).is_some() {
                    return Some(doc);
                }
                logd!("Scrape: listing responded without <article> blocks");
            }
            Err(e) => loge!("Scrape: listing fetch failed: {}", e),
        }
        if Instant::now() >= deadline {
            return None;
        }
        thread::sleep(Duration::from_millis(LISTING_POLL_PAUSE_MS));
    }
}

pub fn count_article_blocks(doc: &str) -> usize {
    let mut n = 0usize;
    let mut pos = 0usize;
    while let Some((_, e)) = html::find_open_tag_ci(doc, "article", pos) {
        n += 1;
        pos = e;
    }
    n
}

/// Pure extraction over a fetched document. Per-article failures skip that
/// article only; a non-matching title skips without counting toward
/// `max_results`.
pub fn extract_from_doc(
    doc: &str,
    listing_url: &str,
    search_term: &str,
    max_results: usize,
) -> Vec<ArticleRecord> {
    let base = Url::parse(listing_url).ok();
    let term = html::to_lower(search_term.trim());

    let mut out = Vec::new();
    let mut pos = 0usize;
    while out.len() < max_results {
        let Some((a_s, a_e)) = html::next_element_ci(doc, "article", pos) else {
            break;
        };
        let block = &doc[a_s..a_e];
        pos = a_e;

        match extract_article(block, listing_url, base.as_ref()) {
            Ok(rec) => {
                if !term.is_empty() && !html::to_lower(&rec.title).contains(&term) {
                    continue;
                }
                out.push(rec);
            }
            Err(e) => loge!("Scrape: skipping article: {}", e),
        }
    }
    out
}

fn extract_article(
    block: &str,
    listing_url: &str,
    base: Option<&Url>,
) -> Result<ArticleRecord, Box<dyn Error>> {
    let heading = html::first_heading_ci(block).ok_or("no heading element")?;
    let title = html::strip_tags(sanitize::normalize_entities(&heading));
    if title.is_empty() {
        return Err("empty heading".into());
    }

    let link = first_link(block, base).unwrap_or_else(|| s!(listing_url));
    let image_url = images::resolve_image(block).map(|u| absolutize(&u, base));

    Ok(ArticleRecord::new(title, link, image_url))
}

fn first_link(block: &str, base: Option<&Url>) -> Option<String> {
    let (a_s, a_e) = html::find_open_tag_ci(block, "a", 0)?;
    let href = html::attr_ci(&block[a_s..a_e], "href")?;
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    Some(absolutize(href, base))
}

/// Resolve a possibly-relative URL against the listing page's base.
fn absolutize(u: &str, base: Option<&Url>) -> String {
    if u.starts_with("http://") || u.starts_with("https://") {
        return s!(u);
    }
    match base.and_then(|b| b.join(u).ok()) {
        Some(abs) => abs.to_string(),
        None => {
            loge!("Scrape: could not absolutize {:?}", u);
            s!(u)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "https://www.example.ch/schweiz";

    #[test]
    fn absolutize_joins_relative_paths() {
        let base = Url::parse(LISTING).ok();
        assert_eq!(
            absolutize("/story/123", base.as_ref()),
            "https://www.example.ch/story/123"
        );
        assert_eq!(
            absolutize("https://cdn.example.ch/x.jpg", base.as_ref()),
            "https://cdn.example.ch/x.jpg"
        );
    }

    #[test]
    fn article_without_anchor_falls_back_to_listing_url() {
        let doc = "<article><h2>Solo</h2></article>";
        let recs = extract_from_doc(doc, LISTING, "", 12);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].link, LISTING);
    }

    #[test]
    fn article_without_heading_is_skipped() {
        let doc = "<article><p>nope</p></article><article><h2>Yes</h2></article>";
        let recs = extract_from_doc(doc, LISTING, "", 12);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Yes");
    }

    #[test]
    fn titles_are_flattened_and_trimmed() {
        let doc = "<article><h2>  Ein <span>geteilter</span>&nbsp;Titel </h2></article>";
        let recs = extract_from_doc(doc, LISTING, "", 12);
        assert_eq!(recs[0].title, "Ein geteilter Titel");
    }
}
