// src/gui/actions/scrape.rs
//
// Runs a full scrape on the UI thread, start to finish: listing →
// records → image textures. No background worker, no cancellation.

use std::time::Duration;

use eframe::egui::{self, TextureOptions};

use crate::config::consts::IMAGE_TIMEOUT_SECS;
use crate::data::ArticleRecord;
use crate::gui::app::App;
use crate::progress::NullProgress;
use crate::scrape::{self, images, HttpListing};

pub fn scrape(app: &mut App, ctx: &egui::Context) {
    let term = app.state.gui.search_text.trim().to_lowercase();
    let opts = app.state.options.scrape.clone();

    logf!("Scrape: begin term={:?}", term);
    app.set_status(format!("Scraping {} …", opts.base_url));

    let mut articles = match HttpListing::open(&opts.base_url) {
        Ok(mut session) => {
            scrape::collect_articles(&mut session, &term, opts.max_results, &mut NullProgress)
        }
        Err(e) => {
            loge!("Scrape: could not open listing session: {}", e);
            app.set_status(format!("Error: {e}"));
            Vec::new()
        }
    };

    // Pad the grid with placeholders when browsing without a term.
    if term.is_empty() {
        while articles.len() < opts.max_results {
            articles.push(ArticleRecord::placeholder());
        }
    }

    let found = articles.iter().filter(|r| !r.is_placeholder()).count();

    let mut textures: Vec<Option<egui::TextureHandle>> = Vec::with_capacity(articles.len());
    for (i, rec) in articles.iter().enumerate() {
        let tex = rec.image_url.as_deref().and_then(|url| {
            match images::fetch_and_decode(url, Duration::from_secs(IMAGE_TIMEOUT_SECS)) {
                Ok(bitmap) => {
                    Some(ctx.load_texture(format!("article-{i}"), bitmap, TextureOptions::LINEAR))
                }
                Err(e) => {
                    loge!("Image: {} ({})", e, url);
                    None
                }
            }
        });
        textures.push(tex);
    }

    logf!("Scrape: showing {} card(s), {} with articles", articles.len(), found);
    app.articles = articles;
    app.images = textures;
    app.set_status(format!("{found} article(s)"));
}
