// src/data.rs
//
// The unit of extraction and persistence. Records are created once per
// scrape run and never mutated afterwards; the store assigns its own
// timestamp at insert time.

use crate::config::consts::{SOURCE_LABEL, TITLE_DISPLAY_MAX};

/// Link value of a grid placeholder: not an article, never persisted,
/// never clickable.
pub const PLACEHOLDER_LINK: &str = "#";
pub const PLACEHOLDER_TITLE: &str = "Platzhalter";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleRecord {
    pub title: String,
    pub link: String,
    pub image_url: Option<String>,
    pub date: String,
    pub snippet: String,
    pub source: String,
}

impl ArticleRecord {
    pub fn new(title: String, link: String, image_url: Option<String>) -> Self {
        Self {
            title,
            link,
            image_url,
            date: s!(),
            snippet: s!(),
            source: s!(SOURCE_LABEL),
        }
    }

    /// Filler card used to pad the grid when no search term is set.
    pub fn placeholder() -> Self {
        Self::new(s!(PLACEHOLDER_TITLE), s!(PLACEHOLDER_LINK), None)
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.link == PLACEHOLDER_LINK
    }

    /// Title for card display: long titles cut at 50 chars + ellipsis.
    /// The stored title is never truncated.
    pub fn display_title(&self) -> String {
        if self.title.chars().count() > TITLE_DISPLAY_MAX {
            let cut: String = self.title.chars().take(TITLE_DISPLAY_MAX).collect();
            join!(cut, "...")
        } else {
            self.title.clone()
        }
    }
}
