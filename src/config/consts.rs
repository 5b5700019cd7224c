// src/config/consts.rs

// Site
pub const BASE_URL: &str = "https://www.20min.ch/schweiz";
pub const SOURCE_LABEL: &str = "20Minuten";

// Scrape
pub const MAX_RESULTS: usize = 12;
pub const LISTING_WAIT_SECS: u64 = 10;
pub const LISTING_POLL_PAUSE_MS: u64 = 500;
pub const PAGE_TIMEOUT_SECS: u64 = 15;
pub const IMAGE_TIMEOUT_SECS: u64 = 5;

// Display
pub const TITLE_DISPLAY_MAX: usize = 50;
pub const GRID_COLS: usize = 3;
pub const CARD_IMAGE_W: f32 = 250.0;
pub const CARD_IMAGE_H: f32 = 150.0;

// Local store
pub const STORE_DIR: &str = ".store";
pub const DB_FILE: &str = "articles.db";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_CSV_STEM: &str = "news";
pub const IMAGES_SUBDIR: &str = "images";
