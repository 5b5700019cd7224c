// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub persist: PersistOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            persist: PersistOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub max_results: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            max_results: MAX_RESULTS,
        }
    }
}

/// Where a save action writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersistMode {
    Sqlite,
    CsvBundle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistOptions {
    pub mode: PersistMode,
    pub db_path: PathBuf,
    out_path: OutputPath,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self {
            mode: PersistMode::Sqlite,
            db_path: PathBuf::from(DB_FILE),
            out_path: OutputPath::default(),
        }
    }
}

impl PersistOptions {
    /// Full path of the CSV file the bundle export writes.
    /// The extension is fixed; the sidecar and images folder derive from it.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(join!(stem, ".csv"));
        path
    }

    /// Parse GUI text into dir + stem. Ignores a pasted extension.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_CSV_STEM),
        }
    }
}
