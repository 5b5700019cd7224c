// src/store/db.rs
//
// SQLite persistence. One connection per process: opened at startup,
// reused for every save, closed on drop. Deduplication is the table's
// UNIQUE(url) plus INSERT OR IGNORE; a re-submitted link is a counted
// no-op, never an overwrite.

use std::error::Error;
use std::path::Path;

use chrono::Local;
use rusqlite::{params, Connection};

use crate::data::ArticleRecord;
use super::Tally;

pub struct Db {
    conn: Connection,
}

impl Db {
    /// Open (creating if missing) the article database. Schema creation is
    /// idempotent.
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS articles (
                id         INTEGER PRIMARY KEY,
                title      TEXT,
                url        TEXT UNIQUE,
                date       TEXT,
                snippet    TEXT,
                image_url  TEXT,
                source     TEXT,
                scraped_at TEXT
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Append records, ignoring links already stored.
    ///
    /// `scraped_at` is stamped per insert, here, not at extraction time.
    /// Placeholder records are never written and never counted. A failed
    /// insert is logged, counted as skipped, and the batch continues; each
    /// successful insert is durable on its own (autocommit, no wrapping
    /// transaction).
    pub fn append_all(&self, records: &[ArticleRecord]) -> Tally {
        let mut tally = Tally::default();

        for rec in records {
            if rec.is_placeholder() {
                continue;
            }
            let stamp = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
            let res = self.conn.execute(
                "INSERT OR IGNORE INTO articles
                    (title, url, date, snippet, image_url, source, scraped_at)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    rec.title,
                    rec.link,
                    rec.date,
                    rec.snippet,
                    rec.image_url,
                    rec.source,
                    stamp
                ],
            );
            match res {
                Ok(n) if n > 0 => tally.inserted += 1,
                Ok(_) => tally.skipped += 1,
                Err(e) => {
                    loge!("Store: insert failed for {}: {}", rec.link, e);
                    tally.skipped += 1;
                }
            }
        }

        logf!("Store: {} inserted, {} skipped", tally.inserted, tally.skipped);
        tally
    }
}
