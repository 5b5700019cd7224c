// tests/store_dedup.rs
use std::fs;
use std::path::PathBuf;

use flz_scrape::data::ArticleRecord;
use flz_scrape::store::db::Db;

fn tmp_db(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("flz_dedup_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p.join("articles.db")
}

fn rec(title: &str, link: &str) -> ArticleRecord {
    ArticleRecord::new(title.to_string(), link.to_string(), None)
}

#[test]
fn same_link_twice_across_calls_is_one_insert_one_skip() {
    let path = tmp_db("twice");
    let db = Db::open(&path).unwrap();

    let first = db.append_all(&[rec("Bahnstreik", "https://example.ch/story/1")]);
    let second = db.append_all(&[rec("Bahnstreik", "https://example.ch/story/1")]);

    assert_eq!((first.inserted, first.skipped), (1, 0));
    assert_eq!((second.inserted, second.skipped), (0, 1));
}

#[test]
fn duplicate_link_in_one_batch_keeps_first_title() {
    let path = tmp_db("first_wins");
    let db = Db::open(&path).unwrap();

    let tally = db.append_all(&[
        rec("Erster Titel", "https://example.ch/story/7"),
        rec("Zweiter Titel", "https://example.ch/story/7"),
    ]);
    assert_eq!((tally.inserted, tally.skipped), (1, 1));
    drop(db);

    let conn = rusqlite::Connection::open(&path).unwrap();
    let title: String = conn
        .query_row(
            "SELECT title FROM articles WHERE url = ?1",
            ["https://example.ch/story/7"],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(title, "Erster Titel");

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn placeholders_are_never_written() {
    let path = tmp_db("placeholder");
    let db = Db::open(&path).unwrap();

    let tally = db.append_all(&[ArticleRecord::placeholder(), ArticleRecord::placeholder()]);
    assert_eq!((tally.inserted, tally.skipped), (0, 0));
    drop(db);

    let conn = rusqlite::Connection::open(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn scraped_at_is_stamped_at_insert_time() {
    let path = tmp_db("stamp");
    let db = Db::open(&path).unwrap();

    db.append_all(&[rec("Mit Zeitstempel", "https://example.ch/story/3")]);
    drop(db);

    let conn = rusqlite::Connection::open(&path).unwrap();
    let stamp: String = conn
        .query_row(
            "SELECT scraped_at FROM articles WHERE url = ?1",
            ["https://example.ch/story/3"],
            |row| row.get(0),
        )
        .unwrap();
    // ISO-8601 at second precision, e.g. 2025-07-02T14:30:05
    assert_eq!(stamp.len(), 19);
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[10..11], "T");
}

#[test]
fn schema_creation_is_idempotent_across_opens() {
    let path = tmp_db("reopen");

    {
        let db = Db::open(&path).unwrap();
        db.append_all(&[rec("Bleibt", "https://example.ch/story/5")]);
    }

    let db = Db::open(&path).unwrap();
    let tally = db.append_all(&[rec("Bleibt", "https://example.ch/story/5")]);
    assert_eq!((tally.inserted, tally.skipped), (0, 1));
}
