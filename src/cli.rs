// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::consts::{BASE_URL, MAX_RESULTS};
use crate::progress::Progress;
use crate::scrape::{collect_articles, HttpListing};
use crate::store::{bundle, db::Db};

const USAGE: &str = "\
Usage: cli [options]
  -s, --search <term>   case-insensitive title filter (default: none)
  -n, --max <count>     maximum records to extract (default: 12)
      --base <url>      listing page to scrape
      --db <path>       save records into this SQLite database
      --csv <path>      export records as a CSV/HTML/images bundle
  -h, --help            show this help

Without --db/--csv, records are printed and not persisted.";

pub struct Params {
    pub term: String,
    pub max: usize,
    pub base: String,
    pub out: Output,
}

pub enum Output {
    Stdout,
    Db(PathBuf),
    Csv(PathBuf),
}

impl Params {
    pub fn new() -> Self {
        Self {
            term: s!(),
            max: MAX_RESULTS,
            base: s!(BASE_URL),
            out: Output::Stdout,
        }
    }
}

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        println!("{total} article block(s) on the listing");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, title: &str) {
        println!("  + {title}");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;

    let mut session = HttpListing::open(&params.base)?;
    let term = params.term.trim().to_lowercase();
    let articles = collect_articles(&mut session, &term, params.max, &mut CliProgress);
    println!("{} record(s) extracted", articles.len());

    match &params.out {
        Output::Stdout => {
            for rec in &articles {
                let img = rec.image_url.as_deref().unwrap_or("-");
                println!("{} | {} | {}", rec.display_title(), rec.link, img);
            }
        }
        Output::Db(path) => {
            let db = Db::open(path)?;
            let tally = db.append_all(&articles);
            println!("{} saved, {} skipped (duplicate)", tally.inserted, tally.skipped);
        }
        Output::Csv(path) => {
            let summary = bundle::export_bundle(&articles, path)?;
            println!("Wrote {} row(s) to {}", summary.rows, summary.csv_path.display());
            println!("HTML preview: {}", summary.html_path.display());
        }
    }

    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--search" => {
                params.term = args.next().ok_or("Missing value for --search")?;
            }
            "-n" | "--max" => {
                let v: usize = args.next().ok_or("Missing value for --max")?.parse()?;
                if v == 0 {
                    return Err("--max must be at least 1".into());
                }
                params.max = v;
            }
            "--base" => params.base = args.next().ok_or("Missing value for --base")?,
            "--db" => {
                params.out = Output::Db(PathBuf::from(args.next().ok_or("Missing value for --db")?));
            }
            "--csv" => {
                params.out = Output::Csv(PathBuf::from(args.next().ok_or("Missing value for --csv")?));
            }
            "-h" | "--help" => {
                eprintln!("{USAGE}");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}
