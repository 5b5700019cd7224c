// src/bin/cli.rs
use flz_scrape::cli;

fn main() {
    // Report hook for anything that escapes run()
    if let Err(e) = color_eyre::install() {
        eprintln!("{e}");
    }

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
