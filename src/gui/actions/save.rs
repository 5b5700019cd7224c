// src/gui/actions/save.rs

use crate::config::options::PersistMode;
use crate::data::ArticleRecord;
use crate::gui::app::App;
use crate::store::bundle;

pub fn save(app: &mut App) {
    let real: Vec<ArticleRecord> = app
        .articles
        .iter()
        .filter(|r| !r.is_placeholder())
        .cloned()
        .collect();

    if real.is_empty() {
        logd!("Save: clicked, but there's nothing to save");
        app.set_status("Nothing to save");
        return;
    }

    match app.state.options.persist.mode {
        PersistMode::Sqlite => {
            let Some(db) = &app.db else {
                app.set_status("Database unavailable (see log)");
                return;
            };
            let tally = db.append_all(&real);
            app.set_status(format!(
                "Saved {} new, {} skipped (duplicate)",
                tally.inserted, tally.skipped
            ));
        }

        PersistMode::CsvBundle => {
            // normalize out_path first (mutates app) before exporting
            if app.out_path_dirty {
                app.state.options.persist.set_path(&app.out_path_text);
                logf!(
                    "Export: out path set → {}",
                    app.state.options.persist.out_path().display()
                );
                app.out_path_dirty = false;
            }

            let path = app.state.options.persist.out_path();
            match bundle::export_bundle(&real, &path) {
                Ok(summary) => {
                    app.set_status(format!(
                        "Exported {} row(s) → {}",
                        summary.rows,
                        summary.csv_path.display()
                    ));
                }
                Err(e) => {
                    loge!("Export: error: {}", e);
                    app.set_status(format!("Export error: {e}"));
                }
            }
        }
    }
}
