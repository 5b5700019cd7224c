// src/gui/components/save_bar.rs

use eframe::egui;
use crate::config::options::PersistMode;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        {
            let persist = &mut app.state.options.persist;
            let prev = persist.mode;

            ui.label("Save to:");
            ui.selectable_value(&mut persist.mode, PersistMode::Sqlite, "SQLite");
            ui.selectable_value(&mut persist.mode, PersistMode::CsvBundle, "CSV + HTML");

            if persist.mode != prev {
                logf!("UI: persist mode → {:?}", persist.mode);
            }
        }

        if app.state.options.persist.mode == PersistMode::CsvBundle {
            let resp = ui.add(
                egui::TextEdit::singleline(&mut app.out_path_text).desired_width(260.0),
            );
            if resp.changed() {
                app.out_path_dirty = true;
            }
        }

        if ui.button("Save").clicked() {
            crate::gui::actions::save::save(app);
        }
    });

    ui.label(app.status.as_str());
}
