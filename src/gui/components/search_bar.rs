// src/gui/components/search_bar.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Search:");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.search_text)
                .hint_text("Search term, Enter to scrape")
                .desired_width(ui.available_width() - 80.0),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Scrape").clicked() || submitted {
            let ctx = ui.ctx().clone();
            crate::gui::actions::scrape::scrape(app, &ctx);
        }
    });
}
