// src/gui/components/news_grid.rs
//
// The cards grid. Purely a view over App's current articles + textures;
// clicking a card title opens the article in the browser.

use eframe::egui::{self, RichText, TextureHandle};
use egui_extras::{Size, StripBuilder};

use crate::config::consts::{CARD_IMAGE_H, CARD_IMAGE_W, GRID_COLS};
use crate::data::ArticleRecord;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.articles.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No articles — enter a term and press Enter").weak());
        });
        return;
    }

    let row_height = CARD_IMAGE_H + 70.0;
    let rows = app.articles.len().div_ceil(GRID_COLS);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for row in 0..rows {
                StripBuilder::new(ui)
                    .size(Size::exact(row_height))
                    .vertical(|mut strip| {
                        strip.strip(|builder| {
                            builder
                                .sizes(Size::remainder(), GRID_COLS)
                                .horizontal(|mut strip| {
                                    for col in 0..GRID_COLS {
                                        let idx = row * GRID_COLS + col;
                                        strip.cell(|ui| {
                                            if let Some(rec) = app.articles.get(idx) {
                                                let tex =
                                                    app.images.get(idx).and_then(|t| t.as_ref());
                                                draw_card(ui, rec, tex);
                                            }
                                        });
                                    }
                                });
                        });
                    });
            }
        });
}

fn draw_card(ui: &mut egui::Ui, rec: &ArticleRecord, tex: Option<&TextureHandle>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            match tex {
                Some(tex) => {
                    ui.add(
                        egui::Image::new(tex)
                            .max_size(egui::vec2(CARD_IMAGE_W, CARD_IMAGE_H)),
                    );
                }
                None => {
                    let caption = if rec.is_placeholder() {
                        "Kein Artikel verfügbar"
                    } else {
                        "Kein Bild"
                    };
                    ui.add_sized(
                        [CARD_IMAGE_W, CARD_IMAGE_H],
                        egui::Label::new(RichText::new(caption).weak()),
                    );
                }
            }

            let clickable = !rec.is_placeholder();
            let button = ui.add_enabled(clickable, egui::Button::new(rec.display_title()));
            if button.clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(&rec.link));
            }
        });
    });
}
