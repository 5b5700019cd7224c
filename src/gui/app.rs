// src/gui/app.rs
use std::error::Error;

use eframe::egui::{self, TextureHandle};

use crate::{
    config::state::AppState,
    data::ArticleRecord,
    store::db::Db,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "News Scraper FLZ",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> PersistOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // current scrape result; replaced wholesale on the next scrape
    pub articles: Vec<ArticleRecord>,
    pub images: Vec<Option<TextureHandle>>,

    pub status: String,

    // process-lifetime connection; None if opening failed at startup
    pub db: Option<Db>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let db = match Db::open(&state.options.persist.db_path) {
            Ok(db) => {
                logf!("Init: database ready at {}", state.options.persist.db_path.display());
                Some(db)
            }
            Err(e) => {
                loge!("Init: database unavailable: {}", e);
                None
            }
        };

        let out_path_text = state.options.persist.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            out_path_text,
            out_path_dirty: false,
            articles: Vec::new(),
            images: Vec::new(),
            status: s!("Idle"),
            db,
        };

        // initial load, same as submitting an empty search
        super::actions::scrape::scrape(&mut app, &cc.egui_ctx);
        app
    }

    #[inline]
    pub fn set_status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("save").show(ctx, |ui| {
            crate::gui::components::save_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::news_grid::draw(ui, self);
        });
    }
}
