use eframe::egui::{self, Color32, RichText};

use crate::data::cache::DatasetCache;
use crate::data::loader::WorkbookSource;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    cache: DatasetCache<WorkbookSource>,
    pub state: AppState,
}

impl DashboardApp {
    /// `cache` is expected to be loaded already; the first frame would
    /// otherwise block on the workbook read.
    pub fn new(cache: DatasetCache<WorkbookSource>) -> Self {
        if !cache.is_loaded() {
            log::warn!("Datasets not loaded yet; the first frame will read the workbook");
        }
        Self {
            cache,
            state: AppState::default(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: page title ----
        egui::TopBottomPanel::top("page_header").show(ctx, |ui| {
            panels::page_header(ui);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("navigation")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        let datasets = match self.cache.get() {
            Ok(datasets) => datasets,
            Err(e) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.label(RichText::new(format!("Error: {e:#}")).color(Color32::RED));
                });
                return;
            }
        };

        // ---- Central panel: selected section ----
        let section = self.state.section;
        let view = self.state.view(datasets);
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::section_panel(ui, section, view, section.table(datasets));
        });
    }
}
