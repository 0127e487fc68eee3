mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;
mod view;

use anyhow::Context;
use app::DashboardApp;
use config::DashboardConfig;
use data::cache::DatasetCache;
use data::loader::WorkbookSource;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dashboard is useless without its data: load before opening a window.
    let cache = DatasetCache::new(WorkbookSource::new(config.workbook_path.clone()));
    cache.get().with_context(|| {
        format!(
            "loading dashboard data from {}",
            config.workbook_path.display()
        )
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(cache)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
