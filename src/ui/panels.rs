use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::data::error::ColumnError;
use crate::data::model::Table;
use crate::state::AppState;
use crate::ui::{plot, table};
use crate::view::chart::Metric;
use crate::view::{Section, SectionView};

// ---------------------------------------------------------------------------
// Top bar – page title
// ---------------------------------------------------------------------------

pub fn page_header(ui: &mut Ui) {
    ui.add_space(4.0);
    ui.heading(RichText::new("📊 Mepcrete Data Analytics Dashboard").size(24.0));
    ui.label(
        "Analyze employee salaries, block measurements, and inventory trends with interactive visuals.",
    );
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the navigation sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Navigation");
    ui.separator();
    ui.label("Go to");
    let selected = state.section.label();
    for label in Section::ALL.map(Section::label) {
        if ui.radio(label == selected, label).clicked() {
            if let Some(section) = Section::from_label(label) {
                state.section = section;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Central panel – selected section
// ---------------------------------------------------------------------------

/// Render the selected section: subheader, two chart columns, raw table.
pub fn section_panel(
    ui: &mut Ui,
    section: Section,
    view: &Result<SectionView, ColumnError>,
    raw: &Table,
) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(section.heading());
            ui.label(section.description());
            ui.add_space(8.0);

            let view = match view {
                Ok(view) => view,
                Err(e) => {
                    ui.label(RichText::new(format!("Error: {e}")).color(Color32::RED));
                    return;
                }
            };

            ui.columns(2, |cols: &mut [Ui]| match view {
                SectionView::Salary(v) => {
                    plot::box_plot(&mut cols[0], "salary_by_education", &v.by_education);
                    plot::bar_chart(&mut cols[1], "salary_by_job_title", &v.by_job_title);
                }
                SectionView::Inventory(v) => {
                    plot::time_series(&mut cols[0], "inventory_production", &v.production);
                    plot::time_series(&mut cols[1], "inventory_waste", &v.waste);
                }
                SectionView::Measurements(v) => {
                    metric(&mut cols[0], &v.average_volume);
                    cols[0].add_space(12.0);
                    metric(&mut cols[0], &v.max_volume);
                    plot::histogram(&mut cols[1], "volume_histogram", &v.histogram);
                }
            });

            ui.add_space(8.0);
            ui.separator();
            table::raw_table(ui, raw);
        });
}

/// A labelled scalar in large type.
fn metric(ui: &mut Ui, metric: &Metric) {
    ui.label(RichText::new(&metric.label).weak());
    ui.label(RichText::new(metric.display_value()).size(32.0));
}
