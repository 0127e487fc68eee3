use crate::data::error::ColumnError;
use crate::data::model::Datasets;
use crate::view::{self, Section, SectionView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Section picked in the sidebar.
    pub section: Section,

    /// View of the last rendered section, reused until the selection changes.
    rendered: Option<(Section, Result<SectionView, ColumnError>)>,
}

impl AppState {
    /// View for the selected section, rendering it if the selection changed.
    pub fn view(&mut self, datasets: &Datasets) -> &Result<SectionView, ColumnError> {
        let section = self.section;
        if matches!(&self.rendered, Some((s, _)) if *s != section) {
            self.rendered = None;
        }
        &self
            .rendered
            .get_or_insert_with(|| (section, render_section(section, datasets)))
            .1
    }
}

fn render_section(section: Section, datasets: &Datasets) -> Result<SectionView, ColumnError> {
    log::debug!("Rendering section '{}'", section.label());
    let result = view::render(section, datasets);
    if let Err(e) = &result {
        log::error!("Failed to render section '{}': {e}", section.label());
    }
    result
}
