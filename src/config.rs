use std::path::PathBuf;

/// Workbook read at startup, relative to the working directory.
pub const DEFAULT_WORKBOOK: &str = "mepcrete_data_trimmed_200.xlsx";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Compiled-in settings for the dashboard window and its data source.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub workbook_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            workbook_path: PathBuf::from(DEFAULT_WORKBOOK),
            window_title: "Mepcrete Analytics Dashboard".to_string(),
            // Wide layout: two charts side by side with the table beneath.
            window_size: [1400.0, 900.0],
            min_window_size: [800.0, 500.0],
        }
    }
}
