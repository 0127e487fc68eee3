//! Chart descriptions produced by the renderers and drawn by `ui::plot`.

use chrono::NaiveDateTime;

use super::stats::BoxStats;

/// Rotation applied to category tick labels, in degrees counter-clockwise.
pub const CATEGORY_LABEL_ROTATION_DEG: f32 = 45.0;

// ---------------------------------------------------------------------------
// Categorical charts
// ---------------------------------------------------------------------------

/// One box per category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBoxPlot {
    pub category_axis: String,
    pub value_axis: String,
    pub groups: Vec<BoxGroup>,
    pub label_rotation_deg: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub category: String,
    /// `None` when the category has no values.
    pub stats: Option<BoxStats>,
}

/// One bar per category showing the mean, with a 95% interval when the
/// category has at least two values.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBarChart {
    pub category_axis: String,
    pub value_axis: String,
    pub bars: Vec<EstimateBar>,
    pub label_rotation_deg: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimateBar {
    pub category: String,
    pub value: Option<f64>,
    pub interval: Option<(f64, f64)>,
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Bar,
}

/// Series sharing an ascending date index.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesChart {
    pub kind: SeriesKind,
    pub index: Vec<NaiveDateTime>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    /// One entry per index point; `None` is a gap.
    pub values: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// Distribution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramChart {
    pub value_axis: String,
    pub bins: Vec<HistogramBin>,
    /// Density curve scaled to the count axis; empty when it can't be estimated.
    pub density: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub left: f64,
    pub right: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

// ---------------------------------------------------------------------------
// Scalar metric
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: Option<f64>,
}

impl Metric {
    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) => format!("{v}"),
            None => "n/a".to_string(),
        }
    }
}
