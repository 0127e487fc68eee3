use crate::data::error::ColumnError;
use crate::data::model::Table;

use super::chart::{HistogramBin, HistogramChart, Metric};
use super::stats;

pub const VOLUME: &str = "Volume (m3)";
pub const HISTOGRAM_BINS: usize = 20;
pub const METRIC_DECIMALS: i32 = 4;
const DENSITY_GRID: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementsView {
    pub average_volume: Metric,
    pub max_volume: Metric,
    pub histogram: HistogramChart,
}

/// Build the AAC measurement section from the volume column. Other
/// dimension columns only appear in the raw table.
pub fn render(table: &Table) -> Result<MeasurementsView, ColumnError> {
    let volumes: Vec<f64> = table.numeric_column(VOLUME)?.into_iter().flatten().collect();

    let rounded = |v: Option<f64>| v.map(|v| stats::round_to(v, METRIC_DECIMALS));

    let (bins, density) = match stats::histogram(&volumes, HISTOGRAM_BINS) {
        Some(hist) => {
            // Scale the density so the curve sits on the count axis.
            let scale = volumes.len() as f64 * hist.bin_width();
            let density = stats::gaussian_kde(&volumes, DENSITY_GRID)
                .into_iter()
                .map(|[x, d]| [x, d * scale])
                .collect();
            let bins = hist
                .edges
                .windows(2)
                .zip(&hist.counts)
                .map(|(edge, &count)| HistogramBin {
                    left: edge[0],
                    right: edge[1],
                    count,
                })
                .collect();
            (bins, density)
        }
        None => (Vec::new(), Vec::new()),
    };

    Ok(MeasurementsView {
        average_volume: Metric {
            label: "Average Volume (m³)".to_string(),
            value: rounded(stats::mean(&volumes)),
        },
        max_volume: Metric {
            label: "Max Volume (m³)".to_string(),
            value: rounded(stats::max(&volumes)),
        },
        histogram: HistogramChart {
            value_axis: VOLUME.to_string(),
            bins,
            density,
        },
    })
}
