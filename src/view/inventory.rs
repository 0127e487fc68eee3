use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::data::error::ColumnError;
use crate::data::model::{CellValue, Table};

use super::chart::{Series, SeriesKind, TimeSeriesChart};

pub const DATE: &str = "Date";
pub const BLOCKS_MADE: &str = "Blocks Made";
pub const BLOCKS_SOLD: &str = "Blocks Sold";
pub const WASTE: &str = "Waste (kg)";

/// Text layouts accepted for dates stored as strings. Slash dates are read
/// month first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryView {
    /// Blocks made and sold, one line each.
    pub production: TimeSeriesChart,
    /// Waste per day as bars.
    pub waste: TimeSeriesChart,
}

/// Build the inventory section. Every row must carry a usable date; rows are
/// shown in ascending date order, ties in sheet order.
pub fn render(table: &Table) -> Result<InventoryView, ColumnError> {
    let dates = coerce_dates(table)?;
    let made = table.numeric_column(BLOCKS_MADE)?;
    let sold = table.numeric_column(BLOCKS_SOLD)?;
    let waste = table.numeric_column(WASTE)?;

    let mut order: Vec<usize> = (0..dates.len()).collect();
    order.sort_by_key(|&i| dates[i]);

    let index: Vec<NaiveDateTime> = order.iter().map(|&i| dates[i]).collect();
    let reorder = |values: &[Option<f64>]| order.iter().map(|&i| values[i]).collect::<Vec<_>>();

    Ok(InventoryView {
        production: TimeSeriesChart {
            kind: SeriesKind::Line,
            index: index.clone(),
            series: vec![
                Series {
                    name: BLOCKS_MADE.to_string(),
                    values: reorder(&made),
                },
                Series {
                    name: BLOCKS_SOLD.to_string(),
                    values: reorder(&sold),
                },
            ],
        },
        waste: TimeSeriesChart {
            kind: SeriesKind::Bar,
            index,
            series: vec![Series {
                name: WASTE.to_string(),
                values: reorder(&waste),
            }],
        },
    })
}

/// Coerce the date column, failing on the first cell that is not a date.
pub fn coerce_dates(table: &Table) -> Result<Vec<NaiveDateTime>, ColumnError> {
    table
        .column(DATE)?
        .into_iter()
        .enumerate()
        .map(|(row, cell)| {
            coerce_date(cell).ok_or_else(|| ColumnError::InvalidCell {
                table: table.name.clone(),
                column: DATE.to_string(),
                row,
                expected: "a date",
                found: cell.to_string(),
            })
        })
        .collect()
}

fn coerce_date(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Float(serial) => from_excel_serial(*serial),
        CellValue::Integer(serial) => from_excel_serial(*serial as f64),
        CellValue::String(text) => parse_date_text(text.trim()),
        CellValue::Bool(_) | CellValue::Null => None,
    }
}

/// Days since 1899-12-30, the epoch spreadsheets use for serial dates.
fn from_excel_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::try_milliseconds(millis)?)
}

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
