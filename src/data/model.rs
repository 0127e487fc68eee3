use std::fmt;

use chrono::{NaiveDateTime, NaiveTime};

use super::error::ColumnError;

// ---------------------------------------------------------------------------
// CellValue – a single spreadsheet cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value, as read from the workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => {
                // Spreadsheets store every number as a float; show whole ones without a fraction.
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{v:.0}")
                } else {
                    let s = format!("{v:.4}");
                    write!(f, "{}", s.trim_end_matches('0').trim_end_matches('.'))
                }
            }
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::DateTime(dt) if dt.time() == NaiveTime::MIN => {
                write!(f, "{}", dt.format("%Y-%m-%d"))
            }
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64`, for numeric columns.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Table – one sheet of the workbook
// ---------------------------------------------------------------------------

/// A rectangular table: named columns, rows in sheet order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Sheet the table was read from.
    pub name: String,
    /// Header names, exactly as written in the sheet.
    pub columns: Vec<String>,
    /// Data rows; every row has `columns.len()` cells.
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Table {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, matched exactly (case and whitespace included).
    pub fn column_index(&self, column: &str) -> Result<usize, ColumnError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| ColumnError::Missing {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// All cells of one column, in row order.
    pub fn column(&self, column: &str) -> Result<Vec<&CellValue>, ColumnError> {
        let idx = self.column_index(column)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).unwrap_or(&CellValue::Null))
            .collect())
    }

    /// Read a numeric column. `Null` cells become `None`; any other
    /// non-numeric cell is an error.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<Option<f64>>, ColumnError> {
        self.column(column)?
            .into_iter()
            .enumerate()
            .map(|(row, cell)| match cell {
                CellValue::Null => Ok(None),
                other => other.as_f64().map(Some).ok_or_else(|| ColumnError::InvalidCell {
                    table: self.name.clone(),
                    column: column.to_string(),
                    row,
                    expected: "a number",
                    found: other.to_string(),
                }),
            })
            .collect()
    }

    /// Read a categorical column as display labels. `Null` cells become `None`.
    pub fn category_column(&self, column: &str) -> Result<Vec<Option<String>>, ColumnError> {
        Ok(self
            .column(column)?
            .into_iter()
            .map(|cell| (!cell.is_null()).then(|| cell.to_string()))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Datasets – the three tables of the workbook
// ---------------------------------------------------------------------------

/// The loaded workbook. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub salary: Table,
    pub inventory: Table,
    pub measurements: Table,
}
