use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, DataType, Range, Reader, Sheets};

use super::error::LoadError;
use super::model::{CellValue, Datasets, Table};
use super::{INVENTORY_SHEET, MEASUREMENTS_SHEET, SALARY_SHEET};

// ---------------------------------------------------------------------------
// Source abstraction
// ---------------------------------------------------------------------------

/// Something that can produce the three dashboard tables.
///
/// One call to [`TableSource::load`] is one physical read of the resource.
pub trait TableSource {
    fn load(&self) -> Result<Datasets, LoadError>;
}

// ---------------------------------------------------------------------------
// Workbook source
// ---------------------------------------------------------------------------

/// Reads the dashboard tables from a spreadsheet on disk.
///
/// Any format `calamine` detects from the extension works (`.xlsx`, `.xls`,
/// `.xlsb`, `.ods`).
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    path: PathBuf,
}

impl WorkbookSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        WorkbookSource { path: path.into() }
    }
}

impl TableSource for WorkbookSource {
    fn load(&self) -> Result<Datasets, LoadError> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|source| LoadError::Open {
            path: self.path.clone(),
            source,
        })?;

        Ok(Datasets {
            salary: read_sheet(&mut workbook, &self.path, SALARY_SHEET)?,
            inventory: read_sheet(&mut workbook, &self.path, INVENTORY_SHEET)?,
            measurements: read_sheet(&mut workbook, &self.path, MEASUREMENTS_SHEET)?,
        })
    }
}

fn read_sheet(
    workbook: &mut Sheets<BufReader<File>>,
    path: &Path,
    sheet: &str,
) -> Result<Table, LoadError> {
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(LoadError::MissingSheet {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| LoadError::Sheet {
            sheet: sheet.to_string(),
            source,
        })?;

    let table = table_from_range(sheet, &range);
    log::debug!(
        "Read sheet '{sheet}': {} rows, columns {:?}",
        table.len(),
        table.columns
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Range → Table
// ---------------------------------------------------------------------------

/// Convert a sheet's used range into a [`Table`].
///
/// The first row is the header. Blank header cells are named `Unnamed: <i>`
/// and repeated names get a `.<k>` suffix, so every column stays addressable.
pub fn table_from_range(name: &str, range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Table::new(name, Vec::new(), Vec::new());
    };

    let columns = header_names(header);
    let rows = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    Table::new(name, columns, rows)
}

fn header_names(header: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let base = match cell_value(cell) {
                CellValue::Null => format!("Unnamed: {i}"),
                other => other.to_string(),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}.{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::String(cell.to_string())),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        // #N/A, #DIV/0! and friends read as missing values.
        Data::Error(_) | Data::Empty => CellValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(cells: &[&[Data]]) -> Range<Data> {
        let height = cells.len() as u32;
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn header_row_becomes_columns_and_order_is_kept() {
        let r = range(&[
            &[s("Volume (m3)"), s("Length (mm)")],
            &[Data::Float(0.036), Data::Float(600.0)],
            &[Data::Float(0.072), Data::Int(600)],
        ]);
        let table = table_from_range("AAC Measurements", &r);

        assert_eq!(table.name, "AAC Measurements");
        assert_eq!(table.columns, vec!["Volume (m3)", "Length (mm)"]);
        assert_eq!(
            table.rows,
            vec![
                vec![CellValue::Float(0.036), CellValue::Float(600.0)],
                vec![CellValue::Float(0.072), CellValue::Integer(600)],
            ]
        );
    }

    #[test]
    fn blank_and_duplicate_headers_are_named() {
        let r = range(&[
            &[s("Waste (kg)"), Data::Empty, s("Waste (kg)")],
            &[Data::Float(1.0), Data::Float(2.0), Data::Float(3.0)],
        ]);
        let table = table_from_range("Inventory Data", &r);
        assert_eq!(table.columns, vec!["Waste (kg)", "Unnamed: 1", "Waste (kg).1"]);
    }

    #[test]
    fn empty_and_error_cells_are_null() {
        let r = range(&[
            &[s("Current Salary"), s("Job Title")],
            &[Data::Empty, Data::Error(calamine::CellErrorType::NA)],
        ]);
        let table = table_from_range("Employee Salary Data", &r);
        assert_eq!(table.rows, vec![vec![CellValue::Null, CellValue::Null]]);
    }

    #[test]
    fn header_only_sheet_has_no_rows() {
        let r = range(&[&[s("Date"), s("Blocks Made")]]);
        let table = table_from_range("Inventory Data", &r);
        assert_eq!(table.columns.len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn empty_range_gives_empty_table() {
        let table = table_from_range("AAC Measurements", &Range::empty());
        assert!(table.columns.is_empty());
        assert!(table.is_empty());
    }

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
    }

    #[test]
    fn workbook_tables_are_read_by_sheet_name() {
        // Sheets are stored Inventory, AAC, Salary in this workbook.
        let datasets = WorkbookSource::new(fixture("mepcrete_sample.xlsx"))
            .load()
            .unwrap();

        assert_eq!(datasets.salary.name, SALARY_SHEET);
        assert_eq!(
            datasets.salary.columns,
            vec!["Education Level", "Job Title", "Current Salary"]
        );
        assert_eq!(
            datasets.salary.category_column("Job Title").unwrap(),
            vec![Some("Engineer".to_string()), Some("Operator".to_string())]
        );
        assert_eq!(
            datasets.salary.numeric_column("Current Salary").unwrap(),
            vec![Some(60000.0), Some(30000.0)]
        );

        assert_eq!(datasets.inventory.name, INVENTORY_SHEET);
        assert_eq!(
            datasets.inventory.columns,
            vec!["Date", "Blocks Made", "Blocks Sold", "Waste (kg)"]
        );
        assert_eq!(
            datasets.inventory.numeric_column("Waste (kg)").unwrap(),
            vec![Some(12.5), Some(9.0)]
        );

        assert_eq!(datasets.measurements.name, MEASUREMENTS_SHEET);
        assert_eq!(datasets.measurements.columns, vec!["Length (mm)", "Volume (m3)"]);
        assert_eq!(
            datasets.measurements.numeric_column("Volume (m3)").unwrap(),
            vec![Some(0.012), Some(0.03)]
        );
    }

    #[test]
    fn workbook_date_cells_keep_their_day() {
        let datasets = WorkbookSource::new(fixture("mepcrete_sample.xlsx"))
            .load()
            .unwrap();
        let days: Vec<String> = crate::view::inventory::coerce_dates(&datasets.inventory)
            .unwrap()
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(days, vec!["2024-01-02", "2024-01-01"]);
    }

    #[test]
    fn absent_sheet_is_reported_by_name() {
        let path = fixture("mepcrete_no_inventory.xlsx");
        let err = WorkbookSource::new(&path).load().unwrap_err();
        match err {
            LoadError::MissingSheet { path: p, sheet } => {
                assert_eq!(p, path);
                assert_eq!(sheet, INVENTORY_SHEET);
            }
            other => panic!("expected a missing sheet, got {other:?}"),
        }
    }

    #[test]
    fn missing_workbook_fails_to_open() {
        let source = WorkbookSource::new("does/not/exist/mepcrete.xlsx");
        let err = source.load().unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }), "got {err:?}");
    }
}
