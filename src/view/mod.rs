/// Section views: what each dashboard section shows, independent of drawing.
///
/// ```text
///   Section ──► render() ──► salary / inventory / measurements ──► SectionView
///                                  │
///                                  ▼
///                               stats
/// ```
///
/// Every renderer is a pure function of its table.

pub mod chart;
pub mod inventory;
pub mod measurements;
pub mod salary;
pub mod stats;

use crate::data::error::ColumnError;
use crate::data::model::{Datasets, Table};

use inventory::InventoryView;
use measurements::MeasurementsView;
use salary::SalaryView;

// ---------------------------------------------------------------------------
// Section – the navigation set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    EmployeeSalary,
    Inventory,
    AacMeasurements,
}

impl Section {
    /// Sections in sidebar order.
    pub const ALL: [Section; 3] = [
        Section::EmployeeSalary,
        Section::Inventory,
        Section::AacMeasurements,
    ];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Section::EmployeeSalary => "Employee Salary",
            Section::Inventory => "Inventory",
            Section::AacMeasurements => "AAC Measurements",
        }
    }

    /// Look a section up by its sidebar label.
    pub fn from_label(label: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn heading(self) -> &'static str {
        match self {
            Section::EmployeeSalary => "💼 Employee Salary Analysis",
            Section::Inventory => "🏗 Inventory Trends",
            Section::AacMeasurements => "📐 AAC Block Measurements",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Section::EmployeeSalary => {
                "Explore employee data across job roles, education levels, and industries."
            }
            Section::Inventory => "Analyze block production, sales, and waste over time.",
            Section::AacMeasurements => {
                "Inspect volume distribution and dimensions of AAC blocks."
            }
        }
    }

    /// The loaded table backing this section.
    pub fn table(self, datasets: &Datasets) -> &Table {
        match self {
            Section::EmployeeSalary => &datasets.salary,
            Section::Inventory => &datasets.inventory,
            Section::AacMeasurements => &datasets.measurements,
        }
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum SectionView {
    Salary(SalaryView),
    Inventory(InventoryView),
    Measurements(MeasurementsView),
}

impl SectionView {
    pub fn section(&self) -> Section {
        match self {
            SectionView::Salary(_) => Section::EmployeeSalary,
            SectionView::Inventory(_) => Section::Inventory,
            SectionView::Measurements(_) => Section::AacMeasurements,
        }
    }
}

/// Render the selected section from the loaded datasets.
pub fn render(section: Section, datasets: &Datasets) -> Result<SectionView, ColumnError> {
    let table = section.table(datasets);
    match section {
        Section::EmployeeSalary => salary::render(table).map(SectionView::Salary),
        Section::Inventory => inventory::render(table).map(SectionView::Inventory),
        Section::AacMeasurements => measurements::render(table).map(SectionView::Measurements),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;

    use crate::data::model::{CellValue, Datasets, Table};

    use super::{inventory, measurements, salary};

    /// A small, valid copy of the workbook.
    pub fn datasets() -> Datasets {
        let date = |d| {
            CellValue::DateTime(
                NaiveDate::from_ymd_opt(2024, 5, d)
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .unwrap(),
            )
        };
        Datasets {
            salary: Table::new(
                "Employee Salary Data",
                vec![
                    "Employee ID".into(),
                    salary::EDUCATION_LEVEL.into(),
                    salary::JOB_TITLE.into(),
                    salary::CURRENT_SALARY.into(),
                ],
                vec![
                    vec![
                        CellValue::Integer(1),
                        CellValue::String("Diploma".into()),
                        CellValue::String("Operator".into()),
                        CellValue::Float(28000.0),
                    ],
                    vec![
                        CellValue::Integer(2),
                        CellValue::String("Bachelor's".into()),
                        CellValue::String("Engineer".into()),
                        CellValue::Float(52000.0),
                    ],
                ],
            ),
            inventory: Table::new(
                "Inventory Data",
                vec![
                    inventory::DATE.into(),
                    inventory::BLOCKS_MADE.into(),
                    inventory::BLOCKS_SOLD.into(),
                    inventory::WASTE.into(),
                ],
                vec![
                    vec![date(2), CellValue::Float(500.0), CellValue::Float(420.0), CellValue::Float(12.5)],
                    vec![date(1), CellValue::Float(480.0), CellValue::Float(455.0), CellValue::Float(9.0)],
                ],
            ),
            measurements: Table::new(
                "AAC Measurements",
                vec![
                    "Length (mm)".into(),
                    "Width (mm)".into(),
                    "Height (mm)".into(),
                    measurements::VOLUME.into(),
                ],
                vec![
                    vec![
                        CellValue::Float(600.0),
                        CellValue::Float(200.0),
                        CellValue::Float(100.0),
                        CellValue::Float(0.012),
                    ],
                    vec![
                        CellValue::Float(600.0),
                        CellValue::Float(200.0),
                        CellValue::Float(250.0),
                        CellValue::Float(0.03),
                    ],
                ],
            ),
        }
    }
}
