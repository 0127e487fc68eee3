/// Data layer: cell/table types, workbook loading, and the one-time cache.
///
/// Architecture:
/// ```text
///  mepcrete_data_trimmed_200.xlsx
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  sheet → Table (header row + data rows)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  load once, hand out &Datasets thereafter
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Datasets  │  salary / inventory / measurements
///   └──────────┘
/// ```

pub mod cache;
pub mod error;
pub mod loader;
pub mod model;

/// Sheet holding the employee salary table.
pub const SALARY_SHEET: &str = "Employee Salary Data";
/// Sheet holding the daily inventory table.
pub const INVENTORY_SHEET: &str = "Inventory Data";
/// Sheet holding the AAC block measurement table.
pub const MEASUREMENTS_SHEET: &str = "AAC Measurements";
