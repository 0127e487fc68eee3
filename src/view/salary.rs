use crate::data::error::ColumnError;
use crate::data::model::Table;

use super::chart::{BoxGroup, CategoryBarChart, CategoryBoxPlot, EstimateBar, CATEGORY_LABEL_ROTATION_DEG};
use super::stats::{self, BoxStats};

pub const EDUCATION_LEVEL: &str = "Education Level";
pub const JOB_TITLE: &str = "Job Title";
pub const CURRENT_SALARY: &str = "Current Salary";

/// Salary distribution by education level next to mean salary by job title.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryView {
    pub by_education: CategoryBoxPlot,
    pub by_job_title: CategoryBarChart,
}

/// Build the salary section. Fails if any of the three columns is missing
/// or a salary cell is not numeric.
pub fn render(table: &Table) -> Result<SalaryView, ColumnError> {
    let salaries = table.numeric_column(CURRENT_SALARY)?;
    let education = table.category_column(EDUCATION_LEVEL)?;
    let job_titles = table.category_column(JOB_TITLE)?;

    let groups = stats::group_by_first_appearance(&education, &salaries)
        .into_iter()
        .map(|(category, values)| BoxGroup {
            category,
            stats: BoxStats::from_values(&values),
        })
        .collect();

    // Bars show the mean salary per title.
    let bars = stats::group_by_first_appearance(&job_titles, &salaries)
        .into_iter()
        .map(|(category, values)| EstimateBar {
            category,
            value: stats::mean(&values),
            interval: stats::mean_confidence_interval(&values),
        })
        .collect();

    Ok(SalaryView {
        by_education: CategoryBoxPlot {
            category_axis: EDUCATION_LEVEL.to_string(),
            value_axis: CURRENT_SALARY.to_string(),
            groups,
            label_rotation_deg: CATEGORY_LABEL_ROTATION_DEG,
        },
        by_job_title: CategoryBarChart {
            category_axis: JOB_TITLE.to_string(),
            value_axis: CURRENT_SALARY.to_string(),
            bars,
            label_rotation_deg: CATEGORY_LABEL_ROTATION_DEG,
        },
    })
}
