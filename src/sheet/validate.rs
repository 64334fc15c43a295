use crate::error::SlipError;
use crate::model::table::Table;

pub const EMP_CODE_COLUMN: &str = "emp code";
pub const MONTH_COLUMN: &str = "month";

/// Check that the table can answer the lookup at all: both required columns
/// exist, and each key value appears somewhere in its column. Column
/// presence is checked before value presence; whether the two values ever
/// share a row is the resolver's problem.
pub fn validate(table: &Table, emp_code: &str, month: &str) -> Result<(), SlipError> {
    for column in [EMP_CODE_COLUMN, MONTH_COLUMN] {
        if !table.has_column(column) {
            return Err(SlipError::MissingColumn(column.to_string()));
        }
    }

    if !table.column_contains(EMP_CODE_COLUMN, emp_code) {
        return Err(SlipError::KeyNotFound {
            field: "Employee Code",
            value: emp_code.to_string(),
        });
    }

    if !table.column_contains(MONTH_COLUMN, month) {
        return Err(SlipError::KeyNotFound {
            field: "Salary Month",
            value: month.to_string(),
        });
    }

    Ok(())
}
