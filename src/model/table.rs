use std::collections::HashMap;

use crate::error::SlipError;

/// A single spreadsheet cell. CSV cells come in as text; Excel cells keep
/// their numeric type so coercion does not round-trip through strings.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// String form used for key comparison and display. Integral numbers
    /// render without a fractional part so an Excel cell holding 101.0
    /// compares equal to the typed-in code "101".
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                // f64 holds integers exactly only up to 2^53; past that the
                // i64 cast would invent digits, so stay with to_string().
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
        }
    }

    /// Numeric coercion for summed columns: value → f64 → truncate toward
    /// zero. Empty cells contribute 0; "100.9" contributes 100.
    pub fn as_truncated_int(&self, column: &str) -> Result<i64, SlipError> {
        match self {
            CellValue::Empty => Ok(0),
            CellValue::Number(n) => Ok(n.trunc() as i64),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(0);
                }
                trimmed.parse::<f64>().map(|n| n.trunc() as i64).map_err(|_| {
                    SlipError::Parse(format!(
                        "value '{trimmed}' in column '{column}' is not numeric"
                    ))
                })
            }
        }
    }
}

/// Trim + ASCII-lowercase, applied to every header before any lookup.
pub fn normalize_column(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// One spreadsheet row, keyed by normalized column name.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: HashMap<String, CellValue>,
}

impl Row {
    pub fn insert(&mut self, column: String, value: CellValue) {
        // First occurrence wins when a file repeats a header.
        self.cells.entry(column).or_insert(value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Display string for the cell, or None when the column is absent.
    pub fn display(&self, column: &str) -> Option<String> {
        self.cells.get(column).map(CellValue::display)
    }
}

/// An in-memory spreadsheet: normalized header names plus rows in file
/// order. Immutable for the duration of one lookup.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// True if any row's cell in `column` string-equals `value`.
    pub fn column_contains(&self, column: &str, value: &str) -> bool {
        self.rows
            .iter()
            .any(|row| row.display(column).is_some_and(|v| v == value))
    }
}
