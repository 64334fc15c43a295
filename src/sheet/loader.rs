use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::SlipError;
use crate::model::table::{CellValue, Row, Table, normalize_column};

/// Read a master spreadsheet into an in-memory table. The format is picked
/// by extension: `.csv` goes through the csv crate, `.xls`/`.xlsx` through
/// calamine. Header names are normalized (trim + lowercase) on the way in.
pub fn load_table(path: &Path) -> Result<Table, SlipError> {
    if !path.exists() {
        return Err(SlipError::FileMissing(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => load_csv(path),
        "xls" | "xlsx" => load_excel(path),
        other => Err(SlipError::UnsupportedFormat(other.to_string())),
    }
}

fn load_csv(path: &Path) -> Result<Table, SlipError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| SlipError::Parse(e.to_string()))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| SlipError::Parse(e.to_string()))?
        .iter()
        .map(normalize_column)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SlipError::Parse(e.to_string()))?;
        let mut row = Row::default();
        for (idx, column) in columns.iter().enumerate() {
            let value = match record.get(idx) {
                None => CellValue::Empty,
                Some("") => CellValue::Empty,
                Some(text) => CellValue::Text(text.to_string()),
            };
            row.insert(column.clone(), value);
        }
        rows.push(row);
    }

    Ok(Table::new(columns, rows))
}

fn load_excel(path: &Path) -> Result<Table, SlipError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| SlipError::Parse(e.to_string()))?;

    // Data lives on the first worksheet; the first row is the header row.
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SlipError::Parse("workbook contains no worksheets".to_string()))?
        .map_err(|e| SlipError::Parse(e.to_string()))?;

    let mut row_iter = range.rows();
    let columns: Vec<String> = match row_iter.next() {
        Some(header) => header
            .iter()
            .map(|cell| normalize_column(&cell.to_string()))
            .collect(),
        None => return Err(SlipError::Parse("worksheet is empty".to_string())),
    };

    let mut rows = Vec::new();
    for sheet_row in row_iter {
        let mut row = Row::default();
        for (idx, column) in columns.iter().enumerate() {
            let value = sheet_row.get(idx).map_or(CellValue::Empty, cell_value);
            row.insert(column.clone(), value);
        }
        rows.push(row);
    }

    Ok(Table::new(columns, rows))
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        // Dates keep a "YYYY-MM-DD HH:MM:SS" shape so the DOJ truncation
        // rule can strip the time part.
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::Text(naive.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
