use actix_web::http::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between receiving a lookup request and
/// handing back a rendered slip. All variants are recovered at the request
/// boundary and turned into a plain-text message for the caller.
#[derive(Debug, Error)]
pub enum SlipError {
    #[error("The file '{0}' could not be found. Please ensure the file exists or upload it.")]
    FileMissing(String),

    #[error("Unsupported file format '.{0}'. Please upload a valid CSV or Excel file.")]
    UnsupportedFormat(String),

    #[error("An error occurred while processing the file: {0}")]
    Parse(String),

    #[error("The file is missing the required column: '{0}'.")]
    MissingColumn(String),

    #[error("{field} '{value}' {}", key_miss_detail(.field))]
    KeyNotFound { field: &'static str, value: String },

    #[error("No records found for Employee Code {emp_code} and Month {month}.")]
    NoMatch { emp_code: String, month: String },

    #[error("Failed to render salary slip: {0}")]
    Render(String),
}

// The form wording differs between the two key fields.
fn key_miss_detail(field: &str) -> &'static str {
    if field == "Salary Month" {
        "is invalid or not found in the file."
    } else {
        "not found in the file."
    }
}

impl SlipError {
    /// Lookup failures are "not found"; everything the caller can fix about
    /// the file or the request is a bad request; rendering is on us.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SlipError::FileMissing(_)
            | SlipError::UnsupportedFormat(_)
            | SlipError::Parse(_)
            | SlipError::MissingColumn(_) => StatusCode::BAD_REQUEST,
            SlipError::KeyNotFound { .. } | SlipError::NoMatch { .. } => StatusCode::NOT_FOUND,
            SlipError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
