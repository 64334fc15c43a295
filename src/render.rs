use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use once_cell::sync::Lazy;

use crate::error::SlipError;
use crate::model::slip::DerivedSlip;

static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut hb = Handlebars::new();
    hb.register_template_string(
        "salary_slip",
        include_str!("../templates/salary_slip.hbs"),
    )
    .expect("salary_slip template must compile");
    hb
});

/// A slip that has been written to disk.
#[derive(Debug, Clone)]
pub struct RenderedSlip {
    pub filename: String,
    pub path: PathBuf,
    pub html: String,
}

/// Deterministic output name for a key, so the same lookup always lands on
/// the same file and can be fetched again later.
pub fn output_filename(emp_code: &str, month: &str) -> String {
    format!(
        "salary_slip_{}_{}.html",
        sanitize(emp_code),
        sanitize(month)
    )
}

// Key components go into a filename; anything outside a safe set becomes '_'.
fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Fill the slip template and write the document under `out_dir`.
/// Formatting only; every number on the slip was derived upstream.
pub fn render(slip: &DerivedSlip, out_dir: &Path) -> Result<RenderedSlip, SlipError> {
    let html = TEMPLATES
        .render("salary_slip", slip)
        .map_err(|e| SlipError::Render(e.to_string()))?;

    let filename = output_filename(&slip.emp_code, &slip.month);
    let path = out_dir.join(&filename);
    fs::write(&path, &html).map_err(|e| SlipError::Render(e.to_string()))?;

    Ok(RenderedSlip {
        filename,
        path,
        html,
    })
}
