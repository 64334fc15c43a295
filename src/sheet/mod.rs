pub mod loader;
pub mod resolve;
pub mod validate;

use std::path::Path;

use crate::error::SlipError;
use crate::model::slip::LookupKey;
use crate::render::{self, RenderedSlip};

/// The whole pipeline for one request: load the master file, validate the
/// key against it, derive the slip, render it to disk. Runs to completion
/// before the response is produced; nothing is shared between requests.
pub fn generate_slip(
    master: &Path,
    key: &LookupKey,
    out_dir: &Path,
) -> Result<RenderedSlip, SlipError> {
    let table = loader::load_table(master)?;
    validate::validate(&table, &key.emp_code, &key.month)?;
    let slip = resolve::resolve(&table, key)?;
    render::render(&slip, out_dir)
}
