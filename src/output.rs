use log::info;
use std::path::Path;

use crate::model::OutputRow;
use crate::ExtractError;

/// Writes `row` as the only record of the CSV file at `path`.
///
/// The file is created if missing and truncated otherwise; no header is written.
pub fn write_row(row: &OutputRow, path: &Path) -> Result<(), ExtractError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    writer.write_record(&row.fields)?;
    writer.flush().map_err(csv::Error::from)?;

    info!(
        "Wrote {} field(s) to {}",
        row.fields.len(),
        path.display()
    );
    Ok(())
}
