use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{DietError, Result};
use crate::models::{FoodItem, format_amount};

/// Fixed header row of the exported log.
pub const CSV_HEADER: [&str; 5] = [
    "Name",
    "Calories (kcal)",
    "Protein (g)",
    "Carbs (g)",
    "Fat (g)",
];

/// Serialize logged foods to CSV, one row per entry in log order.
///
/// Names are wrapped in double quotes but not escaped: a name containing `"`
/// or a comma produces a malformed row. Rows are separated by `\n` with no
/// newline after the last one.
pub fn to_csv(logged: &[FoodItem]) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;

    for item in logged {
        wtr.write_record([
            format!("\"{}\"", item.name),
            format_amount(item.calories),
            format_amount(item.protein),
            format_amount(item.carbs),
            format_amount(item.fat),
        ])?;
    }

    let mut bytes = wtr
        .into_inner()
        .map_err(|e| DietError::Io(e.into_error()))?;

    if !logged.is_empty() && bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    Ok(bytes)
}

/// Download name for an export made on `date`: `logged_foods_YYYY-MM-DD.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("logged_foods_{}.csv", date.format("%Y-%m-%d"))
}

/// Write an export into `dir` and return the full path.
pub fn write_export<P: AsRef<Path>>(dir: P, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.as_ref().join(filename);
    fs::write(&path, bytes)?;
    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}
