use std::io;
use std::path::Path;

use crate::error::Result;
use crate::models::NutritionSummary;

/// Column names of the per-meal export.
pub const MEAL_CSV_HEADER: [&str; 4] = ["name", "suggested_time", "kcal", "percent_of_day"];

/// Write the per-meal breakdown as CSV, header first even with no meals.
pub fn write_meal_csv<W: io::Write>(writer: W, summary: &NutritionSummary) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(MEAL_CSV_HEADER)?;

    for row in &summary.per_meal {
        wtr.write_record([
            row.name.clone(),
            row.suggested_time.clone().unwrap_or_default(),
            row.kcal.to_string(),
            row.percent_of_day.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the per-meal breakdown to a CSV file.
pub fn save_meal_csv<P: AsRef<Path>>(path: P, summary: &NutritionSummary) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_meal_csv(file, summary)
}
