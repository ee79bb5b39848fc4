//! Catalog loading and saving (CSV).
//!
//! The loader is the collaborator that guarantees the recommendation core
//! a well-shaped table: rows missing a name or category text are dropped
//! here, and ratings are coerced to numeric with a 0.0 fallback, so the
//! core never re-validates its input.

use crate::catalog::{Catalog, Item};
use crate::error::{RecomendarError, Result};
use std::path::Path;

/// Header columns required in a catalog CSV, in the order written by
/// [`save_catalog`].
pub const REQUIRED_COLUMNS: [&str; 4] = ["id", "name", "categories", "rating"];

/// Load a catalog from a CSV file with `id,name,categories,rating`
/// columns (any column order, extra columns ignored).
///
/// Cleaning matches the upstream contract of the recommendation core:
/// - rows with an empty `name` or `categories` field are skipped;
/// - `rating` is coerced to numeric, defaulting to 0.0 when unparseable;
/// - `id` defaults to the 1-based row number when unparseable.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, `CsvParse` if a required
/// column is missing or a record is malformed.
///
/// # Examples
///
/// ```no_run
/// use recomendar::loading::load_catalog;
///
/// let catalog = load_catalog("movies.csv")?;
/// println!("loaded {} items", catalog.len());
/// # Ok::<(), recomendar::RecomendarError>(())
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut columns = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, required) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == required)
            .ok_or_else(|| RecomendarError::CsvParse {
                line: 1,
                message: format!("missing required column '{required}'"),
            })?;
    }
    let [id_col, name_col, categories_col, rating_col] = columns;

    let mut items = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;

        let name = record.get(name_col).unwrap_or("").trim();
        let categories = record.get(categories_col).unwrap_or("").trim();
        if name.is_empty() || categories.is_empty() {
            continue; // drop rows with missing required fields
        }

        let id = record
            .get(id_col)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or((row + 1) as i64);
        let rating = record
            .get(rating_col)
            .and_then(|v| v.trim().parse::<f32>().ok())
            .unwrap_or(0.0);

        items.push(Item::new(id, name, categories, rating));
    }

    Ok(Catalog::from_items(items))
}

/// Save a catalog to a CSV file with `id,name,categories,rating` columns.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for item in catalog.items() {
        // serialize() emits the header row once, from Item's field names
        writer.serialize(item)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "loading_tests.rs"]
mod tests;
