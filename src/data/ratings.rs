// src/data/ratings.rs
//! Ratings table loader.
//!
//! The ratings file is a CSV with a header row; column 0 holds the
//! title and column 1 the rating. Malformed rows are skipped and
//! counted, never fatal. Quoting and embedded commas are the CSV
//! reader's problem.

use std::fs::File;
use std::path::Path;

use crate::error::{CostarError, Result};
use crate::types::RatingTable;

/// Outcome of a ratings load: the table plus how many rows were
/// skipped as malformed.
#[derive(Debug)]
pub struct RatingsLoad {
    pub table: RatingTable,
    pub skipped: usize,
}

/// Loads the ratings table from a CSV file.
///
/// # Errors
/// Returns an error only if the file cannot be opened; bad rows are
/// skipped, not raised.
pub fn load_ratings(path: &Path) -> Result<RatingsLoad> {
    let file = File::open(path).map_err(|source| CostarError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut table = RatingTable::new();
    let mut skipped = 0;

    for record in reader.records() {
        let Ok(record) = record else {
            skipped += 1;
            continue;
        };
        match parse_row(&record) {
            Some((title, rating)) => {
                table.insert(title, rating);
            }
            None => skipped += 1,
        }
    }

    Ok(RatingsLoad { table, skipped })
}

fn parse_row(record: &csv::StringRecord) -> Option<(String, f64)> {
    let title = record.get(0)?.trim();
    if title.is_empty() {
        return None;
    }
    let rating: f64 = record.get(1)?.trim().parse().ok()?;
    Some((title.to_string(), rating))
}
