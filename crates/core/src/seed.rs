//! Startup seeding from a CSV data file.
//!
//! The seed file has columns `ReviewId`, `ReviewBody`, `Location`,
//! `Timestamp`, matching the serde renames on [`Review`], so rows
//! deserialize directly. Seeding happens once at process start; errors are
//! fatal and surfaced by the binary.

use crate::review::Review;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors from loading the seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The data file could not be opened.
    #[error("failed to open review data: {0}")]
    Io(#[from] std::io::Error),
    /// A row failed to parse (bad UUID, missing column, malformed CSV).
    #[error("malformed review row: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads all reviews from the CSV file at `path`, preserving row order.
pub fn load_reviews(path: &Path) -> Result<Vec<Review>, SeedError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut reviews = Vec::new();
    for row in reader.deserialize() {
        reviews.push(row?);
    }
    Ok(reviews)
}
