//! Core review type.
//!
//! A `Review` is an immutable record with a unique UUID, free-text body,
//! location string, and a second-precision timestamp stored in its wire
//! format. Serde renames match the CSV seed columns and the JSON response
//! fields, so the same struct crosses both boundaries.

use crate::config;
use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored review. Immutable once constructed; the store only appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier (UUID v4).
    #[serde(rename = "ReviewId")]
    pub id: Uuid,
    /// Review text, scored for sentiment at query time.
    #[serde(rename = "ReviewBody")]
    pub body: String,
    /// "City, State" location string.
    #[serde(rename = "Location")]
    pub location: String,
    /// Creation time, formatted as `YYYY-MM-DD HH:MM:SS` (local, naive).
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl Review {
    /// Creates a new review with a random UUID and the current local time.
    pub fn new(body: String, location: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            body,
            location,
            timestamp: Local::now().format(config::TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Reconstructs a review from existing parts (seeded data, tests).
    pub fn from_parts(id: Uuid, body: String, location: String, timestamp: String) -> Self {
        Self {
            id,
            body,
            location,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_new_review_has_unique_id() {
        let a = Review::new("ok".into(), "Denver, Colorado".into());
        let b = Review::new("ok".into(), "Denver, Colorado".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_review_timestamp_format() {
        let review = Review::new("ok".into(), "Denver, Colorado".into());
        assert!(
            NaiveDateTime::parse_from_str(&review.timestamp, config::TIMESTAMP_FORMAT).is_ok(),
            "timestamp '{}' should match the wire format",
            review.timestamp
        );
    }
}
