//! Review filtering engine.
//!
//! A [`ReviewFilter`] is built once per query from the raw string parameters,
//! parsing date bounds up front so a malformed date fails the whole request
//! before any filtering happens. Application preserves relative order and
//! never adds records.

use crate::config;
use crate::review::Review;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use thiserror::Error;

/// Errors from filter construction.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A `start_date` or `end_date` parameter failed to parse.
    #[error("invalid date '{0}'")]
    InvalidDate(String),
}

/// Composed filter over a review sequence: optional exact-match location and
/// optional inclusive date-time bounds.
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    location: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl ReviewFilter {
    /// Builds a filter from raw query parameters.
    ///
    /// Empty strings are treated as absent (the original query parser drops
    /// blank values). Date bounds accept `YYYY-MM-DD HH:MM:SS` or a bare
    /// `YYYY-MM-DD` (midnight). If no date parameter is supplied, no parse is
    /// attempted and construction cannot fail.
    pub fn from_params(
        location: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            location: present(location).map(str::to_owned),
            start: present(start_date).map(parse_bound).transpose()?,
            end: present(end_date).map(parse_bound).transpose()?,
        })
    }

    /// Returns `true` if the filter has at least one date bound.
    pub fn has_date_bounds(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Returns `true` if `review` satisfies every active predicate.
    ///
    /// The date predicate is `(start absent OR ts >= start) AND (end absent
    /// OR ts <= end)`, both bounds inclusive. An inverted range (start after
    /// end) is legal and matches nothing. A stored timestamp that fails to
    /// parse while date bounds are active is excluded rather than failing
    /// the query.
    pub fn matches(&self, review: &Review) -> bool {
        if let Some(ref location) = self.location {
            if review.location != *location {
                return false;
            }
        }
        if !self.has_date_bounds() {
            return true;
        }
        let ts = match NaiveDateTime::parse_from_str(&review.timestamp, config::TIMESTAMP_FORMAT) {
            Ok(ts) => ts,
            Err(_) => return false,
        };
        self.start.map_or(true, |start| ts >= start) && self.end.map_or(true, |end| ts <= end)
    }

    /// Applies the filter, yielding the matching subsequence in original
    /// relative order.
    pub fn apply(&self, reviews: &[Arc<Review>]) -> Vec<Arc<Review>> {
        reviews
            .iter()
            .filter(|review| self.matches(review))
            .cloned()
            .collect()
    }
}

fn present(param: Option<&str>) -> Option<&str> {
    param.filter(|s| !s.is_empty())
}

/// Parses a date bound: full timestamp first, then date-only at midnight.
fn parse_bound(raw: &str) -> Result<NaiveDateTime, FilterError> {
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, config::TIMESTAMP_FORMAT) {
        return Ok(ts);
    }
    NaiveDate::parse_from_str(raw, config::DATE_ONLY_FORMAT)
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| FilterError::InvalidDate(raw.to_owned()))
}
