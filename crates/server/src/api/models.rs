//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON and form
//! marshalling via Axum. Response field names keep the original PascalCase
//! wire format, and the GET/POST parameter casing asymmetry (`location`
//! query param vs `Location` form field) is deliberate.

use reviewlens_core::review::Review;
use reviewlens_core::sentiment::SentimentScore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query parameters for `GET /reviews`. All optional; empty values are
/// treated as absent by the filter.
#[derive(Debug, Deserialize)]
pub struct ReviewQueryParams {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// URL-encoded form body for `POST /reviews`.
///
/// Fields are optional at the parse step so that presence is checked by the
/// handler, which owns the "required" error message.
#[derive(Debug, Deserialize)]
pub struct SubmitReviewForm {
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "ReviewBody", default)]
    pub review_body: Option<String>,
}

/// One record in the `GET /reviews` response: the review plus its sentiment.
#[derive(Debug, Serialize)]
pub struct ScoredReviewResponse {
    #[serde(rename = "ReviewId")]
    pub id: Uuid,
    #[serde(rename = "ReviewBody")]
    pub body: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    pub sentiment: SentimentScore,
}

impl ScoredReviewResponse {
    /// Pairs a stored review with its computed sentiment.
    pub fn from_review(review: &Review, sentiment: SentimentScore) -> Self {
        Self {
            id: review.id,
            body: review.body.clone(),
            location: review.location.clone(),
            timestamp: review.timestamp.clone(),
            sentiment,
        }
    }
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub review_count: usize,
}
