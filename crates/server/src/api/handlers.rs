//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::models::{
    HealthResponse, ReviewQueryParams, ScoredReviewResponse, SubmitReviewForm,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use reviewlens_core::config;
use reviewlens_core::filter::ReviewFilter;
use reviewlens_core::review::Review;
use reviewlens_core::sentiment::SentimentScorer;
use reviewlens_core::store::ReviewStore;
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State`
/// extractor. The store and scorer are injected at construction, so tests
/// can seed a store or swap the scorer.
#[derive(Clone)]
pub struct AppState {
    pub store: ReviewStore,
    pub scorer: Arc<dyn SentimentScorer>,
    pub start_time: Instant,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        review_count: state.store.len(),
    })
}

/// `GET /reviews`
///
/// Filters by optional `location` (exact match) and inclusive
/// `start_date`/`end_date` bounds, attaches a sentiment score to each
/// surviving review, and sorts by compound score descending. Read-only.
pub async fn query_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewQueryParams>,
) -> Result<Json<Vec<ScoredReviewResponse>>, ApiError> {
    let filter = ReviewFilter::from_params(
        params.location.as_deref(),
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    )
    .map_err(|e| {
        tracing::debug!("rejected query params: {e}");
        ApiError::BadRequest("Invalid date format".into())
    })?;

    let snapshot = state.store.snapshot();
    let mut results: Vec<ScoredReviewResponse> = filter
        .apply(&snapshot)
        .iter()
        .map(|review| ScoredReviewResponse::from_review(review, state.scorer.score(&review.body)))
        .collect();

    // Vec::sort_by is stable: equal compound scores keep the filtered
    // (original store) order.
    results.sort_by(|a, b| {
        b.sentiment
            .compound
            .partial_cmp(&a.sentiment.compound)
            .unwrap_or(Ordering::Equal)
    });

    Ok(Json(results))
}

/// `POST /reviews`
///
/// Accepts a URL-encoded form with `Location` and `ReviewBody`. Validates
/// presence and that the location is in the fixed valid set, then appends a
/// freshly stamped review and returns it with 201. No append happens on any
/// failure path.
pub async fn submit_review(
    State(state): State<AppState>,
    Form(form): Form<SubmitReviewForm>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let location = form.location.filter(|s| !s.is_empty());
    let review_body = form.review_body.filter(|s| !s.is_empty());
    let (Some(location), Some(review_body)) = (location, review_body) else {
        return Err(ApiError::BadRequest(
            "Location and ReviewBody are required".into(),
        ));
    };

    if !config::is_valid_location(&location) {
        return Err(ApiError::BadRequest("Invalid location".into()));
    }

    let review = state.store.append(Review::new(review_body, location));
    tracing::info!(review_id = %review.id, location = %review.location, "Review submitted");
    Ok((StatusCode::CREATED, Json(review.as_ref().clone())))
}
