use reqwest::Client;
use reviewlens_core::config;
use reviewlens_core::review::Review;
use reviewlens_core::sentiment::LexiconScorer;
use reviewlens_core::store::ReviewStore;
use reviewlens_server::api::create_router;
use reviewlens_server::api::handlers::AppState;
use std::sync::Arc;
use uuid::Uuid;

async fn spawn_app(reviews: Vec<Review>) -> String {
    let state = AppState {
        store: ReviewStore::seeded(reviews),
        scorer: Arc::new(LexiconScorer::new()),
        start_time: std::time::Instant::now(),
    };

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client() -> Client {
    Client::new()
}

fn review(body: &str, location: &str, timestamp: &str) -> Review {
    Review::from_parts(
        Uuid::new_v4(),
        body.to_string(),
        location.to_string(),
        timestamp.to_string(),
    )
}

fn sample_reviews() -> Vec<Review> {
    vec![
        review("terrible room, awful noise", "Denver, Colorado", "2023-01-01 00:00:00"),
        review("ok", "Denver, Colorado", "2023-06-15 12:30:00"),
        review("great stay, wonderful staff", "San Diego, California", "2024-02-20 08:00:00"),
    ]
}

async fn get_reviews(base_url: &str, query: &str) -> reqwest::Response {
    client()
        .get(format!("{}/reviews{}", base_url, query))
        .send()
        .await
        .expect("Failed to send GET")
}

async fn post_review(base_url: &str, form: &[(&str, &str)]) -> reqwest::Response {
    client()
        .post(format!("{}/reviews", base_url))
        .form(form)
        .send()
        .await
        .expect("Failed to send POST")
}

// ========== Health ==========

#[tokio::test]
async fn health_returns_ok() {
    let base_url = spawn_app(sample_reviews()).await;

    let resp = client()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["review_count"], 3);
}

// ========== Query ==========

#[tokio::test]
async fn get_reviews_sorted_by_compound_descending() {
    let base_url = spawn_app(sample_reviews()).await;

    let resp = get_reviews(&base_url, "").await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let body: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert_eq!(body.len(), 3);

    let compounds: Vec<f64> = body
        .iter()
        .map(|r| r["sentiment"]["compound"].as_f64().unwrap())
        .collect();
    for pair in compounds.windows(2) {
        assert!(pair[0] >= pair[1], "not descending: {:?}", compounds);
    }
    assert!(body[0]["ReviewBody"].as_str().unwrap().contains("great"));
    assert!(body[2]["ReviewBody"].as_str().unwrap().contains("terrible"));
}

#[tokio::test]
async fn get_reviews_record_shape() {
    let base_url = spawn_app(vec![review("ok", "Denver, Colorado", "2023-01-01 00:00:00")]).await;

    let body: Vec<serde_json::Value> = get_reviews(&base_url, "").await.json().await.unwrap();
    assert_eq!(body.len(), 1);
    let record = &body[0];
    assert!(record["ReviewId"].is_string());
    assert_eq!(record["ReviewBody"], "ok");
    assert_eq!(record["Location"], "Denver, Colorado");
    assert_eq!(record["Timestamp"], "2023-01-01 00:00:00");
    for key in ["neg", "neu", "pos", "compound"] {
        assert!(record["sentiment"][key].is_number(), "missing sentiment.{}", key);
    }
    // "ok" is near-neutral.
    assert!(record["sentiment"]["compound"].as_f64().unwrap().abs() < 0.3);
}

#[tokio::test]
async fn equal_compound_ties_keep_store_order() {
    // Identical bodies score identically; order must match insertion order.
    let reviews = vec![
        review("ok", "Denver, Colorado", "2023-01-01 00:00:00"),
        review("ok", "Denver, Colorado", "2023-01-02 00:00:00"),
        review("ok", "Denver, Colorado", "2023-01-03 00:00:00"),
    ];
    let expected: Vec<String> = reviews.iter().map(|r| r.id.to_string()).collect();
    let base_url = spawn_app(reviews).await;

    let body: Vec<serde_json::Value> = get_reviews(&base_url, "").await.json().await.unwrap();
    let ids: Vec<String> = body
        .iter()
        .map(|r| r["ReviewId"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn location_filter_exact_match() {
    let base_url = spawn_app(sample_reviews()).await;

    let resp = get_reviews(&base_url, "?location=Denver,%20Colorado").await;
    assert_eq!(resp.status(), 200);
    let body: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert_eq!(body.len(), 2);
    assert!(body.iter().all(|r| r["Location"] == "Denver, Colorado"));
}

#[tokio::test]
async fn unknown_location_returns_empty_array() {
    let base_url = spawn_app(sample_reviews()).await;

    let resp = get_reviews(&base_url, "?location=Nowhere").await;
    assert_eq!(resp.status(), 200);
    let body: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn date_range_bounds_are_inclusive() {
    let base_url = spawn_app(sample_reviews()).await;

    let resp = get_reviews(
        &base_url,
        "?start_date=2023-01-01%2000:00:00&end_date=2023-06-15%2012:30:00",
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert_eq!(body.len(), 2, "both boundary timestamps retained");
}

#[tokio::test]
async fn date_only_params_accepted() {
    let base_url = spawn_app(sample_reviews()).await;

    let resp = get_reviews(&base_url, "?start_date=2024-01-01").await;
    assert_eq!(resp.status(), 200);
    let body: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["Location"], "San Diego, California");
}

#[tokio::test]
async fn invalid_date_returns_400() {
    let base_url = spawn_app(sample_reviews()).await;

    for query in [
        "?start_date=not-a-date",
        "?end_date=2023-13-45",
        "?location=Denver,%20Colorado&start_date=garbage",
    ] {
        let resp = get_reviews(&base_url, query).await;
        assert_eq!(resp.status(), 400, "query {} should be rejected", query);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body, serde_json::json!({"error": "Invalid date format"}));
    }
}

#[tokio::test]
async fn inverted_date_range_returns_empty_200() {
    let base_url = spawn_app(sample_reviews()).await;

    let resp = get_reviews(&base_url, "?start_date=2025-01-01&end_date=2020-01-01").await;
    assert_eq!(resp.status(), 200);
    let body: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert!(body.is_empty(), "impossible range is empty, not an error");
}

#[tokio::test]
async fn empty_store_returns_empty_array() {
    let base_url = spawn_app(Vec::new()).await;

    let resp = get_reviews(&base_url, "").await;
    assert_eq!(resp.status(), 200);
    let body: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert!(body.is_empty());
}

// ========== Submission ==========

#[tokio::test]
async fn submit_review_returns_201_with_created_review() {
    let base_url = spawn_app(Vec::new()).await;

    let resp = post_review(
        &base_url,
        &[("Location", "Denver, Colorado"), ("ReviewBody", "Great!")],
    )
    .await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = resp.json().await.unwrap();
    let id = body["ReviewId"].as_str().unwrap();
    assert_eq!(id.len(), 36, "UUID wire format");
    assert!(Uuid::parse_str(id).is_ok());
    assert_eq!(body["ReviewBody"], "Great!");
    assert_eq!(body["Location"], "Denver, Colorado");
    let timestamp = body["Timestamp"].as_str().unwrap();
    assert!(
        chrono::NaiveDateTime::parse_from_str(timestamp, config::TIMESTAMP_FORMAT).is_ok(),
        "timestamp '{}' should match the wire format",
        timestamp
    );
}

#[tokio::test]
async fn submitted_review_visible_in_subsequent_query() {
    let base_url = spawn_app(sample_reviews()).await;

    let created: serde_json::Value = post_review(
        &base_url,
        &[("Location", "Phoenix, Arizona"), ("ReviewBody", "lovely pool")],
    )
    .await
    .json()
    .await
    .unwrap();

    let body: Vec<serde_json::Value> =
        get_reviews(&base_url, "?location=Phoenix,%20Arizona").await.json().await.unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["ReviewId"], created["ReviewId"]);
}

#[tokio::test]
async fn submit_missing_fields_returns_400_without_mutation() {
    let base_url = spawn_app(sample_reviews()).await;

    for form in [
        vec![("Location", "Denver, Colorado")],
        vec![("ReviewBody", "text only")],
        vec![("Location", ""), ("ReviewBody", "text")],
        vec![("Location", "Denver, Colorado"), ("ReviewBody", "")],
        vec![],
    ] {
        let resp = post_review(&base_url, &form).await;
        assert_eq!(resp.status(), 400, "form {:?} should be rejected", form);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "Location and ReviewBody are required"})
        );
    }

    let all: Vec<serde_json::Value> = get_reviews(&base_url, "").await.json().await.unwrap();
    assert_eq!(all.len(), 3, "store unchanged by failed submissions");
}

#[tokio::test]
async fn submit_invalid_location_returns_400_without_mutation() {
    let base_url = spawn_app(sample_reviews()).await;

    let resp = post_review(&base_url, &[("Location", "Nowhere"), ("ReviewBody", "test")]).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "Invalid location"}));

    let all: Vec<serde_json::Value> = get_reviews(&base_url, "").await.json().await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn submission_grows_store_by_exactly_one() {
    let base_url = spawn_app(sample_reviews()).await;

    let resp = post_review(
        &base_url,
        &[("Location", "Tucson, Arizona"), ("ReviewBody", "fine")],
    )
    .await;
    assert_eq!(resp.status(), 201);

    let all: Vec<serde_json::Value> = get_reviews(&base_url, "").await.json().await.unwrap();
    assert_eq!(all.len(), 4);
}

// ========== Routing ==========

#[tokio::test]
async fn unmatched_method_returns_405() {
    let base_url = spawn_app(Vec::new()).await;

    let resp = client()
        .delete(format!("{}/reviews", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);
}
