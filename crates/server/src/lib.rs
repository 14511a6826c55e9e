//! reviewlens-server — HTTP API for the reviewlens review store.
//!
//! Provides the Axum router and handlers. Core store, filter, and sentiment
//! logic lives in `reviewlens-core`.

/// REST API layer: Axum router, HTTP handlers, models, errors.
pub mod api;
