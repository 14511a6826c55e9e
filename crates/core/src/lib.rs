//! # reviewlens-core
//!
//! Embeddable in-memory review store with lexicon-based sentiment scoring,
//! location and date-range filtering, and CSV seeding.
//!
//! This is the core library crate with zero async dependencies — the HTTP
//! layer lives in `reviewlens-server`.

/// Global configuration constants: formats, limits, and the valid location set.
pub mod config;
/// Review filtering: location equality and inclusive date-range predicates.
pub mod filter;
/// Core review type: immutable record with UUID, body, location, and timestamp.
pub mod review;
/// Startup seeding from a CSV data file.
pub mod seed;
/// Lexicon sentiment scoring: polarity scores and the scorer trait seam.
pub mod sentiment;
/// In-memory review store with append and snapshot operations.
pub mod store;
