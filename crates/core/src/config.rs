//! Global configuration constants for reviewlens.
//!
//! Formats, validation limits, scorer tuning parameters, and server defaults
//! are defined here. These are compile-time constants; runtime configuration
//! is handled via CLI arguments in `main.rs`.

/// Timestamp format for stored reviews: local time, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only format accepted for query bounds (expands to midnight).
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// The fixed set of locations accepted for newly submitted reviews.
///
/// Reviews loaded from the seed file are trusted as-is; only the submission
/// path validates against this set.
pub const VALID_LOCATIONS: [&str; 18] = [
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

/// Returns `true` if `location` is a member of [`VALID_LOCATIONS`].
pub fn is_valid_location(location: &str) -> bool {
    VALID_LOCATIONS.contains(&location)
}

/// Normalization constant for the compound score: `s / sqrt(s² + ALPHA)`.
///
/// Maps an unbounded valence sum into [-1, 1]. Standard value is 15.0.
pub const SENTIMENT_NORMALIZATION_ALPHA: f64 = 15.0;

/// Valence added per trailing exclamation mark, in the direction of the sum.
pub const EXCLAMATION_BOOST: f64 = 0.292;

/// Exclamation marks beyond this count add no further emphasis.
pub const MAX_EXCLAMATIONS: usize = 4;

/// Multiplier applied to a word's valence when a negation precedes it.
pub const NEGATION_DAMPENER: f64 = -0.74;

/// How many words back a negation or booster still affects a sentiment word.
pub const MODIFIER_WINDOW: usize = 3;

/// Decay applied to a booster's effect at distance 1, 2, 3 before the word.
pub const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default path of the CSV seed file loaded at startup.
pub const DEFAULT_DATA_FILE: &str = "data/reviews.csv";

/// Maximum HTTP request body size in bytes (64 KB).
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;
