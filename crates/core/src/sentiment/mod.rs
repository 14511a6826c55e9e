//! Sentiment scoring: polarity scores and the scorer trait seam.
//!
//! Handlers depend on the [`SentimentScorer`] trait rather than a concrete
//! implementation, so tests can inject fixed scores. The shipped
//! implementation is the valence-lexicon [`LexiconScorer`](scorer::LexiconScorer).

/// Valence lexicon, booster, and negation tables.
pub mod lexicon;
/// The lexicon-based scorer implementation.
pub mod scorer;

pub use scorer::LexiconScorer;

use serde::Serialize;

/// Polarity scores for a piece of text.
///
/// `neg`, `neu`, and `pos` are proportions in [0, 1] summing to ~1;
/// `compound` is the normalized overall valence in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl SentimentScore {
    /// The neutral score: no signal either way.
    pub const NEUTRAL: SentimentScore = SentimentScore {
        neg: 0.0,
        neu: 1.0,
        pos: 0.0,
        compound: 0.0,
    };
}

/// Capability seam for sentiment scoring.
///
/// Implementations must be deterministic for identical input and total over
/// every string input — scoring never fails, it degrades to
/// [`SentimentScore::NEUTRAL`].
pub trait SentimentScorer: Send + Sync {
    /// Scores `text`, returning polarity proportions and a compound valence.
    fn score(&self, text: &str) -> SentimentScore;
}
