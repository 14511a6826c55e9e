//! Lexicon-based sentiment scorer.
//!
//! Sums per-word valences from the lexicon, adjusting for nearby boosters
//! and negations, then normalizes the sum into a compound score via
//! `s / sqrt(s² + alpha)`. The `neg`/`neu`/`pos` proportions are computed
//! from the same per-word valences. Total over every input: text with no
//! lexical content scores [`SentimentScore::NEUTRAL`].

use crate::config;
use crate::sentiment::{lexicon, SentimentScore, SentimentScorer};

/// Stateless valence-lexicon scorer. Deterministic and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    /// Creates a new scorer.
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);

        // One valence slot per content word; boosters and negations are
        // consumed by the words they modify.
        let mut valences: Vec<f64> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            if lexicon::booster(token).is_some() || lexicon::is_negation(token) {
                continue;
            }
            let Some(base) = lexicon::valence(token) else {
                valences.push(0.0);
                continue;
            };
            let mut valence = base;
            for dist in 1..=config::MODIFIER_WINDOW {
                if dist > i {
                    break;
                }
                let prev = tokens[i - dist].as_str();
                if let Some(scalar) = lexicon::booster(prev) {
                    valence += valence.signum() * scalar * config::BOOSTER_DECAY[dist - 1];
                }
                if lexicon::is_negation(prev) {
                    valence *= config::NEGATION_DAMPENER;
                }
            }
            valences.push(valence);
        }

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0usize;
        for &v in &valences {
            if v > 0.0 {
                pos_sum += v + 1.0;
            } else if v < 0.0 {
                neg_sum += v.abs() + 1.0;
            } else {
                neu_count += 1;
            }
        }
        let total = pos_sum + neg_sum + neu_count as f64;
        if total == 0.0 {
            return SentimentScore::NEUTRAL;
        }

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            // Trailing exclamation marks amplify in the direction of the sum.
            let bangs = text
                .chars()
                .filter(|&c| c == '!')
                .count()
                .min(config::MAX_EXCLAMATIONS);
            sum += sum.signum() * bangs as f64 * config::EXCLAMATION_BOOST;
        }
        let compound =
            (sum / (sum * sum + config::SENTIMENT_NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

        SentimentScore {
            neg: round3(neg_sum / total),
            neu: round3(neu_count as f64 / total),
            pos: round3(pos_sum / total),
            compound: round4(compound),
        }
    }
}

/// Lowercases, drops apostrophes (so "don't" matches "dont"), and splits on
/// the remaining non-alphanumeric characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('\'', "")
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
