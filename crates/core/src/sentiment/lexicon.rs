//! Valence lexicon, booster, and negation tables.
//!
//! Word valences follow the conventional -4..+4 human-rating scale used by
//! lexicon sentiment tools; the scorer normalizes the sum into [-1, 1].
//! Tables are built once via `LazyLock`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Word → valence on the -4..+4 scale.
static VALENCES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    [
        // Strong positive
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("best", 3.2),
        ("brilliant", 2.8),
        ("delicious", 2.3),
        ("delighted", 2.6),
        ("excellent", 2.7),
        ("exceptional", 2.7),
        ("fantastic", 2.6),
        ("flawless", 2.6),
        ("incredible", 2.6),
        ("love", 3.2),
        ("loved", 2.9),
        ("lovely", 2.8),
        ("outstanding", 3.1),
        ("perfect", 2.7),
        ("superb", 3.0),
        ("wonderful", 2.7),
        // Moderate positive
        ("awesomeness", 2.6),
        ("beautiful", 2.9),
        ("better", 1.9),
        ("charming", 2.2),
        ("clean", 1.7),
        ("comfortable", 1.8),
        ("convenient", 1.6),
        ("enjoy", 1.9),
        ("enjoyable", 2.0),
        ("enjoyed", 2.3),
        ("friendly", 2.2),
        ("fresh", 1.3),
        ("fun", 2.3),
        ("glad", 2.0),
        ("good", 1.9),
        ("great", 3.1),
        ("happy", 2.7),
        ("helpful", 1.8),
        ("impressed", 2.1),
        ("impressive", 2.3),
        ("like", 1.5),
        ("liked", 1.7),
        ("nice", 1.8),
        ("pleasant", 2.3),
        ("pleased", 2.0),
        ("polite", 1.8),
        ("recommend", 1.5),
        ("recommended", 1.6),
        ("satisfied", 1.6),
        ("smooth", 1.3),
        ("solid", 1.5),
        ("spacious", 1.4),
        ("tasty", 2.0),
        ("thanks", 1.9),
        ("welcoming", 2.0),
        ("worth", 1.3),
        // Mild positive
        ("decent", 1.2),
        ("fair", 1.1),
        ("fine", 0.8),
        ("ok", 0.9),
        ("okay", 0.9),
        ("yes", 1.7),
        // Mild negative
        ("bland", -1.0),
        ("boring", -1.3),
        ("mediocre", -0.9),
        ("meh", -0.9),
        ("noisy", -1.2),
        ("overpriced", -1.6),
        ("pricey", -0.9),
        ("slow", -1.2),
        ("small", -0.4),
        ("stale", -1.4),
        // Moderate negative
        ("annoying", -1.7),
        ("bad", -2.5),
        ("broken", -1.8),
        ("cold", -0.8),
        ("complaint", -1.2),
        ("dirty", -2.0),
        ("disappointed", -2.1),
        ("disappointing", -2.2),
        ("dislike", -1.6),
        ("expensive", -0.9),
        ("hate", -2.7),
        ("hated", -2.8),
        ("issue", -1.0),
        ("issues", -1.1),
        ("poor", -2.1),
        ("problem", -1.3),
        ("problems", -1.4),
        ("rude", -2.2),
        ("sad", -2.1),
        ("uncomfortable", -1.6),
        ("unfriendly", -1.9),
        ("unhappy", -1.9),
        ("unhelpful", -1.7),
        ("unpleasant", -2.1),
        ("wait", -0.3),
        ("worse", -2.1),
        // Strong negative
        ("awful", -2.0),
        ("disaster", -2.5),
        ("disgusting", -2.4),
        ("dreadful", -2.5),
        ("filthy", -2.4),
        ("horrible", -2.5),
        ("horrendous", -2.6),
        ("nightmare", -2.4),
        ("terrible", -2.1),
        ("worst", -3.1),
        ("useless", -1.8),
    ]
    .into_iter()
    .collect()
});

/// Booster word → scalar added to (or subtracted from) a nearby valence.
static BOOSTERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    [
        // Intensifiers
        ("absolutely", 0.293),
        ("completely", 0.293),
        ("especially", 0.293),
        ("extremely", 0.293),
        ("highly", 0.293),
        ("incredibly", 0.293),
        ("really", 0.267),
        ("remarkably", 0.293),
        ("so", 0.293),
        ("super", 0.293),
        ("totally", 0.293),
        ("truly", 0.293),
        ("very", 0.293),
        // Dampeners
        ("barely", -0.293),
        ("hardly", -0.293),
        ("kinda", -0.293),
        ("marginally", -0.293),
        ("slightly", -0.293),
        ("somewhat", -0.293),
        ("sorta", -0.293),
    ]
    .into_iter()
    .collect()
});

/// Words that invert the valence of a following sentiment word.
static NEGATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hasnt", "isnt",
        "neither", "never", "no", "nobody", "none", "nor", "not", "nothing", "shouldnt", "wasnt",
        "werent", "without", "wont", "wouldnt",
    ]
    .into_iter()
    .collect()
});

/// Returns the valence of `word`, if it carries sentiment.
pub fn valence(word: &str) -> Option<f64> {
    VALENCES.get(word).copied()
}

/// Returns the booster scalar for `word`, if it is an intensity modifier.
pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS.get(word).copied()
}

/// Returns `true` if `word` is a negation.
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(word)
}
