//! # Lexicon Scorer
//!
//! Rule-based compound polarity in the style of VADER: lexicon valences
//! adjusted for boosters, negation, capitalization, contrastive "but" and
//! punctuation emphasis, then squashed into [-1, 1].

use super::scorer::PolarityScorer;
use crate::resources::SentimentLexicon;
use std::sync::Arc;

/// Booster increment
const B_INCR: f64 = 0.293;
/// Dampener decrement
const B_DECR: f64 = -0.293;
/// ALL-CAPS emphasis
const C_INCR: f64 = 0.733;
/// Negation multiplier
const N_SCALAR: f64 = -0.74;
/// Normalization constant, approximates the max expected sum
const ALPHA: f64 = 15.0;

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("fully", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never",
    "none", "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt",
    "wasnt", "werent", "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

/// VADER-style scorer over a shared lexicon
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Arc<SentimentLexicon>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(Arc::new(SentimentLexicon::builtin()))
    }
}

impl LexiconScorer {
    pub fn new(lexicon: Arc<SentimentLexicon>) -> Self {
        Self { lexicon }
    }

    /// Per-token valences, before summing
    ///
    /// Returned alongside the tokens they belong to; non-sentiment tokens
    /// carry 0.0.
    pub fn valences(&self, text: &str) -> Vec<(String, f64)> {
        let tokens = split_tokens(text);
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = is_cap_diff(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, word) in lowered.iter().enumerate() {
            if booster(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            if word == "kind" && lowered.get(i + 1).is_some_and(|next| next == "of") {
                sentiments.push(0.0);
                continue;
            }
            let Some(mut valence) = self.lexicon.get(word) else {
                sentiments.push(0.0);
                continue;
            };

            if cap_diff && is_all_caps(&tokens[i]) {
                valence += C_INCR * valence.signum();
            }

            for distance in 0..3 {
                if i <= distance {
                    break;
                }
                let j = i - distance - 1;
                let previous = &lowered[j];
                if self.lexicon.contains(previous) {
                    continue;
                }
                let mut scalar = scalar_inc_dec(&tokens[j], previous, valence, cap_diff);
                if distance == 1 {
                    scalar *= 0.95;
                } else if distance == 2 {
                    scalar *= 0.9;
                }
                valence += scalar;
                if is_negation(previous) {
                    valence *= N_SCALAR;
                }
            }

            sentiments.push(valence);
        }

        but_check(&lowered, &mut sentiments);
        lowered.into_iter().zip(sentiments).collect()
    }

    /// Compound polarity in [-1, 1]
    pub fn polarity(&self, text: &str) -> f64 {
        let sum: f64 = self.valences(text).iter().map(|(_, v)| v).sum();
        if sum == 0.0 {
            return 0.0;
        }

        let emphasis = punctuation_emphasis(text);
        let sum = if sum > 0.0 { sum + emphasis } else { sum - emphasis };
        normalize(sum)
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        self.polarity(text)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Split on whitespace, strip surrounding punctuation, drop 1-char tokens
///
/// Punctuation is kept when stripping would leave two characters or
/// fewer, so emoticons such as `:)` survive.
fn split_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    let mut letters = token.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(|c| c.is_uppercase())
}

/// Some but not all tokens are ALL-CAPS
fn is_cap_diff(tokens: &[String]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn booster(word: &str) -> Option<f64> {
    BOOSTERS.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

/// Accepts both the ASCII and the typographic apostrophe
fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't") || word.contains("n\u{2019}t")
}

/// Booster contribution of `previous`, signed to follow `valence`
fn scalar_inc_dec(original: &str, previous: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(previous) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(original) {
        scalar += C_INCR * valence.signum();
    }
    scalar
}

/// Halve sentiment before "but", amplify it after
fn but_check(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *sentiment *= 0.5;
        } else if i > pivot {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = text.matches('?').count();
    let question_boost = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + question_boost
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
