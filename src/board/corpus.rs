//! The shared collection of candidate puzzle phrases.
//!
//! A corpus outlives rounds: a table owns one and lends it to each round,
//! which picks its phrase from it. The only mutation is a
//! case-insensitive deduplicated append.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{GameError, GameRng};

/// Phrases shipped with the game.
pub const STANDARD_PHRASES: [&str; 4] = [
    "SOMETIMES THE HEART SEES WHAT IS INVISIBLE TO THE EYE.",
    "NEVER GRADUATE!",
    "IF YOU DON'T BUILD YOUR DREAM, SOMEONE ELSE WILL HIRE YOU TO HELP THEM BUILD THEIRS.",
    "DO NOT DWELL IN THE PAST, DO NOT DREAM OF THE FUTURE, CONCENTRATE THE MIND ON THE PRESENT MOMENT.",
];

/// Ordered, never-empty list of uppercase phrases.
///
/// Serializes as a plain list; deserializing re-applies the uppercase, dedup
/// and non-empty rules of [`PhraseCorpus::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PhraseCorpus {
    phrases: Vec<String>,
}

impl Default for PhraseCorpus {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<String>> for PhraseCorpus {
    type Error = GameError;

    fn try_from(phrases: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(phrases)
    }
}

impl From<PhraseCorpus> for Vec<String> {
    fn from(corpus: PhraseCorpus) -> Self {
        corpus.phrases
    }
}

impl PhraseCorpus {
    /// The built-in phrase list.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            phrases: STANDARD_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Build a corpus from arbitrary text, uppercasing and deduplicating.
    ///
    /// Blank entries are dropped. Fails with [`GameError::EmptyCorpus`] if
    /// nothing usable remains.
    pub fn new<I, S>(phrases: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Self { phrases: Vec::new() };
        for phrase in phrases {
            let phrase = phrase.as_ref();
            if phrase.trim().is_empty() {
                warn!("Ignoring blank phrase");
                continue;
            }
            corpus.add_phrase(phrase);
        }

        if corpus.phrases.is_empty() {
            return Err(GameError::EmptyCorpus);
        }
        Ok(corpus)
    }

    /// All phrases, in insertion order.
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Case-insensitive membership check.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        let needle = text.to_lowercase();
        self.phrases.iter().any(|p| p.to_lowercase() == needle)
    }

    /// Append `text` in uppercase unless it is already present (ignoring case).
    ///
    /// Always returns the corpus. A duplicate is reported in the log, not
    /// treated as a failure.
    pub fn add_phrase(&mut self, text: &str) -> &[String] {
        if self.contains(text) {
            info!(phrase = %text, "Phrase already exists");
        } else {
            self.phrases.push(text.to_uppercase());
        }
        &self.phrases
    }

    /// Pick a phrase uniformly at random.
    pub fn choose(&self, rng: &mut GameRng) -> &str {
        &self.phrases[rng.gen_range(0..self.phrases.len())]
    }
}
