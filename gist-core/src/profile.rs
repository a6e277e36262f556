//! Language profiles
//!
//! A profile is the static configuration of one summarization run: the
//! stop-word set excluded from term weighting. Profiles are validated
//! at construction and immutable afterwards, so per-call processing can
//! never hit a configuration failure.

use crate::error::{CoreError, Result};
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Curated English stop-word list.
///
/// The `stop-words` crate ships the much larger ISO list, which stops
/// common verbs and nouns that should carry weight in a frequency
/// model; English keeps the classic function-word list instead.
static ENGLISH_STOP_WORDS: [&str; 127] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now",
];

/// Stop-word configuration for scoring.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    stop_words: FxHashSet<String>,
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::for_language("en").expect("built-in English profile should load")
    }
}

impl LanguageProfile {
    /// Load the built-in stop-word list for a language code.
    ///
    /// Unknown codes are rejected rather than silently defaulting, so a
    /// typo fails at construction time.
    pub fn for_language(code: &str) -> Result<Self> {
        let language = match code.to_lowercase().as_str() {
            "en" | "english" => return Ok(Self::english()),
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => {
                return Err(CoreError::UnsupportedLanguage {
                    code: code.to_string(),
                })
            }
        };

        let stop_words = get(language)
            .iter()
            .map(|word| word.to_lowercase())
            .collect();
        Ok(Self { stop_words })
    }

    fn english() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS
                .iter()
                .map(|word| (*word).to_string())
                .collect(),
        }
    }

    /// Build a profile from a caller-supplied stop-word list.
    ///
    /// Words are normalized the same way tokens are (case-folded); an
    /// entry that is empty after trimming is a configuration error.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = FxHashSet::default();
        for (index, word) in words.into_iter().enumerate() {
            let normalized = word.as_ref().trim().to_lowercase();
            if normalized.is_empty() {
                return Err(CoreError::EmptyStopWord { index });
            }
            stop_words.insert(normalized);
        }
        Ok(Self { stop_words })
    }

    /// A profile that filters nothing
    pub fn empty() -> Self {
        Self {
            stop_words: FxHashSet::default(),
        }
    }

    /// Whether a normalized term is excluded from weighting
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term)
    }

    /// Number of stop words in the profile
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Whether the profile filters nothing
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}
