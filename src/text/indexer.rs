//! Vocabulary indexing: word→index assignment and text→sequence conversion.
//!
//! The [`Indexer`] trait is the seam between [`TextProcessor`] and the
//! concrete indexing policy, so encoders can be tested against a fake
//! with deterministic indices. [`FrequencyIndexer`] is the default
//! implementation: indices are assigned 1..=N by descending corpus
//! frequency, ties broken by first encounter.
//!
//! [`TextProcessor`]: crate::text::TextProcessor

use std::collections::HashMap;

use crate::error::Result;
use crate::text::corpus::Text;
use crate::text::tokenize::WhitespaceTokenizer;
use crate::text::Tokenizer;

/// Punctuation and control characters stripped from raw units before
/// splitting. Pre-tokenized units are never filtered.
pub const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

/// Assigns integer indices to words and converts texts to index sequences.
///
/// Implementations own the learned word→index mapping. Index 0 is never
/// assigned: it is reserved as the padding value, so a fitted vocabulary
/// covers exactly `1..=vocab_size()`.
pub trait Indexer {
    /// Learn the vocabulary from sample texts.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenizing a raw unit fails.
    fn fit(&mut self, texts: &[&Text]) -> Result<()>;

    /// Convert texts to sequences of vocabulary indices.
    ///
    /// Words absent from the vocabulary are dropped silently, so a
    /// sequence may be shorter than its text, or empty.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenizing a raw unit fails.
    fn texts_to_sequences(&self, texts: &[Text]) -> Result<Vec<Vec<u32>>>;

    /// The learned word→index mapping (1-based).
    fn word_index(&self) -> &HashMap<String, u32>;

    /// Number of distinct words in the vocabulary.
    fn vocab_size(&self) -> usize {
        self.word_index().len()
    }
}

/// Frequency-ranked word indexer.
///
/// Counts every word across the fitted corpus and assigns indices
/// `1..=N` by count, descending; words with equal counts keep their
/// first-encounter order. Raw units are lowercased, stripped of the
/// [`DEFAULT_FILTERS`] characters, and split on whitespace; pre-tokenized
/// units are lowercased only.
///
/// Fitting again accumulates counts and re-ranks; [`TextProcessor`]
/// calls `fit` exactly once per processor.
///
/// # Examples
///
/// ```
/// use vectorizar::text::{FrequencyIndexer, Indexer, Text};
///
/// let texts: Vec<Text> = vec!["b a b".into(), "a b c".into()];
/// let refs: Vec<&Text> = texts.iter().collect();
///
/// let mut indexer = FrequencyIndexer::new();
/// indexer.fit(&refs).expect("fit should succeed");
///
/// // b appears 3 times, a twice, c once
/// assert_eq!(indexer.word_index()["b"], 1);
/// assert_eq!(indexer.word_index()["a"], 2);
/// assert_eq!(indexer.word_index()["c"], 3);
/// ```
///
/// [`TextProcessor`]: crate::text::TextProcessor
#[allow(missing_debug_implementations)]
pub struct FrequencyIndexer {
    /// Splitter for raw units.
    tokenizer: Box<dyn Tokenizer>,
    /// Lowercase every word before counting/lookup.
    lowercase: bool,
    /// Characters stripped from raw units before splitting.
    filters: String,
    /// Corpus-wide word counts (accumulated across fit calls).
    word_counts: HashMap<String, usize>,
    /// Words in first-encounter order; the stable tie-break for ranking.
    word_order: Vec<String>,
    /// Learned word→index mapping, 1-based.
    word_index: HashMap<String, u32>,
}

impl FrequencyIndexer {
    /// Create an indexer with default settings: whitespace tokenizer,
    /// lowercasing on, default filter set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WhitespaceTokenizer::new()),
            lowercase: true,
            filters: DEFAULT_FILTERS.to_string(),
            word_counts: HashMap::new(),
            word_order: Vec::new(),
            word_index: HashMap::new(),
        }
    }

    /// Set the tokenizer used to split raw units.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether words are lowercased before counting and lookup.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set the characters stripped from raw units before splitting.
    /// Pass an empty string to disable filtering.
    #[must_use]
    pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = filters.into();
        self
    }

    /// Words of one text unit, normalized for counting and lookup.
    ///
    /// Raw units: lowercase, replace filter characters with spaces, split.
    /// Pre-tokenized units: lowercase each token as-is, no filtering.
    fn words(&self, text: &Text) -> Result<Vec<String>> {
        match text {
            Text::Raw(s) => {
                let lowered = if self.lowercase {
                    s.to_lowercase()
                } else {
                    s.clone()
                };
                let cleaned: String = lowered
                    .chars()
                    .map(|c| if self.filters.contains(c) { ' ' } else { c })
                    .collect();
                self.tokenizer.tokenize(&cleaned)
            }
            Text::Tokens(tokens) => Ok(tokens
                .iter()
                .map(|t| {
                    if self.lowercase {
                        t.to_lowercase()
                    } else {
                        t.clone()
                    }
                })
                .collect()),
        }
    }
}

impl Default for FrequencyIndexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Indexer for FrequencyIndexer {
    fn fit(&mut self, texts: &[&Text]) -> Result<()> {
        for text in texts {
            for word in self.words(text)? {
                if !self.word_counts.contains_key(&word) {
                    self.word_order.push(word.clone());
                }
                *self.word_counts.entry(word).or_insert(0) += 1;
            }
        }

        // Rank by count descending; the sort is stable, so equal counts
        // keep first-encounter order.
        let mut ranked: Vec<(String, usize)> = self
            .word_order
            .iter()
            .map(|w| (w.clone(), self.word_counts.get(w).copied().unwrap_or(0)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        self.word_index = ranked
            .into_iter()
            .enumerate()
            .map(|(rank, (word, _))| (word, (rank + 1) as u32))
            .collect();

        Ok(())
    }

    fn texts_to_sequences(&self, texts: &[Text]) -> Result<Vec<Vec<u32>>> {
        texts
            .iter()
            .map(|text| {
                let sequence = self
                    .words(text)?
                    .into_iter()
                    .filter_map(|word| self.word_index.get(&word).copied())
                    .collect();
                Ok(sequence)
            })
            .collect()
    }

    fn word_index(&self) -> &HashMap<String, u32> {
        &self.word_index
    }
}
