//! The text→numeric front end: one vocabulary, two encoders.

use std::collections::HashMap;

use crate::error::{Result, VectorizarError};
use crate::primitives::Matrix;
use crate::text::corpus::Text;
use crate::text::indexer::{FrequencyIndexer, Indexer};
use crate::text::sequence::{Padder, SequencePadder};

/// Vocabulary lifecycle. The only valid transition is `Empty → Built`,
/// performed by a successful [`TextProcessor::fit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VocabularyState {
    Empty,
    Built,
}

/// Converts texts into fixed-length index sequences or bag-of-words
/// vectors, over a vocabulary built once from sample texts.
///
/// The processor owns two injected collaborators: an [`Indexer`] that
/// learns the word→index mapping and turns texts into index sequences,
/// and a [`Padder`] that shapes ragged sequences into fixed-width
/// matrices. Both default to the crate's standard implementations and can
/// be swapped for deterministic fakes in tests.
///
/// # Examples
///
/// ```
/// use vectorizar::text::{Text, TextProcessor};
///
/// let batch: Vec<Text> = vec![
///     "中国 的 首都 是 北京".into(),
///     "北京 天安门".into(),
///     "中国".into(),
/// ];
///
/// let mut processor = TextProcessor::new();
/// processor.fit(&[&batch]).expect("fit should succeed");
/// assert_eq!(processor.vocabulary_size(), 6);
///
/// let sequences = processor.to_sequences(4, &[&batch]).expect("vocabulary is built");
/// assert_eq!(sequences[0].shape(), (3, 4));
/// ```
#[allow(missing_debug_implementations)]
pub struct TextProcessor {
    indexer: Box<dyn Indexer>,
    padder: Box<dyn Padder>,
    state: VocabularyState,
}

impl TextProcessor {
    /// Create a processor with the default collaborators
    /// ([`FrequencyIndexer`], [`SequencePadder`]) and an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            indexer: Box::new(FrequencyIndexer::new()),
            padder: Box::new(SequencePadder::new()),
            state: VocabularyState::Empty,
        }
    }

    /// Set the indexer used to build the vocabulary and sequence texts.
    #[must_use]
    pub fn with_indexer(mut self, indexer: Box<dyn Indexer>) -> Self {
        self.indexer = indexer;
        self
    }

    /// Set the padder used to shape index sequences.
    #[must_use]
    pub fn with_padder(mut self, padder: Box<dyn Padder>) -> Self {
        self.padder = padder;
        self
    }

    /// True once the vocabulary has been built.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.state == VocabularyState::Built
    }

    /// The built vocabulary (word → 1-based index), or `None` if
    /// [`fit`](Self::fit) has not run yet.
    ///
    /// Repeated calls return the same mapping; nothing mutates it after
    /// the build.
    #[must_use]
    pub fn vocabulary(&self) -> Option<&HashMap<String, u32>> {
        match self.state {
            VocabularyState::Empty => None,
            VocabularyState::Built => Some(self.indexer.word_index()),
        }
    }

    /// Number of distinct words in the vocabulary; 0 before the build.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        match self.state {
            VocabularyState::Empty => 0,
            VocabularyState::Built => self.indexer.vocab_size(),
        }
    }

    /// Build the vocabulary from one or more batches of sample texts.
    ///
    /// All batches are flattened into a single text list before indexing,
    /// so one shared vocabulary covers every batch. A processor fits
    /// exactly once.
    ///
    /// # Errors
    ///
    /// - [`VectorizarError::EmptyCorpus`] if the flattened list holds no
    ///   texts; the processor stays unbuilt.
    /// - [`VectorizarError::VocabularyAlreadyBuilt`] on a second call; the
    ///   existing vocabulary is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorizar::text::{Text, TextProcessor};
    ///
    /// let first: Vec<Text> = vec!["我 在 中国".into()];
    /// let second: Vec<Text> = vec!["北京 是 中国 的 首都".into()];
    ///
    /// let mut processor = TextProcessor::new();
    /// processor.fit(&[&first, &second]).expect("fit should succeed");
    /// assert_eq!(processor.vocabulary_size(), 7);
    /// ```
    pub fn fit(&mut self, batches: &[&[Text]]) -> Result<()> {
        if self.is_built() {
            return Err(VectorizarError::VocabularyAlreadyBuilt);
        }

        let texts: Vec<&Text> = batches.iter().flat_map(|batch| batch.iter()).collect();
        if texts.is_empty() {
            return Err(VectorizarError::EmptyCorpus);
        }

        self.indexer.fit(&texts)?;
        self.state = VocabularyState::Built;
        Ok(())
    }

    /// Convert batches of texts into fixed-length index sequences.
    ///
    /// Each batch becomes one `Matrix<u32>` of shape
    /// (batch len × `length`): every text is mapped to its vocabulary
    /// indices (unknown words dropped), then padded with 0 at the front
    /// or truncated to its last `length` indices.
    ///
    /// # Errors
    ///
    /// Returns [`VectorizarError::VocabularyNotBuilt`] if
    /// [`fit`](Self::fit) has not run yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorizar::text::{Text, TextProcessor};
    ///
    /// let batch: Vec<Text> = vec!["a b c".into(), "a b".into(), "d".into()];
    ///
    /// let mut processor = TextProcessor::new();
    /// processor.fit(&[&batch]).expect("fit should succeed");
    ///
    /// let sequences = processor.to_sequences(3, &[&batch]).expect("vocabulary is built");
    /// assert_eq!(sequences[0].row(0), &[1, 2, 3]);
    /// assert_eq!(sequences[0].row(1), &[0, 1, 2]);
    /// assert_eq!(sequences[0].row(2), &[0, 0, 4]);
    /// ```
    pub fn to_sequences(&self, length: usize, batches: &[&[Text]]) -> Result<Vec<Matrix<u32>>> {
        if !self.is_built() {
            return Err(VectorizarError::VocabularyNotBuilt);
        }

        batches
            .iter()
            .map(|batch| {
                let sequences = self.indexer.texts_to_sequences(batch)?;
                self.padder.pad(&sequences, length)
            })
            .collect()
    }

    /// Convert batches of texts into bag-of-words presence vectors.
    ///
    /// Each batch becomes one `Matrix<f32>` of shape
    /// (batch len × vocabulary size + 1): cell `(i, j)` is 1.0 if index
    /// `j` occurs anywhere in text i's sequence, else 0.0. Column 0
    /// exists for symmetry with the 1-based indices and stays 0.0 for
    /// real words.
    ///
    /// # Errors
    ///
    /// Returns [`VectorizarError::VocabularyNotBuilt`] if
    /// [`fit`](Self::fit) has not run yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorizar::text::{Text, TextProcessor};
    ///
    /// let batch: Vec<Text> = vec!["a b".into(), "c".into()];
    ///
    /// let mut processor = TextProcessor::new();
    /// processor.fit(&[&batch]).expect("fit should succeed");
    ///
    /// let bows = processor.to_bag_of_words(&[&batch]).expect("vocabulary is built");
    /// assert_eq!(bows[0].shape(), (2, 4));
    /// assert_eq!(bows[0].row(0), &[0.0, 1.0, 1.0, 0.0]);
    /// assert_eq!(bows[0].row(1), &[0.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn to_bag_of_words(&self, batches: &[&[Text]]) -> Result<Vec<Matrix<f32>>> {
        if !self.is_built() {
            return Err(VectorizarError::VocabularyNotBuilt);
        }

        let width = self.vocabulary_size() + 1;

        batches
            .iter()
            .map(|batch| {
                let sequences = self.indexer.texts_to_sequences(batch)?;
                let mut data = vec![0.0f32; sequences.len() * width];
                for (i, sequence) in sequences.iter().enumerate() {
                    for &index in sequence {
                        data[i * width + index as usize] = 1.0;
                    }
                }
                Matrix::from_vec(sequences.len(), width, data)
                    .map_err(|e: &str| VectorizarError::Other(e.to_string()))
            })
            .collect()
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}
