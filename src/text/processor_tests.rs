use std::collections::HashMap;

use crate::error::{Result, VectorizarError};
use crate::primitives::Matrix;
use crate::text::{Indexer, Padder, Text, TextProcessor};

fn batch(texts: &[&str]) -> Vec<Text> {
    texts.iter().map(|&t| Text::from(t)).collect()
}

#[test]
fn test_fit_builds_vocabulary() {
    let texts = batch(&["a b c", "a b", "d"]);
    let mut processor = TextProcessor::new();
    processor.fit(&[&texts]).expect("fit should succeed");

    assert!(processor.is_built());
    let vocab = processor.vocabulary().expect("vocabulary should exist");
    assert_eq!(vocab.len(), 4);
    assert_eq!(processor.vocabulary_size(), vocab.len());
}

#[test]
fn test_vocabulary_indices_cover_one_to_n() {
    let texts = batch(&["e d c", "b a", "a b c d e"]);
    let mut processor = TextProcessor::new();
    processor.fit(&[&texts]).expect("fit should succeed");

    let vocab = processor.vocabulary().expect("vocabulary should exist");
    let mut indices: Vec<u32> = vocab.values().copied().collect();
    indices.sort_unstable();
    let expected: Vec<u32> = (1..=vocab.len() as u32).collect();
    assert_eq!(indices, expected);
}

#[test]
fn test_vocabulary_none_before_fit() {
    let processor = TextProcessor::new();
    assert!(!processor.is_built());
    assert!(processor.vocabulary().is_none());
    assert_eq!(processor.vocabulary_size(), 0);
}

#[test]
fn test_vocabulary_stable_across_calls() {
    let texts = batch(&["a b", "b c"]);
    let mut processor = TextProcessor::new();
    processor.fit(&[&texts]).expect("fit should succeed");

    let first = processor.vocabulary().expect("vocabulary should exist").clone();
    let second = processor.vocabulary().expect("vocabulary should exist");
    assert_eq!(&first, second);
}

#[test]
fn test_fit_empty_batches_is_empty_corpus() {
    let empty: Vec<Text> = Vec::new();
    let mut processor = TextProcessor::new();

    let err = processor.fit(&[&empty, &empty]).expect_err("fit must fail");
    assert!(matches!(err, VectorizarError::EmptyCorpus));
    assert!(!processor.is_built());
    assert!(processor.vocabulary().is_none());
}

#[test]
fn test_fit_no_batches_is_empty_corpus() {
    let mut processor = TextProcessor::new();
    let err = processor.fit(&[]).expect_err("fit must fail");
    assert!(matches!(err, VectorizarError::EmptyCorpus));
    assert!(!processor.is_built());
}

#[test]
fn test_second_fit_is_rejected() {
    let texts = batch(&["a b"]);
    let more = batch(&["c d e"]);
    let mut processor = TextProcessor::new();
    processor.fit(&[&texts]).expect("fit should succeed");
    let vocab_before = processor.vocabulary().expect("vocabulary should exist").clone();

    let err = processor.fit(&[&more]).expect_err("second fit must fail");
    assert!(matches!(err, VectorizarError::VocabularyAlreadyBuilt));
    // Existing vocabulary untouched
    let vocab_after = processor.vocabulary().expect("vocabulary should exist");
    assert_eq!(&vocab_before, vocab_after);
}

#[test]
fn test_multiple_batches_share_one_vocabulary() {
    let first = batch(&["a b"]);
    let second = batch(&["b c"]);
    let mut processor = TextProcessor::new();
    processor.fit(&[&first, &second]).expect("fit should succeed");

    // b counted across both batches
    assert_eq!(processor.vocabulary_size(), 3);
    let vocab = processor.vocabulary().expect("vocabulary should exist");
    assert_eq!(vocab["b"], 1);
}

#[test]
fn test_to_sequences_before_fit_fails() {
    let texts = batch(&["a b"]);
    let processor = TextProcessor::new();
    let err = processor
        .to_sequences(3, &[&texts, &texts])
        .expect_err("encode must fail");
    assert!(matches!(err, VectorizarError::VocabularyNotBuilt));
}

#[test]
fn test_to_bag_of_words_before_fit_fails() {
    let texts = batch(&["a b"]);
    let processor = TextProcessor::new();
    let err = processor
        .to_bag_of_words(&[&texts])
        .expect_err("encode must fail");
    assert!(matches!(err, VectorizarError::VocabularyNotBuilt));
}

#[test]
fn test_to_sequences_one_matrix_per_batch() {
    let first = batch(&["a b", "c"]);
    let second = batch(&["a"]);
    let mut processor = TextProcessor::new();
    processor.fit(&[&first, &second]).expect("fit should succeed");

    let matrices = processor
        .to_sequences(5, &[&first, &second])
        .expect("vocabulary is built");
    assert_eq!(matrices.len(), 2);
    assert_eq!(matrices[0].shape(), (2, 5));
    assert_eq!(matrices[1].shape(), (1, 5));
}

#[test]
fn test_to_sequences_zero_length() {
    let texts = batch(&["a b c"]);
    let mut processor = TextProcessor::new();
    processor.fit(&[&texts]).expect("fit should succeed");

    let matrices = processor
        .to_sequences(0, &[&texts])
        .expect("vocabulary is built");
    assert_eq!(matrices[0].shape(), (1, 0));
}

#[test]
fn test_to_sequences_drops_unknown_words() {
    let fitted = batch(&["a b"]);
    let mut processor = TextProcessor::new();
    processor.fit(&[&fitted]).expect("fit should succeed");

    let unseen = batch(&["a x b y"]);
    let matrices = processor
        .to_sequences(3, &[&unseen])
        .expect("vocabulary is built");
    // x and y dropped, remaining [a b] left-padded
    assert_eq!(matrices[0].row(0), &[0, 1, 2]);
}

#[test]
fn test_bag_of_words_shape_and_cells() {
    let texts = batch(&["a b c", "a b", "d"]);
    let mut processor = TextProcessor::new();
    processor.fit(&[&texts]).expect("fit should succeed");

    let bows = processor
        .to_bag_of_words(&[&texts])
        .expect("vocabulary is built");
    let bow = &bows[0];
    assert_eq!(bow.shape(), (3, processor.vocabulary_size() + 1));
    for &cell in bow.as_slice() {
        assert!(cell == 0.0 || cell == 1.0);
    }
    // Column 0 is never set by real words
    for row in 0..bow.n_rows() {
        assert_eq!(bow.get(row, 0), 0.0);
    }
}

#[test]
fn test_bag_of_words_ignores_repetition() {
    let fitted = batch(&["a b"]);
    let mut processor = TextProcessor::new();
    processor.fit(&[&fitted]).expect("fit should succeed");

    let repeated = batch(&["a a a"]);
    let bows = processor
        .to_bag_of_words(&[&repeated])
        .expect("vocabulary is built");
    assert_eq!(bows[0].row(0), &[0.0, 1.0, 0.0]);
}

// A deterministic fake pair: every word maps to a fixed index, padding
// marks fill cells with 99. Proves the processor is testable against
// injected collaborators.
struct FakeIndexer {
    vocab: HashMap<String, u32>,
}

impl FakeIndexer {
    fn new() -> Self {
        let mut vocab = HashMap::new();
        vocab.insert("one".to_string(), 1);
        vocab.insert("two".to_string(), 2);
        Self { vocab }
    }
}

impl Indexer for FakeIndexer {
    fn fit(&mut self, _texts: &[&Text]) -> Result<()> {
        Ok(())
    }

    fn texts_to_sequences(&self, texts: &[Text]) -> Result<Vec<Vec<u32>>> {
        Ok(texts
            .iter()
            .map(|text| match text {
                Text::Raw(s) => s
                    .split_whitespace()
                    .filter_map(|w| self.vocab.get(w).copied())
                    .collect(),
                Text::Tokens(tokens) => tokens
                    .iter()
                    .filter_map(|w| self.vocab.get(w.as_str()).copied())
                    .collect(),
            })
            .collect())
    }

    fn word_index(&self) -> &HashMap<String, u32> {
        &self.vocab
    }
}

struct FakePadder;

impl Padder for FakePadder {
    fn pad(&self, sequences: &[Vec<u32>], maxlen: usize) -> Result<Matrix<u32>> {
        let mut data = vec![99u32; sequences.len() * maxlen];
        for (i, sequence) in sequences.iter().enumerate() {
            for (j, &index) in sequence.iter().take(maxlen).enumerate() {
                data[i * maxlen + j] = index;
            }
        }
        Ok(Matrix::from_vec(sequences.len(), maxlen, data)
            .expect("fake padder dimensions are consistent"))
    }
}

#[test]
fn test_injected_collaborators() {
    let texts = batch(&["one two"]);
    let mut processor = TextProcessor::new()
        .with_indexer(Box::new(FakeIndexer::new()))
        .with_padder(Box::new(FakePadder));
    processor.fit(&[&texts]).expect("fit should succeed");

    assert_eq!(processor.vocabulary_size(), 2);
    let matrices = processor
        .to_sequences(3, &[&texts])
        .expect("vocabulary is built");
    assert_eq!(matrices[0].row(0), &[1, 2, 99]);
}
