//! Text processing: corpus units, tokenization, vocabulary indexing,
//! sequence padding, and the [`TextProcessor`] front end.
//!
//! The pipeline is: a [`Text`] (raw whitespace-joined string or
//! pre-tokenized token list) goes through an [`Indexer`] that owns the
//! word→index vocabulary, and the resulting index sequences are shaped
//! into fixed-width matrices by a [`Padder`] or into bag-of-words rows by
//! the processor itself.
//!
//! - [`corpus`]: the `Text` corpus unit
//! - [`tokenize`]: whitespace tokenization for raw units
//! - [`indexer`]: vocabulary building and text→sequence conversion
//! - [`sequence`]: fixed-width padding/truncation of index sequences
//! - [`processor`]: the `TextProcessor` combining all of the above

pub mod corpus;
pub mod indexer;
pub mod processor;
pub mod sequence;
pub mod tokenize;

use crate::error::Result;

/// Trait for tokenizers that split raw text into string tokens.
///
/// # Examples
///
/// ```
/// use vectorizar::text::{tokenize::WhitespaceTokenizer, Tokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("hello world").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub trait Tokenizer {
    /// Split text into tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

pub use corpus::Text;
pub use indexer::{FrequencyIndexer, Indexer};
pub use processor::TextProcessor;
pub use sequence::{pad_sequences, PadPosition, Padder, SequencePadder};
pub use tokenize::WhitespaceTokenizer;

#[cfg(test)]
mod processor_tests;
