//! Vectorizar: text vectorization in pure Rust.
//!
//! Vectorizar builds a word-to-index vocabulary from sample texts and
//! converts texts into fixed-length integer index sequences or fixed-width
//! bag-of-words binary vectors, with ergonomic APIs and comprehensive
//! testing.
//!
//! # Quick Start
//!
//! ```
//! use vectorizar::prelude::*;
//!
//! // Sample texts: whitespace-joined strings or pre-tokenized lists
//! let batch: Vec<Text> = vec![
//!     "中国 的 首都 是 北京".into(),
//!     "北京 天安门".into(),
//!     "中国".into(),
//! ];
//!
//! // Build the vocabulary once
//! let mut processor = TextProcessor::new();
//! processor.fit(&[&batch]).unwrap();
//! assert_eq!(processor.vocabulary_size(), 6);
//!
//! // Fixed-length index sequences (left-padded with 0, tail kept)
//! let sequences = processor.to_sequences(4, &[&batch]).unwrap();
//! assert_eq!(sequences[0].shape(), (3, 4));
//!
//! // Bag-of-words presence vectors (vocabulary size + 1 columns)
//! let bows = processor.to_bag_of_words(&[&batch]).unwrap();
//! assert_eq!(bows[0].shape(), (3, 7));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core Matrix type
//! - [`text`]: corpus units, tokenization, indexing, padding, and the
//!   [`TextProcessor`] front end
//! - [`error`]: the crate error type and Result alias

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod text;

pub use error::{Result, VectorizarError};
pub use primitives::Matrix;
pub use text::{Text, TextProcessor};
