//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use vectorizar::prelude::*;
//! ```

pub use crate::error::{Result, VectorizarError};
pub use crate::primitives::Matrix;
pub use crate::text::{
    pad_sequences, FrequencyIndexer, Indexer, PadPosition, Padder, SequencePadder, Text,
    TextProcessor, Tokenizer, WhitespaceTokenizer,
};
