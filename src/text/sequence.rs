//! Fixed-width padding and truncation of index sequences.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorizarError};
use crate::primitives::Matrix;

/// Where padding is inserted, or which end truncation discards.
///
/// `Pre` pads at the front / discards from the front (keeping the tail);
/// `Post` pads at the back / discards from the back (keeping the head).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PadPosition {
    /// Front of the sequence.
    Pre,
    /// Back of the sequence.
    Post,
}

/// Shapes ragged index sequences into a fixed-width integer matrix.
///
/// The seam between [`TextProcessor`] and the concrete padding policy.
///
/// [`TextProcessor`]: crate::text::TextProcessor
pub trait Padder {
    /// Pad or truncate every sequence to exactly `maxlen` columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the output matrix cannot be assembled.
    fn pad(&self, sequences: &[Vec<u32>], maxlen: usize) -> Result<Matrix<u32>>;
}

/// Sequence padder with configurable padding/truncation ends.
///
/// Defaults preserve the information-keeping policy of the encoders in
/// this crate: shorter sequences are padded with 0 at the front, longer
/// sequences keep their *last* `maxlen` elements.
///
/// # Examples
///
/// ```
/// use vectorizar::text::{Padder, SequencePadder};
///
/// let padder = SequencePadder::new();
/// let m = padder.pad(&[vec![1, 2], vec![1, 2, 3, 4]], 3).expect("pad should succeed");
///
/// assert_eq!(m.row(0), &[0, 1, 2]);   // left-padded
/// assert_eq!(m.row(1), &[2, 3, 4]);   // front-truncated, tail kept
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequencePadder {
    /// End that receives padding.
    padding: PadPosition,
    /// End that truncation discards from.
    truncating: PadPosition,
    /// Fill value for padded cells.
    value: u32,
}

impl SequencePadder {
    /// Create a padder with the default policy: pre-padding,
    /// pre-truncation, fill value 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            padding: PadPosition::Pre,
            truncating: PadPosition::Pre,
            value: 0,
        }
    }

    /// Set which end receives padding.
    #[must_use]
    pub fn with_padding(mut self, padding: PadPosition) -> Self {
        self.padding = padding;
        self
    }

    /// Set which end truncation discards from.
    #[must_use]
    pub fn with_truncating(mut self, truncating: PadPosition) -> Self {
        self.truncating = truncating;
        self
    }

    /// Set the fill value for padded cells.
    #[must_use]
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }
}

impl Default for SequencePadder {
    fn default() -> Self {
        Self::new()
    }
}

impl Padder for SequencePadder {
    fn pad(&self, sequences: &[Vec<u32>], maxlen: usize) -> Result<Matrix<u32>> {
        let rows = sequences.len();
        let mut data = vec![self.value; rows * maxlen];

        for (i, sequence) in sequences.iter().enumerate() {
            let kept: &[u32] = if sequence.len() > maxlen {
                match self.truncating {
                    PadPosition::Pre => &sequence[sequence.len() - maxlen..],
                    PadPosition::Post => &sequence[..maxlen],
                }
            } else {
                sequence
            };

            let offset = match self.padding {
                PadPosition::Pre => maxlen - kept.len(),
                PadPosition::Post => 0,
            };

            for (j, &index) in kept.iter().enumerate() {
                data[i * maxlen + offset + j] = index;
            }
        }

        Matrix::from_vec(rows, maxlen, data)
            .map_err(|e: &str| VectorizarError::Other(e.to_string()))
    }
}

/// Pad sequences with the default policy (pre-padding with 0,
/// pre-truncation keeping the tail).
///
/// # Errors
///
/// Returns an error if the output matrix cannot be assembled.
///
/// # Examples
///
/// ```
/// use vectorizar::text::pad_sequences;
///
/// let m = pad_sequences(&[vec![5]], 3).expect("pad should succeed");
/// assert_eq!(m.row(0), &[0, 0, 5]);
/// ```
pub fn pad_sequences(sequences: &[Vec<u32>], maxlen: usize) -> Result<Matrix<u32>> {
    SequencePadder::new().pad(sequences, maxlen)
}
