//! Error types for glyphmatch-recog

use thiserror::Error;

/// Errors that can occur during template construction, classification
/// and evaluation
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library or rasterizer error, propagated unchanged
    #[error(transparent)]
    Core(#[from] glyphmatch_core::Error),

    /// Template build requested with no symbols
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// Alphabet lists the same symbol more than once
    #[error("duplicate symbol in alphabet: {0:?}")]
    DuplicateSymbol(char),

    /// Predicted and ground-truth strings differ in length
    #[error("length mismatch: predicted {predicted} symbols, ground truth {ground_truth}")]
    LengthMismatch {
        predicted: usize,
        ground_truth: usize,
    },

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
