//! # Error Types
//!
//! Errors only arise while constructing a [`Vocabulary`](crate::vocab::Vocabulary)
//! or parsing identifier text; encoding and decoding are infallible.

/// Errors from basictok operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BasictokError {
    /// The same token was listed more than once.
    #[error("token {token:?} listed at both position {first} and {second}")]
    DuplicateToken {
        /// The repeated token.
        token: String,
        /// The first position of the token.
        first: usize,
        /// The repeated position of the token.
        second: usize,
    },

    /// Two tokens share one identifier.
    #[error("identifier {id} assigned to both {first:?} and {second:?}")]
    DuplicateId {
        /// The shared identifier.
        id: String,
        /// One token holding the identifier.
        first: String,
        /// The other token holding the identifier.
        second: String,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Parse error (identifier text, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for basictok operations.
pub type BTResult<T> = core::result::Result<T, BasictokError>;
