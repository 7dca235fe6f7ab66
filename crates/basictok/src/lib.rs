//! # `basictok` Word/Punctuation Tokenizer
//!
//! A small, correctness-focused tokenizer over a fixed vocabulary.
//!
//! Text is split on whitespace, the double hyphen, and single punctuation
//! characters; each token maps to an integer identifier through a
//! [`vocab::Vocabulary`]. Decoding reassembles text with punctuation
//! attached tight to the preceding word.
//!
//! See:
//! * [`segmentation`] to split text into tokens.
//! * [`encoders`] to encode text into identifiers.
//! * [`decoders`] to decode identifiers into text.
//! * [`vocab`] to build and share vocabularies.
//! * [`tokenizer`] for the combined [`Tokenizer`].
//!
//! ## Lossy Behavior
//!
//! Encoding and decoding never fail:
//! * a token missing from the vocabulary becomes the unknown-token identifier
//!   (`<|unk|>`) when the vocabulary reserves one, and is dropped otherwise;
//! * an identifier missing from the vocabulary is skipped.
//!
//! So `decode(encode(text))` reproduces `text` only when every token is known,
//! and even then only up to the spacing heuristic.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all ``HashMap``/``HashSet`` implementations for ``ahash``.
//!
//! #### feature: ``rayon``
//!
//! This enables batch-parallel encoder/decoder wrappers, selected by
//! the `parallel` field of [`TokenizerOptions`].
//!
//! #### feature: ``tracing``
//!
//! This enables ``tracing`` instrumentation points on encode/decode.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use basictok::{Tokenizer, VocabBuilder, Vocabulary};
//!
//! let vocab: Arc<Vocabulary<u32>> = VocabBuilder::new()
//!     .with_corpus("Hello, how are you?")
//!     .build::<u32>()?
//!     .into();
//!
//! let tokenizer = Tokenizer::from_vocab(vocab);
//! let ids = tokenizer.encode("Hello, how are you?");
//! assert_eq!(tokenizer.decode(&ids), "Hello, how are you?");
//! # Ok::<(), basictok::BasictokError>(())
//! ```
#![warn(missing_docs, unused)]

extern crate alloc;

pub mod concurrency;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod segmentation;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::{SpacingRules, TokenDecoder, VocabDecoder};
#[doc(inline)]
pub use encoders::{TokenEncoder, VocabEncoder};
#[doc(inline)]
pub use errors::{BTResult, BasictokError};
#[doc(inline)]
pub use segmentation::{SegmentationConfig, TextSegmentor};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions, decode, encode};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SpecialTokens, VocabBuilder, Vocabulary};
