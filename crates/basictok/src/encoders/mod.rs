//! # Token Encoders
//!
//! Encoder clients should use:
//!
//! * [`TokenEncoder`] - the encoder trait.
//! * [`VocabEncoder`] - the vocabulary lookup implementation.

pub mod token_encoder;
pub mod vocab_encoder;

#[doc(inline)]
pub use token_encoder::TokenEncoder;
#[doc(inline)]
pub use vocab_encoder::VocabEncoder;
