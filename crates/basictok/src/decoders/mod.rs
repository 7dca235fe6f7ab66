//! # Token Decoders
//!
//! Decoder clients should use:
//!
//! * [`TokenDecoder`] - the decoder trait.
//! * [`VocabDecoder`] - the vocabulary lookup implementation.
//! * [`SpacingRules`] - the punctuation-aware reassembly rules.

pub mod spacing;
pub mod token_decoder;
pub mod vocab_decoder;

#[doc(inline)]
pub use spacing::SpacingRules;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
#[doc(inline)]
pub use vocab_decoder::VocabDecoder;
