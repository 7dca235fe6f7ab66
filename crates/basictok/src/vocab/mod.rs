//! # Vocabulary
//!
//! [`Vocabulary`] is the immutable, bijective `{ token <-> id }` mapping
//! the encoders and decoders share; usually behind an `Arc`.
//!
//! [`VocabBuilder`] constructs one from sample corpora,
//! reserving the [`SpecialTokens`] markers.

pub mod special_tokens;
pub mod vocab_builder;
pub mod vocab_types;
pub mod vocabulary;

#[doc(inline)]
pub use special_tokens::{END_OF_TEXT_MARKER, SpecialTokens, UNKNOWN_MARKER};
#[doc(inline)]
pub use vocab_builder::VocabBuilder;
#[doc(inline)]
pub use vocab_types::{IdTokenMap, TokenIdMap};
#[doc(inline)]
pub use vocabulary::Vocabulary;
