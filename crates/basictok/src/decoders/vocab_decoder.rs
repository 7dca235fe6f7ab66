//! # Vocabulary ``{ T -> String }`` Token Decoder

use crate::alloc::sync::Arc;
use crate::decoders::spacing::SpacingRules;
use crate::decoders::token_decoder::TokenDecoder;
use crate::types::TokenType;
use crate::vocab::Vocabulary;

/// A [`TokenDecoder<T>`] over the inverse map of a [`Vocabulary`].
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `decoder`.
#[derive(Debug, Clone)]
pub struct VocabDecoder<T: TokenType> {
    vocab: Arc<Vocabulary<T>>,
    spacing: SpacingRules,
}

impl<T: TokenType> VocabDecoder<T> {
    /// Creates a new decoder with the default spacing rules.
    pub fn new(vocab: Arc<Vocabulary<T>>) -> Self {
        Self::init(vocab, SpacingRules::default())
    }

    /// Creates a new decoder.
    ///
    /// ## Arguments
    /// * `vocab` - The shared vocabulary.
    /// * `spacing` - The reassembly rules.
    pub fn init(
        vocab: Arc<Vocabulary<T>>,
        spacing: SpacingRules,
    ) -> Self {
        Self { vocab, spacing }
    }
}

impl<T: TokenType> TokenDecoder<T> for VocabDecoder<T> {
    fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    fn spacing(&self) -> &SpacingRules {
        &self.spacing
    }
}
