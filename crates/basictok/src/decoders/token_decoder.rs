//! # Token Decoder Trait

use crate::alloc::sync::Arc;
use crate::decoders::spacing::SpacingRules;
use crate::types::TokenType;
use crate::vocab::Vocabulary;

/// Trait for token decoders.
///
/// Decoding never fails: identifiers missing from the vocabulary are skipped.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Return the attached vocabulary.
    fn vocab(&self) -> &Arc<Vocabulary<T>>;

    /// Return the attached spacing rules.
    fn spacing(&self) -> &SpacingRules;

    /// Resolve identifiers to their token strings, skipping unmapped identifiers.
    ///
    /// ## Arguments
    /// * `ids` - A slice of identifiers to resolve.
    ///
    /// ## Returns
    /// The resolved tokens, in order.
    fn resolve_tokens(
        &self,
        ids: &[T],
    ) -> Vec<&str> {
        let vocab = self.vocab();
        ids.iter()
            .filter_map(|&id| {
                let token = vocab.token_str(id);
                if token.is_none() {
                    log::trace!("skipping unmapped identifier {id}");
                }
                token
            })
            .collect()
    }

    /// Decodes identifiers into text.
    ///
    /// ## Arguments
    /// * `ids` - A slice of identifiers to decode.
    ///
    /// ## Returns
    /// The reassembled text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ids)))]
    fn decode(
        &self,
        ids: &[T],
    ) -> String {
        self.spacing().join(self.resolve_tokens(ids))
    }

    /// Decodes a batch of identifier sequences.
    ///
    /// ## Arguments
    /// * `batch` - A batch of identifier slices.
    ///
    /// ## Returns
    /// The reassembled texts.
    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        batch.iter().map(|ids| self.decode(ids)).collect()
    }
}
