//! # Token Encoder Trait

use crate::alloc::sync::Arc;
use crate::segmentation::TextSegmentor;
use crate::types::TokenType;
use crate::vocab::Vocabulary;

/// A trait for token encoders.
///
/// Encoding never fails: a token missing from the vocabulary is replaced by
/// the unknown-token identifier when one is reserved, and otherwise omitted.
/// The output is never longer than the token sequence.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached vocabulary.
    fn vocab(&self) -> &Arc<Vocabulary<T>>;

    /// Return the attached text segmentor.
    fn segmentor(&self) -> &TextSegmentor;

    /// Encode one token, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `token` - The token to encode.
    /// * `ids` - The target identifier buffer to append to.
    fn encode_token_append(
        &self,
        token: &str,
        ids: &mut Vec<T>,
    ) {
        let vocab = self.vocab();
        if let Some(id) = vocab.token_id(token) {
            ids.push(id);
        } else if let Some(unknown) = vocab.unknown_id() {
            log::trace!("unknown token {token:?} -> {unknown}");
            ids.push(unknown);
        } else {
            log::trace!("dropping unknown token {token:?}");
        }
    }

    /// Encode a token sequence into identifiers.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens to encode.
    ///
    /// ## Returns
    /// A vector of identifiers.
    fn encode_tokens(
        &self,
        tokens: &[&str],
    ) -> Vec<T> {
        let mut ids = Vec::with_capacity(tokens.len());
        for token in tokens {
            self.encode_token_append(token, &mut ids);
        }
        ids
    }

    /// Encode text into identifiers.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A vector of identifiers.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.encode_tokens(&self.segmentor().split_tokens(text))
    }

    /// Encode a batch of text into identifiers.
    ///
    /// ## Arguments
    /// * `batch` - A slice of texts to encode.
    ///
    /// ## Returns
    /// A vector of identifier vectors.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }
}
