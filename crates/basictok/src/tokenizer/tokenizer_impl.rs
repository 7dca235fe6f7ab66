use crate::{
    alloc::sync::Arc,
    decoders::TokenDecoder,
    encoders::TokenEncoder,
    tokenizer::TokenizerOptions,
    types::TokenType,
    vocab::Vocabulary,
};

/// Unified Tokenizer.
///
/// Combines a shared [`Vocabulary`] with an encoder and decoder built over it.
#[derive(Clone)]
pub struct Tokenizer<T: TokenType> {
    vocab: Arc<Vocabulary<T>>,
    encoder: Arc<dyn TokenEncoder<T>>,
    decoder: Arc<dyn TokenDecoder<T>>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a new tokenizer.
    pub fn new(
        vocab: Arc<Vocabulary<T>>,
        encoder: Arc<dyn TokenEncoder<T>>,
        decoder: Arc<dyn TokenDecoder<T>>,
    ) -> Self {
        Self {
            vocab,
            encoder,
            decoder,
        }
    }

    /// Build a tokenizer with default options.
    pub fn from_vocab(vocab: Arc<Vocabulary<T>>) -> Self {
        let options = TokenizerOptions::default();
        Self::new(
            vocab.clone(),
            options.build_encoder(vocab.clone()),
            options.build_decoder(vocab),
        )
    }

    /// Get the attached vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    /// Split text into tokens, as the encoder would.
    pub fn segment<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        self.encoder.segmentor().split_tokens(text)
    }

    /// Encode text into identifiers.
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.encoder.encode(text)
    }

    /// Encode an already segmented token sequence.
    pub fn encode_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<T> {
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        self.encoder.encode_tokens(&tokens)
    }

    /// Encode a batch of texts.
    pub fn encode_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        let batch: Vec<&str> = batch.iter().map(AsRef::as_ref).collect();
        self.encoder.encode_batch(&batch)
    }

    /// Decode identifiers into text.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> String {
        self.decoder.decode(ids)
    }

    /// Decode a batch of identifier sequences.
    pub fn decode_batch<V: AsRef<[T]>>(
        &self,
        batch: &[V],
    ) -> Vec<String> {
        let batch: Vec<&[T]> = batch.iter().map(AsRef::as_ref).collect();
        self.decoder.decode_batch(&batch)
    }
}

/// Encode text against a vocabulary, with default options.
///
/// Unknown tokens become the unknown-token identifier when the vocabulary
/// reserves one, and are dropped otherwise.
pub fn encode<T: TokenType>(
    text: &str,
    vocab: &Arc<Vocabulary<T>>,
) -> Vec<T> {
    Tokenizer::from_vocab(vocab.clone()).encode(text)
}

/// Decode identifiers against a vocabulary, with default options.
///
/// Identifiers missing from the vocabulary are skipped.
pub fn decode<T: TokenType>(
    ids: &[T],
    vocab: &Arc<Vocabulary<T>>,
) -> String {
    Tokenizer::from_vocab(vocab.clone()).decode(ids)
}
