//! # Vocabulary Lookup Encoder

use crate::alloc::sync::Arc;
use crate::encoders::token_encoder::TokenEncoder;
use crate::segmentation::{SegmentationConfig, TextSegmentor};
use crate::types::TokenType;
use crate::vocab::Vocabulary;

/// A [`TokenEncoder<T>`] which looks each segmented token up in a [`Vocabulary`].
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `encoder`.
#[derive(Debug, Clone)]
pub struct VocabEncoder<T: TokenType> {
    vocab: Arc<Vocabulary<T>>,
    segmentor: TextSegmentor,
}

impl<T: TokenType> VocabEncoder<T> {
    /// Create a new encoder with the default segmentation.
    ///
    /// ## Arguments
    /// * `vocab` - The shared vocabulary.
    pub fn new(vocab: Arc<Vocabulary<T>>) -> Self {
        Self::init(vocab, TextSegmentor::default())
    }

    /// Create a new encoder with the given segmentation config.
    ///
    /// ## Arguments
    /// * `vocab` - The shared vocabulary.
    /// * `config` - The segmentation config.
    pub fn from_config(
        vocab: Arc<Vocabulary<T>>,
        config: SegmentationConfig,
    ) -> Self {
        Self::init(vocab, TextSegmentor::from_config(config))
    }

    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The shared vocabulary.
    /// * `segmentor` - The text segmentor.
    pub fn init(
        vocab: Arc<Vocabulary<T>>,
        segmentor: TextSegmentor,
    ) -> Self {
        Self { vocab, segmentor }
    }
}

impl<T: TokenType> TokenEncoder<T> for VocabEncoder<T> {
    fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    fn segmentor(&self) -> &TextSegmentor {
        &self.segmentor
    }
}
