use crate::{
    alloc::sync::Arc,
    decoders::{SpacingRules, TokenDecoder, VocabDecoder},
    encoders::{TokenEncoder, VocabEncoder},
    segmentation::SegmentationConfig,
    tokenizer::Tokenizer,
    types::TokenType,
    vocab::Vocabulary,
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenizerOptions {
    /// Segmentation delimiters.
    pub segmentation: SegmentationConfig,

    /// Decoder reassembly rules.
    pub spacing: SpacingRules,

    /// Should batch calls be threaded?
    ///
    /// Has no effect without the ``rayon`` feature.
    pub parallel: bool,
}

impl TokenizerOptions {
    /// Replace the segmentation config.
    pub fn with_segmentation(
        self,
        segmentation: SegmentationConfig,
    ) -> Self {
        Self {
            segmentation,
            ..self
        }
    }

    /// Replace the spacing rules.
    pub fn with_spacing(
        self,
        spacing: SpacingRules,
    ) -> Self {
        Self { spacing, ..self }
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded batch implementations.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }

    /// Build a [`TokenEncoder`] for the given vocab.
    pub fn build_encoder<T: TokenType>(
        &self,
        vocab: Arc<Vocabulary<T>>,
    ) -> Arc<dyn TokenEncoder<T>> {
        let enc = VocabEncoder::from_config(vocab, self.segmentation.clone());

        #[cfg(feature = "rayon")]
        if self.parallel {
            use crate::concurrency::rayon::ParallelRayonEncoder;
            return Arc::new(ParallelRayonEncoder::new(enc));
        }

        Arc::new(enc)
    }

    /// Build a [`TokenDecoder`] for the given vocab.
    pub fn build_decoder<T: TokenType>(
        &self,
        vocab: Arc<Vocabulary<T>>,
    ) -> Arc<dyn TokenDecoder<T>> {
        let dec = VocabDecoder::init(vocab, self.spacing.clone());

        #[cfg(feature = "rayon")]
        if self.parallel {
            use crate::concurrency::rayon::ParallelRayonDecoder;
            return Arc::new(ParallelRayonDecoder::new(dec));
        }

        Arc::new(dec)
    }

    /// Build a [`Tokenizer`] for the given vocab.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<Vocabulary<T>>,
    ) -> Arc<Tokenizer<T>> {
        Tokenizer::new(
            vocab.clone(),
            self.build_encoder(vocab.clone()),
            self.build_decoder(vocab),
        )
        .into()
    }
}
