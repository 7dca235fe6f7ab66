//! # Corpus Vocabulary Builder

use std::collections::BTreeSet;

use crate::{
    errors::BTResult,
    segmentation::{SegmentationConfig, TextSegmentor},
    types::TokenType,
    vocab::{SpecialTokens, Vocabulary},
};

/// Builds a [`Vocabulary`] from sample corpora.
///
/// Identifiers are assigned to the sorted, unique corpus tokens;
/// the reserved markers follow, end-of-text first.
#[derive(Debug, Clone, Default)]
pub struct VocabBuilder {
    segmentor: TextSegmentor,
    specials: SpecialTokens,
    tokens: BTreeSet<String>,
}

impl VocabBuilder {
    /// Create a new builder with the default segmentation and markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the segmentation config used to split corpora.
    ///
    /// Affects only corpora added afterward.
    pub fn with_segmentation(
        self,
        config: SegmentationConfig,
    ) -> Self {
        Self {
            segmentor: TextSegmentor::from_config(config),
            ..self
        }
    }

    /// Replace the reserved markers.
    pub fn with_specials(
        self,
        specials: SpecialTokens,
    ) -> Self {
        Self { specials, ..self }
    }

    /// Add a corpus to the builder.
    pub fn with_corpus(
        mut self,
        text: &str,
    ) -> Self {
        self.add_corpus(text);
        self
    }

    /// Add a corpus to the builder.
    pub fn add_corpus(
        &mut self,
        text: &str,
    ) {
        self.tokens.extend(
            self.segmentor
                .split_tokens(text)
                .into_iter()
                .map(str::to_string),
        );
    }

    /// The number of unique corpus tokens seen so far.
    pub fn corpus_token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Build the vocabulary.
    ///
    /// Markers that already occur in the corpus keep their corpus identifier.
    ///
    /// ## Returns
    /// A `BTResult<Vocabulary>`, with errors when the vocabulary does not fit in `T`.
    pub fn build<T: TokenType>(&self) -> BTResult<Vocabulary<T>> {
        let markers = self
            .specials
            .markers()
            .filter(|m| !self.tokens.contains(*m))
            .map(str::to_string)
            .collect::<Vec<_>>();

        let vocab = Vocabulary::from_token_list(
            self.tokens.iter().cloned().chain(markers),
            &self.specials,
        )?;

        log::debug!(
            "built vocabulary: {} corpus tokens, {} total",
            self.tokens.len(),
            vocab.len()
        );

        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{END_OF_TEXT_MARKER, UNKNOWN_MARKER};

    const SAMPLE: &str =
        "IdeaWeaver-- a comprehensive CLI tool for AI model training and evaluation?";

    #[test]
    fn test_sample_vocab() {
        let vocab: Vocabulary<u32> = VocabBuilder::new().with_corpus(SAMPLE).build().unwrap();

        assert_eq!(vocab.len(), 15);
        assert_eq!(
            vocab.entries()[..5],
            [(0, "--"), (1, "?"), (2, "AI"), (3, "CLI"), (4, "IdeaWeaver")]
        );
        assert_eq!(
            vocab.entries()[10..],
            [
                (10, "model"),
                (11, "tool"),
                (12, "training"),
                (13, END_OF_TEXT_MARKER),
                (14, UNKNOWN_MARKER)
            ]
        );
        assert_eq!(vocab.end_of_text_id(), Some(13));
        assert_eq!(vocab.unknown_id(), Some(14));
    }

    #[test]
    fn test_multiple_corpora() {
        let mut builder = VocabBuilder::new().with_specials(SpecialTokens::none());
        builder.add_corpus("b a");
        builder.add_corpus("a, c");
        assert_eq!(builder.corpus_token_count(), 4);

        let vocab: Vocabulary<u16> = builder.build().unwrap();
        assert_eq!(vocab.entries(), vec![(0, ","), (1, "a"), (2, "b"), (3, "c")]);
        assert_eq!(vocab.unknown_id(), None);
    }

    #[test]
    fn test_marker_in_corpus() {
        let vocab: Vocabulary<u32> = VocabBuilder::new()
            .with_corpus("x <|unk|>")
            .build()
            .unwrap();
        assert_eq!(
            vocab.entries(),
            vec![(0, UNKNOWN_MARKER), (1, "x"), (2, END_OF_TEXT_MARKER)]
        );
        assert_eq!(vocab.unknown_id(), Some(0));
    }

    #[test]
    fn test_empty_corpus() {
        let vocab: Vocabulary<u32> = VocabBuilder::new().build().unwrap();
        assert_eq!(vocab.entries(), vec![(0, END_OF_TEXT_MARKER), (1, UNKNOWN_MARKER)]);
    }
}
