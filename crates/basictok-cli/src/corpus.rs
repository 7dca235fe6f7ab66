use std::sync::Arc;

use basictok::{SpecialTokens, VocabBuilder, Vocabulary};

/// The sample sentence used when no corpus is given.
pub const DEFAULT_CORPUS: &str =
    "IdeaWeaver-- a comprehensive CLI tool for AI model training and evaluation?";

/// Vocabulary corpus arg group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Corpus file to build the vocabulary from.
    #[arg(long, conflicts_with = "corpus_text")]
    corpus: Option<String>,

    /// Corpus text to build the vocabulary from.
    #[arg(long)]
    corpus_text: Option<String>,

    /// Do not reserve the unknown-token marker; unknown tokens are then dropped.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_unknown: bool,
}

impl CorpusArgs {
    /// Read the selected corpus.
    pub fn corpus(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(match (&self.corpus, &self.corpus_text) {
            (Some(path), _) => std::fs::read_to_string(path)?,
            (None, Some(text)) => text.clone(),
            (None, None) => DEFAULT_CORPUS.to_string(),
        })
    }

    /// Build the vocabulary from the selected corpus.
    pub fn build_vocab(&self) -> Result<Arc<Vocabulary<u32>>, Box<dyn std::error::Error>> {
        let mut specials = SpecialTokens::default();
        if self.no_unknown {
            specials = specials.with_unknown(None::<String>);
        }

        let corpus = self.corpus()?;
        let vocab = VocabBuilder::new()
            .with_specials(specials)
            .with_corpus(&corpus)
            .build::<u32>()?;

        log::info!("vocabulary: {} tokens from {} corpus bytes", vocab.len(), corpus.len());
        Ok(Arc::new(vocab))
    }
}
