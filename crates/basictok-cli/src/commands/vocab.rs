use crate::corpus::CorpusArgs;

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Number of trailing entries to print.
    #[arg(long, default_value_t = 5)]
    tail: usize,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.corpus.build_vocab()?;

        println!("Vocabulary size: {}", vocab.len());
        println!("Max ID: {:?}", vocab.max_id());
        println!("End-of-text ID: {:?}", vocab.end_of_text_id());
        println!("Unknown token ID: {:?}", vocab.unknown_id());

        let entries = vocab.entries();
        let skip = entries.len().saturating_sub(self.tail);
        for (id, token) in &entries[skip..] {
            println!("({token:?}, {id})");
        }

        Ok(())
    }
}
