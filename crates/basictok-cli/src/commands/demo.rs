use basictok::Tokenizer;

use crate::corpus::CorpusArgs;

/// Args for the demo command.
#[derive(clap::Args, Debug)]
pub struct DemoArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Additional text to encode and decode.
    #[arg(long, default_value = "Hello, how are you?")]
    sample: String,
}

impl DemoArgs {
    /// Run the demo command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.corpus.build_vocab()?;
        let tokenizer = Tokenizer::from_vocab(vocab.clone());

        for (id, token) in vocab.entries().iter().rev().take(5).rev() {
            println!("({token:?}, {id})");
        }
        println!("Unknown token ID: {:?}", vocab.unknown_id());

        let corpus = self.corpus.corpus()?;
        let ids = tokenizer.encode(&corpus);
        println!("Token IDs: {ids:?}");
        println!("Decoded text: {}", tokenizer.decode(&ids));

        println!();
        println!("Testing with new text: {:?}", self.sample);
        let tokens = tokenizer.segment(&self.sample);
        println!("Tokens found: {tokens:?}");
        println!("Number of tokens: {}", tokens.len());
        for token in tokens.iter().filter(|t| !vocab.contains_token(t)) {
            log::info!("not in vocabulary: {token:?}");
        }

        let ids = tokenizer.encode(&self.sample);
        println!("Encoded IDs: {ids:?}");
        let decoded = tokenizer.decode(&ids);
        println!("Decoded text: {decoded}");
        if decoded != self.sample {
            log::warn!("sample text did not round-trip; some tokens are not in the vocabulary");
        }

        Ok(())
    }
}
