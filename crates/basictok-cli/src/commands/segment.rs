use basictok::TextSegmentor;

use crate::input_output::InputArgs;

/// Args for the segment command.
#[derive(clap::Args, Debug)]
pub struct SegmentArgs {
    /// Text to segment; read from the input when absent.
    text: Option<String>,

    #[command(flatten)]
    input: InputArgs,
}

impl SegmentArgs {
    /// Run the segment command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let text = match &self.text {
            Some(text) => text.clone(),
            None => self.input.read_to_string()?,
        };

        let tokens = TextSegmentor::default().split_tokens(&text);
        println!("Tokens found: {tokens:?}");
        println!("Number of tokens: {}", tokens.len());

        Ok(())
    }
}
