use crate::commands::{cat::CatArgs, demo::DemoArgs, segment::SegmentArgs, vocab::VocabArgs};

pub mod cat;
pub mod demo;
pub mod segment;
pub mod vocab;

/// Subcommands for basictok
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary and print its tail.
    Vocab(VocabArgs),

    /// Print the token list for some text.
    Segment(SegmentArgs),

    /// Act as a line-oriented encoder or decoder.
    Cat(CatArgs),

    /// Build, encode and decode the corpus and a sample text.
    Demo(DemoArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Segment(cmd) => cmd.run(),
            Commands::Cat(cmd) => cmd.run(),
            Commands::Demo(cmd) => cmd.run(),
        }
    }
}
