mod commands;
mod corpus;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;
use logging::LogArgs;

/// basictok: word/punctuation tokenizer over a corpus-built vocabulary.
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    logging: LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run()
}
