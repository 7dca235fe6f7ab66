use std::io::{BufRead, Write};

use basictok::{BasictokError, Tokenizer};

use crate::{
    corpus::CorpusArgs,
    input_output::{InputArgs, OutputArgs},
};

/// The tokenizer mode.
#[derive(Debug, Clone, Copy)]
pub enum TokenizerMode {
    Encode,
    Decode,
}

/// Mode selection for the tokenizer.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to identifiers.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from identifiers to text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    decode: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    pub fn mode(&self) -> TokenizerMode {
        if self.decode {
            TokenizerMode::Decode
        } else {
            TokenizerMode::Encode
        }
    }
}

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = Tokenizer::from_vocab(self.corpus.build_vocab()?);

        let mut reader = self.input.reader()?;
        let mut writer = self.output.writer()?;

        match self.tokenizer_mode.mode() {
            TokenizerMode::Encode => run_cat_encode(&mut reader, &mut writer, &tokenizer)?,
            TokenizerMode::Decode => run_cat_decode(&mut reader, &mut writer, &tokenizer)?,
        }

        Ok(())
    }
}

fn run_cat_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let ids = tokenizer.encode(&line?);

        for (idx, id) in ids.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
        }
        writeln!(writer)?;
        writer.flush()?;
    }
    Ok(())
}

fn parse_ids(line: &str) -> Result<Vec<u32>, BasictokError> {
    line.split_whitespace()
        .map(|s| {
            s.parse()
                .map_err(|e| BasictokError::Parse(format!("identifier {s:?}: {e}")))
        })
        .collect()
}

fn run_cat_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let ids = parse_ids(&line?)?;

        writeln!(writer, "{}", tokenizer.decode(&ids))?;
        writer.flush()?;
    }
    Ok(())
}
