use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

/// Path argument naming the standard stream instead of a file.
const STDIO_PATH: &str = "-";

/// The file named by a path argument; `None` selects stdin/stdout.
fn file_path(arg: &Option<PathBuf>) -> Option<&Path> {
    arg.as_deref().filter(|p| p.as_os_str() != STDIO_PATH)
}

/// Where a command reads its text from.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file; stdin when absent or "-".
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Buffered reader over the input, for line-oriented commands.
    pub fn reader(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(match file_path(&self.input) {
            Some(path) => Box::new(BufReader::new(File::open(path)?)),
            None => Box::new(io::stdin().lock()),
        })
    }

    /// Read the whole input as one text.
    pub fn read_to_string(&self) -> io::Result<String> {
        let mut text = String::new();
        self.reader()?.read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Where a command writes its results to.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file; stdout when absent or "-".
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Buffered writer over the output; flushed by the caller.
    pub fn writer(&self) -> io::Result<Box<dyn Write>> {
        Ok(match file_path(&self.output) {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        })
    }
}
