//! Command-line configuration.

use std::{
    fs::File,
    io::{self, BufReader, Cursor, Read},
};

use clap::Parser;

use crate::driver::DEFAULT_PROMPT;

/// Parse Kaleidoscope source and report each top-level form.
#[derive(Parser, Debug)]
#[command(name = "kaleidoscope", version)]
pub struct Cli {
    /// Source file to read; standard input when omitted
    pub file: Option<String>,

    /// Parse the given code instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub eval: Option<String>,

    /// Print the token stream instead of parsing
    #[arg(long)]
    pub tokens: bool,

    /// Print each parsed form as an s-expression
    #[arg(long)]
    pub print_ast: bool,

    /// Prompt written before each top-level form
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Write no prompt at all
    #[arg(long)]
    pub no_prompt: bool,
}

impl Cli {
    pub fn prompt(&self) -> &str {
        if self.no_prompt {
            ""
        } else {
            &self.prompt
        }
    }

    /// Opens the configured input, returning it with the name used in positions.
    pub fn open_source(&self) -> io::Result<(Box<dyn Read>, Option<String>)> {
        if let Some(code) = &self.eval {
            return Ok((
                Box::new(Cursor::new(code.clone().into_bytes())),
                Some(String::from("eval")),
            ));
        }

        match &self.file {
            Some(path) => Ok((Box::new(BufReader::new(File::open(path)?)), Some(path.clone()))),
            None => Ok((Box::new(io::stdin().lock()), None)),
        }
    }
}
