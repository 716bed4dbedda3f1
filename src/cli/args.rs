//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Retext - Transform text files interactively from your terminal
#[derive(Parser, Debug)]
#[command(name = "retext")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input text file to read.
    /// If not provided, the session prompts for a filename interactively.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path.
    /// Defaults to the input path with an '_out' suffix (e.g., notes.txt -> notes_out.txt)
    /// when running non-interactively; otherwise the session prompts for it.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Transformation to apply, by name.
    /// Options: "identity", "uppercase", "lowercase", "capitalize",
    /// "line-numbers", "collapse-spaces". Run `retext list` for details.
    #[arg(short, long)]
    pub transform: Option<String>,

    /// Skip all interactive prompts and run a single cycle.
    /// Requires --input and --transform.
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Overwrite an existing output file without asking.
    /// Only meaningful together with --no-confirm; interactive sessions
    /// always ask before overwriting.
    #[arg(long, default_value = "false")]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available transformations
    List,
}

impl Cli {
    /// Get the output path, deriving from the input if not explicitly provided.
    /// The derived path sits next to the input with an '_out' suffix.
    pub fn output_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(self.output.clone().unwrap_or_else(|| {
            let parent = input.parent().unwrap_or_else(|| Path::new("."));
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            match input.extension().and_then(|e| e.to_str()) {
                Some(ext) => parent.join(format!("{}_out.{}", stem, ext)),
                None => parent.join(format!("{}_out", stem)),
            }
        }))
    }
}
