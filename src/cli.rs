use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paragraphize")]
#[command(
    about = "Reflow prose into paragraphs by sentence and word-count targets, \
             with reproducible variation so the breaks do not look mechanical."
)]
pub struct Cli {
    /// Text file to format; "-" or nothing reads stdin.
    pub input: Option<PathBuf>,

    /// Write the result to this file instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Fewest sentences a paragraph may close with (default 2).
    #[arg(long = "min-sentences")]
    pub min_sentences: Option<usize>,

    /// Upper bound on the per-paragraph sentence target (default 4).
    #[arg(long = "max-sentences")]
    pub max_sentences: Option<usize>,

    /// Lower bound on the per-paragraph word target (default 80).
    #[arg(long = "min-words")]
    pub min_words: Option<usize>,

    /// Upper bound on the per-paragraph word target (default 120).
    #[arg(long = "max-words")]
    pub max_words: Option<usize>,

    /// Blank lines between paragraphs (default 1).
    #[arg(short = 'b', long = "line-breaks")]
    pub line_breaks: Option<usize>,

    /// How far the sentence target may drift from the midpoint (default 4).
    #[arg(long = "sentence-variation")]
    pub sentence_variation: Option<usize>,

    /// How far the word target may drift from the midpoint (default 10).
    #[arg(long = "word-variation")]
    pub word_variation: Option<usize>,

    /// Print original vs. formatted statistics to stderr.
    #[arg(long = "stats")]
    pub stats: bool,

    /// Print the built-in defaults and exit.
    #[arg(long = "show-defaults")]
    pub show_defaults: bool,

    /// Enable debug logging on stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
