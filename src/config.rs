use crate::cli::Cli;
use crate::paragraph::FormatOptions;
use clap::Parser;
use std::path::PathBuf;

/// A `min_*` bound that ended up above its `max_*` bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRange {
    pub field: &'static str,
    pub min: usize,
    pub max: usize,
}

impl std::fmt::Display for InvalidRange {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "min-{field} ({min}) must not exceed max-{field} ({max})",
            field = self.field,
            min = self.min,
            max = self.max
        )
    }
}

impl std::error::Error for InvalidRange {}

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub options: FormatOptions,
    pub stats: bool,
    pub show_defaults: bool,
    pub verbose: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Self {
        Self::from(Cli::parse())
    }

    /// Reject inverted ranges once defaults are filled in, so
    /// `--max-sentences 1` alone is caught against the default minimum.
    pub fn validate(&self) -> Result<(), InvalidRange> {
        let (para, _) = self.options.resolve();
        if para.min_sentences > para.max_sentences {
            return Err(InvalidRange {
                field: "sentences",
                min: para.min_sentences,
                max: para.max_sentences,
            });
        }
        if para.min_words > para.max_words {
            return Err(InvalidRange {
                field: "words",
                min: para.min_words,
                max: para.max_words,
            });
        }
        Ok(())
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            output: cli.output,
            options: FormatOptions {
                min_sentences: cli.min_sentences,
                max_sentences: cli.max_sentences,
                min_words: cli.min_words,
                max_words: cli.max_words,
                line_breaks: cli.line_breaks,
                sentence_variation: cli.sentence_variation,
                word_variation: cli.word_variation,
            },
            stats: cli.stats,
            show_defaults: cli.show_defaults,
            verbose: cli.verbose,
        }
    }
}
