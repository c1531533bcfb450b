use crate::config::Config;
use crate::io::{read_input, write_output};
use crate::paragraph::format_text_into_paragraphs;
use crate::stats::{Comparison, TextStats};
use anyhow::Result;
use tracing::warn;

/// Staged flow of the binary: load, format, report, emit.
#[derive(Default)]
pub struct Pipeline {
    config: Config,
    original: String,
    formatted: Option<String>,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Pipeline {
            config,
            ..Self::default()
        }
    }

    /// Load the raw text from the configured input.
    pub fn load_input(&mut self) -> Result<()> {
        self.original = read_input(self.config.input.as_deref())?;
        if self.original.trim().is_empty() {
            warn!("input is empty; passing it through unchanged");
        }
        Ok(())
    }

    pub fn set_original(
        &mut self,
        text: String,
    ) {
        self.original = text;
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    /// Run the paragraph formatter over the loaded text.
    pub fn format(&mut self) {
        self.formatted = Some(format_text_into_paragraphs(
            &self.original,
            &self.config.options,
        ));
    }

    /// Before/after statistics, once the text has been formatted.
    pub fn comparison(&self) -> Option<Comparison> {
        self.formatted.as_deref().map(|out| Comparison {
            before: TextStats::of(&self.original),
            after: TextStats::of(out),
        })
    }

    /// Write the formatted text to the configured output.
    pub fn emit(&self) -> Result<()> {
        let text = self.formatted.as_deref().unwrap_or(&self.original);
        write_output(text, self.config.output.as_deref())
    }
}
