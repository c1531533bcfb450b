//! Paragraph formatting: split prose into sentences, group them into
//! paragraphs of noisy but reproducible size, and render the result.
//!
//! Every function here is pure. The same text and options always produce
//! the same output.

pub mod grouper;
pub mod render;
pub mod splitter;
pub mod target;
pub mod types;

pub use grouper::group;
pub use render::render;
pub use splitter::parse_sentences;
pub use target::next_target;
pub use types::{FormatOptions, NoiseConfig, ParagraphConfig, Sentence, Target};

/// Copy of the built-in paragraph bounds.
pub fn default_paragraph_config() -> ParagraphConfig {
    ParagraphConfig::default()
}

/// Copy of the built-in noise amplitudes.
pub fn default_noise_config() -> NoiseConfig {
    NoiseConfig::default()
}

/// Reflow `text` into paragraphs.
///
/// Text without any sentence (empty or whitespace only) comes back
/// untouched.
pub fn format_text_into_paragraphs(text: &str, options: &FormatOptions) -> String {
    let sentences = parse_sentences(text);
    if sentences.is_empty() {
        return text.to_string();
    }
    let (config, noise) = options.resolve();
    let paragraphs = group(&sentences, &config, &noise);
    tracing::debug!(
        sentences = sentences.len(),
        paragraphs = paragraphs.len(),
        "formatted text"
    );
    render(&paragraphs, config.line_breaks)
}
