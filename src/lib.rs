pub mod cli;
pub mod config;
pub mod constants;
pub mod io;
pub mod paragraph;
pub mod pipeline;
pub mod stats;

// Re-export the core entry points at the crate root
pub use paragraph::{
    FormatOptions, NoiseConfig, ParagraphConfig, Sentence, default_noise_config,
    default_paragraph_config, format_text_into_paragraphs, parse_sentences,
};
pub use paragraph::{grouper, render, splitter, target};
