use crate::constants::{
    DEFAULT_LINE_BREAKS, DEFAULT_MAX_SENTENCES, DEFAULT_MAX_WORDS, DEFAULT_MIN_SENTENCES,
    DEFAULT_MIN_WORDS, DEFAULT_SENTENCE_VARIATION, DEFAULT_WORD_VARIATION,
};

/// One sentence of the input, after abbreviation-aware merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub word_count: usize,
}

impl Sentence {
    /// Builds a sentence from already-trimmed text.
    pub fn new(text: String) -> Self {
        let word_count = text.split_whitespace().count();
        Sentence { text, word_count }
    }
}

/// Size bounds for paragraphs plus the separator width.
///
/// `min_* <= max_*` is expected but not enforced here; inverted ranges
/// collapse every target to the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphConfig {
    pub min_sentences: usize,
    pub max_sentences: usize,
    pub min_words: usize,
    pub max_words: usize,
    /// Extra newlines between paragraphs, on top of the mandatory one.
    pub line_breaks: usize,
}

impl Default for ParagraphConfig {
    fn default() -> Self {
        ParagraphConfig {
            min_sentences: DEFAULT_MIN_SENTENCES,
            max_sentences: DEFAULT_MAX_SENTENCES,
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            line_breaks: DEFAULT_LINE_BREAKS,
        }
    }
}

/// Amplitude of the per-paragraph perturbation applied to the targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseConfig {
    pub sentence_variation: usize,
    pub word_variation: usize,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        NoiseConfig {
            sentence_variation: DEFAULT_SENTENCE_VARIATION,
            word_variation: DEFAULT_WORD_VARIATION,
        }
    }
}

/// Soft size goal for a single paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub sentences: usize,
    pub words: usize,
}

/// Caller-supplied overrides. Every `None` falls back to its own default:
///
/// | field                | default |
/// |----------------------|---------|
/// | `min_sentences`      | 2       |
/// | `max_sentences`      | 4       |
/// | `min_words`          | 80      |
/// | `max_words`          | 120     |
/// | `line_breaks`        | 1       |
/// | `sentence_variation` | 4       |
/// | `word_variation`     | 10      |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub min_sentences: Option<usize>,
    pub max_sentences: Option<usize>,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
    pub line_breaks: Option<usize>,
    pub sentence_variation: Option<usize>,
    pub word_variation: Option<usize>,
}

impl FormatOptions {
    /// Merges the overrides over the built-in defaults, field by field.
    pub fn resolve(&self) -> (ParagraphConfig, NoiseConfig) {
        let p = ParagraphConfig::default();
        let n = NoiseConfig::default();
        (
            ParagraphConfig {
                min_sentences: self.min_sentences.unwrap_or(p.min_sentences),
                max_sentences: self.max_sentences.unwrap_or(p.max_sentences),
                min_words: self.min_words.unwrap_or(p.min_words),
                max_words: self.max_words.unwrap_or(p.max_words),
                line_breaks: self.line_breaks.unwrap_or(p.line_breaks),
            },
            NoiseConfig {
                sentence_variation: self.sentence_variation.unwrap_or(n.sentence_variation),
                word_variation: self.word_variation.unwrap_or(n.word_variation),
            },
        )
    }
}
