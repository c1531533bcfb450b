// Centralized magic numbers & default values
pub const DEFAULT_MIN_SENTENCES: usize = 2;
pub const DEFAULT_MAX_SENTENCES: usize = 4;
pub const DEFAULT_MIN_WORDS: usize = 80;
pub const DEFAULT_MAX_WORDS: usize = 120;
pub const DEFAULT_LINE_BREAKS: usize = 1;
pub const DEFAULT_SENTENCE_VARIATION: usize = 4;
pub const DEFAULT_WORD_VARIATION: usize = 10;

/// Offset between the sentence-noise and word-noise seeds of one paragraph.
pub const WORD_NOISE_SEED_OFFSET: usize = 100;
pub const DEFAULT_LOG_FILTER: &str = "warn";
