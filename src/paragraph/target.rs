use crate::constants::WORD_NOISE_SEED_OFFSET;
use crate::paragraph::types::{NoiseConfig, ParagraphConfig, Target};

/// Deterministic noise in `[-1, 1]` derived only from `seed`.
///
/// Same seed, same value, on every call and every run.
pub fn noise(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    (x - x.floor()) * 2.0 - 1.0
}

// Halves round up, toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// Never panics on an inverted range: `lo` wins.
fn clamp_soft(value: f64, lo: usize, hi: usize) -> usize {
    let clamped = value.min(hi as f64).max(lo as f64);
    clamped as usize
}

/// Midpoints of the configured sentence and word ranges.
pub fn base_sizes(config: &ParagraphConfig) -> (f64, f64) {
    (
        (config.min_sentences as f64 + config.max_sentences as f64) / 2.0,
        (config.min_words as f64 + config.max_words as f64) / 2.0,
    )
}

/// Target for the paragraph at `position`: base plus scaled noise,
/// rounded, then clamped into the configured bounds.
pub fn next_target(
    base_sentences: f64,
    base_words: f64,
    position: usize,
    config: &ParagraphConfig,
    noise_config: &NoiseConfig,
) -> Target {
    let sentence_noise = noise(position as f64);
    let word_noise = noise((position + WORD_NOISE_SEED_OFFSET) as f64);

    let sentences =
        round_half_up(base_sentences + sentence_noise * noise_config.sentence_variation as f64);
    let words = round_half_up(base_words + word_noise * noise_config.word_variation as f64);

    let target = Target {
        sentences: clamp_soft(sentences, config.min_sentences, config.max_sentences),
        words: clamp_soft(words, config.min_words, config.max_words),
    };
    tracing::trace!(position, ?target, "paragraph target");
    target
}
