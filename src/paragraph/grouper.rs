// Greedy paragraph grouper driven by per-paragraph noisy targets
use crate::paragraph::target::{base_sizes, next_target};
use crate::paragraph::types::{NoiseConfig, ParagraphConfig, Sentence};

/// Group sentences into paragraphs, preserving order.
///
/// Each paragraph gets one target, drawn when the paragraph opens. A
/// sentence starts a new paragraph only once the current one holds
/// `min_sentences` and taking the sentence would overshoot either the
/// sentence or the word target. The floor is hard, the targets are soft.
pub fn group(
    sentences: &[Sentence],
    config: &ParagraphConfig,
    noise_config: &NoiseConfig,
) -> Vec<Vec<String>> {
    let (base_sentences, base_words) = base_sizes(config);
    let mut paragraphs: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_words = 0usize;
    let mut position = 0usize;
    let mut target = next_target(base_sentences, base_words, position, config, noise_config);

    for sentence in sentences {
        let over_sentences = current.len() + 1 > target.sentences;
        let over_words = current_words + sentence.word_count > target.words;
        if !current.is_empty()
            && current.len() >= config.min_sentences
            && (over_sentences || over_words)
        {
            tracing::debug!(
                position,
                sentences = current.len(),
                words = current_words,
                "closing paragraph"
            );
            paragraphs.push(std::mem::take(&mut current));
            current_words = 0;
            position += 1;
            target = next_target(base_sentences, base_words, position, config, noise_config);
        }
        current.push(sentence.text.clone());
        current_words += sentence.word_count;
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}
