#![allow(dead_code)]

use paragraphize::FormatOptions;

/// One sentence per entry, each with exactly that many words:
/// "Lead0 filler filler." etc.
pub fn prose(word_counts: &[usize]) -> String {
    word_counts
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            let mut words = vec![format!("Lead{i}")];
            words.extend(std::iter::repeat_n("filler".to_string(), n.saturating_sub(1)));
            format!("{}.", words.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Options with noise switched off.
pub fn quiet(
    min_sentences: usize,
    max_sentences: usize,
    line_breaks: usize,
) -> FormatOptions {
    FormatOptions {
        min_sentences: Some(min_sentences),
        max_sentences: Some(max_sentences),
        min_words: Some(1000),
        max_words: Some(1000),
        line_breaks: Some(line_breaks),
        sentence_variation: Some(0),
        word_variation: Some(0),
    }
}

/// Sentence counts of each paragraph in rendered output.
pub fn paragraph_sizes(
    out: &str,
    line_breaks: usize,
) -> Vec<usize> {
    let sep = "\n".repeat(line_breaks + 1);
    out.split(sep.as_str())
        .map(|p| paragraphize::parse_sentences(p).len())
        .collect()
}
