// Sentence splitter: punctuation heuristic with an abbreviation guard
use crate::paragraph::types::Sentence;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens that end in a period without ending the sentence. Matched
/// case-insensitively, with or without the trailing period.
///
/// Words like "etc" can legitimately close a sentence; this list makes no
/// attempt to tell the two apart.
pub const ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "Mt", "Rev", "Gen", "Col", "Capt", "Lt",
    "Sgt", "Gov", "Sen", "Rep", "Pres", "Inc", "Ltd", "Corp", "Co", "Bros", "Ave", "Blvd", "Rd",
    "Dept", "Univ", "Assn", "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep", "Sept", "Oct",
    "Nov", "Dec", "vs", "etc", "approx", "est", "fig", "vol", "e.g", "i.e", "cf", "al", "a.m",
    "p.m", "U.S", "U.K", "U.N", "Ph.D", "B.A", "M.A",
];

static BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").expect("static regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

static ABBREVIATION_TAIL: Lazy<Regex> = Lazy::new(|| {
    let alternatives = ABBREVIATIONS
        .iter()
        .map(|a| regex::escape(a))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternatives})[.!?]?\s*$")).expect("static regex")
});

/// Collapse whitespace runs to one space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Whether `piece` closes on a known abbreviation.
pub fn ends_with_abbreviation(piece: &str) -> bool {
    ABBREVIATION_TAIL.is_match(piece)
}

// Cut after every terminal mark that is followed by whitespace; the mark
// stays with the left piece, the whitespace is dropped.
fn split_pieces(normalized: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0usize;
    for m in BOUNDARY.find_iter(normalized) {
        // the punctuation mark is a single ASCII byte
        pieces.push(&normalized[start..m.start() + 1]);
        start = m.end();
    }
    if start < normalized.len() {
        pieces.push(&normalized[start..]);
    }
    pieces
}

/// Split raw text into sentences.
///
/// A piece ending on an abbreviation is merged with the following piece,
/// and the merged text is tested again, so "Mr. Dr. Jones" style runs fold
/// into one sentence. An abbreviation at the very end of the text stays as
/// its own piece.
pub fn parse_sentences(text: &str) -> Vec<Sentence> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let pieces = split_pieces(&normalized);
    let mut sentences = Vec::with_capacity(pieces.len());
    let mut iter = pieces.into_iter();
    while let Some(piece) = iter.next() {
        let mut current = piece.to_string();
        while ends_with_abbreviation(&current) {
            let Some(next) = iter.next() else {
                break;
            };
            current.push(' ');
            current.push_str(next);
        }
        let trimmed = current.trim();
        if !trimmed.is_empty() {
            sentences.push(Sentence::new(trimmed.to_string()));
        }
    }

    tracing::debug!(sentences = sentences.len(), "parsed sentences");
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        parse_sentences(input).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(
            texts("One two. Three four! Five six?"),
            vec!["One two.", "Three four!", "Five six?"]
        );
    }

    #[test]
    fn abbreviations_do_not_split() {
        assert_eq!(
            texts("Dr. Smith went home. He left at 5 p.m. yesterday."),
            vec!["Dr. Smith went home.", "He left at 5 p.m. yesterday."]
        );
    }

    #[test]
    fn abbreviation_match_is_case_insensitive() {
        assert_eq!(texts("ask DR. who. ok."), vec!["ask DR. who.", "ok."]);
    }

    #[test]
    fn abbreviation_requires_token_boundary() {
        // "Amr" is not "Mr"
        assert_eq!(texts("I met Amr. He waved."), vec!["I met Amr.", "He waved."]);
    }

    #[test]
    fn trailing_abbreviation_is_kept() {
        assert_eq!(texts("Apples, pears, etc."), vec!["Apples, pears, etc."]);
        assert_eq!(
            texts("Call the office. Ask for Dr."),
            vec!["Call the office.", "Ask for Dr."]
        );
    }

    #[test]
    fn chained_abbreviations_merge_forward() {
        assert_eq!(
            texts("Mr. Dr. Jones arrived. Then he left."),
            vec!["Mr. Dr. Jones arrived.", "Then he left."]
        );
    }

    #[test]
    fn no_punctuation_yields_one_sentence() {
        let s = parse_sentences("just some words\nwithout an end");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].text, "just some words without an end");
        assert_eq!(s[0].word_count, 6);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(parse_sentences("").is_empty());
        assert!(parse_sentences(" \n\t ").is_empty());
    }

    #[test]
    fn punctuation_without_whitespace_does_not_split() {
        assert_eq!(
            texts("Version 1.2 is out. See example.com now."),
            vec!["Version 1.2 is out.", "See example.com now."]
        );
    }
}
