use paragraphize::parse_sentences;
use paragraphize::splitter::{ends_with_abbreviation, normalize_whitespace};

#[test]
fn doctor_and_pm_do_not_split() {
    let sentences = parse_sentences("Dr. Smith went home. He left at 5 p.m. yesterday.");
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].text, "Dr. Smith went home.");
    assert_eq!(sentences[0].word_count, 4);
    assert_eq!(sentences[1].text, "He left at 5 p.m. yesterday.");
    assert_eq!(sentences[1].word_count, 6);
}

#[test]
fn company_and_country_abbreviations() {
    let sentences = parse_sentences("Acme Inc. hired staff in the U.S. last year. Growth was fast.");
    let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Acme Inc. hired staff in the U.S. last year.", "Growth was fast."]
    );
}

#[test]
fn abbreviation_at_true_sentence_end_under_splits() {
    // known limitation: "U.S." closing a sentence still swallows the next one
    let sentences = parse_sentences("He moved to the U.S. The Army is big.");
    assert_eq!(sentences.len(), 1);
}

#[test]
fn unlisted_abbreviation_over_splits() {
    // known limitation: tokens outside the list split like any period
    let sentences = parse_sentences("Ask Capt. Zyx. Jones for help.");
    let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Ask Capt. Zyx.", "Jones for help."]);
}

#[test]
fn whitespace_is_collapsed() {
    assert_eq!(normalize_whitespace("  a \n\n b\t c  "), "a b c");
    let sentences = parse_sentences("First\n\nline.   Second\tline!");
    assert_eq!(sentences[0].text, "First line.");
    assert_eq!(sentences[1].text, "Second line!");
}

#[test]
fn abbreviation_tail_detection() {
    assert!(ends_with_abbreviation("Ask Prof."));
    assert!(ends_with_abbreviation("ask prof."));
    assert!(ends_with_abbreviation("e.g."));
    assert!(ends_with_abbreviation("met Mr"));
    assert!(!ends_with_abbreviation("a profit."));
    assert!(!ends_with_abbreviation("Hummr."));
}
