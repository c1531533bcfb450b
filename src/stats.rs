use crate::paragraph::parse_sentences;
use std::fmt;

/// Size summary of a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    /// Non-blank lines.
    pub paragraphs: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        TextStats {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
            sentences: parse_sentences(text).len(),
            paragraphs: text.lines().filter(|l| !l.trim().is_empty()).count(),
        }
    }
}

/// Original and formatted stats side by side.
pub struct Comparison {
    pub before: TextStats,
    pub after: TextStats,
}

impl fmt::Display for Comparison {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{:<12}{:>10}{:>10}", "", "original", "formatted")?;
        let rows = [
            ("characters", self.before.characters, self.after.characters),
            ("words", self.before.words, self.after.words),
            ("sentences", self.before.sentences, self.after.sentences),
            ("paragraphs", self.before.paragraphs, self.after.paragraphs),
        ];
        for (label, before, after) in rows {
            writeln!(f, "{label:<12}{before:>10}{after:>10}")?;
        }
        Ok(())
    }
}
