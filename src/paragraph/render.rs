/// Separator placed between paragraphs: one newline plus `line_breaks` more.
pub fn separator(line_breaks: usize) -> String {
    "\n".repeat(line_breaks + 1)
}

/// Join sentences with a space and paragraphs with the separator.
/// No separator follows the last paragraph.
pub fn render(paragraphs: &[Vec<String>], line_breaks: usize) -> String {
    paragraphs
        .iter()
        .map(|p| p.join(" "))
        .collect::<Vec<_>>()
        .join(&separator(line_breaks))
}
