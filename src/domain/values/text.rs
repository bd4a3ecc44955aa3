/// Collapse every whitespace run, non-breaking spaces included, to a single
/// ASCII space and trim both ends.
pub fn normalize(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
