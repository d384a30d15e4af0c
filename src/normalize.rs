//! Whitespace normalization for input text.
//!
//! Collapses whitespace runs (spaces, tabs, newlines) into single spaces and
//! trims both ends. Purely cosmetic preprocessing before chunking; the
//! operation is idempotent.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Collapse whitespace runs into single spaces and trim the ends.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(normalize("  hello\t\n  world \r\n"), "hello world");
    }

    #[test]
    fn idempotent() {
        let samples = ["", "   ", "a  b", "one\ntwo\tthree", "already normal"];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize(" \t\r\n "), "");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(normalize("one two three."), "one two three.");
    }
}
