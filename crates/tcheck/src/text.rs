//! Character level diff of two strings.

use similar::{ChangeTag, TextDiff};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Renders `got` against `expected` with deletions and insertions marked.
///
/// With `colored` deletions are red and insertions green; otherwise they are
/// wrapped as `[-deleted-]` and `{+inserted+}`.
pub fn pretty_text_diff(expected: &str, got: &str, colored: bool) -> String {
    let diff = TextDiff::from_chars(expected, got);
    let mut out = String::with_capacity(expected.len().max(got.len()));
    let mut run: Option<(ChangeTag, String)> = None;
    for change in diff.iter_all_changes() {
        let tag = change.tag();
        if let Some((current, text)) = run.as_mut() {
            if *current == tag {
                text.push_str(change.value());
                continue;
            }
        }
        if let Some((current, text)) = run.take() {
            push_run(&mut out, current, &text, colored);
        }
        run = Some((tag, change.value().to_owned()));
    }
    if let Some((current, text)) = run {
        push_run(&mut out, current, &text, colored);
    }
    out
}

fn push_run(out: &mut String, tag: ChangeTag, text: &str, colored: bool) {
    match (tag, colored) {
        (ChangeTag::Equal, _) => out.push_str(text),
        (ChangeTag::Delete, true) => {
            out.push_str(RED);
            out.push_str(text);
            out.push_str(RESET);
        }
        (ChangeTag::Insert, true) => {
            out.push_str(GREEN);
            out.push_str(text);
            out.push_str(RESET);
        }
        (ChangeTag::Delete, false) => {
            out.push_str("[-");
            out.push_str(text);
            out.push_str("-]");
        }
        (ChangeTag::Insert, false) => {
            out.push_str("{+");
            out.push_str(text);
            out.push_str("+}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_changes_without_colour() {
        assert_eq!(pretty_text_diff("abc", "abd", false), "ab[-c-]{+d+}");
        assert_eq!(pretty_text_diff("same", "same", false), "same");
    }

    #[test]
    fn colours_changes() {
        let out = pretty_text_diff("a", "b", true);
        assert!(out.contains("\x1b[31ma\x1b[0m"));
        assert!(out.contains("\x1b[32mb\x1b[0m"));
    }
}
