use std::sync::LazyLock;

use regex::Regex;

use crate::fetch::PromptText;

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

const PROMPT_PREFIX: &str = "Prompt:";

/// Normalize an upstream problem description into canonical display text.
///
/// Fragment lists are joined with single spaces, non-breaking spaces and
/// double-escaped newlines are repaired, a leading `Prompt:` label is
/// stripped, every line is trimmed, and runs of blank lines collapse to one.
/// Idempotent: feeding the output back through yields the same string.
pub fn clean_prompt(source: &PromptText) -> String {
    let joined = match source {
        PromptText::One(text) => text.clone(),
        PromptText::Many(parts) => parts.join(" "),
    };

    let mut cleaned = joined.replace('\u{a0}', " ").replace("\\n", "\n");

    if let Some(rest) = cleaned.strip_prefix(PROMPT_PREFIX) {
        cleaned = rest.trim().to_string();
    }

    let cleaned = cleaned
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    BLANK_RUN_RE.replace_all(&cleaned, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(text: &str) -> String {
        clean_prompt(&PromptText::One(text.to_string()))
    }

    #[test]
    fn joins_fragment_lists_in_order() {
        let parts = PromptText::Many(vec!["Given an array".into(), "return its sum.".into()]);
        assert_eq!(clean_prompt(&parts), "Given an array return its sum.");
    }

    #[test]
    fn replaces_non_breaking_spaces() {
        assert_eq!(clean("a\u{a0}b"), "a b");
    }

    #[test]
    fn repairs_double_escaped_newlines() {
        assert_eq!(clean("line one\\nline two"), "line one\nline two");
    }

    #[test]
    fn strips_prompt_prefix_only_when_leading() {
        assert_eq!(clean("Prompt:  Reverse a list."), "Reverse a list.");
        assert_eq!(clean("See the Prompt: below"), "See the Prompt: below");
    }

    #[test]
    fn trims_every_line() {
        assert_eq!(clean("  first  \n\t second \nthird"), "first\nsecond\nthird");
    }

    #[test]
    fn collapses_blank_line_runs() {
        assert_eq!(clean("a\n\n\n\n\nb"), "a\n\nb");
        assert!(!clean("a\n\n\nb\n\n\n\nc").contains("\n\n\n"));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "Prompt: Two Sum\\n\\n\\nGiven nums,\u{a0}find indices.  ",
            "  spaced  \n\n\n\nout  ",
            "already clean\n\ntext",
            "",
        ];
        for s in samples {
            let once = clean(s);
            assert_eq!(clean(&once), once, "not idempotent for {:?}", s);
        }
    }
}
