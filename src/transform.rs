//! Text substitutions that make an example self-contained.
//!
//! Substitution is plain literal string replacement. The example language is never
//! parsed, so a marker inside a comment or string literal is replaced all the same.

use crate::config::{ExampleEntry, Fixup, MARKER_DIRECTIVES};

/// Inline the prelude, apply the entry's fix-ups and trim the result.
pub fn process_example(entry: &ExampleEntry, content: String, prelude: &str) -> String {
    let inlined = inline_prelude(content, prelude);
    apply_fixups(inlined, entry.fixups).trim().to_string()
}

/// Replace every marker directive in `content` with `prelude`.
///
/// Each spelling in [`MARKER_DIRECTIVES`] is checked independently, so a file that uses
/// both spellings gets the prelude at both places.
pub fn inline_prelude(content: String, prelude: &str) -> String {
    MARKER_DIRECTIVES.iter().fold(content, |text, marker| {
        if text.contains(marker) {
            tracing::debug!("Inlining prelude for directive {marker}");
            text.replace(marker, prelude)
        } else {
            text
        }
    })
}

/// Apply fix-ups in order.
pub fn apply_fixups(content: String, fixups: &[Fixup]) -> String {
    fixups.iter().fold(content, |text, fixup| match *fixup {
        Fixup::Replace { from, to } => {
            if !text.contains(from) {
                tracing::debug!("Fix-up pattern {from:?} not present; leaving text unchanged");
            }
            text.replacen(from, to, 1)
        }
        Fixup::Prepend(line) => format!("{line}\n{text}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    const PRELUDE: &str = "' Prelude macros (normally imported)\n(macro (spec X Y) (:= X Y))";

    fn plain(key: &'static str) -> ExampleEntry {
        ExampleEntry::new(key, "x.sg")
    }

    #[test]
    fn content_without_marker_is_only_trimmed() {
        let src = "\n\n  (:= one (s 0))\n  \n".to_string();
        assert_eq!(process_example(&plain("nat"), src, PRELUDE), "(:= one (s 0))");
    }

    #[test]
    fn marker_is_replaced_in_place() {
        let src = "(use-macros \"milkyway/prelude.sg\")\n\n(spec nat {[(-nat 0)]})\n".to_string();
        let out = process_example(&plain("macros"), src, PRELUDE);
        assert_eq!(out, format!("{PRELUDE}\n\n(spec nat {{[(-nat 0)]}})"));
        assert!(!out.contains("use-macros"));
    }

    #[test]
    fn dot_slash_spelling_is_accepted() {
        let src = "' intro\n(use-macros \"./milkyway/prelude.sg\")\nrest".to_string();
        let out = inline_prelude(src, PRELUDE);
        assert_eq!(out, format!("' intro\n{PRELUDE}\nrest"));
    }

    #[test]
    fn both_spellings_are_replaced_independently() {
        let src = "(use-macros \"milkyway/prelude.sg\")\n(use-macros \"./milkyway/prelude.sg\")"
            .to_string();
        let out = inline_prelude(src, "P");
        assert_eq!(out, "P\nP");
    }

    #[test]
    fn repeated_marker_is_replaced_everywhere() {
        let src = "(use-macros \"milkyway/prelude.sg\") a (use-macros \"milkyway/prelude.sg\")"
            .to_string();
        let out = inline_prelude(src, "P");
        assert_eq!(out, "P a P");
    }

    #[test]
    fn replace_fixup_touches_first_occurrence_only() {
        let fixups = [Fixup::Replace { from: "<show exec (process", to: "<show interact (process" }];
        let src = "<show exec (process a)>\n<show exec (process b)>".to_string();
        let out = apply_fixups(src, &fixups);
        assert_eq!(out, "<show interact (process a)>\n<show exec (process b)>");
    }

    #[test]
    fn prepend_fixup_lands_before_trimmed_text() {
        const HELLO: &[Fixup] = &[Fixup::Prepend("' Hello World")];
        let entry = ExampleEntry::new("hello", "hello.sg").with_fixups(HELLO);
        let out = process_example(&entry, "(show hello)\n".to_string(), PRELUDE);
        assert_eq!(out, "' Hello World\n(show hello)");
    }

    #[test]
    fn fixups_run_after_prelude_inlining() {
        const FIX: &[Fixup] = &[Fixup::Replace { from: "(spec X Y)", to: "(spec A B)" }];
        let entry = ExampleEntry::new("k", "k.sg").with_fixups(FIX);
        let out = process_example(&entry, "(use-macros \"milkyway/prelude.sg\")".into(), PRELUDE);
        assert!(out.contains("(macro (spec A B) (:= X Y))"));
    }
}
