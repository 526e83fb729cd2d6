/// Filename sanitising: turns heading text into a safe filename stem.

/// Characters that are rejected in filenames on at least one major platform.
pub const INVALID_FILENAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Replacement for every run of whitespace.
pub const SPACE_REPLACEMENT: char = '_';

/// Delete invalid characters, then collapse each whitespace run into a
/// single [`SPACE_REPLACEMENT`].
///
/// Total and idempotent. The result may be empty.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for ch in text.chars().filter(|c| !INVALID_FILENAME_CHARS.contains(c)) {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(SPACE_REPLACEMENT);
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_invalid_and_collapses_whitespace() {
        // ':' and '?' vanish before whitespace is collapsed.
        assert_eq!(sanitize("A:B  C?"), "AB_C");
        assert_eq!(sanitize("Hello World"), "Hello_World");
        assert_eq!(sanitize("a\t\n b"), "a_b");
    }

    /// Whitespace separated only by removed characters forms one run.
    #[test]
    fn whitespace_joined_by_removed_chars_is_one_run() {
        assert_eq!(sanitize("a ? b"), "a_b");
        assert_eq!(sanitize(" | "), "_");
    }

    #[test]
    fn leading_and_trailing_whitespace_become_underscores() {
        assert_eq!(sanitize("  x  "), "_x_");
    }

    #[test]
    fn only_invalid_chars_gives_empty() {
        assert_eq!(sanitize(r#"\/:*?"<>|"#), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn unicode_is_preserved() {
        assert_eq!(sanitize("Über Straße 東京"), "Über_Straße_東京");
        // NBSP and ideographic space are whitespace too.
        assert_eq!(sanitize("a\u{a0}\u{3000}b"), "a_b");
    }

    #[test]
    fn output_has_no_forbidden_or_whitespace_chars() {
        let samples = [
            "A:B  C?",
            "  <tag> | pipe \\ back / slash ",
            "tabs\tand\nnewlines\r\n",
            "quotes \"here\" and *stars*",
            "",
            "plain",
        ];
        for s in samples {
            let out = sanitize(s);
            assert!(
                !out.chars().any(|c| INVALID_FILENAME_CHARS.contains(&c)),
                "forbidden char left in {out:?}"
            );
            assert!(
                !out.chars().any(char::is_whitespace),
                "whitespace left in {out:?}"
            );
        }
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = ["A:B  C?", " x ", "a\u{a0} b", "___", "a_ _b", "?? ??"];
        for s in samples {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once, "not idempotent for {s:?}");
        }
    }
}
