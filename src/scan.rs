//! String-aware line scanning
//!
//! Splits a physical line into its code part and trailing comment, treating
//! `#` inside single- or double-quoted string literals as ordinary text.
//! The scanner is per-line only: multi-line string literals are not tracked
//! across lines, and unterminated strings are tolerated (the remainder of
//! the line counts as code).

/// Byte index of the first `#` outside any string literal, if any.
fn comment_start(line: &str) -> Option<usize> {
    let mut in_string: Option<char> = None;
    let mut prev: Option<char> = None;

    for (idx, ch) in line.char_indices() {
        let escaped = prev == Some('\\');
        match in_string {
            Some(quote) => {
                if ch == quote && !escaped {
                    in_string = None;
                }
            }
            None => {
                if ch == '#' {
                    return Some(idx);
                }
                if (ch == '\'' || ch == '"') && !escaped {
                    in_string = Some(ch);
                }
            }
        }
        prev = Some(ch);
    }

    None
}

/// Split a line into its code part and the comment text after the `#`.
pub fn split_code_and_comment(line: &str) -> (&str, Option<&str>) {
    match comment_start(line) {
        Some(idx) => (&line[..idx], Some(&line[idx + 1..])),
        None => (line, None),
    }
}

/// Whether `needle` occurs in `text` outside any string literal.
pub fn contains_outside_string(text: &str, needle: char) -> bool {
    let mut in_string: Option<char> = None;
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        let escaped = prev == Some('\\');
        match in_string {
            Some(quote) => {
                if ch == quote && !escaped {
                    in_string = None;
                }
            }
            None => {
                if ch == needle {
                    return true;
                }
                if (ch == '\'' || ch == '"') && !escaped {
                    in_string = Some(ch);
                }
            }
        }
        prev = Some(ch);
    }

    false
}

/// Convert a byte offset into a 1-based physical line number.
pub fn offset_to_line(source: &str, offset: usize) -> usize {
    source.as_bytes()[..offset.min(source.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Whether a line is empty or whitespace-only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
