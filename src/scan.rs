//! Line scanner feeding the decoder.
//!
//! Splits input on `\n`, measures indentation and computes the depth of
//! every non-blank line. Whitespace-only lines are not surfaced as parsed
//! lines; they are recorded separately so strict mode can reject blanks
//! inside array bodies.

use crate::error::{Error, Result};

/// One non-blank input line, stripped of its leading whitespace.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ParsedLine<'a> {
    /// The line after its leading whitespace run.
    pub content: &'a str,
    /// `indent / indent_size`, floor division over the count of leading
    /// spaces (tabs are never counted).
    pub depth: usize,
    /// 1-based line number in the input.
    pub number: usize,
}

/// A whitespace-only line, kept for strict-mode blank checks.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BlankLine {
    pub number: usize,
}

#[derive(Debug)]
pub(crate) struct Scan<'a> {
    pub lines: Vec<ParsedLine<'a>>,
    pub blanks: Vec<BlankLine>,
}

/// Scans `input` into parsed lines and blank records.
///
/// Strict mode fails on the first non-blank line whose leading whitespace
/// contains a tab, or whose indent is positive and not a multiple of
/// `indent_size`. Non-strict mode skips tabs without counting them and
/// lets floor division absorb remainders.
pub(crate) fn scan<'a>(input: &'a str, indent_size: usize, strict: bool) -> Result<Scan<'a>> {
    let mut lines = Vec::new();
    let mut blanks = Vec::new();

    for (index, raw) in input.split('\n').enumerate() {
        let number = index + 1;
        if raw.trim().is_empty() {
            blanks.push(BlankLine { number });
            continue;
        }

        let mut indent = 0;
        let mut start = 0;
        for (i, c) in raw.char_indices() {
            match c {
                ' ' => indent += 1,
                '\t' => {
                    if strict {
                        return Err(Error::TabInIndent { line: number });
                    }
                }
                _ => {
                    start = i;
                    break;
                }
            }
        }

        if strict && indent > 0 && indent % indent_size != 0 {
            return Err(Error::IndentNotMultiple {
                line: number,
                indent,
                indent_size,
            });
        }

        lines.push(ParsedLine {
            content: &raw[start..],
            depth: indent / indent_size,
            number,
        });
    }

    Ok(Scan { lines, blanks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depths_and_content() {
        let scan = scan("a: 1\n  b: 2\n    c: 3", 2, true).unwrap();
        let depths: Vec<_> = scan.lines.iter().map(|l| l.depth).collect();
        assert_eq!(depths, vec![0, 1, 2]);
        assert_eq!(scan.lines[1].content, "b: 2");
        assert_eq!(scan.lines[2].number, 3);
    }

    #[test]
    fn blank_lines_are_recorded_not_parsed() {
        let scan = scan("a: 1\n\n  \nb: 2", 2, true).unwrap();
        assert_eq!(scan.lines.len(), 2);
        let blanks: Vec<_> = scan.blanks.iter().map(|b| b.number).collect();
        assert_eq!(blanks, vec![2, 3]);
    }

    #[test]
    fn strict_rejects_non_multiple_indent() {
        let err = scan("a:\n   b: 1", 2, true).unwrap_err();
        assert!(matches!(
            err,
            Error::IndentNotMultiple {
                line: 2,
                indent: 3,
                indent_size: 2
            }
        ));
    }

    #[test]
    fn strict_rejects_tab_in_indent() {
        let err = scan("a:\n\tb: 1", 2, true).unwrap_err();
        assert!(matches!(err, Error::TabInIndent { line: 2 }));
    }

    #[test]
    fn lenient_mode_floors_depth_and_skips_tabs() {
        let scan = scan("a:\n   b: 1\n\tc: 2", 2, false).unwrap();
        assert_eq!(scan.lines[1].depth, 1);
        assert_eq!(scan.lines[2].depth, 0);
        assert_eq!(scan.lines[2].content, "c: 2");
    }

    #[test]
    fn tab_inside_content_is_allowed() {
        let scan = scan("a: b\tc", 2, true).unwrap();
        assert_eq!(scan.lines[0].content, "a: b\tc");
    }
}
