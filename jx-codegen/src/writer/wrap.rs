//! Soft wrapping of long lines.
//!
//! A line is only broken right after a comma or a spaced binary operator,
//! never inside a string or char literal, and never inside a `//` comment.
//! Lines without such a break point are emitted unbroken.

use crate::Indent;

/// Binary operators that may end a line, longest first.
const OPERATORS: &[&str] = &[
    "&&", "||", "==", "!=", "<=", ">=", "+=", "-=", "->", "+", "-", "*", "/", "%", "=", "<", ">",
];

/// Break `line` (which includes its indentation) into lines no wider than
/// `limit` where possible. Continuation lines start with `continuation`.
pub(crate) fn wrap(line: &str, continuation: &str, limit: usize) -> Vec<String> {
    if line.trim_start().starts_with("//") {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut rest = line.to_string();
    while width(&rest) > limit {
        let Some(at) = last_break(&rest, limit) else {
            break;
        };
        lines.push(rest[..at].trim_end().to_string());
        rest = format!("{}{}", continuation, rest[at..].trim_start());
    }
    lines.push(rest);
    lines
}

fn width(s: &str) -> usize {
    s.chars()
        .map(|c| if c == '\t' { Indent::Tab.width() } else { 1 })
        .sum()
}

/// Byte offset just past the last break point whose first half fits.
fn last_break(line: &str, limit: usize) -> Option<usize> {
    let content_start = line.len() - line.trim_start().len();
    let mut best = None;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        let candidate = match c {
            '"' | '\'' => {
                quote = Some(c);
                None
            }
            '/' if line[i..].starts_with("//") => break,
            ',' => Some(i + 1),
            ' ' if i > content_start => OPERATORS
                .iter()
                .find(|op| {
                    line[i + 1..]
                        .strip_prefix(**op)
                        .is_some_and(|after| after.starts_with(' '))
                })
                .map(|op| i + 1 + op.len()),
            _ => None,
        };

        if let Some(at) = candidate {
            if width(line[..at].trim_end()) > limit {
                break;
            }
            if at < line.len() {
                best = Some(at);
            }
        }
    }
    best
}
