//! Canonical type name parser.
//!
//! Accepts already-qualified names such as
//! `java.util.Map<java.lang.String, java.util.List<? extends T>>[]`.
//! Whitespace between tokens is ignored. All positions are byte offsets into
//! the full input so diagnostics can point at the offending text.

use crate::{ClassName, Error, PrimitiveType, Result, TypeName};

pub(crate) fn parse(src: &str) -> Result<TypeName> {
    Parser { src }.type_name(0, src.len(), Position::TopLevel)
}

/// Where a type appears, which decides what it may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    TopLevel,
    Argument,
    Bound,
    Component,
}

struct Parser<'a> {
    src: &'a str,
}

impl Parser<'_> {
    fn error(&self, start: usize, end: usize, reason: &str) -> Box<Error> {
        Error::malformed(self.src, (start, end.saturating_sub(start)), reason)
    }

    fn trim(&self, start: usize, end: usize) -> (usize, usize) {
        let text = &self.src[start..end];
        let leading = text.len() - text.trim_start().len();
        let trailing = text.len() - text.trim_end().len();
        if leading == text.len() {
            (start, start)
        } else {
            (start + leading, end - trailing)
        }
    }

    fn type_name(&self, start: usize, end: usize, position: Position) -> Result<TypeName> {
        let (start, end) = self.trim(start, end);
        let text = &self.src[start..end];

        if text.is_empty() {
            let reason = match position {
                Position::Argument => "empty type argument",
                _ => "empty type name",
            };
            return Err(self.error(start, end, reason));
        }

        // `[]` after a wildcard bound belongs to the bound.
        if text.starts_with('?') {
            if position != Position::Argument {
                return Err(self.error(start, start + 1, "wildcard outside of type arguments"));
            }
            return self.wildcard(start, end);
        }

        if let Some(component) = text.strip_suffix("[]") {
            let component = self.type_name(start, start + component.len(), Position::Component)?;
            return Ok(TypeName::array(component));
        }

        if text == "void" {
            if position != Position::TopLevel {
                return Err(self.error(start, end, "'void' is only valid as a whole type"));
            }
            return Ok(TypeName::Void);
        }

        if let Some(primitive) = PrimitiveType::from_keyword(text) {
            if matches!(position, Position::Argument | Position::Bound) {
                return Err(self.error(start, end, "primitive types cannot be type arguments"));
            }
            return Ok(TypeName::Primitive(primitive));
        }

        match text.find('<') {
            Some(open) => {
                let open = start + open;
                let raw = self.class_name(start, open)?;
                let arguments = self.arguments(open, end)?;
                Ok(TypeName::parameterized(raw, arguments))
            }
            None => {
                if let Some(close) = text.find('>') {
                    let close = start + close;
                    return Err(self.error(close, close + 1, "unbalanced '>'"));
                }
                Ok(TypeName::Class(self.class_name(start, end)?))
            }
        }
    }

    /// Parse `<...>` starting at `open`, which must close exactly at `end`.
    fn arguments(&self, open: usize, end: usize) -> Result<Vec<TypeName>> {
        let mut depth = 0usize;
        let mut segment_start = open + 1;
        let mut arguments = Vec::new();

        for (offset, c) in self.src[open + 1..end].char_indices() {
            let at = open + 1 + offset;
            match c {
                '<' => depth += 1,
                '>' if depth > 0 => depth -= 1,
                '>' => {
                    arguments.push(self.type_name(segment_start, at, Position::Argument)?);
                    let (rest, _) = self.trim(at + 1, end);
                    if rest != end {
                        let reason = if self.src[rest..end].starts_with('>') {
                            "unbalanced '>'"
                        } else {
                            "unexpected text after type arguments"
                        };
                        return Err(self.error(rest, end, reason));
                    }
                    return Ok(arguments);
                }
                ',' if depth == 0 => {
                    arguments.push(self.type_name(segment_start, at, Position::Argument)?);
                    segment_start = at + 1;
                }
                _ => {}
            }
        }

        Err(self.error(open, open + 1, "unbalanced '<'"))
    }

    /// Parse `?`, `? extends T` or `? super T`; `start` points at the `?`.
    fn wildcard(&self, start: usize, end: usize) -> Result<TypeName> {
        let (rest, _) = self.trim(start + 1, end);
        if rest == end {
            return Ok(TypeName::wildcard());
        }

        let text = &self.src[rest..end];
        let keyword = ["extends", "super"].into_iter().find(|keyword| {
            text.strip_prefix(keyword)
                .is_some_and(|after| after.starts_with(char::is_whitespace))
        });

        match keyword {
            Some("extends") => {
                let bound = self.type_name(rest + "extends".len(), end, Position::Bound)?;
                Ok(TypeName::subtype_of(bound))
            }
            Some(_) => {
                let bound = self.type_name(rest + "super".len(), end, Position::Bound)?;
                Ok(TypeName::supertype_of(bound))
            }
            None => Err(self.error(rest, end, "expected 'extends' or 'super' after '?'")),
        }
    }

    fn class_name(&self, start: usize, end: usize) -> Result<ClassName> {
        let (start, end) = self.trim(start, end);
        if start == end {
            return Err(self.error(start, end, "empty simple name"));
        }

        let mut segments = Vec::new();
        let mut segment_start = start;
        for part in self.src[start..end].split('.') {
            let part_end = segment_start + part.len();
            let (s, e) = self.trim(segment_start, part_end);
            let ident = &self.src[s..e];
            if ident.is_empty() {
                let reason = if part_end == end {
                    "empty simple name"
                } else {
                    "empty package segment"
                };
                return Err(self.error(segment_start, part_end, reason));
            }
            if !is_identifier(ident) {
                return Err(self.error(s, e, "invalid identifier"));
            }
            segments.push(ident.to_string());
            segment_start = part_end + 1;
        }

        let simple_name = segments.pop().unwrap_or_default();
        Ok(ClassName::from_parts(segments, simple_name))
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
