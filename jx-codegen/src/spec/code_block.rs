//! Statement templates with typed placeholders.
//!
//! | Placeholder | Meaning                                               |
//! |-------------|-------------------------------------------------------|
//! | `$L`        | literal, emitted as-is                                |
//! | `$S`        | string, escaped and double-quoted (`null` for `Null`) |
//! | `$T`        | type, resolved through the symbol table               |
//! | `$N`        | name of a parameter, field or method                  |
//! | `$$`        | a dollar sign                                         |
//! | `$>` / `$<` | increase / decrease indentation                       |
//! | `$[` / `$]` | begin / end of a statement                            |
//!
//! Placeholders are either all relative (`$T`, `$S`) or all indexed (`$1T`,
//! `$2S`), never mixed within one template.

use jx_model::{ClassName, PrimitiveType, TypeName};

use crate::{Error, FieldSpec, MethodSpec, ParameterSpec, Result};

/// A value bound to a template placeholder.
///
/// Build lists of arguments with the [`args!`](crate::args) macro.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Free text. Parsed as a canonical type name when bound to `$T`.
    Text(String),
    /// A number, boolean or character.
    Literal(String),
    Type(TypeName),
    /// The name of a spec.
    Name(String),
    Code(CodeBlock),
    Null,
}

macro_rules! literal_arg {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Literal(value.to_string())
                }
            }
        )*
    };
}

literal_arg!(bool, char, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl From<TypeName> for Arg {
    fn from(value: TypeName) -> Self {
        Arg::Type(value)
    }
}

impl From<&TypeName> for Arg {
    fn from(value: &TypeName) -> Self {
        Arg::Type(value.clone())
    }
}

impl From<ClassName> for Arg {
    fn from(value: ClassName) -> Self {
        Arg::Type(TypeName::Class(value))
    }
}

impl From<&ClassName> for Arg {
    fn from(value: &ClassName) -> Self {
        Arg::Type(TypeName::Class(value.clone()))
    }
}

impl From<PrimitiveType> for Arg {
    fn from(value: PrimitiveType) -> Self {
        Arg::Type(TypeName::Primitive(value))
    }
}

impl From<&ParameterSpec> for Arg {
    fn from(value: &ParameterSpec) -> Self {
        Arg::Name(value.name().to_string())
    }
}

impl From<&FieldSpec> for Arg {
    fn from(value: &FieldSpec) -> Self {
        Arg::Name(value.name().to_string())
    }
}

impl From<&MethodSpec> for Arg {
    fn from(value: &MethodSpec) -> Self {
        Arg::Name(value.name().to_string())
    }
}

impl From<CodeBlock> for Arg {
    fn from(value: CodeBlock) -> Self {
        Arg::Code(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

/// Build a `Vec<Arg>` from heterogeneous values.
///
/// ```
/// use jx_codegen::{Arg, args};
/// use jx_model::ClassName;
///
/// let system = ClassName::new("java.lang", "System");
/// let args = args![&system, "Hello", 3];
/// assert_eq!(args.len(), 3);
/// assert_eq!(args[2], Arg::Literal("3".into()));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}

/// One resolved piece of a code block.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Part {
    Text(String),
    Type(TypeName),
    Str(Option<String>),
    Indent,
    Unindent,
    StatementBegin,
    StatementEnd,
}

/// A fragment of Java code with its placeholders already resolved against
/// their arguments. Types are kept symbolic until emission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeBlock {
    parts: Vec<Part>,
}

impl CodeBlock {
    /// Build a code block from a single template.
    pub fn of(format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self> {
        Self::builder().add(format, args).build()
    }

    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder::default()
    }

    /// Join blocks with `separator` between them.
    pub fn join(blocks: impl IntoIterator<Item = CodeBlock>, separator: &str) -> Self {
        let mut parts = Vec::new();
        for (i, block) in blocks.into_iter().enumerate() {
            if i > 0 {
                parts.push(Part::Text(separator.to_string()));
            }
            parts.extend(block.parts);
        }
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Check if the block ends at the start of a fresh line.
    pub fn ends_with_newline(&self) -> bool {
        self.parts
            .iter()
            .rev()
            .find_map(|part| match part {
                Part::Text(text) if !text.is_empty() => Some(text.ends_with('\n')),
                Part::Text(_) | Part::Indent | Part::Unindent | Part::StatementEnd => None,
                _ => Some(false),
            })
            .unwrap_or(false)
    }

    pub(crate) fn parts(&self) -> &[Part] {
        &self.parts
    }
}

/// Accumulates template fragments into a [`CodeBlock`].
///
/// The first template error is kept and reported by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct CodeBlockBuilder {
    parts: Vec<Part>,
    open_statement: bool,
    error: Option<Box<Error>>,
}

impl CodeBlockBuilder {
    /// Append a template.
    pub fn add(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let args: Vec<Arg> = args.into_iter().collect();
        if let Err(err) = self.parse(format, args) {
            self.error = Some(err);
        }
        self
    }

    /// Append `format` as one statement terminated by `;`.
    pub fn add_statement(self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.add("$[", Vec::new())
            .add(format, args)
            .add(";\n$]", Vec::new())
    }

    /// Append a `// comment` line.
    pub fn add_comment(self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.add("// ", Vec::new())
            .add(format, args)
            .add("\n", Vec::new())
    }

    /// Open a block such as `if (ready) {`.
    pub fn begin_control_flow(self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.add(format, args).add(" {\n$>", Vec::new())
    }

    /// Continue a block: `} else if (other) {`.
    pub fn next_control_flow(self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.add("$<} ", Vec::new())
            .add(format, args)
            .add(" {\n$>", Vec::new())
    }

    /// Close the current block.
    pub fn end_control_flow(self) -> Self {
        self.add("$<}\n", Vec::new())
    }

    /// Close the current block with a trailing clause: `} while (more);`.
    pub fn end_control_flow_with(self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.add("$<} ", Vec::new())
            .add(format, args)
            .add(";\n", Vec::new())
    }

    pub fn indent(self) -> Self {
        self.add("$>", Vec::new())
    }

    pub fn unindent(self) -> Self {
        self.add("$<", Vec::new())
    }

    /// Append an already built block.
    pub fn add_code(mut self, code: CodeBlock) -> Self {
        self.parts.extend(code.parts);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn build(self) -> Result<CodeBlock> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.open_statement {
            return Err(Error::format("$[", "statement was never closed with '$]'"));
        }
        Ok(CodeBlock { parts: self.parts })
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.parts.last_mut() {
            Some(Part::Text(existing)) => existing.push_str(text),
            _ => self.parts.push(Part::Text(text.to_string())),
        }
    }

    fn parse(&mut self, format: &str, args: Vec<Arg>) -> Result<()> {
        let fail = |message: String| Error::format(format, message);

        let mut text = String::new();
        let mut chars = format.chars().peekable();
        let mut relative = 0usize;
        let mut indexed = false;
        let mut used = vec![false; args.len()];

        while let Some(c) = chars.next() {
            if c != '$' {
                text.push(c);
                continue;
            }

            let mut digits = String::new();
            while let Some(d) = chars.next_if(char::is_ascii_digit) {
                digits.push(d);
            }
            let Some(kind) = chars.next() else {
                return Err(fail("dangling '$' at end of template".to_string()));
            };

            if digits.is_empty() {
                match kind {
                    '$' => {
                        text.push('$');
                        continue;
                    }
                    '>' | '<' | '[' | ']' => {
                        self.push_text(&text);
                        text.clear();
                        self.push_control(kind).map_err(fail)?;
                        continue;
                    }
                    _ => {}
                }
            }

            if !matches!(kind, 'L' | 'S' | 'T' | 'N') {
                return Err(fail(format!("unknown placeholder '${digits}{kind}'")));
            }

            let index = if digits.is_empty() {
                if indexed {
                    return Err(fail("cannot mix indexed and relative placeholders".into()));
                }
                relative += 1;
                relative - 1
            } else {
                if relative > 0 {
                    return Err(fail("cannot mix indexed and relative placeholders".into()));
                }
                indexed = true;
                match digits.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= args.len() => n - 1,
                    _ => {
                        return Err(fail(format!(
                            "index {digits} is out of range for {} arguments",
                            args.len()
                        )));
                    }
                }
            };

            let Some(arg) = args.get(index) else {
                return Err(fail(format!(
                    "not enough arguments: placeholder {} has no value",
                    index + 1
                )));
            };
            used[index] = true;

            self.push_text(&text);
            text.clear();
            self.push_arg(kind, arg).map_err(fail)?;
        }
        self.push_text(&text);

        if !indexed && relative != args.len() {
            return Err(fail(format!(
                "expected {} arguments, got {}",
                relative,
                args.len()
            )));
        }
        if let Some(unused) = used.iter().position(|used| !used) {
            return Err(fail(format!("argument {} is never used", unused + 1)));
        }
        Ok(())
    }

    fn push_control(&mut self, kind: char) -> std::result::Result<(), String> {
        let part = match kind {
            '>' => Part::Indent,
            '<' => Part::Unindent,
            '[' if self.open_statement => return Err("statement opened twice".into()),
            '[' => {
                self.open_statement = true;
                Part::StatementBegin
            }
            _ if !self.open_statement => return Err("'$]' without an open statement".into()),
            _ => {
                self.open_statement = false;
                Part::StatementEnd
            }
        };
        self.parts.push(part);
        Ok(())
    }

    fn push_arg(&mut self, kind: char, arg: &Arg) -> std::result::Result<(), String> {
        match (kind, arg) {
            ('L', Arg::Text(s) | Arg::Literal(s) | Arg::Name(s)) => self.push_text(s),
            ('L', Arg::Null) => self.push_text("null"),
            ('L' | 'T', Arg::Type(ty)) => self.parts.push(Part::Type(ty.clone())),
            ('L', Arg::Code(code)) => {
                for part in code.parts() {
                    match part {
                        Part::Text(text) => self.push_text(text),
                        other => self.parts.push(other.clone()),
                    }
                }
            }
            ('S', Arg::Text(s) | Arg::Literal(s) | Arg::Name(s)) => {
                self.parts.push(Part::Str(Some(s.clone())))
            }
            ('S', Arg::Type(ty)) => self.parts.push(Part::Str(Some(ty.to_string()))),
            ('S', Arg::Null) => self.parts.push(Part::Str(None)),
            ('T', Arg::Text(s)) => {
                let ty = TypeName::parse(s).map_err(|e| e.to_string())?;
                self.parts.push(Part::Type(ty));
            }
            ('N', Arg::Name(s) | Arg::Text(s)) => self.push_text(s),
            (kind, arg) => {
                return Err(format!("${kind} cannot take {}", describe(arg)));
            }
        }
        Ok(())
    }
}

fn describe(arg: &Arg) -> &'static str {
    match arg {
        Arg::Text(_) => "text",
        Arg::Literal(_) => "a literal",
        Arg::Type(_) => "a type",
        Arg::Name(_) => "a name",
        Arg::Code(_) => "a code block",
        Arg::Null => "null",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn message(result: Result<CodeBlock>) -> String {
        match *result.unwrap_err() {
            Error::Format { message, .. } => message,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_literal_and_string() {
        let block = CodeBlock::of("int $L = $S;\n", args!["count", "a \"b\""]).unwrap();
        assert_eq!(
            block.parts(),
            &[
                Part::Text("int count = ".into()),
                Part::Str(Some("a \"b\"".into())),
                Part::Text(";\n".into()),
            ]
        );
    }

    #[test]
    fn test_type_placeholder_accepts_text() {
        let block = CodeBlock::of("$T list", args!["java.util.List<a.B>"]).unwrap();
        assert_eq!(
            block.parts()[0],
            Part::Type(TypeName::parse("java.util.List<a.B>").unwrap())
        );
    }

    #[test]
    fn test_indexed_placeholders() {
        let block = CodeBlock::of("$1L + $1L + $2L", args!["a", "b"]).unwrap();
        assert_eq!(block.parts(), &[Part::Text("a + a + b".into())]);
    }

    #[test]
    fn test_dollar_escape() {
        let block = CodeBlock::of("$$value", args![]).unwrap();
        assert_eq!(block.parts(), &[Part::Text("$value".into())]);
    }

    #[test]
    fn test_null_string() {
        let block = CodeBlock::of("$S", args![Option::<&str>::None]).unwrap();
        assert_eq!(block.parts(), &[Part::Str(None)]);
    }

    #[test]
    fn test_statement_markers() {
        let block = CodeBlock::builder()
            .add_statement("return $L", args![1])
            .build()
            .unwrap();
        assert_eq!(
            block.parts(),
            &[
                Part::StatementBegin,
                Part::Text("return 1;\n".into()),
                Part::StatementEnd,
            ]
        );
        assert!(block.ends_with_newline());
    }

    #[test]
    fn test_control_flow() {
        let block = CodeBlock::builder()
            .begin_control_flow("if ($L)", args!["ready"])
            .add_statement("go()", args![])
            .end_control_flow()
            .build()
            .unwrap();
        assert_eq!(block.parts()[0], Part::Text("if (ready) {\n".into()));
        assert_eq!(block.parts()[1], Part::Indent);
        assert_eq!(block.parts()[5], Part::Unindent);
        assert_eq!(block.parts()[6], Part::Text("}\n".into()));
    }

    #[test]
    fn test_code_argument_is_inlined() {
        let inner = CodeBlock::of("new $T()", args![TypeName::named("a.B")]).unwrap();
        let outer = CodeBlock::of("x = $L", args![inner]).unwrap();
        assert_eq!(
            outer.parts(),
            &[
                Part::Text("x = new ".into()),
                Part::Type(TypeName::named("a.B")),
                Part::Text("()".into()),
            ]
        );
    }

    #[test]
    fn test_join() {
        let joined = CodeBlock::join(
            [
                CodeBlock::of("a", args![]).unwrap(),
                CodeBlock::of("b", args![]).unwrap(),
            ],
            ", ",
        );
        assert_eq!(
            joined.parts(),
            &[
                Part::Text("a".into()),
                Part::Text(", ".into()),
                Part::Text("b".into()),
            ]
        );
    }

    #[test]
    fn test_argument_count_errors() {
        assert_eq!(
            message(CodeBlock::of("$L $L", args!["a"])),
            "not enough arguments: placeholder 2 has no value"
        );
        assert_eq!(
            message(CodeBlock::of("$L", args!["a", "b"])),
            "expected 1 arguments, got 2"
        );
        assert_eq!(
            message(CodeBlock::of("$2L", args!["a", "b"])),
            "argument 1 is never used"
        );
        assert_eq!(
            message(CodeBlock::of("$3L", args!["a"])),
            "index 3 is out of range for 1 arguments"
        );
    }

    #[test]
    fn test_template_syntax_errors() {
        assert_eq!(
            message(CodeBlock::of("$1L $L", args!["a"])),
            "cannot mix indexed and relative placeholders"
        );
        assert_eq!(
            message(CodeBlock::of("cost: $", args![])),
            "dangling '$' at end of template"
        );
        assert_eq!(
            message(CodeBlock::of("$X", args![])),
            "unknown placeholder '$X'"
        );
        assert_eq!(message(CodeBlock::of("$T", args![42])), "$T cannot take a literal");
        assert_eq!(message(CodeBlock::of("$]", args![])), "'$]' without an open statement");
    }

    #[test]
    fn test_unclosed_statement() {
        let err = CodeBlock::builder().add("$[x", args![]).build().unwrap_err();
        assert!(matches!(*err, Error::Format { .. }));
    }

    #[test]
    fn test_first_error_wins() {
        let err = CodeBlock::builder()
            .add("$X", args![])
            .add("$L", args![])
            .build()
            .unwrap_err();
        let Error::Format { format, .. } = *err else {
            panic!("expected format error");
        };
        assert_eq!(format, "$X");
    }

    #[test]
    fn test_malformed_type_text() {
        let err = CodeBlock::of("$T", args!["java.util.List<"]).unwrap_err();
        assert!(matches!(*err, Error::Format { .. }));
    }
}
