//! The code writer: turns specs into indented, import-aware Java text.

mod literal;
mod wrap;

use std::collections::BTreeSet;

use jx_model::{TypeName, WildcardBound};

use crate::{
    AnnotationSpec, CodeBlock, EmitConfig, Modifier, Result, SymbolTable, TypeVariable,
    spec::Part,
};

/// Single-pass renderer over a tree of specs.
///
/// Every type it writes is resolved through the [`SymbolTable`], which decides
/// between the simple and the fully qualified name. Text is buffered per line
/// so that indentation and soft wrapping are applied when a line completes.
///
/// # Example
///
/// ```
/// use jx_codegen::{CodeBlock, CodeWriter, EmitConfig, SymbolTable, args};
/// use jx_model::ClassName;
///
/// let config = EmitConfig::default();
/// let mut symbols = SymbolTable::new("com.example");
/// let mut writer = CodeWriter::new(&mut symbols, &config);
///
/// let list = ClassName::new("java.util", "List");
/// let code = CodeBlock::of("$T<String> names;\n", args![list]).unwrap();
/// writer.emit_code(&code).unwrap();
///
/// assert_eq!(writer.finish(), "List<String> names;\n");
/// assert_eq!(symbols.close(), vec![ClassName::new("java.util", "List")]);
/// ```
#[derive(Debug)]
pub struct CodeWriter<'a> {
    symbols: &'a mut SymbolTable,
    config: &'a EmitConfig,
    indent_unit: String,
    indent_level: usize,
    buffer: String,
    /// Text of the line being built, without indentation
    line: String,
    /// Indent level captured when the current line received its first text
    line_level: Option<usize>,
    /// Prefix for every line while inside a comment (e.g. ` * ` in javadoc)
    comment_prefix: Option<&'static str>,
    /// Lines written since the outermost open statement began
    statement_lines: Option<usize>,
    /// Open `$[` markers, counting nested code blocks
    statement_depth: usize,
}

impl<'a> CodeWriter<'a> {
    pub fn new(symbols: &'a mut SymbolTable, config: &'a EmitConfig) -> Self {
        Self {
            symbols,
            config,
            indent_unit: config.indent.unit(),
            indent_level: 0,
            buffer: String::new(),
            line: String::new(),
            line_level: None,
            comment_prefix: None,
            statement_lines: None,
            statement_depth: 0,
        }
    }

    /// Write raw text; `\n` ends the current line.
    pub fn emit(&mut self, text: &str) -> &mut Self {
        for (i, piece) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            if !piece.is_empty() {
                self.line_level.get_or_insert(self.indent_level);
                self.line.push_str(piece);
            }
        }
        self
    }

    /// End the current line if it has any text.
    pub fn ensure_line_start(&mut self) -> &mut Self {
        if !self.line.is_empty() {
            self.newline();
        }
        self
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.ensure_line_start();
        self.newline();
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn unindent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Write a type, resolving every class it mentions.
    pub fn emit_type(&mut self, ty: &TypeName) -> Result<&mut Self> {
        let text = self.type_text(ty)?;
        Ok(self.emit(&text))
    }

    /// Write a code block, expanding its placeholders.
    pub fn emit_code(&mut self, code: &CodeBlock) -> Result<&mut Self> {
        for part in code.parts() {
            match part {
                Part::Text(text) => {
                    self.emit(text);
                }
                Part::Type(ty) => {
                    self.emit_type(ty)?;
                }
                Part::Str(value) => {
                    let literal = literal::string_literal(value.as_deref());
                    self.emit(&literal);
                }
                Part::Indent => {
                    self.indent();
                }
                Part::Unindent => {
                    self.unindent();
                }
                Part::StatementBegin => {
                    if self.statement_depth == 0 {
                        self.statement_lines = Some(0);
                    }
                    self.statement_depth += 1;
                }
                Part::StatementEnd => {
                    self.statement_depth = self.statement_depth.saturating_sub(1);
                    if self.statement_depth == 0 {
                        self.statement_lines = None;
                    }
                }
            }
        }
        Ok(self)
    }

    /// Write a `/** ... */` comment. Empty docs write nothing.
    pub fn emit_javadoc(&mut self, doc: &CodeBlock) -> Result<&mut Self> {
        if doc.is_empty() {
            return Ok(self);
        }
        self.ensure_line_start();
        self.emit("/**\n");
        self.comment_prefix = Some(" * ");
        let result = self.emit_code(doc).map(|_| ());
        self.ensure_line_start();
        self.comment_prefix = None;
        result?;
        Ok(self.emit(" */\n"))
    }

    /// Write `// ...` lines, one per line of `comment`.
    pub fn emit_line_comment(&mut self, comment: &str) -> &mut Self {
        for line in comment.lines() {
            if line.is_empty() {
                self.emit("//\n");
            } else {
                self.emit("// ").emit(line).emit("\n");
            }
        }
        self
    }

    /// Write annotations, each on its own line or space separated when `inline`.
    pub fn emit_annotations(
        &mut self,
        annotations: &[AnnotationSpec],
        inline: bool,
    ) -> Result<&mut Self> {
        for annotation in annotations {
            annotation.render(self)?;
            self.emit(if inline { " " } else { "\n" });
        }
        Ok(self)
    }

    /// Write modifiers in canonical order, skipping the `implicit` ones.
    pub fn emit_modifiers(
        &mut self,
        modifiers: &BTreeSet<Modifier>,
        implicit: &[Modifier],
    ) -> &mut Self {
        for modifier in modifiers {
            if !implicit.contains(modifier) {
                self.emit(modifier.keyword()).emit(" ");
            }
        }
        self
    }

    /// Write a `<T, U extends Bound>` declaration list. Writes nothing when empty.
    pub fn emit_type_variables(&mut self, variables: &[TypeVariable]) -> Result<&mut Self> {
        if variables.is_empty() {
            return Ok(self);
        }
        self.emit("<");
        for (i, variable) in variables.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            self.emit(variable.name());
            for (j, bound) in variable.bounds().iter().enumerate() {
                self.emit(if j == 0 { " extends " } else { " & " });
                self.emit_type(bound)?;
            }
        }
        Ok(self.emit(">"))
    }

    /// Flush the pending line and return everything written.
    pub fn finish(mut self) -> String {
        self.ensure_line_start();
        self.buffer
    }

    fn type_text(&mut self, ty: &TypeName) -> Result<String> {
        Ok(match ty {
            TypeName::Void => "void".to_string(),
            TypeName::Primitive(p) => p.keyword().to_string(),
            TypeName::Class(class) => self.symbols.claim(class)?,
            TypeName::Parameterized(p) => {
                let mut text = self.symbols.claim(p.raw())?;
                text.push('<');
                for (i, arg) in p.arguments().iter().enumerate() {
                    if i > 0 {
                        text.push_str(", ");
                    }
                    text.push_str(&self.type_text(arg)?);
                }
                text.push('>');
                text
            }
            TypeName::Array(array) => format!("{}[]", self.type_text(array.component())?),
            TypeName::Wildcard(w) => match w.bound() {
                WildcardBound::Unbounded => "?".to_string(),
                WildcardBound::Upper(bound) => format!("? extends {}", self.type_text(bound)?),
                WildcardBound::Lower(bound) => format!("? super {}", self.type_text(bound)?),
            },
        })
    }

    fn newline(&mut self) {
        let level = self.line_level.take().unwrap_or(self.indent_level);
        let extra = match self.statement_lines {
            Some(lines) if lines > 0 => 2,
            _ => 0,
        };
        if let Some(lines) = self.statement_lines.as_mut() {
            *lines += 1;
        }
        let indent = self.indent_unit.repeat(level + extra);

        match self.comment_prefix {
            Some(prefix) if self.line.is_empty() => {
                self.buffer.push_str(&indent);
                self.buffer.push_str(prefix.trim_end());
            }
            Some(prefix) => {
                self.buffer.push_str(&indent);
                self.buffer.push_str(prefix);
                self.buffer.push_str(&self.line.replace("*/", "*&#47;"));
            }
            None if self.line.is_empty() => {}
            None => {
                let continuation = self.indent_unit.repeat(level + extra + 2);
                let full = format!("{}{}", indent, self.line);
                let wrapped = wrap::wrap(&full, &continuation, self.config.column_limit);
                self.buffer.push_str(&wrapped.join("\n"));
            }
        }
        self.buffer.push('\n');
        self.line.clear();
    }
}
