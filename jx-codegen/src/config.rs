//! Emission settings.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the usual Java style.
    pub const JAVA: Self = Self::Spaces(4);

    /// 2-space indentation (Google Java style).
    pub const GOOGLE: Self = Self::Spaces(2);

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }

    /// Display width of one indent level, counting a tab as four columns.
    pub fn width(&self) -> usize {
        match self {
            Self::Spaces(width) => usize::from(*width),
            Self::Tab => 4,
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

/// Options controlling how a [`JavaFile`](crate::JavaFile) is rendered.
///
/// Can be loaded from TOML:
///
/// ```
/// use jx_codegen::{EmitConfig, Indent};
///
/// let config: EmitConfig = r#"
///     indent = { spaces = 2 }
///     column_limit = 80
/// "#
/// .parse()
/// .unwrap();
///
/// assert_eq!(config.indent, Indent::Spaces(2));
/// assert_eq!(config.column_limit, 80);
/// assert!(config.skip_java_lang_imports);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    pub indent: Indent,
    /// Lines longer than this are wrapped at the last safe break point.
    pub column_limit: usize,
    /// Refer to `java.lang` types by simple name without importing them.
    pub skip_java_lang_imports: bool,
    /// Comment placed at the top of every generated file.
    pub file_comment: Option<String>,
}

impl EmitConfig {
    pub const DEFAULT_COLUMN_LIMIT: usize = 100;

    /// Read a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        content.parse()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_column_limit(mut self, column_limit: usize) -> Self {
        self.column_limit = column_limit;
        self
    }

    pub fn with_file_comment(mut self, comment: impl Into<String>) -> Self {
        self.file_comment = Some(comment.into());
        self
    }

    /// Import `java.lang` types like any other package.
    pub fn import_java_lang(mut self) -> Self {
        self.skip_java_lang_imports = false;
        self
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            column_limit: Self::DEFAULT_COLUMN_LIMIT,
            skip_java_lang_imports: true,
            file_comment: None,
        }
    }
}

impl FromStr for EmitConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|source| Box::new(Error::Config { source }))
    }
}
