use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for code generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Type(#[from] jx_model::Error),

    #[error("cannot claim '{name}': the symbol table is already closed")]
    #[diagnostic(
        code(jx::already_closed),
        help("all types must be rendered before the import list is finalized")
    )]
    AlreadyClosed { name: String },

    #[error("invalid code template '{format}': {message}")]
    #[diagnostic(code(jx::format_error))]
    Format { format: String, message: String },

    #[error("invalid {kind} '{name}': {message}")]
    #[diagnostic(code(jx::invalid_spec))]
    InvalidSpec {
        kind: &'static str,
        name: String,
        message: String,
    },

    #[error("failed to parse emit configuration")]
    #[diagnostic(code(jx::config_error))]
    Config {
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write generated source")]
    #[diagnostic(code(jx::write_error))]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(code(jx::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<Box<jx_model::Error>> for Box<Error> {
    fn from(err: Box<jx_model::Error>) -> Self {
        Box::new(Error::Type(*err))
    }
}

impl Error {
    /// Create a template error.
    pub fn format(format: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Format {
            format: format.into(),
            message: message.into(),
        })
    }

    /// Create an error for a spec rejected by its builder.
    pub fn invalid_spec(
        kind: &'static str,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidSpec {
            kind,
            name: name.into(),
            message: message.into(),
        })
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
