use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Result type for type model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("malformed type name '{src}': {reason}")]
    #[diagnostic(
        code(jx::malformed_type_name),
        help("type names look like 'java.util.Map<java.lang.String, java.util.List<T>>'")
    )]
    MalformedTypeName {
        #[source_code]
        src: String,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },

    #[error("wildcard '?' cannot have both an upper bound ({upper}) and a lower bound ({lower})")]
    #[diagnostic(
        code(jx::invalid_wildcard_bounds),
        help("use either '? extends T' or '? super T'")
    )]
    InvalidWildcardBounds { upper: String, lower: String },

    #[error("cannot disassemble '{ty}': it has {count} type arguments")]
    #[diagnostic(
        code(jx::unsupported_disassembly),
        help("use `disassemble()` to take the last argument, or inspect `arguments()` directly")
    )]
    UnsupportedDisassembly { ty: String, count: usize },

    #[error("'{ty}' cannot be used as the outer type of an assembly")]
    #[diagnostic(
        code(jx::invalid_assembly_base),
        help("the outer type must be a plain class name such as 'java.util.List'")
    )]
    InvalidAssemblyBase { ty: String },
}

impl Error {
    /// Create a malformed type name error pointing at `span` inside `src`.
    pub fn malformed(
        src: impl Into<String>,
        span: impl Into<SourceSpan>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::MalformedTypeName {
            src: src.into(),
            span: span.into(),
            reason: reason.into(),
        })
    }

    /// Check if this error came from parsing a type name.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedTypeName { .. })
    }
}
