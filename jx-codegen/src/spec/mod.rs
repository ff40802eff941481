//! Immutable syntax nodes and their builders.

mod annotation;
mod code_block;
mod field;
mod java_file;
mod method;
mod modifier;
mod parameter;
mod type_spec;
mod type_variable;

pub use annotation::{AnnotationSpec, AnnotationSpecBuilder};
pub use code_block::{Arg, CodeBlock, CodeBlockBuilder};
pub(crate) use code_block::Part;
pub use field::{FieldSpec, FieldSpecBuilder};
pub use java_file::{JavaFile, JavaFileBuilder};
pub use method::{MethodSpec, MethodSpecBuilder};
pub use modifier::Modifier;
pub use parameter::{ParameterSpec, ParameterSpecBuilder};
pub use type_spec::{TypeKind, TypeSpec, TypeSpecBuilder};
pub use type_variable::TypeVariable;

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null",
];

/// Check that `name` can be used as a declaration name.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && !KEYWORDS.contains(&name)
}
