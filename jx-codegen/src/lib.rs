//! Java source generation.
//!
//! Declarations are built with consuming builders ([`TypeSpec`],
//! [`MethodSpec`], [`FieldSpec`], ...) into an immutable tree and rendered by
//! [`JavaFile`] through a [`CodeWriter`]. Every type reference goes through a
//! per-file [`SymbolTable`], which picks simple names where they are
//! unambiguous and computes the import block.
//!
//! ```
//! use jx_codegen::{JavaFile, MethodSpec, Modifier, TypeSpec, args};
//! use jx_model::ClassName;
//!
//! let main = MethodSpec::method_builder("main")
//!     .add_modifiers([Modifier::Public, Modifier::Static])
//!     .add_param("java.lang.String[]", "args")
//!     .add_statement(
//!         "$T.out.println($S)",
//!         args![ClassName::new("java.lang", "System"), "Hello, JavaPoet!"],
//!     )
//!     .build()
//!     .unwrap();
//!
//! let hello = TypeSpec::class_builder("HelloWorld")
//!     .add_modifiers([Modifier::Public, Modifier::Final])
//!     .add_method(main)
//!     .build()
//!     .unwrap();
//!
//! let source = JavaFile::builder("com.example.helloworld", hello)
//!     .build()
//!     .unwrap()
//!     .to_source()
//!     .unwrap();
//! assert!(source.contains("System.out.println(\"Hello, JavaPoet!\");"));
//! ```

mod config;
mod error;
mod spec;
mod symbols;
mod writer;

pub use config::{EmitConfig, Indent};
pub use error::{Error, Result};
pub use jx_model;
pub use spec::{
    AnnotationSpec, AnnotationSpecBuilder, Arg, CodeBlock, CodeBlockBuilder, FieldSpec,
    FieldSpecBuilder, JavaFile, JavaFileBuilder, MethodSpec, MethodSpecBuilder, Modifier,
    ParameterSpec, ParameterSpecBuilder, TypeKind, TypeSpec, TypeSpecBuilder, TypeVariable,
};
pub use symbols::SymbolTable;
pub use writer::CodeWriter;
