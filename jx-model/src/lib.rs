//! Generic-aware Java type model for the jx source generator.
//!
//! A [`TypeName`] describes one use of a Java type. Descriptors are built by
//! parsing canonical names ([`TypeName::parse`]), from Rust types
//! ([`TypeName::of`]) or by composing them directly, and can be taken apart
//! and rebuilt one generic layer at a time.
//!
//! ```
//! use jx_model::TypeName;
//!
//! let ty = TypeName::parse("a.b.Outer<c.d.Inner<e.f.Leaf>>").unwrap();
//! assert_eq!(ty.disassemble().to_string(), "c.d.Inner<e.f.Leaf>");
//! assert!(ty.contains(&TypeName::named("e.f.Leaf")));
//! ```

mod class_name;
mod error;
mod layers;
mod parse;
mod primitive;
mod reflect;
mod type_name;

pub use class_name::ClassName;
pub use error::{Error, Result};
pub use layers::AssembleMode;
pub use primitive::PrimitiveType;
pub use reflect::Reflect;
pub use type_name::{
    ArrayTypeName, IntoTypeName, ParameterizedTypeName, TypeName, WildcardBound,
    WildcardTypeName,
};
