//! Fully qualified class references.

use std::fmt;

/// A reference to a named type: a package path plus a simple name.
///
/// Type variables are class names with an empty package (`T`).
///
/// # Example
///
/// ```
/// use jx_model::ClassName;
///
/// let list = ClassName::parse("java.util.List");
/// assert_eq!(list.package_name(), "java.util");
/// assert_eq!(list.simple_name(), "List");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: Vec<String>,
    simple_name: String,
}

impl ClassName {
    /// Create a class name from a dotted package and a simple name.
    pub fn new(package: &str, simple_name: impl Into<String>) -> Self {
        let package = if package.is_empty() {
            Vec::new()
        } else {
            package.split('.').map(str::to_string).collect()
        };
        Self {
            package,
            simple_name: simple_name.into(),
        }
    }

    /// Split a dotted name at its last dot.
    ///
    /// A name without a dot has an empty package. No validation happens here;
    /// [`TypeName::parse`](crate::TypeName::parse) checks identifiers.
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((package, simple)) => Self::new(package, simple),
            None => Self::new("", qualified),
        }
    }

    pub(crate) fn from_parts(package: Vec<String>, simple_name: String) -> Self {
        Self {
            package,
            simple_name,
        }
    }

    /// A type variable such as `T`.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    /// `java.lang.Object`
    pub fn object() -> Self {
        Self::new("java.lang", "Object")
    }

    /// `java.lang.String`
    pub fn string() -> Self {
        Self::new("java.lang", "String")
    }

    /// The package segments, outermost first.
    pub fn package(&self) -> &[String] {
        &self.package
    }

    /// The package joined with dots (empty for the default package).
    pub fn package_name(&self) -> String {
        self.package.join(".")
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// The fully qualified name, e.g. `java.util.List`.
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.package_name(), self.simple_name)
        }
    }

    /// Check if this class lives in the default package.
    pub fn is_unqualified(&self) -> bool {
        self.package.is_empty()
    }

    /// Create a class name for a type nested inside this one.
    ///
    /// The enclosing class becomes the last package segment, so
    /// `com.example.Outer` nests `Inner` as `com.example.Outer.Inner`.
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let mut package = self.package.clone();
        package.push(self.simple_name.clone());
        Self::from_parts(package, simple_name.into())
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.package {
            write!(f, "{}.", segment)?;
        }
        f.write_str(&self.simple_name)
    }
}
