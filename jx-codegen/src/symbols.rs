//! Simple-name bookkeeping for one compilation unit.

use indexmap::IndexMap;
use jx_model::ClassName;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    Closed,
}

#[derive(Debug, Clone)]
struct Binding {
    class: ClassName,
    imported: bool,
}

/// Tracks which simple names are bound in the file being emitted.
///
/// The first class to claim a simple name gets it; any other class with the
/// same simple name is written fully qualified instead of shadowing it.
///
/// # Example
///
/// ```
/// use jx_codegen::SymbolTable;
/// use jx_model::ClassName;
///
/// let mut symbols = SymbolTable::new("com.example");
/// assert_eq!(symbols.claim(&ClassName::parse("a.Foo")).unwrap(), "Foo");
/// assert_eq!(symbols.claim(&ClassName::parse("b.Foo")).unwrap(), "b.Foo");
///
/// let imports = symbols.close();
/// assert_eq!(imports, vec![ClassName::parse("a.Foo")]);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    package: String,
    skip_java_lang: bool,
    /// Simple name -> the class it resolves to
    bindings: IndexMap<String, Binding>,
    state: State,
}

impl SymbolTable {
    /// Create an open table for a file in `package`.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            skip_java_lang: true,
            bindings: IndexMap::new(),
            state: State::Open,
        }
    }

    /// Whether `java.lang` types are used without an import.
    pub fn skip_java_lang_imports(mut self, skip: bool) -> Self {
        self.skip_java_lang = skip;
        self
    }

    /// Bind a type declared in this file so that foreign types with the same
    /// simple name get qualified. No import is recorded.
    ///
    /// Returns `false` if the simple name was already bound elsewhere.
    pub fn reserve(&mut self, class: &ClassName) -> Result<bool> {
        self.ensure_open(class)?;
        match self.bindings.get(class.simple_name()) {
            Some(binding) => Ok(binding.class == *class),
            None => {
                self.bind(class, false);
                Ok(true)
            }
        }
    }

    /// Resolve the text to write for `class`, claiming its simple name if it
    /// is still free.
    pub fn claim(&mut self, class: &ClassName) -> Result<String> {
        self.ensure_open(class)?;

        match self.bindings.get(class.simple_name()) {
            Some(binding) if binding.class == *class => Ok(class.simple_name().to_string()),
            Some(_) => Ok(class.canonical_name()),
            None => {
                // Unqualified names (type variables, default-package classes)
                // hold their simple name but can never be imported.
                let package = class.package_name();
                let implicit = class.is_unqualified()
                    || package == self.package
                    || (self.skip_java_lang && package == "java.lang");
                self.bind(class, !implicit);
                Ok(class.simple_name().to_string())
            }
        }
    }

    /// Look up the class a simple name currently resolves to.
    pub fn resolve(&self, simple_name: &str) -> Option<&ClassName> {
        self.bindings.get(simple_name).map(|binding| &binding.class)
    }

    /// Check if `class` has been recorded as an import.
    pub fn is_imported(&self, class: &ClassName) -> bool {
        self.bindings
            .get(class.simple_name())
            .is_some_and(|binding| binding.imported && binding.class == *class)
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    /// Finish the pass and return the imports sorted by package, then simple
    /// name. Any later [`claim`](Self::claim) fails.
    pub fn close(&mut self) -> Vec<ClassName> {
        self.state = State::Closed;
        let mut imports: Vec<ClassName> = self
            .bindings
            .values()
            .filter(|binding| binding.imported)
            .map(|binding| binding.class.clone())
            .collect();
        imports.sort();
        imports
    }

    fn bind(&mut self, class: &ClassName, imported: bool) {
        self.bindings.insert(
            class.simple_name().to_string(),
            Binding {
                class: class.clone(),
                imported,
            },
        );
    }

    fn ensure_open(&self, class: &ClassName) -> Result<()> {
        match self.state {
            State::Open => Ok(()),
            State::Closed => Err(Box::new(Error::AlreadyClosed {
                name: class.canonical_name(),
            })),
        }
    }
}
