//! Class symbol lookup
//!
//! The bound checker only needs to know whether a class-like symbol exists,
//! what kind it is, and how it is spelled canonically. [`SymbolResolver`]
//! is that seam; [`SymbolTable`] is the in-memory implementation.

use std::fmt;

use rustc_hash::FxHashMap;

/// Kind of a class-like symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// A class
    Class,
    /// An interface
    Interface,
    /// A trait (code reuse only, not a type)
    Trait,
    /// An enum
    Enum,
}

impl ClassKind {
    /// Check if this is a trait
    pub fn is_trait(&self) -> bool {
        matches!(self, ClassKind::Trait)
    }

    /// Capitalised name, for the start of a sentence
    pub fn title(&self) -> &'static str {
        match self {
            ClassKind::Class => "Class",
            ClassKind::Interface => "Interface",
            ClassKind::Trait => "Trait",
            ClassKind::Enum => "Enum",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassKind::Class => write!(f, "class"),
            ClassKind::Interface => write!(f, "interface"),
            ClassKind::Trait => write!(f, "trait"),
            ClassKind::Enum => write!(f, "enum"),
        }
    }
}

/// Read-only access to the program's class-like symbols.
///
/// Implementations must stay consistent for the duration of a check:
/// `has_class(n)` implies `class_kind(n)` and `class_name(n)` are `Some`.
pub trait SymbolResolver: Send + Sync {
    /// Whether a class, interface, trait or enum named `name` exists
    fn has_class(&self, name: &str) -> bool;

    /// Kind of the symbol named `name`
    fn class_kind(&self, name: &str) -> Option<ClassKind>;

    /// Canonical spelling of the symbol named `name`
    fn class_name(&self, name: &str) -> Option<&str>;
}

/// A registered class-like symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSymbol {
    /// Canonical name
    pub name: String,
    /// Symbol kind
    pub kind: ClassKind,
}

/// In-memory symbol table.
///
/// Lookups ignore ASCII case and a single leading `\`, so `\foo\bar`
/// finds `Foo\Bar`.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    classes: FxHashMap<String, ClassSymbol>,
}

fn lookup_key(name: &str) -> String {
    name.strip_prefix('\\').unwrap_or(name).to_ascii_lowercase()
}

impl SymbolTable {
    /// Create an empty symbol table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a symbol; a later registration under the same key replaces
    /// the earlier one
    pub fn add_class(&mut self, name: impl Into<String>, kind: ClassKind) {
        let name = name.into();
        let canonical = name.strip_prefix('\\').unwrap_or(&name).to_string();
        self.classes.insert(
            lookup_key(&canonical),
            ClassSymbol {
                name: canonical,
                kind,
            },
        );
    }

    /// Builder form of [`add_class`](Self::add_class)
    pub fn with_class(mut self, name: impl Into<String>, kind: ClassKind) -> Self {
        self.add_class(name, kind);
        self
    }

    /// Look up a symbol
    pub fn get(&self, name: &str) -> Option<&ClassSymbol> {
        self.classes.get(&lookup_key(name))
    }

    /// Number of registered symbols
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no symbols are registered
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl SymbolResolver for SymbolTable {
    fn has_class(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn class_kind(&self, name: &str) -> Option<ClassKind> {
        self.get(name).map(|symbol| symbol.kind)
    }

    fn class_name(&self, name: &str) -> Option<&str> {
        self.get(name).map(|symbol| symbol.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case_and_leading_backslash() {
        let table = SymbolTable::new().with_class("Foo\\Bar", ClassKind::Class);

        assert!(table.has_class("Foo\\Bar"));
        assert!(table.has_class("foo\\bar"));
        assert!(table.has_class("\\FOO\\BAR"));
        assert!(!table.has_class("Foo"));
        assert_eq!(table.class_name("foo\\bar"), Some("Foo\\Bar"));
    }

    #[test]
    fn test_class_kind() {
        let table = SymbolTable::new()
            .with_class("Countable", ClassKind::Interface)
            .with_class("Loggable", ClassKind::Trait);

        assert_eq!(table.class_kind("countable"), Some(ClassKind::Interface));
        assert!(table.class_kind("Loggable").is_some_and(|k| k.is_trait()));
        assert_eq!(table.class_kind("Missing"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_leading_backslash_not_part_of_canonical_name() {
        let table = SymbolTable::new().with_class("\\Suit", ClassKind::Enum);
        assert_eq!(table.class_name("Suit"), Some("Suit"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ClassKind::Class.to_string(), "class");
        assert_eq!(ClassKind::Interface.to_string(), "interface");
        assert_eq!(ClassKind::Trait.title(), "Trait");
        assert_eq!(ClassKind::Enum.title(), "Enum");
    }
}
