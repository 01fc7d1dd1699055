//! Registered type aliases

use indexmap::IndexMap;

/// Alias name → alias target, e.g. `MyAlias` → `int|string`.
///
/// Alias names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeAliases {
    aliases: IndexMap<String, String>,
}

impl TypeAliases {
    /// Create an empty alias table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alias
    pub fn insert(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.aliases.insert(name.into(), target.into());
    }

    /// Whether an alias named `name` exists
    pub fn contains_key(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Target of the alias named `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Number of aliases
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl From<IndexMap<String, String>> for TypeAliases {
    fn from(aliases: IndexMap<String, String>) -> Self {
        Self { aliases }
    }
}

impl FromIterator<(String, String)> for TypeAliases {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            aliases: iter.into_iter().collect(),
        }
    }
}
