//! Letter-case checks for class references

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::site::DeclarationSite;
use crate::symbols::SymbolResolver;

/// A referenced class name and the declaration referencing it
#[derive(Debug, Clone, Copy)]
pub struct ClassNamePair<'a> {
    /// Class name as written
    pub class_name: &'a str,
    /// Declaration the reference belongs to
    pub site: &'a DeclarationSite,
}

impl<'a> ClassNamePair<'a> {
    /// Create a pair
    pub fn new(class_name: &'a str, site: &'a DeclarationSite) -> Self {
        Self { class_name, site }
    }
}

/// Reports class references whose spelling differs in case from the
/// declared name.
pub trait CaseSensitivityChecker: Send + Sync {
    /// Check every pair; names that do not resolve are skipped
    fn check_class_names(&self, pairs: &[ClassNamePair<'_>]) -> Vec<Diagnostic>;
}

/// [`CaseSensitivityChecker`] backed by a [`SymbolResolver`]
pub struct ClassCaseSensitivityCheck<'a> {
    resolver: &'a dyn SymbolResolver,
}

impl<'a> ClassCaseSensitivityCheck<'a> {
    /// Create a checker over `resolver`
    pub fn new(resolver: &'a dyn SymbolResolver) -> Self {
        Self { resolver }
    }
}

impl CaseSensitivityChecker for ClassCaseSensitivityCheck<'_> {
    fn check_class_names(&self, pairs: &[ClassNamePair<'_>]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for pair in pairs {
            let referenced = pair.class_name.strip_prefix('\\').unwrap_or(pair.class_name);
            let (Some(canonical), Some(kind)) = (
                self.resolver.class_name(referenced),
                self.resolver.class_kind(referenced),
            ) else {
                continue;
            };

            if canonical == referenced || !canonical.eq_ignore_ascii_case(referenced) {
                continue;
            }

            diagnostics.push(Diagnostic::at(
                DiagnosticKind::CaseMismatch,
                format!(
                    "{} {} referenced with incorrect case: {}.",
                    kind.title(),
                    canonical,
                    referenced
                ),
                pair.site,
            ));
        }

        diagnostics
    }
}
