//! Validation of declared template parameters
//!
//! For every template parameter of one declaration, in declaration order:
//!
//! 1. the name must not be an existing class-like name,
//! 2. the name must not be a registered type alias,
//! 3. every class the bound references must exist and must not be a trait,
//! 4. (optionally) every class the bound references must be spelled in its
//!    declared case,
//! 5. the bound must be `mixed`, `object`, or a single named class.
//!
//! All checks run for every parameter; nothing short-circuits.

use indexmap::IndexMap;
use templar_types::Type;
use tracing::{debug, trace};

use crate::aliases::TypeAliases;
use crate::case_sensitivity::{CaseSensitivityChecker, ClassNamePair};
use crate::config::CheckConfig;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::CheckError;
use crate::message::TemplateMessages;
use crate::site::{DeclarationSite, TemplateTypeScope};
use crate::symbols::SymbolResolver;

/// A declared template parameter: `@template T of Bound`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTag {
    /// Parameter name
    pub name: String,
    /// Upper bound
    pub bound: Type,
}

impl TemplateTag {
    /// Create a template parameter with an explicit bound
    pub fn new(name: impl Into<String>, bound: Type) -> Self {
        Self {
            name: name.into(),
            bound,
        }
    }

    /// Create a template parameter bounded by `mixed`
    pub fn unbounded(name: impl Into<String>) -> Self {
        Self::new(name, Type::Mixed)
    }
}

/// Template parameters of one declaration, keyed by name, in declaration order
pub type TemplateTags = IndexMap<String, TemplateTag>;

/// Validator for the template parameters of a declaration.
///
/// Holds only shared references to its collaborators; a single instance can
/// serve many threads at once.
pub struct TemplateTypeCheck<'a> {
    resolver: &'a dyn SymbolResolver,
    case_check: &'a dyn CaseSensitivityChecker,
    type_aliases: &'a TypeAliases,
    check_class_case_sensitivity: bool,
}

impl<'a> TemplateTypeCheck<'a> {
    /// Create a validator
    pub fn new(
        resolver: &'a dyn SymbolResolver,
        case_check: &'a dyn CaseSensitivityChecker,
        type_aliases: &'a TypeAliases,
        check_class_case_sensitivity: bool,
    ) -> Self {
        TemplateTypeCheck {
            resolver,
            case_check,
            type_aliases,
            check_class_case_sensitivity,
        }
    }

    /// Create a validator taking the case-sensitivity switch from `config`
    pub fn from_config(
        resolver: &'a dyn SymbolResolver,
        case_check: &'a dyn CaseSensitivityChecker,
        type_aliases: &'a TypeAliases,
        config: &CheckConfig,
    ) -> Self {
        Self::new(
            resolver,
            case_check,
            type_aliases,
            config.check_class_case_sensitivity,
        )
    }

    /// Validate the template parameters declared at `site`.
    ///
    /// Returns every diagnostic found, ordered by parameter and then by check.
    /// An error means a collaborator broke its contract, not that the
    /// checked code is wrong.
    pub fn check(
        &self,
        site: &DeclarationSite,
        scope: &TemplateTypeScope,
        template_tags: &TemplateTags,
        messages: &TemplateMessages,
    ) -> Result<Vec<Diagnostic>, CheckError> {
        debug!(
            %scope,
            declaration = %site.kind,
            params = template_tags.len(),
            "checking template parameters"
        );

        let mut diagnostics = Vec::new();

        for tag in template_tags.values() {
            let name = tag.name.as_str();

            if self.resolver.has_class(name) {
                diagnostics.push(Diagnostic::at(
                    DiagnosticKind::NameCollidesWithClass,
                    messages.same_as_class.format(&[name]),
                    site,
                ));
            }

            if self.type_aliases.contains_key(name) {
                diagnostics.push(Diagnostic::at(
                    DiagnosticKind::NameCollidesWithTypeAlias,
                    messages.same_as_alias.format(&[name]),
                    site,
                ));
            }

            let referenced_classes = tag.bound.referenced_classes();
            for class_name in &referenced_classes {
                if self.is_valid_bound_class(class_name)? {
                    continue;
                }
                diagnostics.push(Diagnostic::at(
                    DiagnosticKind::InvalidBoundReference,
                    messages.invalid_bound.format(&[name, class_name.as_str()]),
                    site,
                ));
            }

            if self.check_class_case_sensitivity {
                let pairs: Vec<ClassNamePair<'_>> = referenced_classes
                    .iter()
                    .map(|class_name| ClassNamePair::new(class_name, site))
                    .collect();
                diagnostics.extend(self.case_check.check_class_names(&pairs));
            }

            if !tag.bound.bound_kind().is_supported() {
                let description = tag.bound.describe();
                diagnostics.push(Diagnostic::at(
                    DiagnosticKind::UnsupportedBoundKind,
                    messages.unsupported_bound.format(&[name, description.as_str()]),
                    site,
                ));
            }
        }

        for diagnostic in &diagnostics {
            trace!(code = diagnostic.code(), message = %diagnostic.message, "template diagnostic");
        }

        Ok(diagnostics)
    }

    fn is_valid_bound_class(&self, class_name: &str) -> Result<bool, CheckError> {
        if !self.resolver.has_class(class_name) {
            return Ok(false);
        }
        let kind = self
            .resolver
            .class_kind(class_name)
            .ok_or_else(|| CheckError::InconsistentSymbol {
                name: class_name.to_string(),
            })?;
        Ok(!kind.is_trait())
    }
}
