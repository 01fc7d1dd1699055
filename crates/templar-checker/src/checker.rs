//! Template checker — runs every template rule over a set of declarations.

use tracing::debug;

use crate::aliases::TypeAliases;
use crate::case_sensitivity::{CaseSensitivityChecker, ClassCaseSensitivityCheck};
use crate::config::CheckConfig;
use crate::diagnostic::Diagnostic;
use crate::error::CheckError;
use crate::rule::{Declaration, TemplateRule};
use crate::rules;
use crate::symbols::SymbolResolver;
use crate::template_check::TemplateTypeCheck;

/// Result of checking a batch of declarations.
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics, by declaration and then by check order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of declarations checked.
    pub declarations_checked: usize,
}

impl CheckResult {
    /// Whether no diagnostics were reported
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Entry point: holds the collaborators, configuration and rules.
///
/// All state is read-only once built, so one checker may be shared by
/// several worker threads.
pub struct TemplateChecker<'a> {
    resolver: &'a dyn SymbolResolver,
    case_check: Box<dyn CaseSensitivityChecker + 'a>,
    type_aliases: TypeAliases,
    config: CheckConfig,
    rules: Vec<Box<dyn TemplateRule>>,
}

impl<'a> TemplateChecker<'a> {
    /// Create a checker with the default configuration.
    pub fn new(resolver: &'a dyn SymbolResolver) -> Self {
        Self::with_config(resolver, CheckConfig::new())
    }

    /// Create a checker with configuration overrides.
    pub fn with_config(resolver: &'a dyn SymbolResolver, config: CheckConfig) -> Self {
        Self {
            resolver,
            case_check: Box::new(ClassCaseSensitivityCheck::new(resolver)),
            type_aliases: config.type_aliases(),
            config,
            rules: rules::all_rules(),
        }
    }

    /// Replace the case-sensitivity checker.
    pub fn with_case_checker(mut self, case_check: impl CaseSensitivityChecker + 'a) -> Self {
        self.case_check = Box::new(case_check);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    fn template_check(&self) -> TemplateTypeCheck<'_> {
        TemplateTypeCheck::from_config(
            self.resolver,
            &*self.case_check,
            &self.type_aliases,
            &self.config,
        )
    }

    /// Check a single declaration.
    pub fn check_declaration(&self, declaration: &Declaration) -> Result<Vec<Diagnostic>, CheckError> {
        let check = self.template_check();
        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            diagnostics.extend(rule.check(declaration, &check)?);
        }
        Ok(diagnostics)
    }

    /// Check declarations in order, collecting every diagnostic.
    pub fn check_declarations(&self, declarations: &[Declaration]) -> Result<CheckResult, CheckError> {
        let mut result = CheckResult::default();
        for declaration in declarations {
            result.diagnostics.extend(self.check_declaration(declaration)?);
            result.declarations_checked += 1;
        }
        debug!(
            declarations = result.declarations_checked,
            diagnostics = result.diagnostics.len(),
            "template check finished"
        );
        Ok(result)
    }
}
