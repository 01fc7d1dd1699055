//! Rule: method-template-type
//!
//! Checks the template parameters of methods, and flags method templates
//! that reuse a template name of the enclosing class.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::CheckError;
use crate::rule::*;
use crate::site::DeclarationKind;
use crate::template_check::TemplateTypeCheck;

/// Validates method-level template parameters.
pub struct MethodTemplateTypeRule;

static META: RuleMeta = RuleMeta {
    name: "method-template-type",
    description: "Validate @template tags declared on methods",
};

impl TemplateRule for MethodTemplateTypeRule {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn check(
        &self,
        declaration: &Declaration,
        check: &TemplateTypeCheck<'_>,
    ) -> Result<Vec<Diagnostic>, CheckError> {
        let DeclarationKind::Method { class_name, name } = &declaration.site.kind else {
            return Ok(vec![]);
        };

        let messages = template_messages(&format!("method {}::{}()", class_name, name))?;
        let mut diagnostics = check.check(
            &declaration.site,
            &declaration.scope,
            &declaration.template_tags,
            &messages,
        )?;

        for template_name in declaration.template_tags.keys() {
            if !declaration.enclosing_template_names.contains(template_name) {
                continue;
            }
            diagnostics.push(Diagnostic::at(
                DiagnosticKind::ShadowsClassTemplate,
                format!(
                    "@template {} for method {}::{}() shadows @template {} for class {}.",
                    template_name, class_name, name, template_name, class_name
                ),
                &declaration.site,
            ));
        }

        Ok(diagnostics)
    }
}
