//! Rule: function-template-type
//!
//! Checks the template parameters of free functions.

use crate::diagnostic::Diagnostic;
use crate::error::CheckError;
use crate::rule::*;
use crate::site::DeclarationKind;
use crate::template_check::TemplateTypeCheck;

/// Validates function-level template parameters.
pub struct FunctionTemplateTypeRule;

static META: RuleMeta = RuleMeta {
    name: "function-template-type",
    description: "Validate @template tags declared on functions",
};

impl TemplateRule for FunctionTemplateTypeRule {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn check(
        &self,
        declaration: &Declaration,
        check: &TemplateTypeCheck<'_>,
    ) -> Result<Vec<Diagnostic>, CheckError> {
        let DeclarationKind::Function { name } = &declaration.site.kind else {
            return Ok(vec![]);
        };

        let messages = template_messages(&format!("function {}()", name))?;
        check.check(
            &declaration.site,
            &declaration.scope,
            &declaration.template_tags,
            &messages,
        )
    }
}
