//! Rule: class-template-type
//!
//! Checks the template parameters of classes, interfaces, traits and enums.

use crate::diagnostic::Diagnostic;
use crate::error::CheckError;
use crate::rule::*;
use crate::site::DeclarationKind;
use crate::template_check::TemplateTypeCheck;

/// Validates class-level template parameters.
pub struct ClassTemplateTypeRule;

static META: RuleMeta = RuleMeta {
    name: "class-template-type",
    description: "Validate @template tags declared on class-like declarations",
};

impl TemplateRule for ClassTemplateTypeRule {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn check(
        &self,
        declaration: &Declaration,
        check: &TemplateTypeCheck<'_>,
    ) -> Result<Vec<Diagnostic>, CheckError> {
        if !matches!(declaration.site.kind, DeclarationKind::Class { .. }) {
            return Ok(vec![]);
        }

        let messages = template_messages(&declaration.site.kind.to_string())?;
        check.check(
            &declaration.site,
            &declaration.scope,
            &declaration.template_tags,
            &messages,
        )
    }
}

#[cfg(test)]
mod tests {
    use templar_types::Type;

    use crate::checker::TemplateChecker;
    use crate::rule::Declaration;
    use crate::site::{DeclarationKind, DeclarationSite, TemplateTypeScope};
    use crate::span::Span;
    use crate::symbols::{ClassKind, SymbolTable};
    use crate::template_check::TemplateTag;

    fn class_decl(name: &str, kind: ClassKind, tags: Vec<TemplateTag>) -> Declaration {
        Declaration::new(
            DeclarationSite::new(
                DeclarationKind::Class {
                    name: name.to_string(),
                    kind,
                },
                Span::new(0, 10, 1, 1),
                0,
            ),
            TemplateTypeScope::for_class(name),
            tags,
        )
    }

    fn messages(table: &SymbolTable, decl: &Declaration) -> Vec<String> {
        TemplateChecker::new(table)
            .check_declaration(decl)
            .unwrap()
            .into_iter()
            .map(|d| d.message)
            .collect()
    }

    #[test]
    fn test_name_collides_with_class() {
        let table = SymbolTable::new().with_class("Item", ClassKind::Class);
        let decl = class_decl("Collection", ClassKind::Class, vec![TemplateTag::unbounded("Item")]);

        assert_eq!(
            messages(&table, &decl),
            vec!["@template for class Collection cannot have existing class Item as its name."]
        );
    }

    #[test]
    fn test_interface_wording() {
        let table = SymbolTable::new().with_class("Mixin", ClassKind::Trait);
        let decl = class_decl(
            "Repository",
            ClassKind::Interface,
            vec![TemplateTag::new("T", Type::object("Mixin"))],
        );

        assert_eq!(
            messages(&table, &decl),
            vec!["@template T for interface Repository has invalid bound type Mixin."]
        );
    }

    #[test]
    fn test_unsupported_bound_wording() {
        let decl = class_decl(
            "Box",
            ClassKind::Class,
            vec![TemplateTag::new("T", Type::union(vec![Type::int(), Type::string()]))],
        );

        assert_eq!(
            messages(&SymbolTable::new(), &decl),
            vec!["@template T for class Box with bound type int|string is not supported."]
        );
    }

    #[test]
    fn test_braces_in_class_name_are_reported_verbatim() {
        let decl = class_decl(
            "Weird{}",
            ClassKind::Class,
            vec![TemplateTag::new("T", Type::object("Missing"))],
        );
        assert_eq!(
            messages(&SymbolTable::new(), &decl),
            vec!["@template T for class Weird{} has invalid bound type Missing."]
        );

        let decl = class_decl(
            "A{{B",
            ClassKind::Class,
            vec![TemplateTag::new("T", Type::object("Missing"))],
        );
        assert_eq!(
            messages(&SymbolTable::new(), &decl),
            vec!["@template T for class A{{B has invalid bound type Missing."]
        );
    }
}
